use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::exchange;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;

/// The export document, without writing it anywhere.
pub fn to_text<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.exported = Some(exchange::export(store.all())?);
    Ok(result)
}

/// Write the export document to `dir/filename`, replacing any previous export.
pub fn to_dir<S: RecordStore>(store: &S, dir: &Path, filename: &str) -> Result<CmdResult> {
    let text = exchange::export(store.all())?;

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(VocabError::Io)?;
    }
    let path = dir.join(filename);
    fs::write(&path, &text).map_err(VocabError::Io)?;
    tracing::info!(path = %path.display(), count = store.len(), "exported vocabulary");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} entries to {}",
        store.len(),
        path.display()
    )));
    result.exported = Some(text);
    result.export_path = Some(path);
    Ok(result)
}
