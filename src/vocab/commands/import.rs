use crate::commands::{CmdMessage, CmdResult};
use crate::config::VocabConfig;
use crate::error::Result;
use crate::exchange;
use crate::selection::SelectionEditor;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;

/// Replace the store with the records in `text`.
///
/// A rejected document is reported in the result and leaves the store untouched.
pub fn from_text<S: RecordStore>(
    store: &mut S,
    editor: &mut SelectionEditor,
    text: &str,
) -> Result<CmdResult> {
    let records = match exchange::import(text) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "import rejected");
            let mut result =
                CmdResult::default().with_message(CmdMessage::error(e.user_message()));
            result.rejected_import = Some(e);
            return Ok(result);
        }
    };

    let count = records.len();
    store.replace_all(records);
    editor.resync(store);
    tracing::info!(count, "imported vocabulary");

    Ok(CmdResult::default()
        .with_affected(store.all().to_vec())
        .with_selected(editor.selected().cloned())
        .with_message(CmdMessage::success(format!("Imported {} entries", count))))
}

/// Read `path` and import it. Only the configured extensions are accepted.
pub fn from_path<S: RecordStore>(
    store: &mut S,
    editor: &mut SelectionEditor,
    config: &VocabConfig,
    path: &Path,
) -> Result<CmdResult> {
    if !config.accepts_import(path) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "Cannot import {}: expected a {} file",
            path.display(),
            config.import_extensions.join(" or ")
        ))));
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "import file unreadable");
            return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))));
        }
    };

    from_text(store, editor, &text)
}
