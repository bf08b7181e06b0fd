use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::search::SearchView;
use crate::selection::SelectionEditor;
use crate::store::RecordStore;

/// Select the record at 1-based `position` in the visible list.
pub fn run<S: RecordStore>(
    store: &S,
    view: &mut SearchView,
    editor: &mut SelectionEditor,
    position: usize,
) -> Result<CmdResult> {
    let visible = view.results(store);
    let record = position
        .checked_sub(1)
        .and_then(|i| visible.get(i))
        .map(|r| (*r).clone());

    match record {
        Some(record) => {
            tracing::debug!(id = %record.id, position, "record selected");
            editor.select(record.clone());
            Ok(CmdResult::default().with_selected(Some(record)))
        }
        None => Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "No entry at position {} ({} visible)",
            position,
            visible.len()
        )))),
    }
}

/// Select the first record carrying `id`, whether or not it is visible.
pub fn by_id<S: RecordStore>(
    store: &S,
    editor: &mut SelectionEditor,
    id: &RecordId,
) -> Result<CmdResult> {
    match store.find(id) {
        Some(record) => {
            editor.select(record.clone());
            Ok(CmdResult::default().with_selected(Some(record.clone())))
        }
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::error(format!("No entry with id {}", id)))),
    }
}

/// The record currently open in the editor.
pub fn show(editor: &SelectionEditor) -> Result<CmdResult> {
    let result = CmdResult::default().with_selected(editor.selected().cloned());
    if result.selected.is_none() {
        return Ok(result.with_message(CmdMessage::info("Select an entry to edit it.")));
    }
    Ok(result)
}
