use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::selection::SelectionEditor;
use crate::store::RecordStore;

/// Write `value` into `field` of the selected record, keeping store and editor in step.
pub fn run<S: RecordStore>(
    store: &mut S,
    editor: &mut SelectionEditor,
    field: Field,
    value: String,
) -> Result<CmdResult> {
    if editor.selected().is_none() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "No entry selected; nothing was changed.",
        )));
    }

    match editor.edit_field(store, field, value) {
        Some(updated) => {
            tracing::debug!(id = %updated.id, %field, "record field updated");
            Ok(CmdResult::default()
                .with_affected(vec![updated.clone()])
                .with_selected(Some(updated)))
        }
        None => Ok(CmdResult::default()
            .with_selected(editor.selected().cloned())
            .with_message(CmdMessage::warning(
                "The selected entry is no longer in the list; nothing was changed.",
            ))),
    }
}
