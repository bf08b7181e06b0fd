use crate::commands::{CmdMessage, CmdResult};
use crate::draft::{AddDialog, SubmitOutcome};
use crate::error::Result;
use crate::model::Field;
use crate::store::RecordStore;

pub fn open(dialog: &mut AddDialog) -> Result<CmdResult> {
    dialog.open();
    Ok(CmdResult::default().with_draft(dialog.draft().cloned()))
}

pub fn set(dialog: &mut AddDialog, field: Field, value: String) -> Result<CmdResult> {
    if !dialog.edit_field(field, value) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "No new entry is being added; use `add` first.",
        )));
    }
    Ok(CmdResult::default().with_draft(dialog.draft().cloned()))
}

pub fn cancel(dialog: &mut AddDialog) -> Result<CmdResult> {
    let was_open = dialog.is_open();
    dialog.cancel();
    let mut result = CmdResult::default();
    if was_open {
        result.add_message(CmdMessage::info("New entry discarded."));
    }
    Ok(result)
}

pub fn submit<S: RecordStore>(store: &mut S, dialog: &mut AddDialog) -> Result<CmdResult> {
    match dialog.submit(store) {
        SubmitOutcome::Committed(record) => {
            tracing::debug!(id = %record.id, word = %record.word, "record added");
            let message = CmdMessage::success(format!("Added {} ({})", record.word, record.meaning));
            Ok(CmdResult::default()
                .with_affected(vec![record])
                .with_message(message))
        }
        // The dialog stays open; the draft is echoed back so the user sees what is missing.
        SubmitOutcome::Rejected => Ok(CmdResult::default().with_draft(dialog.draft().cloned())),
        SubmitOutcome::NotOpen => Ok(CmdResult::default().with_message(CmdMessage::warning(
            "No new entry is being added; use `add` first.",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, RecordId};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn full_add_flow() {
        let mut store = StoreFixture::seeded().store;
        let mut dialog = AddDialog::default();

        let opened = open(&mut dialog).unwrap();
        assert_eq!(opened.draft, Some(Draft::default()));

        set(&mut dialog, Field::Word, "魚".into()).unwrap();
        set(&mut dialog, Field::Meaning, "fish".into()).unwrap();
        let result = submit(&mut store, &mut dialog).unwrap();

        assert_eq!(result.affected[0].id, RecordId::from(4));
        assert_eq!(store.len(), 4);
        assert!(!dialog.is_open());
    }

    #[test]
    fn submit_with_empty_word_changes_nothing() {
        let mut store = StoreFixture::seeded().store;
        let mut dialog = AddDialog::default();
        open(&mut dialog).unwrap();
        set(&mut dialog, Field::Meaning, "fish".into()).unwrap();

        let result = submit(&mut store, &mut dialog).unwrap();

        assert!(result.affected.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(result.draft.unwrap().meaning, "fish");
        assert_eq!(store.len(), 3);
        assert!(dialog.is_open());
    }

    #[test]
    fn set_and_submit_on_closed_dialog_warn() {
        let mut store = StoreFixture::seeded().store;
        let mut dialog = AddDialog::default();

        assert_eq!(set(&mut dialog, Field::Word, "x".into()).unwrap().messages.len(), 1);
        assert_eq!(submit(&mut store, &mut dialog).unwrap().messages.len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn cancel_then_reopen_starts_fresh() {
        let mut dialog = AddDialog::default();
        open(&mut dialog).unwrap();
        set(&mut dialog, Field::Word, "魚".into()).unwrap();

        cancel(&mut dialog).unwrap();
        let reopened = open(&mut dialog).unwrap();

        assert_eq!(reopened.draft, Some(Draft::default()));
    }
}
