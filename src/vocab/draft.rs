use crate::model::{Draft, Field, Record};
use crate::store::RecordStore;

/// The add-word dialog: either closed, or open with a draft being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddDialog {
    #[default]
    Closed,
    Open(Draft),
}

/// What happened when the dialog was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft was stored and the dialog closed.
    Committed(Record),
    /// Word or meaning is missing; the dialog stays open.
    Rejected,
    NotOpen,
}

impl AddDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, AddDialog::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            AddDialog::Open(draft) => Some(draft),
            AddDialog::Closed => None,
        }
    }

    /// Opens with an empty draft. Reopening an open dialog keeps its draft.
    pub fn open(&mut self) {
        if let AddDialog::Closed = self {
            *self = AddDialog::Open(Draft::default());
        }
    }

    /// Returns false when the dialog is closed.
    pub fn edit_field(&mut self, field: Field, value: String) -> bool {
        match self {
            AddDialog::Open(draft) => {
                draft.set(field, value);
                true
            }
            AddDialog::Closed => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = AddDialog::Closed;
    }

    pub fn submit<S: RecordStore>(&mut self, store: &mut S) -> SubmitOutcome {
        let draft = match self {
            AddDialog::Open(draft) if draft.is_complete() => std::mem::take(draft),
            AddDialog::Open(_) => return SubmitOutcome::Rejected,
            AddDialog::Closed => return SubmitOutcome::NotOpen,
        };
        *self = AddDialog::Closed;
        SubmitOutcome::Committed(store.insert(draft.word, draft.meaning, draft.description))
    }
}
