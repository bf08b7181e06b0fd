//! # Command Layer
//!
//! Business logic for each user action. Commands take the pieces of session state
//! they touch as plain arguments and return a [`CmdResult`]; they never print.
//!
//! Failures a user can cause (a bad file, an out-of-range position, an edit with
//! nothing selected) are reported as messages inside the result. `Err` is reserved
//! for problems the caller cannot fix from the session, such as serialization bugs.

use crate::config::VocabConfig;
use crate::error::ImportError;
use crate::model::{Draft, Record};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record as it appears in the visible list, with its 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<ListedRecord>,
    pub selected: Option<Record>,
    pub draft: Option<Draft>,
    pub exported: Option<String>,
    pub export_path: Option<PathBuf>,
    pub rejected_import: Option<ImportError>,
    pub config: Option<VocabConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedRecord>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_selected(mut self, record: Option<Record>) -> Self {
        self.selected = record;
        self
    }

    pub fn with_draft(mut self, draft: Option<Draft>) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_config(mut self, config: VocabConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Number the given records from 1, in the order given.
pub fn number<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<ListedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ListedRecord {
            position: i + 1,
            record: record.clone(),
        })
        .collect()
}
