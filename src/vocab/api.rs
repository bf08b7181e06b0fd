//! # API Facade
//!
//! [`VocabApi`] is the application controller: it owns the record store, the search
//! view, the selection editor and the add dialog, and every operation of a session
//! is a method on it. Nothing is global; a UI holds one `VocabApi` and calls into it.
//!
//! Like the command layer beneath it, the API never prints. Each call returns a
//! [`CmdResult`] describing what changed and what to show, and the caller redraws
//! from that. The visible list is recomputed lazily whenever the query or the store
//! changed since it was last computed, so callers can ask for it after any mutation
//! without tracking what happened.
//!
//! `VocabApi<S: RecordStore>` is generic over the store; the binary uses
//! [`MemoryStore`].

use crate::commands;
use crate::config::VocabConfig;
use crate::draft::AddDialog;
use crate::error::Result;
use crate::model::{Field, Record, RecordId};
use crate::search::SearchView;
use crate::selection::SelectionEditor;
use crate::store::memory::MemoryStore;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

pub struct VocabApi<S: RecordStore> {
    store: S,
    view: SearchView,
    editor: SelectionEditor,
    dialog: AddDialog,
    config: VocabConfig,
    config_dir: Option<PathBuf>,
}

impl VocabApi<MemoryStore> {
    /// A session over the seed entries.
    pub fn seeded(config: VocabConfig) -> Self {
        Self::new(MemoryStore::seeded(), config)
    }
}

impl<S: RecordStore> VocabApi<S> {
    pub fn new(store: S, config: VocabConfig) -> Self {
        Self {
            store,
            view: SearchView::new(),
            editor: SelectionEditor::new(),
            dialog: AddDialog::default(),
            config,
            config_dir: None,
        }
    }

    /// Where `config` changes are saved. Without one, changes last for the session.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn records(&self) -> &[Record] {
        self.store.all()
    }

    pub fn query(&self) -> &str {
        self.view.query()
    }

    pub fn selected(&self) -> Option<&Record> {
        self.editor.selected()
    }

    pub fn dialog(&self) -> &AddDialog {
        &self.dialog
    }

    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    /// The records visible under the current query.
    pub fn visible(&mut self) -> Vec<&Record> {
        self.view.results(&self.store)
    }

    pub fn list(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &mut self.view)
    }

    pub fn search(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &mut self.view, query)
    }

    /// Select by 1-based position in the visible list.
    pub fn select(&mut self, position: usize) -> Result<commands::CmdResult> {
        commands::select::run(&self.store, &mut self.view, &mut self.editor, position)
    }

    pub fn select_id(&mut self, id: &RecordId) -> Result<commands::CmdResult> {
        commands::select::by_id(&self.store, &mut self.editor, id)
    }

    pub fn show_selected(&self) -> Result<commands::CmdResult> {
        commands::select::show(&self.editor)
    }

    pub fn edit_selected(&mut self, field: Field, value: String) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, &mut self.editor, field, value)
    }

    pub fn open_add_dialog(&mut self) -> Result<commands::CmdResult> {
        commands::add::open(&mut self.dialog)
    }

    pub fn edit_draft(&mut self, field: Field, value: String) -> Result<commands::CmdResult> {
        commands::add::set(&mut self.dialog, field, value)
    }

    pub fn cancel_add(&mut self) -> Result<commands::CmdResult> {
        commands::add::cancel(&mut self.dialog)
    }

    pub fn submit_add(&mut self) -> Result<commands::CmdResult> {
        commands::add::submit(&mut self.store, &mut self.dialog)
    }

    pub fn export_text(&self) -> Result<commands::CmdResult> {
        commands::export::to_text(&self.store)
    }

    /// Write the export file (named by config) into `dir`.
    pub fn export_to(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::to_dir(&self.store, dir, &self.config.export_filename)
    }

    pub fn import_text(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::from_text(&mut self.store, &mut self.editor, text)
    }

    pub fn import_from(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::from_path(&mut self.store, &mut self.editor, &self.config, path)
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.config, self.config_dir.as_deref(), action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::model::seed_records;

    fn api() -> VocabApi<MemoryStore> {
        VocabApi::seeded(VocabConfig::default())
    }

    #[test]
    fn search_then_list_keeps_query() {
        let mut api = api();
        api.search("dog").unwrap();

        let result = api.list().unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(api.query(), "dog");
    }

    #[test]
    fn visible_list_follows_additions() {
        let mut api = api();
        api.search("fish").unwrap();
        assert!(api.visible().is_empty());

        api.open_add_dialog().unwrap();
        api.edit_draft(Field::Word, "魚".into()).unwrap();
        api.edit_draft(Field::Meaning, "fish".into()).unwrap();
        api.submit_add().unwrap();

        let visible: Vec<&str> = api.visible().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(visible, vec!["魚"]);
    }

    #[test]
    fn visible_list_follows_edits() {
        let mut api = api();
        api.search("cat").unwrap();
        api.select(1).unwrap();

        api.edit_selected(Field::Meaning, "kitten".into()).unwrap();

        assert!(api.visible().is_empty());
        assert_eq!(api.selected().unwrap().meaning, "kitten");
        assert_eq!(api.records()[0].meaning, "kitten");
    }

    #[test]
    fn select_then_edit_keeps_mirror_consistent() {
        let mut api = api();
        api.select(2).unwrap();

        api.edit_selected(Field::Word, "いぬ".into()).unwrap();

        let id = api.selected().unwrap().id.clone();
        let stored = api.records().iter().find(|r| r.id == id).unwrap();
        assert_eq!(Some(stored), api.selected());
        assert_eq!(stored.word, "いぬ");
    }

    #[test]
    fn editing_a_duplicate_id_keeps_the_selected_entry() {
        let mut api = api();
        api.import_text(
            r#"[{"id":1,"word":"first","meaning":"one"},{"id":1,"word":"second","meaning":"two"}]"#,
        )
        .unwrap();
        api.select(2).unwrap();

        let result = api.edit_selected(Field::Description, "note".into()).unwrap();

        let selected = result.selected.unwrap();
        assert_eq!(selected.word, "second");
        assert_eq!(selected.description, "note");
        assert_eq!(api.selected().unwrap().word, "second");
    }

    #[test]
    fn add_after_importing_max_id_does_not_panic() {
        let mut api = api();
        api.import_text(r#"[{"id":9223372036854775807,"word":"a","meaning":"b"}]"#)
            .unwrap();

        api.open_add_dialog().unwrap();
        api.edit_draft(Field::Word, "魚".into()).unwrap();
        api.edit_draft(Field::Meaning, "fish".into()).unwrap();
        let result = api.submit_add().unwrap();

        assert_eq!(result.affected[0].id.as_integer(), Some(1 << 63));
        assert_eq!(api.records().len(), 2);
    }

    #[test]
    fn edit_without_selection_is_noop() {
        let mut api = api();
        api.edit_selected(Field::Word, "x".into()).unwrap();
        assert_eq!(api.records(), seed_records().as_slice());
    }

    #[test]
    fn export_import_round_trip() {
        let mut api = api();
        let text = api.export_text().unwrap().exported.unwrap();

        api.import_text("[]").unwrap();
        assert!(api.records().is_empty());

        api.import_text(&text).unwrap();
        assert_eq!(api.records(), seed_records().as_slice());
    }

    #[test]
    fn failed_import_keeps_session_usable() {
        let mut api = api();
        let result = api.import_text("{}").unwrap();
        assert!(matches!(
            result.rejected_import,
            Some(ImportError::InvalidShape(_))
        ));

        api.open_add_dialog().unwrap();
        api.edit_draft(Field::Word, "魚".into()).unwrap();
        api.edit_draft(Field::Meaning, "fish".into()).unwrap();
        let result = api.submit_add().unwrap();

        assert_eq!(result.affected[0].id, RecordId::from(4));
    }

    #[test]
    fn export_to_uses_configured_filename() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = VocabConfig {
            export_filename: "words.json".into(),
            ..VocabConfig::default()
        };
        let api = VocabApi::seeded(config);

        let result = api.export_to(temp_dir.path()).unwrap();

        assert_eq!(
            result.export_path,
            Some(temp_dir.path().join("words.json"))
        );
    }
}
