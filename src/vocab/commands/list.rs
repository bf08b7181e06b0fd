use crate::commands::{number, CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::SearchView;
use crate::store::RecordStore;

/// The records visible under the current query.
pub fn run<S: RecordStore>(store: &S, view: &mut SearchView) -> Result<CmdResult> {
    let listed = number(view.results(store));
    let mut result = CmdResult::default();

    if !view.query().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} entries match \"{}\"",
            listed.len(),
            store.len(),
            view.query()
        )));
    }

    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_everything_without_a_query() {
        let store = StoreFixture::seeded().store;
        let mut view = SearchView::new();

        let result = run(&store, &mut view).unwrap();

        let positions: Vec<usize> = result.listed.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(result.listed[0].record.word, "猫");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn numbers_filtered_results_from_one() {
        let store = StoreFixture::new().with_words(12).store;
        let mut view = SearchView::new();
        view.set_query("word 1");

        let result = run(&store, &mut view).unwrap();

        // word 1, word 10, word 11, word 12
        assert_eq!(result.listed.len(), 4);
        assert_eq!(result.listed[1].position, 2);
        assert_eq!(result.listed[1].record.word, "word 10");
        assert!(result.messages[0].content.contains("4 of 12"));
    }
}
