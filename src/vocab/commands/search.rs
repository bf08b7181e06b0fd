use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::search::SearchView;
use crate::store::RecordStore;

/// Change the query and return the new visible list. An empty query clears the filter.
pub fn run<S: RecordStore>(store: &S, view: &mut SearchView, query: &str) -> Result<CmdResult> {
    tracing::debug!(query, "search query changed");
    view.set_query(query);
    list::run(store, view)
}
