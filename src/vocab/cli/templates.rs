//! Output templates, kept as standalone files and embedded at compile time.
//!
//! Templates are minijinja with `trim_blocks` and `lstrip_blocks` on, so block tags
//! never emit line breaks of their own; every output line ends where a `{{ }}` line
//! does. Width math and style selection happen in `render.rs`, templates only lay
//! things out.
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const ENTRY_TEMPLATE: &str = include_str!("templates/entry.tmp");
pub const DRAFT_TEMPLATE: &str = include_str!("templates/draft.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
