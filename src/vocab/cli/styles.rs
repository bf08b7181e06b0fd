//! Named styles for terminal output.
//!
//! Templates refer to styles by semantic name (`word`, `meaning`, `error`, ...) and
//! never by color, so the look can change here without touching a template. Names
//! are shared through [`names`]; the actual `console::Style` values live in
//! [`VOCAB_THEME`].
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const INDEX: &str = "index";
    pub const WORD: &str = "word";
    pub const MEANING: &str = "meaning";
    pub const DESCRIPTION: &str = "description";
    pub const LABEL: &str = "label";
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const REQUIRED: &str = "required";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub type Theme = HashMap<&'static str, Style>;

pub static VOCAB_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    HashMap::from([
        (names::INDEX, Style::new().yellow()),
        (names::WORD, Style::new().bold()),
        (names::MEANING, Style::new()),
        (names::DESCRIPTION, Style::new().italic()),
        (names::LABEL, Style::new().cyan()),
        (names::TITLE, Style::new().bold().underlined()),
        (names::MUTED, muted.clone()),
        (names::REQUIRED, Style::new().yellow().italic()),
        (names::ERROR, Style::new().red().bold()),
        (names::WARNING, Style::new().yellow()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, muted),
    ])
});
