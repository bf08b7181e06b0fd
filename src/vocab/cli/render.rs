//! # Rendering Module
//!
//! Terminal output goes through minijinja templates (see `templates.rs`) with a
//! `style` filter that looks names up in [`VOCAB_THEME`]. When color is off the
//! filter returns text unchanged, so the same templates serve pipes and terminals.
//!
//! Layout calculations (column widths, truncation) stay in Rust because they need
//! Unicode display widths: a word like 猫 takes two columns.

use super::styles::{names, Theme, VOCAB_THEME};
use super::templates::{
    DRAFT_TEMPLATE, ENTRY_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vocab::api::{CmdMessage, ListedRecord, MessageLevel};
use vocab::model::{Draft, Field, Record};

/// Shown in place of an unknown style name, to surface template typos.
const MISSING_STYLE_INDICATOR: &str = "(!?)";
/// Words wider than this are truncated in the list's word column.
const MAX_WORD_COLUMN: usize = 24;
const GAP: &str = "  ";

#[derive(Serialize)]
struct ListRow {
    index: String,
    word: String,
    gap: String,
    meaning: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<ListRow>,
    empty_message: String,
}

#[derive(Serialize)]
struct FieldLine {
    label: String,
    value: String,
    style: String,
}

#[derive(Serialize)]
struct FieldsData {
    header: String,
    fields: Vec<FieldLine>,
    hint: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

pub struct Renderer {
    env: Environment<'static>,
    line_width: usize,
}

impl Renderer {
    pub fn new(use_color: bool, line_width: usize) -> Self {
        Self::with_theme(&VOCAB_THEME, use_color, line_width)
    }

    pub fn with_theme(theme: &Theme, use_color: bool, line_width: usize) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        let theme = theme.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            apply_style(&theme, &name, &value.to_string(), use_color)
        });

        for (name, source) in [
            ("list", LIST_TEMPLATE),
            ("entry", ENTRY_TEMPLATE),
            ("draft", DRAFT_TEMPLATE),
            ("text_list", TEXT_LIST_TEMPLATE),
            ("messages", MESSAGES_TEMPLATE),
        ] {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "template failed to compile");
            }
        }

        Self { env, line_width }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(data)
    }

    /// The visible list, one entry per row: position, word, meaning.
    pub fn list(&self, listed: &[ListedRecord]) -> String {
        let empty_message = "No entries found.";
        let index_width = listed
            .iter()
            .map(|l| format!("{:>3}. ", l.position).width())
            .max()
            .unwrap_or(0);
        let word_width = listed
            .iter()
            .map(|l| l.record.word.width())
            .max()
            .unwrap_or(0)
            .min(MAX_WORD_COLUMN);
        let meaning_width = self
            .line_width
            .saturating_sub(index_width + word_width + GAP.len());

        let rows = listed
            .iter()
            .map(|l| {
                let word = truncate_to_width(&l.record.word, word_width);
                ListRow {
                    index: format!("{:>3}. ", l.position),
                    gap: " ".repeat(word_width.saturating_sub(word.width()) + GAP.len()),
                    word,
                    meaning: truncate_to_width(&l.record.meaning, meaning_width),
                }
            })
            .collect();

        let data = ListData {
            rows,
            empty_message: empty_message.to_string(),
        };
        self.render("list", &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The record open in the editor.
    pub fn entry(&self, record: &Record) -> String {
        let fields = Field::ALL
            .iter()
            .map(|field| FieldLine {
                label: field_label(*field),
                value: record.get(*field).to_string(),
                style: field_style(*field).to_string(),
            })
            .collect();
        let data = FieldsData {
            header: format!("Entry #{}", record.id),
            fields,
            hint: String::new(),
        };
        self.render("entry", &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The add dialog with its draft. Missing required fields are flagged.
    pub fn draft(&self, draft: &Draft) -> String {
        let fields = Field::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    Field::Word => &draft.word,
                    Field::Meaning => &draft.meaning,
                    Field::Description => &draft.description,
                };
                let required = matches!(field, Field::Word | Field::Meaning);
                if value.is_empty() && required {
                    FieldLine {
                        label: field_label(*field),
                        value: "(required)".to_string(),
                        style: names::REQUIRED.to_string(),
                    }
                } else {
                    FieldLine {
                        label: field_label(*field),
                        value: value.clone(),
                        style: field_style(*field).to_string(),
                    }
                }
            })
            .collect();
        let data = FieldsData {
            header: "New entry".to_string(),
            fields,
            hint: "Fill in with `set <field> <value>`, then `submit` or `cancel`.".to_string(),
        };
        self.render("draft", &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        let data = TextListData {
            lines: lines.to_vec(),
            empty_message: empty_message.to_string(),
        };
        self.render("text_list", &data)
            .unwrap_or_else(|_| format!("{}\n", empty_message))
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: message_style(&msg.level).to_string(),
                })
                .collect(),
        };
        self.render("messages", &data).unwrap_or_else(|_| {
            messages
                .iter()
                .map(|m| format!("{}\n", m.content))
                .collect()
        })
    }
}

fn apply_style(theme: &Theme, name: &str, text: &str, use_color: bool) -> String {
    match theme.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}

fn field_label(field: Field) -> String {
    format!("{:<13}", format!("{}:", field.name()))
}

fn field_style(field: Field) -> &'static str {
    match field {
        Field::Word => names::WORD,
        Field::Meaning => names::MEANING,
        Field::Description => names::DESCRIPTION,
    }
}

fn message_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
