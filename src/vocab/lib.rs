//! # Vocab Architecture
//!
//! Vocab is a **UI-agnostic vocabulary list editor**. The terminal session shipped in
//! the binary is one client of the library; the same controller could sit behind any
//! other front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session lines, renders lists and messages          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - VocabApi owns all session state                          │
//! │  - One method per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over search, selection, draft, exchange   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, MemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session State
//!
//! A session holds four things, all owned by [`api::VocabApi`]:
//!
//! - the record store (authoritative list of entries)
//! - the search view (the query plus the filtered projection derived from it)
//! - the selection editor (a mirror of the one record being edited)
//! - the add dialog (closed, or open with an unsaved draft)
//!
//! Edits to the selected record go through the store and the mirror is replaced
//! with what the store returns, so the two can't drift apart.
//!
//! ## Persistence
//!
//! There is none beyond explicit export and import of a JSON document (see
//! [`exchange`]). Every session starts from the same three example entries.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller facade
//! - [`commands`]: Business logic for each action
//! - [`store`]: Record storage
//! - [`model`]: Core data types (`Record`, `RecordId`, `Field`, `Draft`)
//! - [`search`]: Filtering and the recomputed search view
//! - [`selection`]: The selection editor
//! - [`draft`]: The add dialog state machine
//! - [`exchange`]: JSON import/export
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod exchange;
pub mod model;
pub mod search;
pub mod selection;
pub mod store;
