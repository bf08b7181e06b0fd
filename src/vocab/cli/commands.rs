//! # Session Layer
//!
//! The terminal client for vocab. It is the only code that touches stdin, stdout,
//! stderr or exit codes; everything it shows comes from a [`CmdResult`] returned by
//! [`VocabApi`].
//!
//! ## Flow
//!
//! 1. `run()` parses the process arguments, sets up logging and builds the context
//! 2. an optional `--import` file replaces the seed entries
//! 3. each stdin line is split into words and parsed as a [`SessionCommand`]
//! 4. `handle_*()` calls the API and redraws whatever the action changed
//!
//! A line that fails (bad arguments, an unwritable export directory) prints its error
//! and the session carries on. Only startup failures end the process with an error.

use super::line;
use super::render::Renderer;
use super::setup::{command_help, grouped_help, Cli, SessionCommand, SessionLine};
use clap::Parser;
use console::Term;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vocab::api::{CmdResult, ConfigAction, VocabApi};
use vocab::config::VocabConfig;
use vocab::error::Result;
use vocab::model::Field;
use vocab::store::memory::MemoryStore;

struct AppContext {
    api: VocabApi<MemoryStore>,
    renderer: Renderer,
    export_dir: PathBuf,
    use_color: bool,
}

/// Whether the session should keep reading lines.
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if let Some(path) = &cli.import {
        let result = ctx.api.import_from(path)?;
        print!("{}", ctx.renderer.messages(&result.messages));
    }
    handle_list(&mut ctx)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            let prompt = if ctx.api.dialog().is_open() {
                "new> "
            } else {
                "vocab> "
            };
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match dispatch(&mut ctx, line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                tracing::debug!(line, error = %e, "session command failed");
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second initialisation (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(VocabConfig::default_dir);
    let config = match &config_dir {
        Some(dir) => VocabConfig::load(dir)?,
        None => VocabConfig::default(),
    };

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color, config.line_width);

    let mut api = VocabApi::seeded(config);
    if let Some(dir) = config_dir {
        api = api.with_config_dir(dir);
    }

    let export_dir = cli
        .export_dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    Ok(AppContext {
        api,
        renderer,
        export_dir,
        use_color,
    })
}

fn dispatch(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let words = match line::split(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(Flow::Continue);
        }
    };

    let command = match SessionLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            // clap's own message, e.g. an unknown command or a missing argument
            let _ = e.print();
            return Ok(Flow::Continue);
        }
    };

    match command {
        SessionCommand::List => handle_list(ctx)?,
        SessionCommand::Search { term } => handle_search(ctx, term)?,
        SessionCommand::Select { position } => handle_select(ctx, position)?,
        SessionCommand::Show => handle_show(ctx)?,
        SessionCommand::Edit { field, value } => handle_edit(ctx, field, value)?,
        SessionCommand::Add => handle_add(ctx)?,
        SessionCommand::Set { field, value } => handle_set(ctx, field, value)?,
        SessionCommand::Submit => handle_submit(ctx)?,
        SessionCommand::Cancel => handle_cancel(ctx)?,
        SessionCommand::Export { dir } => handle_export(ctx, dir)?,
        SessionCommand::Dump => handle_dump(ctx)?,
        SessionCommand::Import { path } => handle_import(ctx, path)?,
        SessionCommand::Config { key, value } => handle_config(ctx, key, value)?,
        SessionCommand::Help { command } => handle_help(command),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_messages(ctx: &AppContext, result: &CmdResult) {
    print!("{}", ctx.renderer.messages(&result.messages));
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!("{}", ctx.renderer.list(&result.listed));
    print_messages(ctx, &result);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: Vec<String>) -> Result<()> {
    let result = ctx.api.search(&term.join(" "))?;
    print!("{}", ctx.renderer.list(&result.listed));
    print_messages(ctx, &result);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.select(position)?;
    if let Some(record) = &result.selected {
        print!("{}", ctx.renderer.entry(record));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_show(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_selected()?;
    if let Some(record) = &result.selected {
        print!("{}", ctx.renderer.entry(record));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, field: Field, value: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_selected(field, value.join(" "))?;
    if let Some(record) = &result.selected {
        print!("{}", ctx.renderer.entry(record));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.open_add_dialog()?;
    if let Some(draft) = &result.draft {
        print!("{}", ctx.renderer.draft(draft));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, field: Field, value: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_draft(field, value.join(" "))?;
    if let Some(draft) = &result.draft {
        print!("{}", ctx.renderer.draft(draft));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_submit(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.submit_add()?;
    print_messages(ctx, &result);

    if let Some(draft) = &result.draft {
        // Rejected: still open, show what is missing
        print!("{}", ctx.renderer.draft(draft));
    } else if !result.affected.is_empty() {
        handle_list(ctx)?;
    }
    Ok(())
}

fn handle_cancel(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.cancel_add()?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.export_dir.clone());
    let result = ctx.api.export_to(&dir)?;
    print_messages(ctx, &result);
    Ok(())
}

fn handle_dump(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.export_text()?;
    if let Some(text) = &result.exported {
        println!("{}", text);
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_from(&path)?;
    print_messages(ctx, &result);
    if !result.has_errors() {
        handle_list(ctx)?;
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.configure(action)?;
    if let Some(config) = &result.config {
        // line-width may have changed
        ctx.renderer = Renderer::new(ctx.use_color, config.line_width);
        if show_all {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", ctx.renderer.text_list(&lines, "No configuration."));
        }
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_help(command: Option<String>) {
    match command {
        None => print!("{}", grouped_help()),
        Some(name) => match command_help(&name) {
            Some(help) => print!("{}", help),
            None => eprintln!("Error: unknown command '{}'", name),
        },
    }
}
