use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use vocab::model::Field;

#[derive(Parser, Debug)]
#[command(name = "vocab", bin_name = "vocab", version)]
#[command(about = "Browse, search and edit a vocabulary list", long_about = None)]
pub struct Cli {
    /// Import a vocabulary file before the session starts
    #[arg(short, long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Directory exports are written to (defaults to the current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Directory holding config.json (defaults to the platform config directory)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the entries matching the current search
    #[command(alias = "ls")]
    List,

    /// Filter entries by word, meaning or description (no term clears the search)
    #[command(alias = "s")]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },

    /// Open the entry at a list position in the editor
    #[command(alias = "sel")]
    Select {
        /// Position in the current list (e.g. 1)
        position: usize,
    },

    /// Show the entry open in the editor
    Show,

    /// Change a field of the entry open in the editor
    #[command(alias = "e")]
    Edit {
        /// word, meaning or description
        field: Field,

        /// New value (may be empty)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Start adding a new entry
    #[command(alias = "new")]
    Add,

    /// Fill in a field of the entry being added
    Set {
        /// word, meaning or description
        field: Field,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Save the entry being added (needs a word and a meaning)
    Submit,

    /// Discard the entry being added
    Cancel,

    /// Write the list to vocabulary.json
    Export {
        /// Target directory (defaults to --export-dir or the current directory)
        dir: Option<PathBuf>,
    },

    /// Print the export document
    Dump,

    /// Replace the list with the entries of a .json file
    Import { path: PathBuf },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. export-filename)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show help for session commands
    Help { command: Option<String> },

    /// End the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Edit,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse:",
            CommandGroup::Edit => "Edit:",
            CommandGroup::Data => "Data:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "select" | "show" => Some(CommandGroup::Browse),
            "edit" | "add" | "set" | "submit" | "cancel" => Some(CommandGroup::Edit),
            "export" | "dump" | "import" => Some(CommandGroup::Data),
            "config" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Edit,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// The grouped overview of session commands
pub fn grouped_help() -> String {
    let cmd = SessionLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::from("Commands (one per line):\n");
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();
        if group_cmds.is_empty() {
            continue;
        }

        output.push('\n');
        output.push_str(group.heading());
        output.push('\n');
        for sc in group_cmds {
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!("  {:<10}{}\n", sc.get_name(), about));
        }
    }
    output
}

/// clap's own help for a single session command
pub fn command_help(name: &str) -> Option<String> {
    let mut cmd = SessionLine::command();
    cmd.build();
    cmd.find_subcommand_mut(name)
        .map(|sc| sc.render_help().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(args).unwrap().command
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn parses_edit_with_multi_word_value() {
        match parse(&["edit", "description", "a", "small", "-furry", "animal"]) {
            SessionCommand::Edit { field, value } => {
                assert_eq!(field, Field::Description);
                assert_eq!(value.join(" "), "a small -furry animal");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_aliases() {
        assert!(matches!(parse(&["ls"]), SessionCommand::List));
        assert!(matches!(parse(&["exit"]), SessionCommand::Quit));
        assert!(matches!(
            parse(&["s", "cat"]),
            SessionCommand::Search { term } if term == vec!["cat".to_string()]
        ));
    }

    #[test]
    fn search_without_term_is_allowed() {
        assert!(matches!(
            parse(&["search"]),
            SessionCommand::Search { term } if term.is_empty()
        ));
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(SessionLine::try_parse_from(["edit", "id", "5"]).is_err());
    }

    #[test]
    fn every_command_has_a_group() {
        for sc in SessionLine::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = grouped_help();
        assert!(help.contains("Browse:"));
        assert!(help.contains("search"));
        assert!(help.contains("import"));
        assert!(command_help("edit").is_some());
        assert!(command_help("nope").is_none());
    }
}
