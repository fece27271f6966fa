use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A task list with undo and redo", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding the saved list (or set TODO_DATA_DIR env var)
    #[arg(long, value_name = "DIR", env = "TODO_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key, also the file name without extension
    #[arg(long, value_name = "KEY", global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Task(TaskAction),
    /// Interactive session with undo and redo, reading commands from stdin
    Shell,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// One-shot edits against the saved list. Each prints a JSON envelope.
#[derive(Subcommand)]
pub enum TaskAction {
    /// Print every task
    List,
    /// Add a task to the end of the list
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the text of a task
    Edit {
        index: usize,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Remove a task
    Remove { index: usize },
    /// Flip a task between done and not done
    Toggle { index: usize },
    /// Mark every task done
    CheckAll,
    /// Mark every task not done
    UncheckAll,
    /// Delete every task and the saved file
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["todo", "add", "buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Task(TaskAction::Add { text })) => assert_eq!(text.join(" "), "buy milk"),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["todo", "list", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_index_must_be_a_number() {
        assert!(Cli::try_parse_from(["todo", "toggle", "first"]).is_err());
    }
}
