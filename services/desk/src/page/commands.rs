//! services/desk/src/page/commands.rs
//!
//! The command language of the terminal front end and its dispatch onto the
//! page controller.

use crate::page::controller::{ActionOutcome, PageController};
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:
  list                 reload the materials
  add                  fill in the add-material form and save it
  form show|hide       open or close the add-material form
  delete <id>          delete a material
  ask [question]       ask the assistant (without text: ask the current draft)
  example <question>   put an example question into the input
  profile              edit your profile
  stats                show the statistics
  help                 show this help
  quit                 leave";

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    ShowForm,
    HideForm,
    Delete(i64),
    Ask(Option<String>),
    Example(String),
    Profile,
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for the list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "list" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "form" => match rest {
                "show" => Ok(Self::ShowForm),
                "hide" => Ok(Self::HideForm),
                _ => Err(CommandError::Usage("form show|hide")),
            },
            "delete" => rest
                .parse::<i64>()
                .map(Self::Delete)
                .map_err(|_| CommandError::Usage("delete <id>")),
            "ask" if rest.is_empty() => Ok(Self::Ask(None)),
            "ask" => Ok(Self::Ask(Some(rest.to_string()))),
            "example" if rest.is_empty() => Err(CommandError::Usage("example <question>")),
            "example" => Ok(Self::Example(rest.to_string())),
            "profile" => Ok(Self::Profile),
            "stats" => Ok(Self::Stats),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Runs one command against the controller.
pub async fn dispatch(controller: &PageController, command: Command) -> ActionOutcome {
    match command {
        Command::List => controller.load_materials().await,
        Command::Add => {
            controller.prompt_add_form().await;
            controller.submit_add_form().await
        }
        Command::ShowForm => {
            controller.show_add_form().await;
            ActionOutcome::Completed
        }
        Command::HideForm => {
            controller.hide_add_form().await;
            ActionOutcome::Completed
        }
        Command::Delete(id) => controller.delete_material(id).await,
        Command::Ask(question) => {
            if let Some(question) = question {
                controller.set_question(&question).await;
            }
            controller.ask().await
        }
        Command::Example(question) => {
            controller.set_example(&question).await;
            ActionOutcome::Completed
        }
        Command::Profile => controller.edit_profile().await,
        Command::Stats => {
            controller.update_stats().await;
            ActionOutcome::Completed
        }
        Command::Help => {
            println!("{}", HELP_TEXT);
            ActionOutcome::Completed
        }
        // The command loop stops before dispatching this.
        Command::Quit => ActionOutcome::Completed,
    }
}
