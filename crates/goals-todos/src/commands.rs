//! Terminal commands
//!
//! Every line typed at the prompt parses into a [`Command`]. Commands that
//! change data go through the same action creators a graphical front end
//! would use; positions refer to the 1-based numbers shown in the view.

use crate::middleware::LoggingMiddleware;
use crate::store::AppStore;
use crate::thunks::{
    handle_add_goal, handle_add_todo, handle_receive_data, handle_remove_goal, handle_remove_todo,
    handle_toggle_todo, ThunkContext,
};
use std::str::FromStr;
use thiserror::Error;

/// Which list a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Todo,
    Goal,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ListKind, String),
    Remove(ListKind, usize),
    Toggle(usize),
    List,
    Reload,
    History,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("missing argument for `{command}`: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid position: {0} (positions start at 1)")]
    InvalidPosition(String),
}

pub const HELP: &str = "\
Commands:
  todo add <name>     add a todo
  todo rm <n>         remove todo number n
  todo toggle <n>     mark todo number n done or not done
  goal add <name>     add a goal
  goal rm <n>         remove goal number n
  list                show both lists
  reload              fetch both lists from the service again
  history             show logged actions
  help                show this help
  quit                exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = split_word(line);
        match head {
            "" => Err(CommandError::Empty),
            "todo" => parse_list_command(ListKind::Todo, "todo", rest),
            "goal" => parse_list_command(ListKind::Goal, "goal", rest),
            "list" | "ls" => Ok(Self::List),
            "reload" => Ok(Self::Reload),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_list_command(
    kind: ListKind,
    command: &'static str,
    args: &str,
) -> Result<Command, CommandError> {
    let (verb, rest) = split_word(args);
    match (verb, kind) {
        ("", _) => Err(CommandError::MissingArgument {
            command,
            expected: "add, rm or toggle",
        }),
        ("add", _) if rest.is_empty() => Err(CommandError::MissingArgument {
            command,
            expected: "a name",
        }),
        ("add", _) => Ok(Command::Add(kind, rest.to_string())),
        ("rm" | "remove", _) => parse_position(command, rest).map(|n| Command::Remove(kind, n)),
        ("toggle", ListKind::Todo) => parse_position(command, rest).map(Command::Toggle),
        (other, _) => Err(CommandError::Unknown(format!("{} {}", command, other))),
    }
}

fn parse_position(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a position",
        });
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidPosition(arg.to_string())),
    }
}

/// What the command loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run a command against the store
///
/// Output that is not a state change (help, history, positional errors) is
/// printed directly; state changes show up through the store subscription.
pub fn execute(
    command: Command,
    store: &AppStore,
    ctx: &ThunkContext,
    logging: &LoggingMiddleware,
) -> anyhow::Result<Flow> {
    match command {
        Command::Add(ListKind::Todo, name) => {
            let echo = name.clone();
            store.dispatch(handle_add_todo(
                ctx,
                name,
                || {},
                move || println!("Restored input: todo add {}", echo),
            ))?;
        }
        Command::Add(ListKind::Goal, name) => {
            let echo = name.clone();
            store.dispatch(handle_add_goal(
                ctx,
                name,
                || {},
                move || println!("Restored input: goal add {}", echo),
            ))?;
        }
        Command::Remove(ListKind::Todo, position) => match store.state().todo_at(position) {
            Some(todo) => {
                store.dispatch(handle_remove_todo(ctx, todo.clone()))?;
            }
            None => println!("No todo at position {}", position),
        },
        Command::Remove(ListKind::Goal, position) => match store.state().goal_at(position) {
            Some(goal) => {
                store.dispatch(handle_remove_goal(ctx, goal.clone()))?;
            }
            None => println!("No goal at position {}", position),
        },
        Command::Toggle(position) => match store.state().todo_at(position) {
            Some(todo) => {
                store.dispatch(handle_toggle_todo(ctx, todo.id.clone()))?;
            }
            None => println!("No todo at position {}", position),
        },
        Command::List => print!("{}", crate::views::render(&store.state())),
        Command::Reload => {
            store.dispatch(handle_receive_data(ctx))?;
        }
        Command::History => {
            let history = logging.history();
            if history.is_empty() {
                println!("No actions logged yet");
            }
            for entry in history {
                println!("{} {}", entry.kind, entry.action);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
