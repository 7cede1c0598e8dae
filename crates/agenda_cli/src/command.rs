//! REPL command parsing.

use agenda_core::{ContactField, UnknownFieldError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Stats,
    Form,
    Set(ContactField, String),
    /// 1-based row number as printed by `list`.
    Select(usize),
    Deselect,
    Add,
    Edit,
    Remove,
    Clear,
    Json,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidRow(String),
    Field(UnknownFieldError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(usage) => write!(f, "usage: {usage}"),
            Self::InvalidRow(value) => {
                write!(f, "row must be a number starting at 1, got `{value}`")
            }
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {}

impl From<UnknownFieldError> for CommandError {
    fn from(value: UnknownFieldError) -> Self {
        Self::Field(value)
    }
}

pub const HELP: &str = "\
commands:
  list                    show contacts
  stats                   show statistics
  form                    show form contents
  set <field> [value]     fill a form field (name|age|phone|email|income|state)
  select <row>            select a contact and load it into the form
  deselect                drop the selection
  add | edit | remove     act on the form / selected contact
  clear                   blank the form
  json                    print the full state as JSON
  quit                    leave";

/// Parses one input line.
///
/// `set` keeps everything after the field name verbatim, minus the single
/// separating space, so values may contain spaces.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "help" | "ajuda" | "?" => Ok(Command::Help),
        "list" | "listar" | "ls" => Ok(Command::List),
        "stats" | "estatisticas" => Ok(Command::Stats),
        "form" => Ok(Command::Form),
        "set" => parse_set(rest),
        "select" | "selecionar" => parse_row(rest).map(Command::Select),
        "deselect" => Ok(Command::Deselect),
        "add" | "adicionar" => Ok(Command::Add),
        "edit" | "editar" => Ok(Command::Edit),
        "remove" | "remover" | "rm" => Ok(Command::Remove),
        "clear" | "limpar" => Ok(Command::Clear),
        "json" => Ok(Command::Json),
        "quit" | "exit" | "sair" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let rest = rest.trim_start();
    let (field, value) = match rest.split_once(' ') {
        Some((field, value)) => (field, value),
        None => (rest, ""),
    };
    if field.is_empty() {
        return Err(CommandError::MissingArgument("set <field> [value]"));
    }
    let field = ContactField::parse(field)?;
    Ok(Command::Set(field, value.to_string()))
}

fn parse_row(rest: &str) -> Result<usize, CommandError> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument("select <row>"));
    }
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(CommandError::InvalidRow(raw.to_string())),
    }
}
