use crate::cli::ViewArg;
use crate::export::ExportTarget;
use clap::ValueEnum;
use std::path::PathBuf;
use thiserror::Error;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(PathBuf),
    Toggle(String),
    /// Toggle by row number in the indent view
    ToggleRow(usize),
    Collapse(String),
    Expand(String),
    ExpandAll,
    CollapseAll,
    Show(ViewArg),
    Export(ExportTarget),
    Theme(String),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid value '{value}' for '{command}'")]
    InvalidValue {
        command: &'static str,
        value: String,
    },
}

pub const HELP: &str = "\
commands:
  load <file.zip>                      replace the tree with a new archive
  toggle <path>                        collapse or expand a directory (\"\" is the root)
  toggle #<n>                          toggle row n of the indent view (#0 is the root)
  collapse <path>                      collapse a directory
  expand <path>                        expand a directory
  expand-all                           expand every directory
  collapse-all                         collapse every directory below the root
  show [indent|ascii|box|all]          print views (default: all)
  export <visual|ascii|vertical>       write an SVG of a view
  theme <terminal|light|dark|blueprint>
  status                               show the loaded tree and settings
  help
  quit";

impl Command {
    /// Parse a line; blank lines and `#` comments give `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let command = match word {
            "load" => Command::Load(PathBuf::from(required("load", rest)?)),
            "toggle" => match row_number(rest) {
                Some(row) => Command::ToggleRow(row),
                None => Command::Toggle(unquote(rest).to_string()),
            },
            "collapse" => Command::Collapse(unquote(rest).to_string()),
            "expand" => Command::Expand(unquote(rest).to_string()),
            "expand-all" => Command::ExpandAll,
            "collapse-all" => Command::CollapseAll,
            "show" => {
                if rest.is_empty() {
                    Command::Show(ViewArg::All)
                } else {
                    Command::Show(ViewArg::from_str(rest, true).map_err(|_| {
                        CommandError::InvalidValue {
                            command: "show",
                            value: rest.to_string(),
                        }
                    })?)
                }
            }
            "export" => {
                let value = required("export", rest)?;
                Command::Export(ExportTarget::from_str(value, true).map_err(|_| {
                    CommandError::InvalidValue {
                        command: "export",
                        value: value.to_string(),
                    }
                })?)
            }
            "theme" => Command::Theme(required("theme", rest)?.to_string()),
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    let value = unquote(rest);
    if value.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(value)
    }
}

/// `#<digits>` picks an indent row; anything else is a path
fn row_number(value: &str) -> Option<usize> {
    let digits = value.strip_prefix('#')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
