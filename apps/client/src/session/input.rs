//! Line commands typed at the terminal.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::PileKind;

pub const HELP: &str = "\
commands:
  card <id-prefix>   open the action menu for a card
  pick <n>           choose item n from the open menu
  pile <deck|mystery|discard|ink>
  draw | shuffle | end
  yes | no           answer a confirmation
  close              close the pile view
  click              click the background
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Card(String),
    /// One-based, as typed.
    Pick(usize),
    Pile(PileKind),
    Draw,
    Shuffle,
    EndTurn,
    Yes,
    No,
    Close,
    Click,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a menu item number")]
    BadIndex(String),
    #[error("'{0}' is not a pile (deck, mystery, discard, ink)")]
    BadPile(String),
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(InputError::Empty);
        };
        let arg = words.next();

        let command = match verb.to_ascii_lowercase().as_str() {
            "card" => {
                let prefix = arg.ok_or(InputError::MissingArgument("card"))?;
                Command::Card(prefix.to_string())
            }
            "pick" => {
                let raw = arg.ok_or(InputError::MissingArgument("pick"))?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => Command::Pick(n),
                    _ => return Err(InputError::BadIndex(raw.to_string())),
                }
            }
            "pile" => {
                let raw = arg.ok_or(InputError::MissingArgument("pile"))?;
                let pile =
                    PileKind::parse(raw).ok_or_else(|| InputError::BadPile(raw.to_string()))?;
                Command::Pile(pile)
            }
            "draw" => Command::Draw,
            "shuffle" => Command::Shuffle,
            "end" => Command::EndTurn,
            "yes" | "y" => Command::Yes,
            "no" | "n" => Command::No,
            "close" => Command::Close,
            "click" => Command::Click,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(InputError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
