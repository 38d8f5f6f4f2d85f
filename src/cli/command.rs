//! Shell command grammar.

use thiserror::Error;

use crate::reward::HistoryFilter;
use crate::session::Platform;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unknown platform '{0}' (instagram, tiktok, snapchat)")]
    UnknownPlatform(String),

    #[error("unknown filter '{0}' (all, completed, pending, deleted)")]
    UnknownFilter(String),
}

/// Image reference for `select`: a 1-based index into the offered images,
/// or a literal URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Index(usize),
    Uri(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SignIn {
        phone: String,
        password: String,
    },
    SignUp {
        country: String,
        local_number: String,
        username: String,
        password: String,
        confirm: String,
    },
    Verify {
        code: String,
    },
    SignOut,
    Whoami,
    Connect(Platform),
    Disconnect(Platform),
    Username(String),
    Password {
        current: String,
        new: String,
        confirm: String,
    },
    Photo(String),
    Scan(String),
    Select(ImageRef),
    Share,
    History(HistoryFilter),
    Delete(String),
    Clear,
    ClearErrors,
    Retailers,
    Countries(Option<String>),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseError::UnknownCommand(String::new()));
        };
        let mut args = Args {
            command: name,
            words,
        };

        let command = match name {
            "sign-in" => Self::SignIn {
                phone: args.next("phone")?,
                password: args.next("password")?,
            },
            "sign-up" => Self::SignUp {
                country: args.next("country")?,
                local_number: args.next("phone")?,
                username: args.next("username")?,
                password: args.next("password")?,
                confirm: args.next("confirm")?,
            },
            "verify" => Self::Verify {
                code: args.next("code")?,
            },
            "sign-out" => Self::SignOut,
            "whoami" => Self::Whoami,
            "connect" => Self::Connect(parse_platform(&args.next("platform")?)?),
            "disconnect" => Self::Disconnect(parse_platform(&args.next("platform")?)?),
            "username" => Self::Username(args.next("name")?),
            "password" => Self::Password {
                current: args.next("current")?,
                new: args.next("new")?,
                confirm: args.next("confirm")?,
            },
            "photo" => Self::Photo(args.next("uri")?),
            "scan" => Self::Scan(args.next("payload")?),
            "select" => {
                let target = args.next("image")?;
                match target.parse::<usize>() {
                    Ok(index) => Self::Select(ImageRef::Index(index)),
                    Err(_) => Self::Select(ImageRef::Uri(target)),
                }
            }
            "share" => Self::Share,
            "history" => match args.optional() {
                Some(filter) => Self::History(
                    HistoryFilter::parse(&filter).ok_or(ParseError::UnknownFilter(filter))?,
                ),
                None => Self::History(HistoryFilter::All),
            },
            "delete" => Self::Delete(args.next("id")?),
            "clear" => Self::Clear,
            "clear-errors" => Self::ClearErrors,
            "retailers" => Self::Retailers,
            "countries" => Self::Countries(args.optional()),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

struct Args<'a, I> {
    command: &'a str,
    words: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<'a, I> {
    fn next(&mut self, argument: &'static str) -> Result<String, ParseError> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or(ParseError::MissingArgument {
                command: static_name(self.command),
                argument,
            })
    }

    fn optional(&mut self) -> Option<String> {
        self.words.next().map(str::to_string)
    }
}

/// Map a known command word to its static name for error messages.
fn static_name(command: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|c| **c == command)
        .copied()
        .unwrap_or("command")
}

const COMMANDS: &[&str] = &[
    "sign-in",
    "sign-up",
    "verify",
    "connect",
    "disconnect",
    "username",
    "password",
    "photo",
    "scan",
    "select",
    "delete",
];

fn parse_platform(name: &str) -> Result<Platform, ParseError> {
    Platform::parse(name).ok_or_else(|| ParseError::UnknownPlatform(name.to_string()))
}

pub const HELP: &str = "\
commands:
  sign-in <phone> <password>
  sign-up <country> <phone> <username> <password> <confirm>
  verify <code>
  sign-out | whoami
  connect <platform> | disconnect <platform>
  username <name> | photo <uri>
  password <current> <new> <confirm>
  scan <retailer|retailer:Name> | select <n|uri> | share | clear
  history [all|completed|pending|deleted] | delete <id>
  retailers | countries [query] | clear-errors | help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sign_in() {
        assert_eq!(
            ShellCommand::parse("sign-in 1234567890 password").unwrap(),
            ShellCommand::SignIn {
                phone: "1234567890".to_string(),
                password: "password".to_string(),
            }
        );
    }

    #[test]
    fn missing_argument_names_it() {
        let err = ShellCommand::parse("sign-in 1234567890").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                command: "sign-in",
                argument: "password",
            }
        );
        assert_eq!(err.to_string(), "'sign-in' needs <password>");
    }

    #[test]
    fn select_accepts_index_or_uri() {
        assert_eq!(
            ShellCommand::parse("select 2").unwrap(),
            ShellCommand::Select(ImageRef::Index(2))
        );
        assert_eq!(
            ShellCommand::parse("select https://x/y.jpg").unwrap(),
            ShellCommand::Select(ImageRef::Uri("https://x/y.jpg".to_string()))
        );
    }

    #[test]
    fn history_filter_defaults_to_all() {
        assert_eq!(
            ShellCommand::parse("history").unwrap(),
            ShellCommand::History(HistoryFilter::All)
        );
        assert!(matches!(
            ShellCommand::parse("history archived"),
            Err(ParseError::UnknownFilter(_))
        ));
    }

    #[test]
    fn rejects_unknown_platform_and_command() {
        assert!(matches!(
            ShellCommand::parse("connect myspace"),
            Err(ParseError::UnknownPlatform(_))
        ));
        assert!(matches!(
            ShellCommand::parse("dance"),
            Err(ParseError::UnknownCommand(_))
        ));
    }
}
