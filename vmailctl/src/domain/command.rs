use std::fmt;
use std::str::FromStr;

use crate::error::VmailError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddUser,
    RemoveUser,
    ChangePassword,
    AddAlias,
    Help,
}

impl Command {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddUser => "add-user",
            Self::RemoveUser => "remove-user",
            Self::ChangePassword => "change-password",
            Self::AddAlias => "add-alias",
            Self::Help => "help",
        }
    }

    /// Whether the command reads or writes the database.
    pub const fn needs_database(self) -> bool {
        !matches!(self, Self::Help)
    }
}

impl FromStr for Command {
    type Err = VmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-user" => Ok(Self::AddUser),
            "remove-user" => Ok(Self::RemoveUser),
            "change-password" => Ok(Self::ChangePassword),
            "add-alias" => Ok(Self::AddAlias),
            "help" => Ok(Self::Help),
            other => Err(VmailError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
