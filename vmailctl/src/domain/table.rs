use std::fmt;
use std::str::FromStr;

use crate::error::VmailError;

/// Tables of the mail server schema that receive tool-allocated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Domains,
    Users,
    Aliases,
}

impl Table {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domains => "virtual_domains",
            Self::Users => "virtual_users",
            Self::Aliases => "virtual_aliases",
        }
    }
}

impl FromStr for Table {
    type Err = VmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virtual_domains" => Ok(Self::Domains),
            "virtual_users" => Ok(Self::Users),
            "virtual_aliases" => Ok(Self::Aliases),
            other => Err(VmailError::UnknownTable(other.to_string())),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
