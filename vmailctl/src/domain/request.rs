use super::Command;

/// Flag values for one invocation, built once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    pub host: String,
    pub database: String,
    pub port: u16,
    /// Explicit `-domain` flag, else the configured default; may be empty.
    pub domain: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
}

impl Request {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            host: "localhost".to_string(),
            database: "mailserver".to_string(),
            port: 3306,
            domain: String::new(),
            name: None,
            password: None,
            source: None,
            destination: None,
        }
    }
}

/// A validated command with its required parameters extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddUser { name: String, password: String },
    RemoveUser { name: String },
    ChangePassword { name: String, password: String },
    AddAlias { source: String, destination: String },
    Help,
}
