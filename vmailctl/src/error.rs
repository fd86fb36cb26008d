use thiserror::Error;

#[derive(Error, Debug)]
pub enum VmailError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{flag} {placeholder} is required")]
    MissingParameter {
        flag: &'static str,
        placeholder: &'static str,
    },

    #[error("-name <username> may contain at most one '@'")]
    TooManyAtSigns,

    #[error("No domain provided")]
    NoDomain,

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Couldn't find domain {0}")]
    DomainNotFound(String),

    #[error("Couldn't find max id in table {0}")]
    MaxIdNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("User {0} already exists")]
    UserExists(String),

    #[error("Id {id} is already taken in table {table}")]
    IdConflict { table: &'static str, id: i64 },

    #[error("Couldn't connect to database: {0}")]
    Connect(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VmailError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DomainNotFound(_) | Self::MaxIdNotFound(_) | Self::UserNotFound(_) => 1,
            Self::Usage(_)
            | Self::UnknownCommand(_)
            | Self::MissingParameter { .. }
            | Self::TooManyAtSigns => 2,
            Self::NoDomain | Self::UnknownTable(_) => 3,
            Self::UserExists(_) | Self::IdConflict { .. } => 4,
            Self::Config(_) => 5,
            Self::Connect(_) | Self::Database(_) | Self::Io(_) => 10,
        }
    }

    /// Usage errors are reported together with the usage text.
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::UnknownCommand(_))
    }
}

pub type Result<T> = std::result::Result<T, VmailError>;
