pub mod address;
pub mod command;
pub mod record;
pub mod request;
pub mod table;

pub use address::{Address, compose_email};
pub use command::Command;
pub use record::{DomainId, MaxIdRow, NewAlias, NewUser};
pub use request::{Action, Request};
pub use table::Table;
