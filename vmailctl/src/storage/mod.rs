#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod sql;
pub mod target;

pub use mysql::MySqlStore;
pub use target::ConnectionTarget;
