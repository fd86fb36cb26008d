//! # vmailctl
//!
//! Administration of the `virtual_domains`, `virtual_users` and
//! `virtual_aliases` tables a Postfix/Dovecot mail server reads its
//! accounts from.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use vmailctl::config::Config;
//! use vmailctl::services::AccountService;
//! use vmailctl::storage::{ConnectionTarget, MySqlStore};
//!
//! # async fn run() -> vmailctl::Result<()> {
//! let config = Config::load()?;
//! let target = ConnectionTarget::new("localhost", "mailserver", 3306);
//! let store = Arc::new(MySqlStore::connect(&target, &config.database).await?);
//!
//! let accounts = AccountService::new(store);
//! println!("{}", accounts.add_user("jane", "s3cret", "example.com").await?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod storage;
pub mod usage;

pub use error::{Result, VmailError};
