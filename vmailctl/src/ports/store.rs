use async_trait::async_trait;

use crate::domain::{DomainId, MaxIdRow, NewAlias, NewUser, Table};
use crate::error::Result;

/// The statements the command handlers run against the mail schema.
///
/// Mutations return the number of affected rows. Inserts that collide on the
/// primary key fail with `VmailError::IdConflict`; a user insert that collides
/// on `email` fails with `VmailError::UserExists`.
#[async_trait]
pub trait MailStore: Send + Sync {
    async fn find_domain_id(&self, name: &str) -> Result<Option<DomainId>>;
    /// `None` means the query produced no row at all.
    async fn max_id(&self, table: Table) -> Result<Option<MaxIdRow>>;
    async fn insert_user(&self, user: &NewUser) -> Result<u64>;
    async fn delete_user(&self, email: &str) -> Result<u64>;
    async fn update_password(&self, email: &str, password: &str) -> Result<u64>;
    async fn insert_alias(&self, alias: &NewAlias) -> Result<u64>;
}
