use std::future::Future;
use std::sync::Arc;

use crate::domain::{MaxIdRow, Table};
use crate::error::{Result, VmailError};
use crate::ports::MailStore;

/// Attempts per insert before an id collision is reported.
pub const MAX_ID_ATTEMPTS: u32 = 3;

/// Allocates ids as `MAX(id) + 1`.
///
/// The read and the insert are separate statements, so a concurrent writer
/// can take the same id in between. Inserts go through
/// [`IdAllocator::insert_with_next_id`], which re-reads `MAX(id)` and retries
/// when the insert hits a primary-key collision.
pub struct IdAllocator<S: MailStore> {
    store: Arc<S>,
}

impl<S: MailStore> IdAllocator<S> {
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current largest id in `table`: 0 for an empty table, -1 for an empty
    /// table name (no query is made).
    pub async fn max_id(&self, table: &str) -> Result<i64> {
        if table.is_empty() {
            return Ok(-1);
        }
        let parsed: Table = table.parse()?;
        match self.store.max_id(parsed).await? {
            Some(MaxIdRow(max)) => Ok(max.unwrap_or(0)),
            None => Err(VmailError::MaxIdNotFound(table.to_string())),
        }
    }

    pub async fn next_id(&self, table: Table) -> Result<i64> {
        Ok(self.max_id(table.as_str()).await? + 1)
    }

    /// Runs `insert` with a freshly allocated id, re-allocating on
    /// `IdConflict`. Returns the id that was inserted.
    pub async fn insert_with_next_id<F, Fut>(&self, table: Table, insert: F) -> Result<i64>
    where
        F: Fn(i64) -> Fut,
        Fut: Future<Output = Result<u64>>,
    {
        let mut attempt = 1;
        loop {
            let id = self.next_id(table).await?;
            match insert(id).await {
                Ok(_) => return Ok(id),
                Err(VmailError::IdConflict { .. }) if attempt < MAX_ID_ATTEMPTS => {
                    tracing::warn!(
                        table = table.as_str(),
                        id,
                        attempt,
                        "id taken concurrently, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
