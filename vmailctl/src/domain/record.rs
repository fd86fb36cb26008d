use std::fmt;

pub type DomainId = i64;

/// Result row of `SELECT MAX(id)`; `None` when the table has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIdRow(pub Option<i64>);

#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: i64,
    pub domain_id: DomainId,
    pub email: String,
    /// Plaintext; hashed by the database on insert.
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("domain_id", &self.domain_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlias {
    pub id: i64,
    pub domain_id: DomainId,
    pub source: String,
    pub destination: String,
}
