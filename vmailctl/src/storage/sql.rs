//! Statements against the mail server schema.
//!
//! Passwords are hashed by MySQL's `ENCRYPT` with a fresh SHA-512 crypt salt,
//! the format Dovecot's `SHA512-CRYPT` scheme reads. `ENCRYPT` was removed
//! in MySQL 8.0.16, so the server must be MariaDB or MySQL older than 8.0.16.

use crate::domain::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    pub name: &'static str,
    pub sql: &'static str,
}

pub const FIND_DOMAIN: Statement = Statement {
    name: "find_domain",
    sql: "SELECT id FROM virtual_domains WHERE name = ? LIMIT 1",
};

pub const INSERT_USER: Statement = Statement {
    name: "insert_user",
    sql: "INSERT INTO virtual_users (id, domain_id, password, email) \
          VALUES (?, ?, ENCRYPT(?, CONCAT('$6$', SUBSTRING(SHA(RAND()), -16))), ?)",
};

pub const DELETE_USER: Statement = Statement {
    name: "delete_user",
    sql: "DELETE FROM virtual_users WHERE email = ?",
};

pub const UPDATE_PASSWORD: Statement = Statement {
    name: "update_password",
    sql: "UPDATE virtual_users \
          SET password = ENCRYPT(?, CONCAT('$6$', SUBSTRING(SHA(RAND()), -16))) \
          WHERE email = ?",
};

pub const INSERT_ALIAS: Statement = Statement {
    name: "insert_alias",
    sql: "INSERT INTO virtual_aliases (id, domain_id, source, destination) VALUES (?, ?, ?, ?)",
};

/// Table names cannot be bound as parameters, so each table gets its own text.
pub const fn max_id(table: Table) -> Statement {
    match table {
        Table::Domains => Statement {
            name: "max_id",
            sql: "SELECT MAX(id) FROM virtual_domains",
        },
        Table::Users => Statement {
            name: "max_id",
            sql: "SELECT MAX(id) FROM virtual_users",
        },
        Table::Aliases => Statement {
            name: "max_id",
            sql: "SELECT MAX(id) FROM virtual_aliases",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_id_targets_named_table() {
        for table in [Table::Domains, Table::Users, Table::Aliases] {
            assert!(max_id(table).sql.ends_with(table.as_str()));
        }
    }

    #[test]
    fn test_placeholder_counts() {
        let count = |s: Statement| s.sql.matches('?').count();
        assert_eq!(count(FIND_DOMAIN), 1);
        assert_eq!(count(INSERT_USER), 4);
        assert_eq!(count(DELETE_USER), 1);
        assert_eq!(count(UPDATE_PASSWORD), 2);
        assert_eq!(count(INSERT_ALIAS), 4);
    }
}
