use async_trait::async_trait;
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::{ConnectOptions, Connection, Row};
use tokio::sync::Mutex;

use super::sql::{self, Statement};
use super::target::ConnectionTarget;
use crate::config::DatabaseConfig;
use crate::domain::{DomainId, MaxIdRow, NewAlias, NewUser, Table};
use crate::error::{Result, VmailError};
use crate::ports::MailStore;

/// A bound statement parameter.
#[derive(Debug, Clone, Copy)]
pub enum Param<'a> {
    Int(i64),
    Text(&'a str),
}

/// One autocommit connection to the mail database.
pub struct MySqlStore {
    conn: Mutex<MySqlConnection>,
}

impl MySqlStore {
    pub async fn connect(
        target: &ConnectionTarget,
        credentials: &DatabaseConfig,
    ) -> Result<Self> {
        let mut options = MySqlConnectOptions::new()
            .host(&target.host)
            .database(&target.database)
            .username(credentials.user())
            .password(credentials.password());

        if let Some(port) = target.port {
            options = options.port(port);
        } else if target.is_loopback()
            && let Some(socket) = &credentials.socket
        {
            options = options.socket(socket);
        }

        tracing::info!(db = %target, user = credentials.user(), "connecting");
        let conn = options
            .connect()
            .await
            .map_err(|e| VmailError::Connect(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub async fn close(self) -> Result<()> {
        self.conn.into_inner().close().await?;
        tracing::debug!("connection closed");
        Ok(())
    }

    pub async fn execute(&self, statement: Statement, params: &[Param<'_>]) -> Result<u64> {
        let mut conn = self.conn.lock().await;
        let affected = bind_all(statement, params)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        tracing::debug!(statement = statement.name, affected, "executed");
        Ok(affected)
    }

    pub async fn query_one(
        &self,
        statement: Statement,
        params: &[Param<'_>],
    ) -> Result<Option<MySqlRow>> {
        let mut conn = self.conn.lock().await;
        let row = bind_all(statement, params)
            .fetch_optional(&mut *conn)
            .await?;
        tracing::debug!(statement = statement.name, found = row.is_some(), "queried");
        Ok(row)
    }

    async fn insert(
        &self,
        table: Table,
        id: i64,
        statement: Statement,
        params: &[Param<'_>],
    ) -> Result<u64> {
        self.execute(statement, params).await.map_err(|err| match err {
            VmailError::Database(e) if is_primary_key_conflict(&e) => VmailError::IdConflict {
                table: table.as_str(),
                id,
            },
            other => other,
        })
    }
}

fn bind_all<'q>(statement: Statement, params: &[Param<'q>]) -> Query<'q, MySql, MySqlArguments> {
    params
        .iter()
        .fold(sqlx::query(statement.sql), |query, param| match *param {
            Param::Int(v) => query.bind(v),
            Param::Text(s) => query.bind(s),
        })
}

fn duplicate_key(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db| db.is_unique_violation())
        .map(|db| db.message())
}

/// MySQL names the violated key in the message, e.g.
/// `Duplicate entry '7' for key 'virtual_users.PRIMARY'`.
fn is_primary_key_conflict(err: &sqlx::Error) -> bool {
    duplicate_key(err).is_some_and(|msg| msg.contains("PRIMARY"))
}

#[async_trait]
impl MailStore for MySqlStore {
    async fn find_domain_id(&self, name: &str) -> Result<Option<DomainId>> {
        let row = self.query_one(sql::FIND_DOMAIN, &[Param::Text(name)]).await?;
        Ok(row.map(|r| r.try_get::<i64, _>(0)).transpose()?)
    }

    async fn max_id(&self, table: Table) -> Result<Option<MaxIdRow>> {
        let row = self.query_one(sql::max_id(table), &[]).await?;
        Ok(row
            .map(|r| r.try_get::<Option<i64>, _>(0))
            .transpose()?
            .map(MaxIdRow))
    }

    async fn insert_user(&self, user: &NewUser) -> Result<u64> {
        let params = [
            Param::Int(user.id),
            Param::Int(user.domain_id),
            Param::Text(&user.password),
            Param::Text(&user.email),
        ];
        self.insert(Table::Users, user.id, sql::INSERT_USER, &params)
            .await
            .map_err(|err| match err {
                VmailError::Database(e) if duplicate_key(&e).is_some() => {
                    VmailError::UserExists(user.email.clone())
                }
                other => other,
            })
    }

    async fn delete_user(&self, email: &str) -> Result<u64> {
        self.execute(sql::DELETE_USER, &[Param::Text(email)]).await
    }

    async fn update_password(&self, email: &str, password: &str) -> Result<u64> {
        self.execute(
            sql::UPDATE_PASSWORD,
            &[Param::Text(password), Param::Text(email)],
        )
        .await
    }

    async fn insert_alias(&self, alias: &NewAlias) -> Result<u64> {
        let params = [
            Param::Int(alias.id),
            Param::Int(alias.domain_id),
            Param::Text(&alias.source),
            Param::Text(&alias.destination),
        ];
        self.insert(Table::Aliases, alias.id, sql::INSERT_ALIAS, &params)
            .await
    }
}
