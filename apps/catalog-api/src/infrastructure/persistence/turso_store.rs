//! Turso document store adapter.
//!
//! Each collection is a table of `(id, document)` rows where `document` is
//! the record's JSON encoding. The table is created on first use.

use std::marker::PhantomData;

use async_trait::async_trait;
use turso::{Builder, Connection, Database, Row, Value};

use crate::domain::catalog::{Record, RecordRepository, StoreError};
use crate::domain::shared::RecordId;

impl From<turso::Error> for StoreError {
    fn from(err: turso::Error) -> Self {
        Self::Query(err.to_string())
    }
}

/// Handle to an embedded Turso database.
pub struct TursoStore {
    database: Database,
}

impl TursoStore {
    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the database cannot be opened.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let database = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(path, "Turso store opened");

        Ok(Self { database })
    }

    /// Repository over the collection for `T`, creating its table if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be made or the table cannot be
    /// created.
    pub async fn collection<T: Record>(&self) -> Result<TursoRecordRepository<T>, StoreError> {
        let connection = self
            .database
            .connect()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, document TEXT NOT NULL)",
            T::COLLECTION
        );
        connection.execute(&ddl, ()).await?;

        Ok(TursoRecordRepository {
            connection,
            _record: PhantomData,
        })
    }
}

/// `RecordRepository` backed by one Turso table.
pub struct TursoRecordRepository<T> {
    connection: Connection,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> TursoRecordRepository<T> {
    fn decode(row: &Row) -> Result<T, StoreError> {
        match row.get_value(0)? {
            Value::Text(document) => Ok(serde_json::from_str(&document)?),
            _ => Err(StoreError::Serialization(format!(
                "{} document column is not text",
                T::KIND
            ))),
        }
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for TursoRecordRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let sql = format!("SELECT document FROM {}", T::COLLECTION);
        let mut rows = self.connection.query(&sql, ()).await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(Self::decode(&row)?);
        }
        Ok(records)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<T>, StoreError> {
        let sql = format!("SELECT document FROM {} WHERE id = ?", T::COLLECTION);
        let mut rows = self
            .connection
            .query(&sql, (id.as_str().to_string(),))
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::decode(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, mut record: T) -> Result<T, StoreError> {
        let id = record.id().cloned().unwrap_or_else(RecordId::generate);
        record.set_id(Some(id.clone()));
        let document = serde_json::to_string(&record)?;

        let upsert = format!(
            "INSERT INTO {} (id, document) VALUES (?, ?) \
             ON CONFLICT(id) DO UPDATE SET document = excluded.document",
            T::COLLECTION
        );
        self.connection
            .execute(&upsert, (id.into_inner(), document))
            .await?;

        Ok(record)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {}", T::COLLECTION);
        self.connection.execute(&sql, ()).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);
        let mut rows = self.connection.query(&sql, ()).await?;

        match rows.next().await? {
            Some(row) => match row.get_value(0)? {
                Value::Integer(n) => {
                    u64::try_from(n).map_err(|e| StoreError::Serialization(e.to_string()))
                }
                _ => Err(StoreError::Serialization(
                    "COUNT(*) did not return an integer".to_string(),
                )),
            },
            None => Ok(0),
        }
    }
}
