//! Parameterized SQL execution over the pool.
//!
//! Rows come back as [`Record`]s: column name to JSON value, in column
//! order. Each call checks a connection out of the pool for the duration of
//! the statement and returns it afterwards; no call spans a transaction.

use folio_core::types::Record;
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row, TypeInfo, ValueRef};

use crate::{DbPool, StoreError};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// A positional parameter bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Int(i64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlParam::Null, Into::into)
    }
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Null => query.bind(None::<String>),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Result of a statement that does not return rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    /// `AUTO_INCREMENT` id generated by an `INSERT`, or 0.
    pub last_insert_id: u64,
}

/// Run a query and decode every row into a [`Record`].
pub async fn fetch_records(
    pool: &DbPool,
    sql: &str,
    params: &[SqlParam],
) -> Result<Vec<Record>, StoreError> {
    let rows = bind_params(sqlx::query(sql), params)
        .fetch_all(pool)
        .await?;

    let records = rows
        .iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = records.len(), "Fetched records");
    Ok(records)
}

/// Run a statement that modifies rows.
pub async fn execute(
    pool: &DbPool,
    sql: &str,
    params: &[SqlParam],
) -> Result<ExecOutcome, StoreError> {
    let result = bind_params(sqlx::query(sql), params)
        .execute(pool)
        .await?;

    Ok(ExecOutcome {
        rows_affected: result.rows_affected(),
        last_insert_id: result.last_insert_id(),
    })
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

/// How a MySQL column is rendered as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Bool,
    Signed,
    Unsigned,
    Year,
    Float,
    /// Exact numerics, rendered as strings to keep their precision.
    Decimal,
    Date,
    DateTime,
    Timestamp,
    Time,
    Json,
    Text,
    Binary,
    /// Anything else is read as its textual wire form.
    Other,
}

impl ColumnKind {
    /// Classify a column by the type name sqlx reports for it.
    pub fn from_type_name(name: &str) -> Self {
        let name = name.to_ascii_uppercase();

        if name == "BOOLEAN" {
            return ColumnKind::Bool;
        }
        if name.ends_with("UNSIGNED") {
            return ColumnKind::Unsigned;
        }

        match name.as_str() {
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => ColumnKind::Signed,
            "YEAR" => ColumnKind::Year,
            "FLOAT" | "DOUBLE" => ColumnKind::Float,
            "DECIMAL" => ColumnKind::Decimal,
            "DATE" => ColumnKind::Date,
            "DATETIME" => ColumnKind::DateTime,
            "TIMESTAMP" => ColumnKind::Timestamp,
            "TIME" => ColumnKind::Time,
            "JSON" => ColumnKind::Json,
            "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM"
            | "SET" => ColumnKind::Text,
            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                ColumnKind::Binary
            }
            _ => ColumnKind::Other,
        }
    }
}

fn row_to_record(row: &MySqlRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::with_capacity(row.len());
    for column in row.columns() {
        let value = column_value(row, column.ordinal())?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

fn column_value(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let kind = ColumnKind::from_type_name(raw.type_info().name());

    let value = match kind {
        ColumnKind::Bool => Value::Bool(row.try_get::<bool, _>(index)?),
        ColumnKind::Signed => Value::from(row.try_get::<i64, _>(index)?),
        ColumnKind::Unsigned => Value::from(row.try_get::<u64, _>(index)?),
        ColumnKind::Year => Value::from(row.try_get_unchecked::<u16, _>(index)?),
        ColumnKind::Float => Value::from(row.try_get::<f64, _>(index)?),
        ColumnKind::Date => {
            Value::String(row.try_get::<chrono::NaiveDate, _>(index)?.to_string())
        }
        ColumnKind::DateTime => Value::String(
            row.try_get::<chrono::NaiveDateTime, _>(index)?
                .format("%Y-%m-%dT%H:%M:%S%.f")
                .to_string(),
        ),
        ColumnKind::Timestamp => Value::String(
            row.try_get::<chrono::DateTime<chrono::Utc>, _>(index)?
                .to_rfc3339(),
        ),
        ColumnKind::Time => {
            Value::String(row.try_get::<chrono::NaiveTime, _>(index)?.to_string())
        }
        ColumnKind::Json => row.try_get::<Value, _>(index)?,
        ColumnKind::Text => Value::String(row.try_get::<String, _>(index)?),
        ColumnKind::Binary => {
            let bytes = row.try_get::<Vec<u8>, _>(index)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
        ColumnKind::Decimal | ColumnKind::Other => {
            Value::String(row.try_get_unchecked::<String, _>(index)?)
        }
    };
    Ok(value)
}
