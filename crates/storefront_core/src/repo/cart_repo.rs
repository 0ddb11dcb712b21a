//! Cart persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Round-trip the cart through one key-value slot, losslessly.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The slot value is a bare JSON array of line items, the exact shape
//!   the original site wrote to localStorage under the same key.
//! - `load_cart` never fabricates state: a missing slot is `Ok(None)`,
//!   an undecodable slot is `Err(CorruptSlot)`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::cart::{Cart, LineItem};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key, kept verbatim from the shop site's localStorage key so
/// carts persisted by the original script keep restoring.
pub const CART_SLOT_KEY: &str = "mgeCart";

const KV_TABLE: &str = "kv_store";
const KV_REQUIRED_COLUMNS: [&str; 3] = ["key", "value", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for cart persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Serializing the in-memory cart failed (should not happen for
    /// invariant-respecting carts; surfaced rather than swallowed).
    Encode(serde_json::Error),
    /// The stored slot value cannot be decoded into a valid cart.
    CorruptSlot { slot: &'static str, reason: String },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode cart payload: {err}"),
            Self::CorruptSlot { slot, reason } => {
                write!(f, "corrupt persisted cart in slot `{slot}`: {reason}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the cart slot.
pub trait CartRepository {
    /// Overwrites the slot with the serialized cart.
    fn save_cart(&self, cart: &Cart) -> RepoResult<()>;
    /// Loads the persisted cart.
    ///
    /// Returns `Ok(None)` when nothing was ever persisted and
    /// `Err(RepoError::CorruptSlot)` when the slot exists but cannot be
    /// decoded into an invariant-respecting cart.
    fn load_cart(&self) -> RepoResult<Option<Cart>>;
}

/// SQLite-backed cart repository over the `kv_store` slot table.
pub struct SqliteCartRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCartRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CartRepository for SqliteCartRepository<'_> {
    fn save_cart(&self, cart: &Cart) -> RepoResult<()> {
        let payload = serde_json::to_string(cart).map_err(RepoError::Encode)?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![CART_SLOT_KEY, payload],
        )?;

        Ok(())
    }

    fn load_cart(&self) -> RepoResult<Option<Cart>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [CART_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(value) => Ok(Some(decode_slot(&value)?)),
            None => Ok(None),
        }
    }
}

fn decode_slot(value: &str) -> RepoResult<Cart> {
    let items: Vec<LineItem> = serde_json::from_str(value).map_err(|err| {
        RepoError::CorruptSlot {
            slot: CART_SLOT_KEY,
            reason: err.to_string(),
        }
    })?;

    Cart::from_items(items).map_err(|err| RepoError::CorruptSlot {
        slot: CART_SLOT_KEY,
        reason: err.to_string(),
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected = latest_version();
    let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual != expected {
        return Err(RepoError::UninitializedConnection {
            expected_version: expected,
            actual_version: actual,
        });
    }

    if !table_exists(conn, KV_TABLE)? {
        return Err(RepoError::MissingRequiredTable(KV_TABLE));
    }

    for column in KV_REQUIRED_COLUMNS {
        if !column_exists(conn, KV_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: KV_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2;",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
