//! ROWGRID Core - Row Records, Row Locks and Shared Types
//!
//! Leaf crate for the ROWGRID workspace. The table itself lives in
//! `rowgrid-table`; everything here is a collaborator it consumes.

pub mod config;
pub mod error;
pub mod lock;
pub mod record;

pub use config::{TableConfig, CONFIG_ENV_VAR};
pub use error::{Axis, ConfigError, RecordError, TableError, TableResult};
pub use lock::{RowGuard, RowLock, UnlockPolicy, UnlockPolicyParseError};
pub use record::RowRecord;
