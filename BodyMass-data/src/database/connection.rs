//! Database connection module for the BodyMass application
//!
//! There is no connection pool: every storage operation opens its own
//! SQLite connection with [`open_connection`] and drops it before returning.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use super::DatabaseError;

/// SQLite file used when `DB_SQLITE_PATH` is not set
pub const DEFAULT_SQLITE_PATH: &str = "imc.db";

/// Civil timezone used to stamp new records when `APP_TIMEZONE` is not set
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Storage configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Path to SQLite database file
    pub sqlite_path: PathBuf,
    /// Timezone used for the server-assigned `created_at` of each record
    pub timezone: Tz,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl StorageConfig {
    /// Create a configuration for an explicit file and timezone
    pub fn new(sqlite_path: impl Into<PathBuf>, timezone: Tz) -> Self {
        Self {
            sqlite_path: sqlite_path.into(),
            timezone,
        }
    }

    /// Create a new storage configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        let sqlite_path = env::var("DB_SQLITE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SQLITE_PATH));

        let timezone = match env::var("APP_TIMEZONE") {
            Ok(name) => parse_timezone(&name)?,
            Err(_) => DEFAULT_TIMEZONE,
        };

        info!(
            "Storage configuration: sqlite_path={}, timezone={}",
            sqlite_path.display(),
            timezone.name()
        );

        Ok(Self {
            sqlite_path,
            timezone,
        })
    }
}

/// Parse an IANA timezone name such as `America/New_York`
pub fn parse_timezone(name: &str) -> Result<Tz, DatabaseError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DatabaseError::ConfigError(format!("Unknown timezone: {}", name)))
}

/// Open a fresh connection to the configured SQLite file.
///
/// The caller owns the returned handle; dropping it closes the connection.
pub fn open_connection(config: &StorageConfig) -> Result<Connection, DatabaseError> {
    ensure_parent_dir(&config.sqlite_path)?;

    debug!("Opening SQLite connection to {}", config.sqlite_path.display());

    let conn = Connection::open_with_flags(
        &config.sqlite_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    )?;

    Ok(conn)
}

/// Create the parent directory of the database file if it doesn't exist
fn ensure_parent_dir(path: &Path) -> Result<(), DatabaseError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if !parent.exists() {
        info!("Creating parent directory: {:?}", parent);
        fs::create_dir_all(parent).map_err(|e| {
            DatabaseError::ConnectionError(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.sqlite_path, PathBuf::from("imc.db"));
        assert_eq!(config.timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("America/New_York").unwrap(), chrono_tz::America::New_York);
        assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(DatabaseError::ConfigError(_))
        ));
    }

    #[test]
    fn test_open_connection_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("nested").join("deeper").join("imc.db");
        let config = StorageConfig::new(&db_path, chrono_tz::UTC);

        let conn = open_connection(&config).expect("open connection");
        conn.execute_batch("CREATE TABLE probe (x INTEGER)").expect("create table");
        drop(conn);

        assert!(db_path.exists());
    }
}
