use async_trait::async_trait;
use tokio::task;
use tracing::debug;

use crate::database::migrations::run_migrations;
use crate::database::{open_connection, StorageConfig};
use crate::models::measurement::{MeasurementRecord, NewMeasurement};
use super::errors::RepositoryError;
use super::storage::{current_timestamp, DatabaseStorage};

/// Repository trait for BMI measurements
#[async_trait]
pub trait MeasurementRepositoryTrait: Send + Sync {
    /// Persist a measurement, stamping it with the current time
    async fn insert(&self, measurement: NewMeasurement) -> Result<MeasurementRecord, RepositoryError>;

    /// Get every stored measurement in insertion order
    async fn list_all(&self) -> Result<Vec<MeasurementRecord>, RepositoryError>;
}

/// SQLite-backed measurement repository.
/// Each call opens its own connection and closes it before returning.
#[derive(Debug, Clone, Default)]
pub struct SqliteMeasurementRepository {
    config: StorageConfig,
}

impl SqliteMeasurementRepository {
    /// Create a new repository
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Storage configuration in use
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

#[async_trait]
impl MeasurementRepositoryTrait for SqliteMeasurementRepository {
    async fn insert(&self, measurement: NewMeasurement) -> Result<MeasurementRecord, RepositoryError> {
        let config = self.config.clone();

        task::spawn_blocking(move || {
            let conn = open_connection(&config)?;
            run_migrations(&conn)?;

            let created_at = current_timestamp(&config.timezone);
            debug!("Inserting measurement created_at={}", created_at);
            DatabaseStorage::insert(&conn, &measurement, &created_at)
        })
        .await?
    }

    async fn list_all(&self) -> Result<Vec<MeasurementRecord>, RepositoryError> {
        let config = self.config.clone();

        task::spawn_blocking(move || {
            let conn = open_connection(&config)?;
            run_migrations(&conn)?;
            DatabaseStorage::list_all(&conn)
        })
        .await?
    }
}

// Mock repository for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use chrono_tz::Tz;

    use crate::repository::in_memory::InMemoryStorage;

    /// Mock implementation of the measurement repository for testing
    #[derive(Debug, Clone)]
    pub struct MockMeasurementRepository {
        storage: InMemoryStorage,
        timezone: Tz,
        should_fail: bool,
    }

    impl Default for MockMeasurementRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockMeasurementRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                storage: InMemoryStorage::new(),
                timezone: crate::database::DEFAULT_TIMEZONE,
                should_fail: false,
            }
        }

        /// Create a mock repository with predefined rows
        pub fn with_records(records: Vec<MeasurementRecord>) -> Self {
            let repo = Self::new();
            for record in records {
                repo.storage.push(record).expect("mock storage lock");
            }
            repo
        }

        /// Configure the mock to fail every operation
        pub fn with_failure(mut self) -> Self {
            self.should_fail = true;
            self
        }

        /// Rows stored so far
        pub fn records(&self) -> Vec<MeasurementRecord> {
            self.storage.get_all().unwrap_or_default()
        }
    }

    #[async_trait]
    impl MeasurementRepositoryTrait for MockMeasurementRepository {
        async fn insert(&self, measurement: NewMeasurement) -> Result<MeasurementRecord, RepositoryError> {
            if self.should_fail {
                return Err(RepositoryError::Unavailable("mock is configured to fail".to_string()));
            }
            self.storage.store(&measurement, current_timestamp(&self.timezone))
        }

        async fn list_all(&self) -> Result<Vec<MeasurementRecord>, RepositoryError> {
            if self.should_fail {
                return Err(RepositoryError::Unavailable("mock is configured to fail".to_string()));
            }
            self.storage.get_all()
        }
    }

    #[tokio::test]
    async fn test_mock_repository_assigns_sequential_ids() {
        let repo = MockMeasurementRepository::new();
        let measurement = NewMeasurement { weight_kg: 70.0, height_cm: 175.0, bmi: 22.86 };

        let first = repo.insert(measurement.clone()).await.unwrap();
        let second = repo.insert(measurement).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_repository_seeded_records_are_listed_in_order() {
        let seeded = vec![
            MeasurementRecord {
                id: 7,
                weight_kg: 70.0,
                height_cm: 175.0,
                bmi: 22.86,
                created_at: "2024-01-05 14:30:00.000000-05:00".to_string(),
            },
            MeasurementRecord {
                id: 8,
                weight_kg: 50.0,
                height_cm: 160.0,
                bmi: 19.53,
                created_at: "2024-01-06 09:00:00.000000-05:00".to_string(),
            },
        ];

        let repo = MockMeasurementRepository::with_records(seeded.clone());

        assert_eq!(repo.list_all().await.unwrap(), seeded);
        assert_eq!(repo.records(), seeded);
    }

    #[tokio::test]
    async fn test_mock_repository_failure() {
        let repo = MockMeasurementRepository::new().with_failure();
        assert!(repo.list_all().await.is_err());
    }
}
