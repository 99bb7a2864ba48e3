// Database migrations module
// Schema creation is idempotent and runs before every storage operation

mod sqlite;
pub use sqlite::{run_migrations, MEASUREMENTS_TABLE};
