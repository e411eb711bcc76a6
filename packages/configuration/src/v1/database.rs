use lead_gateway_primitives::DatabaseDriver;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Database {
    // Database configuration
    /// Database driver. Possible values are: `sqlite3` and `postgrest`.
    #[serde(default = "Database::default_driver")]
    pub driver: DatabaseDriver,

    /// Database location. The format depends on the database driver.
    /// For `sqlite3`, it's the path to the database file, for example:
    /// `./storage/lead-gateway/lib/database/sqlite3.db`.
    /// For `postgrest`, it's the base URL of the hosted backend, for example:
    /// `https://project-ref.supabase.co`.
    #[serde(default = "Database::default_path")]
    pub path: String,

    /// Service key sent to the hosted backend on every request. Only used by
    /// the `postgrest` driver.
    #[serde(default = "Database::default_service_key")]
    pub service_key: Option<String>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            driver: Self::default_driver(),
            path: Self::default_path(),
            service_key: Self::default_service_key(),
        }
    }
}

impl Database {
    fn default_driver() -> DatabaseDriver {
        DatabaseDriver::Sqlite3
    }

    fn default_path() -> String {
        String::from("./storage/lead-gateway/lib/database/sqlite3.db")
    }

    fn default_service_key() -> Option<String> {
        None
    }

    /// Replaces the service key, if any, so the configuration can be logged.
    pub fn mask_secrets(&mut self) {
        if self.service_key.is_some() {
            self.service_key = Some("***".to_string());
        }
    }
}
