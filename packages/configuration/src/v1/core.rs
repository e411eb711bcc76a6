use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::database::Database;
use crate::DEFAULT_TIMEOUT;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    // Database configuration.
    #[serde(default = "Core::default_database")]
    pub database: Database,

    /// Maximum time in seconds the gateway waits for each lookup (active
    /// configuration and lead) before giving up with an internal error.
    #[serde(default = "Core::default_lookup_timeout")]
    pub lookup_timeout: u64,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            database: Self::default_database(),
            lookup_timeout: Self::default_lookup_timeout(),
        }
    }
}

impl Core {
    fn default_database() -> Database {
        Database::default()
    }

    fn default_lookup_timeout() -> u64 {
        DEFAULT_TIMEOUT.as_secs()
    }

    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout)
    }
}
