//! Store location configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("gradebook.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_file() {
        assert_eq!(DatabaseConfig::default().path, "gradebook.db");
    }
}
