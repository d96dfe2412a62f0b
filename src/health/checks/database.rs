//! Database configuration health check
//!
//! Validates that the configured database settings are usable without
//! requiring a live server: connectivity itself is exercised at startup by
//! the game and in the ignored lifecycle integration test.

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that the database configuration is well-formed
pub struct DatabaseConfigCheck;

impl DatabaseConfigCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DatabaseConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for DatabaseConfigCheck {
    fn name(&self) -> &'static str {
        "Database Config"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates database connection settings without connecting")
    }

    fn check(&self) -> CheckResult {
        let config = match AppConfig::load_from_env() {
            Ok(config) => config.database,
            Err(e) => {
                return CheckResult::fail("Failed to load database configuration")
                    .with_details(format!("  ✗ {}", e));
            }
        };

        let mut details = Vec::new();
        let mut problems = Vec::new();

        if config.host.is_empty() {
            problems.push("host is empty");
        }
        if config.port == 0 {
            problems.push("port is 0");
        }
        if config.database.is_empty() {
            problems.push("database name is empty");
        }
        if config.user.is_empty() {
            problems.push("user is empty");
        }

        details.push(format!(
            "  Target: {}@{}:{}/{}",
            config.user, config.host, config.port, config.database
        ));

        if !problems.is_empty() {
            for problem in &problems {
                details.push(format!("  ✗ {}", problem));
            }
            return CheckResult::fail("Database configuration invalid")
                .with_details(details.join("\n"));
        }

        if config.password.is_empty() {
            details.push("  ⚠ password is empty".to_string());
            return CheckResult::warn("Database configured without a password")
                .with_details(details.join("\n"));
        }

        CheckResult::pass("Database configuration valid").with_details(details.join("\n"))
    }
}
