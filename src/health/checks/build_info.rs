//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that build information is accessible and valid
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (rustc, target, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        // Build timestamp
        details.push(format!("  Build time: {}", build_info::BUILD_TIMESTAMP));

        // Rust compiler info
        details.push(format!(
            "  Rustc: {} ({})",
            build_info::RUSTC_SEMVER,
            build_info::RUSTC_CHANNEL
        ));

        // Target triple
        details.push(format!("  Target: {}", build_info::CARGO_TARGET_TRIPLE));

        // Optimization level
        details.push(format!("  Opt level: {}", build_info::CARGO_OPT_LEVEL));

        // Version string must reflect the target triple
        let version = build_info::version_string();
        if !version.starts_with(build_info::CARGO_TARGET_TRIPLE) {
            return CheckResult::fail("Version string malformed")
                .with_details(details.join("\n"));
        }
        details.push(format!("  Version: {}", version));

        CheckResult::pass("Build metadata accessible").with_details(details.join("\n"))
    }
}
