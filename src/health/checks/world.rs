//! Game world/simulation health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::sim::{HeldKeys, Rect, Sprite, World};

/// Checks that the game world can be initialized, spawn a player, and apply
/// a clamped movement step
pub struct WorldCheck;

impl WorldCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorldCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for WorldCheck {
    fn name(&self) -> &'static str {
        "World/Simulation"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates world initialization, player movement, and clamping")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        // Test basic initialization
        let mut world = World::new(800.0, 600.0);
        details.push("  ✓ World initialized successfully".to_string());

        // Verify initial state
        if world.tick_count() != 0 {
            details.push("  ✗ Initial tick count should be 0".to_string());
            return CheckResult::fail("World initialization failed")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ Initial tick count: {}", world.tick_count()));

        if world.sim_time() != 0.0 {
            details.push("  ✗ Initial sim time should be 0.0".to_string());
            return CheckResult::fail("World initialization failed")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ Initial sim time: {:.2}s", world.sim_time()));

        // Test tick bookkeeping
        world.tick(0.016); // ~60 FPS
        if world.tick_count() != 1 {
            details.push("  ✗ Tick count should increment".to_string());
            return CheckResult::fail("World tick failed").with_details(details.join("\n"));
        }
        details.push(format!("  ✓ After tick: count={}", world.tick_count()));

        // Test a player movement step
        world.spawn_player(Sprite::movable(
            Rect::new(100.0, 100.0, 64.0, 64.0),
            [0.0, 0.0, 1.0],
            5.0,
        ));
        world.step_player(&HeldKeys {
            right: true,
            ..Default::default()
        });
        if world.player().map(|p| p.rect.x) != Some(105.0) {
            details.push("  ✗ Movement step failed".to_string());
            return CheckResult::fail("Player movement failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Movement step: working".to_string());

        // Test boundary clamping
        world.spawn_player(Sprite::movable(
            Rect::new(790.0, 100.0, 64.0, 64.0),
            [0.0, 0.0, 1.0],
            50.0,
        ));
        world.step_player(&HeldKeys {
            right: true,
            ..Default::default()
        });
        if world.player().map(|p| p.rect.right() <= 800.0) != Some(true) {
            details.push("  ✗ Clamping failed".to_string());
            return CheckResult::fail("Boundary clamping failed")
                .with_details(details.join("\n"));
        }
        details.push("  ✓ Boundary clamping: working".to_string());

        CheckResult::pass("All world systems operational").with_details(details.join("\n"))
    }
}
