//! Integration tests for player movement and the run-state machine

use village_green::app::RunState;
use village_green::sim::{HeldKeys, Motion, Rect, Sprite, World};

fn game_world() -> World {
    // 800x600 screen, player at (100, 100) moving 5 px per step
    let mut world = World::new(800.0, 600.0);
    world.spawn_player(Sprite::movable(
        Rect::new(100.0, 100.0, 64.0, 64.0),
        [0.0, 0.0, 1.0],
        5.0,
    ));
    world
}

#[test]
fn test_holding_right_for_one_step() {
    let mut world = game_world();

    world.step_player(&HeldKeys {
        right: true,
        ..Default::default()
    });

    let player = world.player().unwrap();
    assert_eq!(player.rect.x, 105.0);
    assert_eq!(player.rect.y, 100.0);
}

#[test]
fn test_no_direction_means_no_movement() {
    let mut world = game_world();

    world.step_player(&HeldKeys::default());

    let player = world.player().unwrap();
    assert_eq!(player.rect.x, 100.0);
    assert_eq!(player.rect.y, 100.0);
}

#[test]
fn test_diagonal_speed_equals_axis_speed() {
    let mut axis_world = game_world();
    let mut diag_world = game_world();

    axis_world.step_player(&HeldKeys {
        left: true,
        ..Default::default()
    });
    diag_world.step_player(&HeldKeys {
        down: true,
        left: true,
        ..Default::default()
    });

    let axis = axis_world.player().unwrap().rect;
    let diag = diag_world.player().unwrap().rect;

    let axis_mag = ((axis.x - 100.0).powi(2) + (axis.y - 100.0).powi(2)).sqrt();
    let diag_mag = ((diag.x - 100.0).powi(2) + (diag.y - 100.0).powi(2)).sqrt();

    assert!((axis_mag - diag_mag).abs() < 1e-4);
}

#[test]
fn test_player_stays_on_screen_under_sustained_input() {
    let mut world = game_world();

    // Hold down+right far longer than needed to cross the screen
    for _ in 0..500 {
        world.step_player(&HeldKeys {
            down: true,
            right: true,
            ..Default::default()
        });

        let rect = world.player().unwrap().rect;
        assert!(rect.left() >= 0.0, "left edge escaped: {}", rect.left());
        assert!(rect.top() >= 0.0, "top edge escaped: {}", rect.top());
        assert!(rect.right() <= 800.0, "right edge escaped: {}", rect.right());
        assert!(
            rect.bottom() <= 600.0,
            "bottom edge escaped: {}",
            rect.bottom()
        );
    }

    // Ends up parked in the bottom-right corner
    let rect = world.player().unwrap().rect;
    assert_eq!(rect.right(), 800.0);
    assert_eq!(rect.bottom(), 600.0);
}

#[test]
fn test_scenery_ignores_input() {
    let mut world = World::new(800.0, 600.0);
    world.spawn(Sprite::stationary(
        Rect::new(250.0, 250.0, 50.0, 50.0),
        [0.0, 0.0, 1.0],
    ));
    world.spawn_player(Sprite::movable(
        Rect::new(100.0, 100.0, 64.0, 64.0),
        [0.0, 0.0, 1.0],
        5.0,
    ));

    for _ in 0..10 {
        world.step_player(&HeldKeys {
            up: true,
            ..Default::default()
        });
    }

    assert_eq!(world.sprites()[0].rect, Rect::new(250.0, 250.0, 50.0, 50.0));
    assert!(matches!(world.sprites()[0].motion, Motion::Stationary));
}

#[test]
fn test_run_state_stops_exactly_once() {
    let mut state = RunState::Running;
    assert!(state.is_running());

    // Close event or Escape
    state.stop();
    assert!(!state.is_running());

    // Repeated stops are no-ops; nothing restarts the loop
    state.stop();
    assert_eq!(state, RunState::Stopped);
}
