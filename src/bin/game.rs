//! Game entrypoint: bring the database up, build the world, run the loop

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use village_green::app::{App, AppConfig};
use village_green::db::Database;
use village_green::sim::{Rect, Sprite, World};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load_from_env().context("failed to load configuration")?;
    info!(profile = %config.profile, "Configuration loaded");

    // Bring the database up before opening the window; any failure here is
    // fatal at startup
    let mut db = Database::new(config.database.clone())?;
    db.ensure_database()
        .context("database unavailable at startup")?;
    db.connect().context("database unavailable at startup")?;
    db.create_tables().context("failed to create schema")?;

    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let [player_w, player_h] = config.game.player_size;
    let background = config.game.background.map(|c| c as f32 / 255.0);

    let mut world = World::new(width, height).with_background(background);
    let player = Sprite::movable(
        Rect::new(
            width / 2.0 - player_w / 2.0,
            height / 2.0 - player_h / 2.0,
            player_w,
            player_h,
        ),
        [0.0, 0.0, 1.0],
        config.game.player_speed,
    );

    // The starting position is persisted exactly once; movement during the
    // run stays in memory
    let row_id = db
        .insert_villager(player.rect.x as f64, player.rect.y as f64)
        .context("failed to persist the player's starting position")?;
    info!(row_id, "Player position persisted");

    world.spawn_player(player);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, world);
    event_loop.run_app(&mut app).context("event loop error")?;

    // Schema teardown is an explicit separate operation; game exit only
    // releases the connection
    db.disconnect();

    Ok(())
}
