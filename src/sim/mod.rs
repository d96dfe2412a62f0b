//! Game simulation module
//!
//! Handles the game world and its sprites, independent of windowing and
//! rendering.

pub mod sprite;

pub use sprite::{HeldKeys, Motion, Rect, Sprite};

/// Handle to a sprite owned by a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

/// Game world state
///
/// Owns the full set of sprites for a session; the render step is handed the
/// collection explicitly via [`World::sprites`] rather than reading any
/// process-wide registry.
pub struct World {
    /// Screen width in pixels
    width: f32,
    /// Screen height in pixels
    height: f32,
    /// Background color the frame is cleared to
    background: [f32; 3],
    /// All sprites in spawn order, which is also draw order
    sprites: Vec<Sprite>,
    /// The single sprite that responds to input
    player: Option<SpriteId>,
    /// Total number of simulation ticks elapsed
    tick_count: u64,
    /// Total simulation time elapsed in seconds
    sim_time: f64,
    /// Random number generator seed
    rng_seed: u64,
}

impl World {
    /// Creates a new empty world with the given screen bounds
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: [0.0, 154.0 / 255.0, 23.0 / 255.0],
            sprites: Vec::new(),
            player: None,
            tick_count: 0,
            sim_time: 0.0,
            rng_seed: rand::random(),
        }
    }

    /// Builder method to set a specific RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Builder method to set the background color
    pub fn with_background(mut self, background: [f32; 3]) -> Self {
        self.background = background;
        self
    }

    /// Adds a sprite to the world and returns its handle
    pub fn spawn(&mut self, sprite: Sprite) -> SpriteId {
        let id = SpriteId(self.sprites.len());
        self.sprites.push(sprite);
        id
    }

    /// Adds a sprite and designates it as the player
    pub fn spawn_player(&mut self, sprite: Sprite) -> SpriteId {
        let id = self.spawn(sprite);
        self.player = Some(id);
        id
    }

    /// Designates an already-spawned sprite as the player
    pub fn set_player(&mut self, id: SpriteId) {
        self.player = Some(id);
    }

    /// Returns the player sprite, if one is designated
    pub fn player(&self) -> Option<&Sprite> {
        self.player.map(|SpriteId(i)| &self.sprites[i])
    }

    /// Returns all sprites in draw order
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Returns the screen bounds as (width, height)
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Returns the background color
    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    /// Applies one movement step to the player from the held-key snapshot
    ///
    /// A no-op when no player is designated or the player is stationary.
    pub fn step_player(&mut self, held: &HeldKeys) {
        if let Some(SpriteId(i)) = self.player {
            let sprite = &mut self.sprites[i];
            sprite.step(held, self.width, self.height);
        }
    }

    /// Advances the simulation clock by one tick
    pub fn tick(&mut self, delta_time: f32) {
        self.tick_count += 1;
        self.sim_time += delta_time as f64;
    }

    /// Returns the current tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the total simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Returns the RNG seed
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_starts_empty() {
        let world = World::new(800.0, 600.0);
        assert_eq!(world.tick_count(), 0);
        assert_eq!(world.sim_time(), 0.0);
        assert!(world.sprites().is_empty());
        assert!(world.player().is_none());
    }

    #[test]
    fn test_tick_bookkeeping() {
        let mut world = World::new(800.0, 600.0);
        world.tick(0.016);
        world.tick(0.016);
        assert_eq!(world.tick_count(), 2);
        assert!((world.sim_time() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_step_player_moves_only_the_player() {
        let mut world = World::new(800.0, 600.0);
        let scenery = world.spawn(Sprite::stationary(
            Rect::new(250.0, 250.0, 50.0, 50.0),
            [0.0, 0.0, 1.0],
        ));
        world.spawn_player(Sprite::movable(
            Rect::new(100.0, 100.0, 64.0, 64.0),
            [0.0, 0.0, 1.0],
            5.0,
        ));

        world.step_player(&HeldKeys {
            right: true,
            ..Default::default()
        });

        assert_eq!(world.player().unwrap().rect.x, 105.0);
        let SpriteId(i) = scenery;
        assert_eq!(world.sprites()[i].rect.x, 250.0);
    }

    #[test]
    fn test_step_without_player_is_noop() {
        let mut world = World::new(800.0, 600.0);
        world.spawn(Sprite::stationary(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            [1.0, 0.0, 0.0],
        ));
        world.step_player(&HeldKeys {
            left: true,
            ..Default::default()
        });
        assert_eq!(world.sprites()[0].rect.x, 0.0);
    }

    #[test]
    fn test_seeded_world() {
        let world = World::new(800.0, 600.0).with_seed(42);
        assert_eq!(world.rng_seed(), 42);
    }
}
