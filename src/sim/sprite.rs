//! Sprite model: bounding boxes, movement, and screen clamping

/// Axis-aligned bounding box in screen pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rect from its top-left corner and size
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w / 2.0, self.y + self.h / 2.0]
    }

    /// Shift the rect in place
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Clamp the rect so no side leaves [0, width] x [0, height]
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        if self.left() < 0.0 {
            self.x = 0.0;
        }
        if self.right() > width {
            self.x = width - self.w;
        }
        if self.top() < 0.0 {
            self.y = 0.0;
        }
        if self.bottom() > height {
            self.y = height - self.h;
        }
    }
}

/// Snapshot of the held direction keys for one movement step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Raw direction vector before normalization, y down
    pub fn direction(&self) -> [f32; 2] {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }
        [dx, dy]
    }
}

/// Whether and how fast a sprite can move
///
/// Stationary sprites skip the movement step entirely; only Movable sprites
/// respond to held keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Stationary,
    Movable { speed: f32 },
}

/// A drawable colored rectangle, optionally movable
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Bounding box in screen pixels
    pub rect: Rect,
    /// Fill color as (r, g, b) in 0..1
    pub color: [f32; 3],
    /// Movement capability
    pub motion: Motion,
}

impl Sprite {
    /// Create a stationary sprite
    pub fn stationary(rect: Rect, color: [f32; 3]) -> Self {
        Self {
            rect,
            color,
            motion: Motion::Stationary,
        }
    }

    /// Create a sprite that moves at the given speed in pixels per step
    pub fn movable(rect: Rect, color: [f32; 3], speed: f32) -> Self {
        Self {
            rect,
            color,
            motion: Motion::Movable { speed },
        }
    }

    /// Apply one movement step from the held-key snapshot, then clamp the
    /// bounding box into [0, width] x [0, height]
    ///
    /// The direction vector is normalized to unit length before scaling, so a
    /// diagonal step covers the same distance as a single-axis step.
    pub fn step(&mut self, held: &HeldKeys, width: f32, height: f32) {
        let Motion::Movable { speed } = self.motion else {
            return;
        };

        let [dx, dy] = held.direction();
        let len = (dx * dx + dy * dy).sqrt();
        if len > 0.0 {
            self.rect
                .translate(dx / len * speed, dy / len * speed);
        }

        // Keep the sprite on the screen
        self.rect.clamp_to(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32, speed: f32) -> Sprite {
        Sprite::movable(Rect::new(x, y, 64.0, 64.0), [0.0, 0.0, 1.0], speed)
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut sprite = player_at(100.0, 100.0, 5.0);
        sprite.step(&HeldKeys::default(), 800.0, 600.0);
        assert_eq!(sprite.rect, Rect::new(100.0, 100.0, 64.0, 64.0));
    }

    #[test]
    fn test_single_axis_step() {
        let mut sprite = player_at(100.0, 100.0, 5.0);
        let held = HeldKeys {
            right: true,
            ..Default::default()
        };
        sprite.step(&held, 800.0, 600.0);
        assert_eq!(sprite.rect.x, 105.0);
        assert_eq!(sprite.rect.y, 100.0);
    }

    #[test]
    fn test_diagonal_matches_axis_magnitude() {
        let mut axis = player_at(100.0, 100.0, 5.0);
        let mut diagonal = player_at(100.0, 100.0, 5.0);

        axis.step(
            &HeldKeys {
                right: true,
                ..Default::default()
            },
            800.0,
            600.0,
        );
        diagonal.step(
            &HeldKeys {
                up: true,
                right: true,
                ..Default::default()
            },
            800.0,
            600.0,
        );

        let axis_dist = ((axis.rect.x - 100.0).powi(2) + (axis.rect.y - 100.0).powi(2)).sqrt();
        let diag_dist =
            ((diagonal.rect.x - 100.0).powi(2) + (diagonal.rect.y - 100.0).powi(2)).sqrt();
        assert!((axis_dist - diag_dist).abs() < 1e-4);
        assert!((axis_dist - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut sprite = player_at(100.0, 100.0, 5.0);
        let held = HeldKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        sprite.step(&held, 800.0, 600.0);
        assert_eq!(sprite.rect, Rect::new(100.0, 100.0, 64.0, 64.0));
    }

    #[test]
    fn test_clamped_to_screen() {
        let mut sprite = player_at(1.0, 1.0, 10.0);
        let held = HeldKeys {
            up: true,
            left: true,
            ..Default::default()
        };
        sprite.step(&held, 800.0, 600.0);
        assert_eq!(sprite.rect.left(), 0.0);
        assert_eq!(sprite.rect.top(), 0.0);

        let mut sprite = player_at(790.0, 590.0, 50.0);
        let held = HeldKeys {
            down: true,
            right: true,
            ..Default::default()
        };
        sprite.step(&held, 800.0, 600.0);
        assert_eq!(sprite.rect.right(), 800.0);
        assert_eq!(sprite.rect.bottom(), 600.0);
    }

    #[test]
    fn test_stationary_never_moves() {
        let mut sprite = Sprite::stationary(Rect::new(100.0, 100.0, 50.0, 50.0), [0.0, 0.0, 1.0]);
        let held = HeldKeys {
            right: true,
            down: true,
            ..Default::default()
        };
        sprite.step(&held, 800.0, 600.0);
        assert_eq!(sprite.rect, Rect::new(100.0, 100.0, 50.0, 50.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), [25.0, 40.0]);
    }
}
