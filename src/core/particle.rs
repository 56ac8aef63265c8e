use glam::DVec2;
use std::fmt;

/// Fixed spark color. Displays as a CSS color string, e.g. `hsl(212 80% 60%)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// A single spark: absolute pixel position, per-frame velocity and remaining life.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub life: f64,
    pub color: Hsl,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, life: f64, color: Hsl) -> Self {
        Self {
            position,
            velocity,
            life,
            color,
        }
    }

    /// Advance one frame: move, then accelerate downwards, then age.
    #[inline]
    pub fn step(&mut self, gravity: f64) {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.life -= 1.0;
    }

    /// Draw opacity for the current life, normalized against `norm` rather than
    /// the particle's own lifespan.
    #[inline]
    pub fn opacity(&self, norm: f64) -> f64 {
        (self.life / norm).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
