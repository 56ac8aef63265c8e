use super::constants::*;
use super::particle::{Hsl, Particle};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Size of the drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Drawing target for the field. The web front-end implements this over a
/// canvas 2D context; host tests record the calls instead.
pub trait Surface {
    /// Resize the backing store. Implementations may clear as a side effect.
    fn set_size(&mut self, viewport: Viewport);
    /// Clear the whole visible surface.
    fn clear(&mut self);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsl, alpha: f64);
}

/// Tuning for spawning and physics.
///
/// - `gravity`: px/frame² added to vertical velocity every frame
/// - `radius`: drawn circle radius in px
/// - `opacity_norm`: opacity is `life / opacity_norm`, clamped to 0..1
/// - `burst_min`..`burst_max`: burst size is the floor of a uniform draw
/// - `speed`: both velocity components are uniform in `-speed..speed`
/// - `life_min`..`life_max`: initial life in frames
/// - `spawn_band`: fraction of the viewport height (from the top) bursts start in
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub gravity: f64,
    pub radius: f64,
    pub opacity_norm: f64,
    pub burst_min: f64,
    pub burst_max: f64,
    pub speed: f64,
    pub life_min: f64,
    pub life_max: f64,
    pub spawn_band: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            radius: PARTICLE_RADIUS,
            opacity_norm: OPACITY_NORM,
            burst_min: BURST_MIN,
            burst_max: BURST_MAX,
            speed: SPARK_SPEED,
            life_min: LIFE_MIN,
            life_max: LIFE_MAX,
            spawn_band: SPAWN_BAND,
            saturation: SPARK_SATURATION,
            lightness: SPARK_LIGHTNESS,
        }
    }
}

// Uniform draw in [lo, hi). Unlike `gen_range` this accepts an empty range
// (e.g. a zero-width viewport) and returns `lo`.
#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

/// The live spark collection plus the RNG and viewport it spawns into.
///
/// Typical usage:
/// - Construct with `ParticleField::new(params, seed)`
/// - Call `resize` at startup and whenever the viewport changes
/// - Call `spawn_burst` from a repeating timer
/// - Call `advance_frame` once per display frame
pub struct ParticleField<R = StdRng> {
    params: FieldParams,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(params: FieldParams, rng: R) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            particles: Vec::new(),
            rng,
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add a hand-built particle to the live collection.
    pub fn insert(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Adopt a new viewport size and resize the surface to match exactly.
    /// Particle positions are absolute pixels and are left untouched.
    pub fn resize<S: Surface>(&mut self, surface: &mut S, viewport: Viewport) {
        self.viewport = viewport;
        surface.set_size(viewport);
    }

    /// Spawn one burst at a random origin in the upper band of the viewport.
    /// Returns the number of particles added.
    pub fn spawn_burst(&mut self) -> usize {
        let p = &self.params;
        let origin = DVec2::new(
            uniform(&mut self.rng, 0.0, self.viewport.width as f64),
            uniform(&mut self.rng, 0.0, self.viewport.height as f64 * p.spawn_band),
        );
        let count = uniform(&mut self.rng, p.burst_min, p.burst_max).floor() as usize;
        self.particles.reserve(count);
        for _ in 0..count {
            let velocity = DVec2::new(
                uniform(&mut self.rng, -p.speed, p.speed),
                uniform(&mut self.rng, -p.speed, p.speed),
            );
            let life = uniform(&mut self.rng, p.life_min, p.life_max);
            let hue = uniform(&mut self.rng, 0.0, HUE_RANGE).floor() as u16;
            let color = Hsl {
                hue,
                saturation: p.saturation,
                lightness: p.lightness,
            };
            self.particles.push(Particle::new(origin, velocity, life, color));
        }
        count
    }

    /// Clear the surface, step and draw every particle, then evict the dead.
    ///
    /// Particles are visited back-to-front so newer bursts are painted first
    /// and older sparks end up on top. Eviction happens after the pass, so the
    /// traversal never skips or revisits an entry.
    pub fn advance_frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        let p = &self.params;
        for spark in self.particles.iter_mut().rev() {
            spark.step(p.gravity);
            surface.fill_circle(
                spark.position,
                p.radius,
                spark.color,
                spark.opacity(p.opacity_norm),
            );
        }
        self.particles.retain(Particle::is_alive);
    }
}
