// Physics and look of the spark field. Units are CSS pixels and display frames.

// Vertical acceleration added to every particle each frame (px/frame²)
pub const GRAVITY: f64 = 0.06;

// Every spark is drawn as a filled circle of this radius (px)
pub const PARTICLE_RADIUS: f64 = 2.5;

// Opacity is life / OPACITY_NORM. Deliberately larger than LIFE_MAX, so even a
// fresh particle is slightly translucent.
pub const OPACITY_NORM: f64 = 120.0;

// Burst size: floor of a uniform draw in [BURST_MIN, BURST_MAX)
pub const BURST_MIN: f64 = 10.0;
pub const BURST_MAX: f64 = 40.0;

// Initial velocity components are uniform in [-SPARK_SPEED, SPARK_SPEED)
pub const SPARK_SPEED: f64 = 4.0;

// Lifespan in frames
pub const LIFE_MIN: f64 = 40.0;
pub const LIFE_MAX: f64 = 100.0;

// Bursts originate in the top fraction of the viewport
pub const SPAWN_BAND: f64 = 0.6;

// Fixed color attributes; only hue is randomized
pub const SPARK_SATURATION: u8 = 80;
pub const SPARK_LIGHTNESS: u8 = 60;
pub const HUE_RANGE: f64 = 360.0;
