// Page wiring for the spark field.

// Id of the <canvas> element the field draws into
pub const CANVAS_ID: &str = "fw";

// Wall-clock period of the burst spawner (setInterval), in milliseconds
pub const SPAWN_INTERVAL_MS: i32 = 900;

// Console log level installed at start
pub const LOG_LEVEL: log::Level = log::Level::Info;
