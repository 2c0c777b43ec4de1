// World dimensions (world units, y grows downward)
pub const WORLD_WIDTH: f64 = 1200.0;
pub const WORLD_HEIGHT: f64 = 800.0;

// Tick and timing
pub const TICK_RATE_HZ: u64 = 60;
pub const TICK_INTERVAL_MICROS: u64 = 1_000_000 / TICK_RATE_HZ;
pub const SPAWN_INTERVAL_MS: u64 = 2200;
pub const SPAWN_INTERVAL_TICKS: u32 = (SPAWN_INTERVAL_MS * TICK_RATE_HZ / 1000) as u32;

// Actor physics (per tick)
pub const GRAVITY: f64 = 0.8;
pub const JUMP_STRENGTH: f64 = -12.0;
pub const ACTOR_SIZE: f64 = 60.0;
pub const ACTOR_X: f64 = 200.0;
/// Weights applied when easing toward a gesture target: `y*RETAIN + target*GAIN`.
pub const GESTURE_FOLLOW_RETAIN: f64 = 0.9;
pub const GESTURE_FOLLOW_GAIN: f64 = 0.1;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 100.0;
pub const GAP_HEIGHT: f64 = 280.0;
pub const MIN_MARGIN: f64 = 100.0;
pub const BASE_SCROLL_SPEED: f64 = 5.0;
pub const SPEED_INCREASE: f64 = 0.2;

// Lobby and rankings
pub const MAX_ID_LEN: usize = 5;
pub const MAX_RANKINGS: usize = 10;
pub const RANKINGS_SHOWN: usize = 5;
pub const RANKING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Gesture sensor
/// Weights applied when smoothing raw pose readings: `target*RETAIN + reading*GAIN`.
pub const POSE_SMOOTHING_RETAIN: f64 = 0.8;
pub const POSE_SMOOTHING_GAIN: f64 = 0.2;
/// A feed that stays silent this long counts as a lost pose.
pub const SENSOR_STALE_TICKS: u32 = 30;

// Save files
pub const DATA_DIR_NAME: &str = ".chinup-flap";
pub const RANKINGS_FILE: &str = "rankings.json";
pub const LOG_FILE: &str = "game.log";
pub const POSE_FEED_PREFIX: &str = "pose-feed-";
