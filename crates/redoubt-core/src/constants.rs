//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

// --- Arena grid ---

/// Side length of one grid cell in world units.
pub const CELL_SIZE: f64 = 32.0;

/// Arena width in cells.
pub const GRID_WIDTH: i32 = 40;

/// Arena height in cells.
pub const GRID_HEIGHT: i32 = 25;

/// Arena width in world units.
pub const ARENA_WIDTH: f64 = GRID_WIDTH as f64 * CELL_SIZE;

/// Arena height in world units.
pub const ARENA_HEIGHT: f64 = GRID_HEIGHT as f64 * CELL_SIZE;

// --- Entity radii (circle overlap tests) ---

/// Enemy body radius.
pub const ENEMY_RADIUS: f64 = 12.0;

/// Player body radius.
pub const PLAYER_RADIUS: f64 = 15.0;

/// Projectile body radius.
pub const PROJECTILE_RADIUS: f64 = 5.0;

// --- Wave spawning ---

/// Interval between enemy spawns (milliseconds).
pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

/// Inset from the arena walls for edge spawn points.
pub const SPAWN_MARGIN: f64 = 50.0;

/// Enemy health at wave 0; each wave adds `ENEMY_HEALTH_PER_WAVE`.
pub const ENEMY_BASE_HEALTH: f64 = 30.0;

pub const ENEMY_HEALTH_PER_WAVE: f64 = 10.0;

/// Enemy speed at wave 0 (world units per second).
pub const ENEMY_BASE_SPEED: f64 = 50.0;

pub const ENEMY_SPEED_PER_WAVE: f64 = 5.0;

/// XP granted on kill at wave 0.
pub const ENEMY_BASE_XP: u32 = 10;

pub const ENEMY_XP_PER_WAVE: u32 = 2;

/// Money granted on kill at wave 0.
pub const ENEMY_BASE_MONEY: u32 = 5;

pub const ENEMY_MONEY_PER_WAVE: u32 = 1;

/// Cumulative kills required to advance one wave.
pub const KILLS_PER_WAVE: u32 = 10;

// --- Player defaults ---

pub const PLAYER_MAX_HEALTH: f64 = 100.0;

/// Player movement speed (world units per second).
pub const PLAYER_SPEED: f64 = 200.0;

/// Player auto-fire cooldown (milliseconds).
pub const PLAYER_FIRE_RATE_MS: f64 = 500.0;

pub const PLAYER_PROJECTILE_SPEED: f64 = 400.0;

pub const PLAYER_PROJECTILE_DAMAGE: f64 = 10.0;

pub const PLAYER_STARTING_MONEY: u32 = 100;

/// XP threshold for the first level-up.
pub const XP_TO_FIRST_LEVEL: u32 = 100;

/// Growth factor applied to the XP threshold on each level-up (floor-rounded).
pub const XP_LEVEL_MULTIPLIER: f64 = 1.5;

/// Max-health bonus granted per level.
pub const LEVEL_HEALTH_BONUS: f64 = 20.0;

/// Projectile-damage bonus granted per level.
pub const LEVEL_DAMAGE_BONUS: f64 = 1.0;

// --- Player contact ---

/// Damage taken per enemy contact.
pub const CONTACT_DAMAGE: f64 = 5.0;

/// Cooldown between contact-damage applications (milliseconds).
pub const CONTACT_COOLDOWN_MS: f64 = 500.0;

/// Knockback speed applied to an enemy touching the player.
pub const KNOCKBACK_SPEED: f64 = 200.0;

/// How long a knocked-back enemy ignores pursuit (milliseconds).
pub const KNOCKBACK_DURATION_MS: f64 = 150.0;

// --- Projectiles ---

/// Projectile lifetime when nothing is hit (milliseconds).
pub const PROJECTILE_TTL_MS: f64 = 3000.0;

// --- Turret placement ---

/// Cells this close to the arena border are never valid placements.
pub const PLACEMENT_MARGIN_CELLS: i32 = 2;

/// Minimum distance between a placed cell's center and the player.
pub const MIN_PLAYER_DISTANCE: f64 = 40.0;

/// Smallest ring radius scanned when the requested cell is invalid.
pub const RING_SEARCH_MIN_RADIUS: i32 = 2;

/// Largest ring radius scanned before the placement fails.
pub const RING_SEARCH_MAX_RADIUS: i32 = 5;

/// Fraction of the original cost refunded when selling a turret.
pub const SELL_REFUND_FACTOR: f64 = 0.75;
