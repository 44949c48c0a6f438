//! Generation constants and runtime configuration defaults

// Sensing
/// Number of cells an echo probe travels before fading out
pub const ECHO_RANGE: i32 = 3;
/// Delay added per cell travelled by an echo
pub const ECHO_DELAY_PER_CELL: u32 = 2;

// Endpoint selection
/// Attempts at finding a distant exit before accepting any distinct cell
pub const ENDPOINT_ATTEMPTS: usize = 100;

// Loop injection
/// Extra openings carved for medium and hard mazes
pub const EXTRA_OPENINGS: usize = 5;
/// Attempts allowed per requested extra opening
pub const LOOP_ATTEMPT_MULTIPLIER: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 10;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 10;
/// Fraction of off-path cells turned into hazards
pub const DEFAULT_HAZARD_FRACTION: f64 = 0.1;
/// Fraction of eligible corridors turned into ice
pub const DEFAULT_ICE_FRACTION: f64 = 0.3;
/// Default number of solver runs in a batch
pub const DEFAULT_RUNS: usize = 100;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
