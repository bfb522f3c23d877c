// Base rates
pub const BASE_LEGENDARY_RATE: f64 = 0.02;
pub const BASE_RARE_RATE: f64 = 0.08;

// Featured carve-outs (fraction of the tier's base rate)
pub const FEATURED_RARE_SHARE: f64 = 0.5;
pub const FEATURED_LEGENDARY_SHARE_TREKKER: f64 = 0.5;
pub const FEATURED_LEGENDARY_SHARE_DISC: f64 = 0.75;

// Pity
pub const HARD_PITY_THRESHOLD: u32 = 120;
pub const SOFT_PITY_WINDOW: usize = 9;

// Draws per multi roll
pub const MULTI_ROLL_COUNT: usize = 10;

// Pool rates must sum to one within this tolerance
pub const RATE_SUM_TOLERANCE: f64 = 1e-9;

// Storage
pub const DATA_DIR_NAME: &str = ".recruit";
pub const HISTORY_DIR_NAME: &str = "history";
