/// Decimal precision for display/reporting
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum accepted password length
pub const PASSWORD_MIN_LEN: usize = 8;

/// Maximum accepted password length
pub const PASSWORD_MAX_LEN: usize = 16;

/// Allocation drift (in percentage points) above which a rebalancing
/// suggestion is emitted
pub const REBALANCE_THRESHOLD_PCT: f64 = 5.0;
