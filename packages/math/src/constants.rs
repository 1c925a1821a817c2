// Decimal constants shared by every package that stores amounts as `Dec`.

// ============================================================
// DECIMAL PRECISION
// ============================================================

/// Number of fractional digits carried by a `Dec`
pub const PRECISION: u32 = 18;

/// Raw value of 1.0 (10^PRECISION)
pub const ONE_RAW: i128 = 1_000_000_000_000_000_000;
