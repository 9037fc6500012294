#![no_std]

/// Smallest units of BASE per whole BASE (9 implied decimals).
pub const MOTES_PER_BASE: u64 = 1_000_000_000;

/// Smallest units of DEBT per whole DEBT (18 implied decimals).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// motes -> wad is an exact multiplication by this factor (WAD / MOTES_PER_BASE).
pub const MOTES_TO_WAD_FACTOR: u128 = 1_000_000_000;

/// Maximum loan-to-value ratio, in basis points.
pub const LTV_MAX_BPS: u64 = 8_000;

/// Basis-point divisor (1% = 100 bps).
pub const BPS_DIVISOR: u64 = 10_000;

/// Fixed annual simple-interest rate, in basis points.
pub const INTEREST_RATE_BPS: u64 = 200;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Minimum liquid BASE the delegation adapter accumulates before batching a delegation.
pub const MIN_DEPOSIT_MOTES_UNITS: u64 = 500;

/// `MIN_DEPOSIT_MOTES_UNITS * MOTES_PER_BASE`, kept as a separate constant since
/// `const` arithmetic on `u64` here would overflow readability, not the value.
pub const MIN_DEPOSIT_MOTES: u64 = MIN_DEPOSIT_MOTES_UNITS * MOTES_PER_BASE;
