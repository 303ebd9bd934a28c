/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Maximum number of holdings ranked in a portfolio summary
pub const TOP_HOLDINGS_LIMIT: usize = 5;
