//! Program-wide constants.

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Full-vest duration for the User role (2 years).
pub const USER_VEST_SECONDS: i64 = 2 * SECONDS_PER_YEAR;

/// Full-vest duration for the Partner role (3 years).
pub const PARTNER_VEST_SECONDS: i64 = 3 * SECONDS_PER_YEAR;

/// Full-vest duration for the Team role (4 years).
pub const TEAM_VEST_SECONDS: i64 = 4 * SECONDS_PER_YEAR;
