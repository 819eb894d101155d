/// Fallback school-year end used when an account has not configured dates.
pub const DEFAULT_SCHOOL_END: &str = "2026-06-05";

/// Fallback school-year start used when an account has not configured dates.
pub const DEFAULT_SCHOOL_START: &str = "2026-08-19";

/// Fraction of the season budget at which cost derivations start warning.
pub const SEASON_BUDGET_WARN_FRACTION: f64 = 0.8;

/// Name substituted for a scheduled item whose camp row no longer exists.
pub const PLACEHOLDER_CAMP_NAME: &str = "Unknown Camp";

/// Display name substituted for squad members who keep their identity hidden.
pub const HIDDEN_MEMBER_NAME: &str = "A friend";

/// Days a parsed registration month-day may lie in the past before the
/// derivation assumes next year's cycle instead of "open".
pub const REG_ROLLOVER_GRACE_DAYS: i64 = 90;

/// A registration opening within this many days is flagged critical.
pub const REG_CRITICAL_WINDOW_DAYS: i64 = 7;

/// Length of generated squad invite codes.
pub const INVITE_CODE_LEN: usize = 8;

/// Maximum length accepted for display names and other short text fields.
pub const MAX_NAME_LEN: usize = 80;
