//! Application-level configuration constants.
//! Timer defaults live in `buff_timer::defaults`.

// Min/Max limits for input fields
pub const MIN_FIELD_VALUE: u32 = 0;
pub const MAX_SECONDS_FIELD: u32 = 59;
pub const MAX_MINUTES_OF_HOUR_FIELD: u32 = 59;

// UI text
pub const APP_TITLE: &str = "Buff Timer";
pub const PAUSE_BANNER: &str = "Buff swap time! \u{1F514}";
