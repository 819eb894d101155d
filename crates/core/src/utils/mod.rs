pub mod date_utils;
pub mod sanitize;
pub mod time_utils;
