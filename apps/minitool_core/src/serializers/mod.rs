pub mod api_error;
pub mod minitool_health;
