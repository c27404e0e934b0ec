pub mod minitool_health;
