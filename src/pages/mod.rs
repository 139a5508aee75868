pub mod complete;
pub mod disk_selection;
pub mod installation;
pub mod partitioning;
pub mod user_setup;
pub mod welcome;
