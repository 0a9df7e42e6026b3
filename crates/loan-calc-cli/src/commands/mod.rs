pub mod rate;
pub mod schedule;
