pub mod job;
pub mod runner;
