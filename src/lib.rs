pub mod algorithms;
pub mod config;
pub mod grid;
pub mod report;
