pub mod build;
pub mod handler;
pub mod persistence;
pub mod stats;
