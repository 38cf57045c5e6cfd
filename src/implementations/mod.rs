pub mod catalog;
pub mod broadcaster;
pub mod config;
