pub mod property;
pub mod listener;

// Re-export traits
pub use property::Property;
pub use listener::Listener;
