pub mod models;
pub mod traits;
pub mod errors;
pub mod console;
pub mod implementations;
pub mod demo;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use console::Console;
pub use errors::{ ListingError, ListingResult };
pub use implementations::{
    broadcaster::{ ListingBroadcaster, PROPERTY_UPDATED_MESSAGE },
    catalog::PropertyCatalog,
    config::{ BookingConfig, ScenarioConfig },
};
pub use models::{ Apartment, BookingRecord, Condo, House, PropertyKind, User };
pub use traits::{ Listener, Property };
