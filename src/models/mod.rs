pub mod property;
pub mod user;
pub mod booking;

// Re-export common model types
pub use property::{ Apartment, Condo, House, PropertyKind };
pub use user::User;
pub use booking::BookingRecord;
