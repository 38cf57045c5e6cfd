use crate::console::Console;
use crate::models::user::User;
use crate::traits::listener::Listener;
use crate::traits::property::Property;

/// A property booked by a listener.
///
/// Both sides are borrowed; the record never outlives them and never
/// disposes of them. `P` labels the booking with the concrete property type
/// and does not change how it renders.
#[derive(Debug)]
pub struct BookingRecord<'a, P: Property + ?Sized, L: Listener + ?Sized = User> {
    property: &'a P,
    guest: &'a L,
}

impl<'a, P: Property + ?Sized, L: Listener + ?Sized> BookingRecord<'a, P, L> {
    pub fn new(property: &'a P, guest: &'a L) -> Self {
        Self { property, guest }
    }

    pub fn property(&self) -> &P {
        self.property
    }

    pub fn guest(&self) -> &L {
        self.guest
    }

    /// Emit the property description, then who booked it
    pub fn render(&self, console: &Console) {
        console.emit(format!("Booking Information: {}", self.property.describe()));
        console.emit(format!("Booked by: {}", self.guest.name()));
    }
}
