use log::{ info, warn };

use crate::console::Console;
use crate::errors::{ ListingError, ListingResult };
use crate::implementations::broadcaster::ListingBroadcaster;
use crate::implementations::catalog::PropertyCatalog;
use crate::implementations::config::ScenarioConfig;
use crate::models::booking::BookingRecord;
use crate::models::property::{ Apartment, Condo, House, PropertyKind };
use crate::models::user::User;
use crate::traits::listener::Listener;
use crate::traits::property::Property;

/// Walk through the catalog, the listing notifications and the bookings
pub fn run(config: &ScenarioConfig, console: &Console) -> ListingResult<()> {
    config.validate()?;

    info!("Showcasing {} catalog entries", config.showcase.len());
    for kind in &config.showcase {
        match PropertyCatalog::create_property(kind) {
            Some(property) => console.emit(property.describe()),
            None => warn!("Skipping showcase entry {:?}", kind),
        }
    }

    let users: Vec<User> = config.users
        .iter()
        .map(|name| User::new(name.as_str(), console))
        .collect();

    info!("Listing {} with {} subscriber(s)", config.initial_property, users.len());
    let mut listing = ListingBroadcaster::new(PropertyCatalog::create_kind(config.initial_property));
    for user in &users {
        listing.subscribe(user);
    }
    console.emit(listing.describe_current());

    listing.replace_property(PropertyCatalog::create_kind(config.replacement_property));
    console.emit(listing.describe_current());

    info!("Rendering {} booking(s)", config.bookings.len());
    for booking in &config.bookings {
        let user = users
            .iter()
            .find(|u| u.name() == booking.user)
            .ok_or_else(|| ListingError::UnknownUser(booking.user.clone()))?;
        match booking.property {
            PropertyKind::Apartment => render_booking(&Apartment, user, console),
            PropertyKind::House => render_booking(&House, user, console),
            PropertyKind::Condo => render_booking(&Condo, user, console),
        }
    }

    Ok(())
}

fn render_booking<P: Property>(property: &P, user: &User, console: &Console) {
    BookingRecord::<P>::new(property, user).render(console);
}
