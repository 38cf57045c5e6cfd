use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;

use crate::errors::{ ListingError, ListingResult };
use crate::models::property::PropertyKind;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// Property kind being booked
    pub property: PropertyKind,

    /// Name of the user making the booking; must appear in `users`
    pub user: String,
}

/// What the demonstration creates, subscribes and books
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Kind names passed straight to the catalog; unknown names are skipped
    pub showcase: Vec<String>,

    /// Users subscribed to the listing, in subscription order
    pub users: Vec<String>,

    /// Property the listing starts with
    pub initial_property: PropertyKind,

    /// Property swapped in, which triggers the notification round
    pub replacement_property: PropertyKind,

    pub bookings: Vec<BookingConfig>,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file
    pub fn from_file(path: &Path) -> ListingResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> ListingResult<Self> {
        let config: ScenarioConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Every booking must name a configured user
    pub fn validate(&self) -> ListingResult<()> {
        for booking in &self.bookings {
            if !self.users.iter().any(|u| u == &booking.user) {
                return Err(ListingError::UnknownUser(booking.user.clone()));
            }
        }
        Ok(())
    }
}

/// The fixed showcase: three properties, Alice and Bob, Apartment replaced by House
impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            showcase: PropertyKind::ALL.iter().map(|k| k.to_string()).collect(),
            users: vec!["Alice".to_string(), "Bob".to_string()],
            initial_property: PropertyKind::Apartment,
            replacement_property: PropertyKind::House,
            bookings: vec![
                BookingConfig { property: PropertyKind::Apartment, user: "Alice".to_string() },
                BookingConfig { property: PropertyKind::House, user: "Bob".to_string() }
            ],
        }
    }
}
