use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::errors::ListingError;
use crate::traits::property::Property;

/// The closed set of property variants the catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Apartment,
    House,
    Condo,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 3] = [PropertyKind::Apartment, PropertyKind::House, PropertyKind::Condo];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::House => "House",
            PropertyKind::Condo => "Condo",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: only the exact variant names are accepted.
impl FromStr for PropertyKind {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apartment" => Ok(PropertyKind::Apartment),
            "House" => Ok(PropertyKind::House),
            "Condo" => Ok(PropertyKind::Condo),
            other => Err(ListingError::UnknownPropertyKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Apartment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct House;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Condo;

impl Property for Apartment {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Apartment
    }

    fn describe(&self) -> &'static str {
        "Apartment: Spacious living area, kitchen, and bedrooms."
    }
}

impl Property for House {
    fn kind(&self) -> PropertyKind {
        PropertyKind::House
    }

    fn describe(&self) -> &'static str {
        "House: Private property with a yard and multiple rooms."
    }
}

impl Property for Condo {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Condo
    }

    fn describe(&self) -> &'static str {
        "Condo: Shared building with individual units."
    }
}
