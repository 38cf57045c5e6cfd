use log::{ debug, warn };

use crate::errors::ListingResult;
use crate::models::property::{ Apartment, Condo, House, PropertyKind };
use crate::traits::property::Property;

/// Builds fresh properties from their kind name
pub struct PropertyCatalog;

impl PropertyCatalog {
    /// Create a new property for `kind`, or `None` if the name is not recognised.
    ///
    /// Names are case-sensitive. Every hit allocates a new, independently
    /// owned instance.
    pub fn create_property(kind: &str) -> Option<Box<dyn Property>> {
        match Self::try_create_property(kind) {
            Ok(property) => Some(property),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Same as [`PropertyCatalog::create_property`] but reports the miss as an error
    pub fn try_create_property(kind: &str) -> ListingResult<Box<dyn Property>> {
        let kind: PropertyKind = kind.parse()?;
        debug!("Catalog creating {}", kind);
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: PropertyKind) -> Box<dyn Property> {
        match kind {
            PropertyKind::Apartment => Box::new(Apartment),
            PropertyKind::House => Box::new(House),
            PropertyKind::Condo => Box::new(Condo),
        }
    }

    pub fn known_kinds() -> &'static [PropertyKind] {
        &PropertyKind::ALL
    }
}
