use crate::models::property::PropertyKind;

/// Capability shared by every listable property
pub trait Property {
    /// Which variant this is
    fn kind(&self) -> PropertyKind;

    /// Fixed human-readable description of the property
    fn describe(&self) -> &'static str;
}
