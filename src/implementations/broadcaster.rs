use log::debug;

use crate::models::property::PropertyKind;
use crate::traits::listener::Listener;
use crate::traits::property::Property;

/// Message sent to every subscriber when the listed property changes
pub const PROPERTY_UPDATED_MESSAGE: &str = "Property has been updated.";

/// A listing that tells its subscribers when its property is replaced.
///
/// The broadcaster owns the current property. Subscribers are borrowed and
/// must outlive it; they are notified synchronously, in subscription order.
pub struct ListingBroadcaster<'a> {
    property: Box<dyn Property>,
    listeners: Vec<&'a dyn Listener>,
}

impl<'a> ListingBroadcaster<'a> {
    /// Start listing `property`. Nobody is notified on construction.
    pub fn new(property: Box<dyn Property>) -> Self {
        Self { property, listeners: Vec::new() }
    }

    /// Add a subscriber. Duplicates are kept and notified once per entry.
    pub fn subscribe(&mut self, listener: &'a dyn Listener) {
        debug!("Subscribing {} to {} listing", listener.name(), self.property.kind());
        self.listeners.push(listener);
    }

    pub fn notify_all(&self, message: &str) {
        debug!("Notifying {} subscriber(s)", self.listeners.len());
        for listener in &self.listeners {
            listener.receive(message);
        }
    }

    /// Swap in a new property, dropping the old one, then notify everyone once
    pub fn replace_property(&mut self, property: Box<dyn Property>) {
        debug!("Replacing {} with {}", self.property.kind(), property.kind());
        self.property = property;
        self.notify_all(PROPERTY_UPDATED_MESSAGE);
    }

    pub fn describe_current(&self) -> &'static str {
        self.property.describe()
    }

    pub fn current_kind(&self) -> PropertyKind {
        self.property.kind()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
