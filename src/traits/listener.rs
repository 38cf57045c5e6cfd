/// Trait for anything that can be told about listing changes
pub trait Listener {
    /// Display identity used in notifications and bookings
    fn name(&self) -> &str;

    /// Deliver a notification message
    fn receive(&self, message: &str);
}
