#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::console::Console;
    use crate::implementations::broadcaster::{ ListingBroadcaster, PROPERTY_UPDATED_MESSAGE };
    use crate::implementations::catalog::PropertyCatalog;
    use crate::models::property::{ Apartment, Condo, House, PropertyKind };
    use crate::models::user::User;
    use crate::traits::listener::Listener;
    use crate::traits::property::Property;
    use crate::tests::setup;

    /// Listener that remembers what it was sent
    struct Inbox {
        name: &'static str,
        received: RefCell<Vec<String>>,
    }

    impl Inbox {
        fn new(name: &'static str) -> Self {
            Self { name, received: RefCell::new(Vec::new()) }
        }
    }

    impl Listener for Inbox {
        fn name(&self) -> &str {
            self.name
        }

        fn receive(&self, message: &str) {
            self.received.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_construction_notifies_nobody() {
        setup();
        let console = Console::capture();
        let alice = User::new("Alice", &console);

        let mut listing = ListingBroadcaster::new(Box::new(Apartment));
        listing.subscribe(&alice);

        assert!(console.lines().is_empty());
        assert_eq!(listing.describe_current(), Apartment.describe());
    }

    #[test]
    fn test_replace_notifies_each_subscriber_once_in_order() {
        setup();
        let first = Inbox::new("first");
        let second = Inbox::new("second");
        let third = Inbox::new("third");

        let mut listing = ListingBroadcaster::new(Box::new(Condo));
        listing.subscribe(&first);
        listing.subscribe(&second);
        listing.subscribe(&third);
        listing.replace_property(Box::new(House));

        for inbox in [&first, &second, &third] {
            assert_eq!(*inbox.received.borrow(), vec![PROPERTY_UPDATED_MESSAGE.to_string()]);
        }
        assert_eq!(listing.subscriber_count(), 3);
    }

    #[test]
    fn test_delivery_order_follows_subscription_order() {
        setup();
        let console = Console::capture();
        let bob = User::new("Bob", &console);
        let alice = User::new("Alice", &console);

        let mut listing = ListingBroadcaster::new(Box::new(Apartment));
        listing.subscribe(&bob);
        listing.subscribe(&alice);
        listing.replace_property(Box::new(Condo));

        assert_eq!(
            console.lines(),
            vec![
                "User Bob received update: Property has been updated.",
                "User Alice received update: Property has been updated."
            ]
        );
    }

    #[test]
    fn test_duplicate_subscription_is_notified_twice() {
        setup();
        let inbox = Inbox::new("twice");

        let mut listing = ListingBroadcaster::new(Box::new(House));
        listing.subscribe(&inbox);
        listing.subscribe(&inbox);
        listing.replace_property(Box::new(Apartment));

        assert_eq!(inbox.received.borrow().len(), 2);
    }

    #[test]
    fn test_describe_current_follows_replacement() {
        setup();
        let mut listing = ListingBroadcaster::new(PropertyCatalog::create_kind(PropertyKind::Apartment));
        listing.replace_property(PropertyCatalog::create_kind(PropertyKind::House));

        assert_eq!(listing.current_kind(), PropertyKind::House);
        assert_eq!(listing.describe_current(), House.describe());
        assert_ne!(listing.describe_current(), Apartment.describe());
    }

    #[test]
    fn test_notify_all_without_subscribers_is_a_no_op() {
        setup();
        let listing = ListingBroadcaster::new(Box::new(Condo));
        listing.notify_all("anyone there?");
        assert_eq!(listing.subscriber_count(), 0);
    }

    #[test]
    fn test_notify_all_passes_arbitrary_messages() {
        setup();
        let inbox = Inbox::new("inbox");
        let mut listing = ListingBroadcaster::new(Box::new(Condo));
        listing.subscribe(&inbox);
        listing.notify_all("Open house on Saturday.");

        assert_eq!(*inbox.received.borrow(), vec!["Open house on Saturday.".to_string()]);
    }
}
