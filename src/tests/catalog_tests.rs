#[cfg(test)]
mod tests {
    use crate::errors::ListingError;
    use crate::implementations::catalog::PropertyCatalog;
    use crate::models::property::PropertyKind;
    use crate::tests::setup;

    #[test]
    fn test_known_kinds_describe_themselves() {
        setup();
        let cases = [
            ("Apartment", "Apartment: Spacious living area, kitchen, and bedrooms."),
            ("House", "House: Private property with a yard and multiple rooms."),
            ("Condo", "Condo: Shared building with individual units."),
        ];

        for (kind, expected) in cases {
            let property = PropertyCatalog::create_property(kind).expect("known kind");
            assert_eq!(property.describe(), expected);
            assert_eq!(property.kind().as_str(), kind);
        }
    }

    #[test]
    fn test_each_call_yields_an_independent_instance() {
        setup();
        let first = PropertyCatalog::create_property("House").unwrap();
        let second = PropertyCatalog::create_property("House").unwrap();

        drop(first);
        assert_eq!(second.kind(), PropertyKind::House);
    }

    #[test]
    fn test_unknown_kind_is_absent() {
        setup();
        for kind in ["Castle", "", "apartment", "HOUSE", " Condo"] {
            assert!(PropertyCatalog::create_property(kind).is_none(), "{:?} should miss", kind);
        }
    }

    #[test]
    fn test_try_create_reports_the_requested_kind() {
        setup();
        match PropertyCatalog::try_create_property("Villa") {
            Err(ListingError::UnknownPropertyKind(kind)) => assert_eq!(kind, "Villa"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("Villa should not be in the catalog"),
        }
    }

    #[test]
    fn test_known_kinds_round_trip_through_names() {
        for kind in PropertyCatalog::known_kinds() {
            let parsed: PropertyKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
            assert_eq!(PropertyCatalog::create_kind(*kind).kind(), *kind);
        }
    }
}
