use fulfilment_warehouses::{Location, LocationResolver};

/// The location catalogue as a fixed in-memory table.
///
/// Reference data is compile-time by design; a future remote catalogue would
/// implement [`LocationResolver`] behind the same port.
#[derive(Debug)]
pub struct StaticLocationDirectory {
    locations: Vec<Location>,
}

impl StaticLocationDirectory {
    pub fn new() -> Self {
        Self {
            locations: vec![
                Location::new("ZWOLLE-001", 1, 40),
                Location::new("ZWOLLE-002", 2, 50),
                Location::new("AMSTERDAM-001", 5, 100),
                Location::new("AMSTERDAM-002", 3, 75),
                Location::new("TILBURG-001", 2, 60),
                Location::new("HELMOND-001", 1, 45),
                Location::new("EINDHOVEN-001", 2, 70),
            ],
        }
    }

    pub fn all(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for StaticLocationDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for StaticLocationDirectory {
    fn resolve_by_identifier(&self, identifier: &str) -> Option<Location> {
        self.locations
            .iter()
            .find(|l| l.identification == identifier)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_existing_location() {
        let directory = StaticLocationDirectory::new();

        let location = directory
            .resolve_by_identifier("ZWOLLE-001")
            .expect("known identifier");

        assert_eq!(location.identification, "ZWOLLE-001");
        assert_eq!(location.max_number_of_warehouses, 1);
        assert_eq!(location.max_capacity, 40);
    }

    #[test]
    fn resolves_another_existing_location() {
        let directory = StaticLocationDirectory::new();

        let location = directory
            .resolve_by_identifier("AMSTERDAM-001")
            .expect("known identifier");

        assert_eq!(location.identification, "AMSTERDAM-001");
        assert_eq!(location.max_number_of_warehouses, 5);
        assert_eq!(location.max_capacity, 100);
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let directory = StaticLocationDirectory::new();
        assert!(directory.resolve_by_identifier("NON-EXISTENT").is_none());
    }

    #[test]
    fn blank_identifier_resolves_to_none() {
        let directory = StaticLocationDirectory::new();
        assert!(directory.resolve_by_identifier("").is_none());
    }
}
