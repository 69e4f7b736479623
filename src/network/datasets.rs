//! Bundled route datasets
//!
//! Static snapshots of Indian domestic airports and a handful of routes
//! between them, chosen to show several kinds of connectivity: one large
//! cycle region, a 2-cycle reachable only one way, and two isolated rings.

use super::routes::{NetworkResult, RouteNetwork};

const INDIAN_AIRPORTS: &[(&str, &str)] = &[
    ("DEL", "Indira Gandhi International Airport"),
    ("BOM", "Chhatrapati Shivaji Maharaj International Airport"),
    ("BLR", "Kempegowda International Airport"),
    ("MAA", "Chennai International Airport"),
    ("HYD", "Rajiv Gandhi International Airport"),
    ("CCU", "Netaji Subhas Chandra Bose International Airport"),
    ("GOI", "Dabolim Airport"),
    ("PNQ", "Pune Airport"),
    ("AMD", "Sardar Vallabhbhai Patel International Airport"),
    ("JAI", "Jaipur International Airport"),
    ("TRV", "Trivandrum International Airport"),
    ("LKO", "Chaudhary Charan Singh International Airport"),
    ("IXB", "Bagdogra Airport"),
    ("COK", "Cochin International Airport"),
    ("STV", "Surat Airport"),
    ("VGA", "Vadodara Airport"),
];

/// Airports of the core edition; a prefix of `INDIAN_AIRPORTS`
const CORE_AIRPORT_COUNT: usize = 9;

const CORE_ROUTES: &[(&str, &str)] = &[
    ("GOI", "BOM"), ("DEL", "BLR"), ("BOM", "HYD"), ("BLR", "MAA"),
    ("MAA", "CCU"), ("HYD", "CCU"), ("CCU", "DEL"), ("BLR", "DEL"),
    ("PNQ", "AMD"), ("AMD", "PNQ"), ("DEL", "BOM"), ("DEL", "PNQ"),
];

const RING_ROUTES: &[(&str, &str)] = &[
    ("JAI", "TRV"), ("TRV", "LKO"), ("LKO", "JAI"),
    ("IXB", "COK"), ("COK", "STV"), ("STV", "VGA"), ("VGA", "IXB"),
];

/// Names of the bundled datasets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dataset {
    /// 16 airports, 19 routes
    #[default]
    Indian,
    /// The earlier 9 airport, 12 route edition
    Core,
}

impl Dataset {
    pub fn load(self) -> NetworkResult<RouteNetwork> {
        match self {
            Dataset::Indian => indian_airports(),
            Dataset::Core => indian_airports_core(),
        }
    }
}

/// The full dataset
pub fn indian_airports() -> NetworkResult<RouteNetwork> {
    let routes: Vec<(&str, &str)> = CORE_ROUTES.iter().chain(RING_ROUTES).copied().collect();
    RouteNetwork::from_tables(INDIAN_AIRPORTS, &routes)
}

pub fn indian_airports_core() -> NetworkResult<RouteNetwork> {
    RouteNetwork::from_tables(&INDIAN_AIRPORTS[..CORE_AIRPORT_COUNT], CORE_ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sizes() {
        let full = indian_airports().unwrap();
        assert_eq!(full.airport_count(), 16);
        assert_eq!(full.route_count(), 19);

        let core = indian_airports_core().unwrap();
        assert_eq!(core.airport_count(), 9);
        assert_eq!(core.route_count(), 12);
        assert!(!core.contains("JAI"));
    }

    #[test]
    fn test_load_by_name() {
        assert_eq!(Dataset::default(), Dataset::Indian);
        assert_eq!(Dataset::Core.load().unwrap().airport_count(), 9);
        assert_eq!(Dataset::Indian.load().unwrap().route_count(), 19);
    }
}
