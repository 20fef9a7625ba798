//! `location.hash` route adapter.

use media_host::{LibraryRoute, RouteService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Router reading and writing the URL hash fragment.
///
/// Writing the hash fires `hashchange`; the runtime listens for it and dispatches the navigation.
pub struct HashRouteService;

impl RouteService for HashRouteService {
    fn current(&self) -> LibraryRoute {
        LibraryRoute::parse_hash(&bridge::location_hash())
    }

    fn push(&self, route: &LibraryRoute) {
        bridge::set_location_hash(&route.to_hash());
    }

    fn notifies_changes(&self) -> bool {
        true
    }
}
