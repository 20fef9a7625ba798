//! Hash-fragment routes of the media library.

use std::{cell::RefCell, fmt};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::model::DirectoryId;

const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named server-side listing filters.
pub enum FilterName {
    /// Files without any usage.
    Unused,
}

impl FilterName {
    /// URL token of the filter.
    pub fn token(self) -> &'static str {
        match self {
            Self::Unused => "unused",
        }
    }

    /// Parses a URL token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "unused" => Some(Self::Unused),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One of the three mutually exclusive library views.
pub enum LibraryRoute {
    /// `/:directoryId?`, `None` is the root.
    Directory(Option<DirectoryId>),
    /// `/search/:query`.
    Search(String),
    /// `/filter/:name`.
    Filter(FilterName),
}

impl Default for LibraryRoute {
    fn default() -> Self {
        Self::Directory(None)
    }
}

impl LibraryRoute {
    /// The root directory route.
    pub fn root() -> Self {
        Self::Directory(None)
    }

    /// Parses a hash fragment (with or without the leading `#`).
    ///
    /// Anything that matches none of the routes resolves to the root.
    pub fn parse_hash(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["search", query, ..] => {
                let query = percent_decode_str(query).decode_utf8_lossy().into_owned();
                if query.trim().is_empty() {
                    Self::root()
                } else {
                    Self::Search(query)
                }
            }
            ["filter", name, ..] => FilterName::from_token(name)
                .map(Self::Filter)
                .unwrap_or_default(),
            [id] => Self::Directory(id.parse().ok().map(DirectoryId)),
            _ => Self::root(),
        }
    }

    /// Formats the route as a hash fragment including the leading `#`.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Directory(None) => "#/".to_string(),
            Self::Directory(Some(id)) => format!("#/{id}/"),
            Self::Search(query) => format!("#/search/{}", utf8_percent_encode(query, SEGMENT)),
            Self::Filter(name) => format!("#/filter/{}", name.token()),
        }
    }

    /// Directory shown by this route, if it is a directory route.
    pub fn directory(&self) -> Option<DirectoryId> {
        match self {
            Self::Directory(id) => *id,
            Self::Search(_) | Self::Filter(_) => None,
        }
    }

    /// Returns `true` for directory routes (root included).
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

impl fmt::Display for LibraryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// Host service owning the current location.
pub trait RouteService {
    /// Route of the current location.
    fn current(&self) -> LibraryRoute;

    /// Navigates to `route`.
    fn push(&self, route: &LibraryRoute);

    /// Whether the host reports pushed routes on its own (for example through `hashchange`).
    ///
    /// When `false`, the controller applies a pushed route immediately.
    fn notifies_changes(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
/// In-memory router used by embedded pickers and tests; it never touches the page URL.
pub struct MemoryRouteService {
    history: RefCell<Vec<LibraryRoute>>,
}

impl MemoryRouteService {
    /// Creates a router positioned at `route`.
    pub fn starting_at(route: LibraryRoute) -> Self {
        Self {
            history: RefCell::new(vec![route]),
        }
    }

    /// Routes pushed since creation, including the starting route.
    pub fn history(&self) -> Vec<LibraryRoute> {
        self.history.borrow().clone()
    }
}

impl RouteService for MemoryRouteService {
    fn current(&self) -> LibraryRoute {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn push(&self, route: &LibraryRoute) {
        self.history.borrow_mut().push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_hash_matches_expected_cases() {
        let cases = [
            ("", LibraryRoute::root()),
            ("#", LibraryRoute::root()),
            ("#/", LibraryRoute::root()),
            ("#/42/", LibraryRoute::Directory(Some(DirectoryId(42)))),
            ("#/42", LibraryRoute::Directory(Some(DirectoryId(42)))),
            ("/7/", LibraryRoute::Directory(Some(DirectoryId(7)))),
            ("#/abc/", LibraryRoute::root()),
            ("#/search/logo", LibraryRoute::Search("logo".to_string())),
            ("#/search/new%20logo", LibraryRoute::Search("new logo".to_string())),
            ("#/search/", LibraryRoute::root()),
            ("#/filter/unused", LibraryRoute::Filter(FilterName::Unused)),
            ("#/filter/bogus", LibraryRoute::root()),
            ("#/1/2/3", LibraryRoute::root()),
        ];

        for (input, expected) in cases {
            assert_eq!(LibraryRoute::parse_hash(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn to_hash_is_parsed_back_to_the_same_route() {
        let routes = [
            LibraryRoute::root(),
            LibraryRoute::Directory(Some(DirectoryId(42))),
            LibraryRoute::Search("a/b c?".to_string()),
            LibraryRoute::Filter(FilterName::Unused),
        ];
        for route in routes {
            assert_eq!(LibraryRoute::parse_hash(&route.to_hash()), route);
        }
        assert_eq!(LibraryRoute::Directory(Some(DirectoryId(42))).to_hash(), "#/42/");
    }

    #[test]
    fn memory_router_tracks_history_without_notifying() {
        let router = MemoryRouteService::starting_at(LibraryRoute::Directory(Some(DirectoryId(2))));
        assert_eq!(router.current(), LibraryRoute::Directory(Some(DirectoryId(2))));
        router.push(&LibraryRoute::Filter(FilterName::Unused));
        assert_eq!(router.current(), LibraryRoute::Filter(FilterName::Unused));
        assert_eq!(router.history().len(), 2);
        assert!(!router.notifies_changes());
        assert_eq!(MemoryRouteService::default().current(), LibraryRoute::root());
    }
}
