//! Route table for the recipes UI.
//!
//! # Design
//! - `Route` is the router-facing table; `ROUTE_TABLE` lists the same entries as
//!   `(path, view)` descriptors in declaration order.
//! - Matching is delegated to `yew-router`. There is no catch-all variant, so an
//!   unknown path resolves to `None` and the switch renders nothing.

use std::collections::BTreeSet;
use yew_router::prelude::*;

/// Navigable routes, in match order.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug, Hash)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Account registration form.
    #[at("/register")]
    Register,
    /// Login form.
    #[at("/login")]
    Login,
    /// Recipe listing.
    #[at("/recipes")]
    Recipes,
}

/// Page-level view rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// Homepage.
    Home,
    /// Registration page.
    Register,
    /// Login page.
    Login,
    /// Recipe listing page.
    Recipes,
}

impl View {
    /// Translation key holding the view's navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Register => "nav.register",
            Self::Login => "nav.login",
            Self::Recipes => "nav.recipes",
        }
    }
}

/// Association between a URL path pattern and the view rendered for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern as registered with the router.
    pub path: &'static str,
    /// View rendered when the path matches.
    pub view: View,
}

/// Ordered route table.
pub const ROUTE_TABLE: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/",
        view: View::Home,
    },
    RouteDescriptor {
        path: "/register",
        view: View::Register,
    },
    RouteDescriptor {
        path: "/login",
        view: View::Login,
    },
    RouteDescriptor {
        path: "/recipes",
        view: View::Recipes,
    },
];

impl Route {
    /// All routes in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Home, Self::Register, Self::Login, Self::Recipes]
    }

    /// View bound to this route.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Home => View::Home,
            Self::Register => View::Register,
            Self::Login => View::Login,
            Self::Recipes => View::Recipes,
        }
    }

    /// Concrete path for links and navigation.
    #[must_use]
    pub fn path(self) -> String {
        self.to_path()
    }
}

/// Resolve a location (path with optional query or fragment) to its route.
///
/// Returns `None` for paths outside the table.
#[must_use]
pub fn resolve(location: &str) -> Option<Route> {
    let pathname = location.split(['?', '#']).next().unwrap_or_default();
    Route::recognize(pathname)
}

/// Resolve a location straight to the view it renders.
#[must_use]
pub fn resolve_view(location: &str) -> Option<View> {
    resolve(location).map(Route::view)
}

/// Paths declared more than once in `table`, sorted.
#[must_use]
pub fn duplicate_paths(table: &[RouteDescriptor]) -> Vec<&'static str> {
    let mut seen = BTreeSet::new();
    let mut dupes = BTreeSet::new();
    for descriptor in table {
        if !seen.insert(descriptor.path) {
            dupes.insert(descriptor.path);
        }
    }
    dupes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_path_resolves_to_its_view() {
        for descriptor in ROUTE_TABLE {
            assert_eq!(
                resolve_view(descriptor.path),
                Some(descriptor.view),
                "path {}",
                descriptor.path
            );
        }
    }

    #[test]
    fn table_has_no_duplicate_paths() {
        assert!(duplicate_paths(&ROUTE_TABLE).is_empty());
    }

    #[test]
    fn duplicate_detection_reports_repeated_paths() {
        let table = [
            ROUTE_TABLE[0],
            ROUTE_TABLE[2],
            RouteDescriptor {
                path: "/login",
                view: View::Recipes,
            },
        ];
        assert_eq!(duplicate_paths(&table), vec!["/login"]);
    }

    #[test]
    fn table_matches_router_registration_order() {
        let table_paths: Vec<&str> = ROUTE_TABLE.iter().map(|d| d.path).collect();
        assert_eq!(Route::routes(), table_paths);
        let enum_views: Vec<View> = Route::all().into_iter().map(Route::view).collect();
        let table_views: Vec<View> = ROUTE_TABLE.iter().map(|d| d.view).collect();
        assert_eq!(enum_views, table_views);
    }

    #[test]
    fn login_resolves_to_login_view() {
        assert_eq!(resolve("/login"), Some(Route::Login));
        assert_eq!(resolve_view("/login"), Some(View::Login));
    }

    #[test]
    fn unknown_path_has_no_match() {
        assert_eq!(resolve("/does-not-exist"), None);
        assert_eq!(resolve("/recipes/42"), None);
    }

    #[test]
    fn query_and_fragment_are_ignored_when_matching() {
        assert_eq!(resolve("/recipes?tags=1,2"), Some(Route::Recipes));
        assert_eq!(resolve("/register#form"), Some(Route::Register));
    }

    #[test]
    fn paths_round_trip_through_router() {
        for route in Route::all() {
            assert_eq!(resolve(&route.path()), Some(route));
        }
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn label_keys_are_distinct() {
        let keys: BTreeSet<&str> = Route::all()
            .into_iter()
            .map(|route| route.view().label_key())
            .collect();
        assert_eq!(keys.len(), Route::all().len());
    }
}
