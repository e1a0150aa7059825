//! Route registration and dispatch.
//!
//! Matching is case-sensitive exact-string on both method and resource
//! template (placeholder syntax included); there is no wildcard or prefix
//! matching. An unmatched pair is a modeled outcome, not an error: the
//! caller renders it as a 404 without invoking any handler.

/// Handlers reachable through the HTTP gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignUp,
    SignIn,
    ListTables,
    CreateTable,
    GetTable,
    ListReservations,
    CreateReservation,
}

/// The full registration list. Resource templates use the gateway's
/// placeholder syntax verbatim.
pub const REGISTERED_ROUTES: &[(&str, &str, Route)] = &[
    ("POST", "/signup", Route::SignUp),
    ("POST", "/signin", Route::SignIn),
    ("GET", "/tables", Route::ListTables),
    ("POST", "/tables", Route::CreateTable),
    ("GET", "/tables/{tableId}", Route::GetTable),
    ("GET", "/reservations", Route::ListReservations),
    ("POST", "/reservations", Route::CreateReservation),
];

/// Dispatch table resolved once at startup from an enumerated registration
/// list.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(String, String, Route)>,
}

impl RouteTable {
    pub fn new(registrations: &[(&str, &str, Route)]) -> Self {
        Self {
            routes: registrations
                .iter()
                .map(|(method, resource, route)| {
                    (method.to_string(), resource.to_string(), *route)
                })
                .collect(),
        }
    }

    pub fn with_registered_routes() -> Self {
        Self::new(REGISTERED_ROUTES)
    }

    /// Exact-string lookup of a registered handler.
    pub fn resolve(&self, method: &str, resource: &str) -> Option<Route> {
        self.routes
            .iter()
            .find(|(registered_method, registered_resource, _)| {
                registered_method == method && registered_resource == resource
            })
            .map(|(_, _, route)| *route)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_registered_routes()
    }
}
