//! Custom routes utilities for extending the API router.

use aide::axum::ApiRouter;

use crate::service::ServiceState;

/// Transformation applied to the combined API routes.
type RouterMapFn = fn(ApiRouter<ServiceState>) -> ApiRouter<ServiceState>;

/// Extra routes and router transformations merged into the main API router.
///
/// ```rust
/// use wfdocs_server::handler::CustomRoutes;
///
/// let custom = CustomRoutes::new();
/// assert!(custom.is_empty());
/// ```
#[derive(Default, Clone)]
pub struct CustomRoutes {
    /// Additional routes merged next to the built-in ones.
    pub routes: Option<ApiRouter<ServiceState>>,
    /// Applied to all API routes before the fallback is installed.
    pub map_fn: Option<RouterMapFn>,
}

impl CustomRoutes {
    /// Creates a new empty `CustomRoutes` instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the additional routes.
    pub fn with_routes(mut self, routes: ApiRouter<ServiceState>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Adds routes, merging with existing ones if any.
    pub fn add_routes(mut self, routes: ApiRouter<ServiceState>) -> Self {
        self.routes = match self.routes {
            Some(existing) => Some(existing.merge(routes)),
            None => Some(routes),
        };
        self
    }

    /// Sets a function that transforms the combined API routes.
    pub fn with_map_fn(mut self, f: RouterMapFn) -> Self {
        self.map_fn = Some(f);
        self
    }

    /// Returns true if no custom routes or transformations are configured.
    pub fn is_empty(&self) -> bool {
        self.routes.is_none() && self.map_fn.is_none()
    }

    /// Takes the additional routes, leaving `None` in their place.
    pub fn take_routes(&mut self) -> Option<ApiRouter<ServiceState>> {
        self.routes.take()
    }

    /// Applies the transformation function if it exists.
    pub(crate) fn map_routes(&self, routes: ApiRouter<ServiceState>) -> ApiRouter<ServiceState> {
        match self.map_fn {
            Some(f) => f(routes),
            None => routes,
        }
    }
}
