//! Client-side route table.
//!
//! Paths match exactly. A location with no matching route resolves to
//! `None` and the shell leaves its content area empty.

/// Views a route can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
}

impl View {
    /// Label shown in the navigation chrome
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
        }
    }
}

/// A single path → view mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

/// Static route table
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                path: "/",
                view: View::Dashboard,
            }],
        }
    }

    /// Find the view mounted at `path`
    pub fn resolve(&self, path: &str) -> Option<View> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.view)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_dashboard() {
        assert_eq!(Router::new().resolve("/"), Some(View::Dashboard));
    }

    #[test]
    fn test_undefined_paths_do_not_resolve() {
        let router = Router::new();
        for path in ["", "//", "/dashboard", "/reports", " /"] {
            assert_eq!(router.resolve(path), None, "path {path:?}");
        }
    }

    #[test]
    fn test_route_table_has_single_entry() {
        let router = Router::new();
        assert_eq!(router.routes().len(), 1);
        assert_eq!(router.routes()[0].view.label(), "Dashboard");
    }
}
