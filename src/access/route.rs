use serde::Serialize;

use crate::identity::Role;

/// A dashboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Analytics,
    Calendar,
    Threats,
    Report,
    Chat,
    Help,
    Unauthorized,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Analytics,
        Route::Calendar,
        Route::Threats,
        Route::Report,
        Route::Chat,
        Route::Help,
        Route::Unauthorized,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Analytics => "/analytics",
            Route::Calendar => "/calendar",
            Route::Threats => "/threats",
            Route::Report => "/report",
            Route::Chat => "/chat",
            Route::Help => "/help",
            Route::Unauthorized => "/unauthorized",
        }
    }

    /// Match a request path, ignoring trailing slashes
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl Role {
    /// Whether this role may open `route`
    pub fn can_access(&self, route: Route) -> bool {
        match (self, route) {
            (_, Route::Threats | Route::Chat | Route::Help | Route::Unauthorized) => true,
            (Role::Commander, Route::Dashboard | Route::Analytics | Route::Calendar) => true,
            (Role::Commander, Route::Report) => false,
            (Role::FieldAgent, Route::Report) => true,
            (Role::FieldAgent, Route::Dashboard | Route::Analytics | Route::Calendar) => false,
        }
    }

    /// Screen shown right after sign-in
    pub fn landing_route(&self) -> Route {
        match self {
            Role::Commander => Route::Dashboard,
            Role::FieldAgent => Route::Threats,
        }
    }
}

/// Outcome of navigating to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "route", rename_all = "snake_case")]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

impl RouteDecision {
    /// The route that ends up on screen
    pub fn route(&self) -> Route {
        match self {
            RouteDecision::Render(route) | RouteDecision::Redirect(route) => *route,
        }
    }
}

/// Decide what a signed-in user with `role` sees when opening `path`.
///
/// `/login` and any path the role may not open (or that does not exist)
/// redirect to the role's landing route.
pub fn resolve(role: Role, path: &str) -> RouteDecision {
    if path.trim_end_matches('/') == "/login" {
        return RouteDecision::Redirect(role.landing_route());
    }

    match Route::from_path(path) {
        Some(route) if role.can_access(route) => RouteDecision::Render(route),
        Some(route) => {
            tracing::debug!(role = %role, route = ?route, "Route not available to role");
            RouteDecision::Redirect(role.landing_route())
        }
        None => RouteDecision::Redirect(role.landing_route()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path(""), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/threats/"), Some(Route::Threats));
        assert_eq!(Route::from_path("/report"), Some(Route::Report));
        assert_eq!(Route::from_path("/nowhere"), None);
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_commander_access() {
        let allowed: Vec<_> = Route::ALL
            .into_iter()
            .filter(|r| Role::Commander.can_access(*r))
            .collect();
        assert_eq!(
            allowed,
            vec![
                Route::Dashboard,
                Route::Analytics,
                Route::Calendar,
                Route::Threats,
                Route::Chat,
                Route::Help,
                Route::Unauthorized,
            ]
        );
    }

    #[test]
    fn test_field_agent_access() {
        let allowed: Vec<_> = Route::ALL
            .into_iter()
            .filter(|r| Role::FieldAgent.can_access(*r))
            .collect();
        assert_eq!(
            allowed,
            vec![
                Route::Threats,
                Route::Report,
                Route::Chat,
                Route::Help,
                Route::Unauthorized,
            ]
        );
    }

    #[test]
    fn test_root_route() {
        assert_eq!(resolve(Role::Commander, "/"), RouteDecision::Render(Route::Dashboard));
        assert_eq!(resolve(Role::FieldAgent, "/"), RouteDecision::Redirect(Route::Threats));
    }

    #[test]
    fn test_login_redirects_to_landing() {
        assert_eq!(
            resolve(Role::Commander, "/login"),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            resolve(Role::FieldAgent, "/login/"),
            RouteDecision::Redirect(Route::Threats)
        );
    }

    #[test]
    fn test_forbidden_and_unknown_paths_redirect() {
        assert_eq!(
            resolve(Role::FieldAgent, "/analytics"),
            RouteDecision::Redirect(Route::Threats)
        );
        assert_eq!(
            resolve(Role::Commander, "/report"),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            resolve(Role::Commander, "/settings"),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_shared_routes_render_for_both() {
        for role in Role::ALL {
            assert_eq!(resolve(role, "/chat"), RouteDecision::Render(Route::Chat));
            assert_eq!(resolve(role, "/help"), RouteDecision::Render(Route::Help));
            assert_eq!(resolve(role, "/threats"), RouteDecision::Render(Route::Threats));
        }
    }

    #[test]
    fn test_decision_serialization() {
        let value = serde_json::to_value(RouteDecision::Redirect(Route::Threats)).unwrap();
        assert_eq!(value, serde_json::json!({"action": "redirect", "route": "threats"}));
    }
}
