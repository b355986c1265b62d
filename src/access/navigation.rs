use serde::Serialize;

use crate::identity::Role;

use super::route::Route;

/// One entry in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
}

impl NavItem {
    fn new(route: Route, label: &'static str) -> Self {
        Self {
            route,
            path: route.path(),
            label,
        }
    }
}

/// Navigation entries for `role`, in display order
pub fn navigation(role: Role) -> Vec<NavItem> {
    let mut items = match role {
        Role::Commander => vec![
            NavItem::new(Route::Dashboard, "Dashboard"),
            NavItem::new(Route::Analytics, "Analytics"),
            NavItem::new(Route::Threats, "Threat Map"),
            NavItem::new(Route::Calendar, "Calendar"),
        ],
        Role::FieldAgent => vec![
            NavItem::new(Route::Threats, "Threat Map"),
            NavItem::new(Route::Report, "Report Threat"),
        ],
    };
    items.push(NavItem::new(Route::Chat, "Chat"));
    items.push(NavItem::new(Route::Help, "Help"));
    items
}

/// Text for the unread badge on the bell icon; hidden when nothing is unread.
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_string()),
    }
}
