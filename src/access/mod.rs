//! Role-gated screens: which routes a role may open, where it lands after
//! sign-in, and what its navigation shows.

mod navigation;
mod route;

pub use navigation::{badge_label, navigation, NavItem};
pub use route::{resolve, Route, RouteDecision};
