//! View-mode routing of the hubs: path parsing, canonical paths,
//! breadcrumbs and the controller keeping the hub state in sync with the URL

pub mod breadcrumbs;
pub mod controller;
pub mod hook;
pub mod route_table;
pub mod view_mode;

pub use breadcrumbs::{is_link, Breadcrumb, BreadcrumbBuilder};
pub use controller::{EntitySelection, ExternalMode, Navigator, ViewModeController};
pub use hook::{use_hub_router, HostMode, HubRouter};
pub use route_table::{RouteAction, RouteTable};
pub use view_mode::{parse_path, PathState, ViewMode};
