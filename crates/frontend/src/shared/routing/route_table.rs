use contracts::domain::common::AggregateRoot;

use super::view_mode::{self, PathState};

/// Navigation a hub can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    ViewList,
    ViewCreate,
    ViewDetail(String),
    ViewEdit(String),
}

impl RouteAction {
    /// State the hub is in once the action has been applied
    pub fn target_state(&self) -> PathState {
        match self {
            RouteAction::ViewList => PathState::list(),
            RouteAction::ViewCreate => PathState::create(),
            RouteAction::ViewDetail(id) => PathState::detail(id.clone(), false),
            RouteAction::ViewEdit(id) => PathState::detail(id.clone(), true),
        }
    }
}

/// Canonical paths of one hub collection.
///
/// `base` is the mount prefix of the hub application (empty when it owns
/// the whole origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    base: String,
    collection: &'static str,
}

impl RouteTable {
    pub fn new(collection: &'static str) -> Self {
        Self {
            base: String::new(),
            collection,
        }
    }

    pub fn for_entity<E: AggregateRoot>() -> Self {
        Self::new(E::collection_name())
    }

    /// Mounts the table under `base` (`"/admin"`, `"/admin/"` and `"admin"` are equivalent)
    pub fn with_base(mut self, base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        self.base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn dashboard(&self) -> String {
        if self.base.is_empty() {
            "/".to_string()
        } else {
            self.base.clone()
        }
    }

    pub fn list(&self) -> String {
        format!("{}/{}", self.base, self.collection)
    }

    pub fn create(&self) -> String {
        format!("{}/create", self.list())
    }

    pub fn view(&self, id: &str) -> String {
        format!("{}/{}/view", self.list(), urlencoding::encode(id))
    }

    pub fn edit(&self, id: &str) -> String {
        format!("{}/{}/edit", self.list(), urlencoding::encode(id))
    }

    pub fn path_for(&self, action: &RouteAction) -> String {
        match action {
            RouteAction::ViewList => self.list(),
            RouteAction::ViewCreate => self.create(),
            RouteAction::ViewDetail(id) => self.view(id),
            RouteAction::ViewEdit(id) => self.edit(id),
        }
    }

    /// State of `path`; paths outside the mount prefix are the list
    pub fn parse(&self, path: &str) -> PathState {
        match view_mode::strip_base(&self.base, path) {
            Some(rest) => view_mode::parse_path(self.collection, rest),
            None => PathState::list(),
        }
    }

    /// Whether `path` lies under `{base}/{collection}`
    pub fn contains(&self, path: &str) -> bool {
        view_mode::strip_base(&self.base, path)
            .is_some_and(|rest| view_mode::is_under_collection(self.collection, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_staff::aggregate::Staff;

    #[test]
    fn test_paths() {
        let routes = RouteTable::new("categories");
        assert_eq!(routes.dashboard(), "/");
        assert_eq!(routes.list(), "/categories");
        assert_eq!(routes.create(), "/categories/create");
        assert_eq!(routes.view("99"), "/categories/99/view");
        assert_eq!(routes.edit("99"), "/categories/99/edit");
    }

    #[test]
    fn test_base_prefix() {
        let routes = RouteTable::for_entity::<Staff>().with_base("admin/");
        assert_eq!(routes.dashboard(), "/admin");
        assert_eq!(routes.list(), "/admin/staff");
        assert_eq!(routes.edit("42"), "/admin/staff/42/edit");
    }

    #[test]
    fn test_ids_are_encoded() {
        let routes = RouteTable::new("products");
        assert_eq!(routes.view("a/b c"), "/products/a%2Fb%20c/view");
    }

    #[test]
    fn test_every_action_parses_back_to_its_target() {
        let routes = RouteTable::new("coupons").with_base("/admin");
        let actions = [
            RouteAction::ViewList,
            RouteAction::ViewCreate,
            RouteAction::ViewDetail("x/1".into()),
            RouteAction::ViewEdit("edit".into()),
        ];
        for action in actions {
            let path = routes.path_for(&action);
            assert_eq!(routes.parse(&path), action.target_state(), "{}", path);
        }
    }

    #[test]
    fn test_mounted_under_its_own_collection_name() {
        let routes = RouteTable::new("staff").with_base("/staff");
        assert_eq!(routes.list(), "/staff/staff");
        let actions = [
            RouteAction::ViewList,
            RouteAction::ViewCreate,
            RouteAction::ViewDetail("42".into()),
            RouteAction::ViewEdit("42".into()),
        ];
        for action in actions {
            let path = routes.path_for(&action);
            assert_eq!(routes.parse(&path), action.target_state(), "{}", path);
            assert!(routes.contains(&path), "{}", path);
        }
        assert_eq!(routes.parse("/staff"), PathState::list());
        assert!(!routes.contains("/staff"));
    }

    #[test]
    fn test_paths_outside_the_mount_are_list() {
        let routes = RouteTable::new("staff").with_base("/admin");
        assert_eq!(routes.parse("/staff/42/edit"), PathState::list());
        assert_eq!(routes.parse("/reports/staff/42"), PathState::list());
        assert_eq!(
            routes.parse("/admin/staff/42/edit"),
            PathState::detail("42", true)
        );
        assert!(!routes.contains("/admin/reports/staff"));
    }
}
