use contracts::domain::common::AggregateRoot;

use super::route_table::RouteTable;
use super::view_mode::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

impl Breadcrumb {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Builds the trail `Dashboard > {Collection} > {Entity|Create|Edit}`.
#[derive(Debug, Clone)]
pub struct BreadcrumbBuilder {
    routes: RouteTable,
    list_label: &'static str,
}

impl BreadcrumbBuilder {
    pub const DASHBOARD: &'static str = "Dashboard";

    pub fn new(routes: RouteTable, list_label: &'static str) -> Self {
        Self { routes, list_label }
    }

    pub fn for_entity<E: AggregateRoot>(routes: RouteTable) -> Self {
        Self::new(routes, E::list_name())
    }

    /// Trail for `path`; `entity_name` labels the crumb of a loaded entity.
    ///
    /// Paths outside the collection get the dashboard crumb only. In edit
    /// mode the entity crumb is present only when its name is known.
    pub fn build(&self, path: &str, entity_name: Option<&str>) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb::new(Self::DASHBOARD, self.routes.dashboard())];
        if !self.routes.contains(path) {
            return crumbs;
        }
        crumbs.push(Breadcrumb::new(self.list_label, self.routes.list()));

        let state = self.routes.parse(path);
        match (state.mode, state.selected_id) {
            (ViewMode::Create, _) => {
                crumbs.push(Breadcrumb::new("Create", self.routes.create()));
            }
            (ViewMode::Detail, Some(id)) => {
                let name = entity_name.map(str::trim).filter(|n| !n.is_empty());
                if let Some(name) = name {
                    crumbs.push(Breadcrumb::new(name, self.routes.view(&id)));
                }
                if state.editing {
                    crumbs.push(Breadcrumb::new("Edit", self.routes.edit(&id)));
                }
            }
            _ => {}
        }
        crumbs
    }
}

/// Every crumb except the last one is a link
pub fn is_link(crumbs: &[Breadcrumb], index: usize) -> bool {
    index + 1 < crumbs.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(crumbs: &[Breadcrumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    fn builder(collection: &'static str, label: &'static str) -> BreadcrumbBuilder {
        BreadcrumbBuilder::new(RouteTable::new(collection), label)
    }

    #[test]
    fn test_list_trail() {
        let crumbs = builder("products", "Products").build("/products", None);
        assert_eq!(labels(&crumbs), ["Dashboard", "Products"]);
        assert_eq!(crumbs[1].href, "/products");
        assert!(is_link(&crumbs, 0));
        assert!(!is_link(&crumbs, 1));
    }

    #[test]
    fn test_edit_without_name() {
        let crumbs = builder("staff", "Staff").build("/staff/42/edit", None);
        assert_eq!(labels(&crumbs), ["Dashboard", "Staff", "Edit"]);
        assert_eq!(crumbs[2].href, "/staff/42/edit");
    }

    #[test]
    fn test_edit_with_name() {
        let crumbs = builder("staff", "Staff").build("/staff/42/edit", Some("Alice"));
        assert_eq!(labels(&crumbs), ["Dashboard", "Staff", "Alice", "Edit"]);
        assert_eq!(crumbs[2].href, "/staff/42/view");
        assert!(is_link(&crumbs, 2));
    }

    #[test]
    fn test_view_with_name() {
        let crumbs =
            builder("categories", "Categories").build("/categories/99/view", Some("Electronics"));
        assert_eq!(labels(&crumbs), ["Dashboard", "Categories", "Electronics"]);
        assert!(!is_link(&crumbs, 2));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let crumbs = builder("categories", "Categories").build("/categories/99", Some("  "));
        assert_eq!(labels(&crumbs), ["Dashboard", "Categories"]);
    }

    #[test]
    fn test_create_trail() {
        let crumbs = builder("coupons", "Coupons").build("/coupons/create", Some("ignored"));
        assert_eq!(labels(&crumbs), ["Dashboard", "Coupons", "Create"]);
    }

    #[test]
    fn test_mounted_trail() {
        let routes = RouteTable::new("staff").with_base("/staff");
        let crumbs = BreadcrumbBuilder::new(routes, "Staff").build("/staff/staff/42/edit", None);
        assert_eq!(labels(&crumbs), ["Dashboard", "Staff", "Edit"]);
        assert_eq!(crumbs[0].href, "/staff");
        assert_eq!(crumbs[2].href, "/staff/staff/42/edit");
    }

    #[test]
    fn test_outside_collection() {
        let crumbs = builder("coupons", "Coupons").build("/", None);
        assert_eq!(labels(&crumbs), ["Dashboard"]);
        assert_eq!(crumbs[0].href, "/");
    }
}
