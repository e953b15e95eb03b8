use std::borrow::Cow;

/// Screen a hub is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    List,
    Detail,
    Create,
    /// Multi-select over the list. Never encoded in the URL.
    Bulk,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Detail => "detail",
            ViewMode::Create => "create",
            ViewMode::Bulk => "bulk",
        }
    }

    /// List and bulk render the same table
    pub fn is_list_like(&self) -> bool {
        matches!(self, ViewMode::List | ViewMode::Bulk)
    }
}

/// What a URL path says about a hub
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathState {
    pub mode: ViewMode,
    pub selected_id: Option<String>,
    pub editing: bool,
}

impl PathState {
    pub fn list() -> Self {
        Self::default()
    }

    pub fn create() -> Self {
        Self {
            mode: ViewMode::Create,
            ..Self::default()
        }
    }

    pub fn detail(id: impl Into<String>, editing: bool) -> Self {
        Self {
            mode: ViewMode::Detail,
            selected_id: Some(id.into()),
            editing,
        }
    }
}

const CREATE: &str = "create";
const EDIT: &str = "edit";
const VIEW: &str = "view";

/// Path without its query string and fragment
fn path_only(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn segments(path: &str) -> Vec<&str> {
    path_only(path).split('/').filter(|s| !s.is_empty()).collect()
}

/// Remainder of `path` below the mount prefix `base`, `None` outside it.
///
/// `base` is either empty or `"/segment[/segment...]"`; the prefix must
/// end on a segment boundary.
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    match rest.chars().next() {
        None | Some('/') | Some('?') | Some('#') => Some(rest),
        Some(_) => None,
    }
}

/// Parses `path` whose first segment must be `collection`.
///
/// Only the segments after the collection root are considered:
/// `create` right after the root, `{id}/edit`, `{id}/view` and a bare
/// `{id}`. Anything else, including paths outside the collection, is the
/// list. Ids are percent-decoded; a query string or fragment is ignored.
pub fn parse_path(collection: &str, path: &str) -> PathState {
    let segments = segments(path);
    let rest = match segments.as_slice() {
        [root, rest @ ..] if *root == collection => rest,
        _ => return PathState::list(),
    };

    match rest {
        [CREATE, ..] => PathState::create(),
        [id, EDIT, ..] => PathState::detail(decode_segment(id), true),
        [id, VIEW, ..] => PathState::detail(decode_segment(id), false),
        [id] if *id != EDIT && *id != VIEW => PathState::detail(decode_segment(id), false),
        _ => PathState::list(),
    }
}

/// Whether the first segment of `path` is `collection`
pub fn is_under_collection(collection: &str, path: &str) -> bool {
    segments(path).first() == Some(&collection)
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_paths() {
        assert_eq!(parse_path("categories", "/categories"), PathState::list());
        assert_eq!(parse_path("categories", "/categories/"), PathState::list());
        assert_eq!(parse_path("categories", "/"), PathState::list());
        assert_eq!(parse_path("categories", "/products/1/edit"), PathState::list());
    }

    #[test]
    fn test_create_only_directly_under_root() {
        assert_eq!(parse_path("products", "/products/create"), PathState::create());
        assert_eq!(
            parse_path("products", "/products/create?step=2"),
            PathState::create()
        );
        assert_eq!(
            parse_path("products", "/products/42/create"),
            PathState::list()
        );
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(
            parse_path("staff", "/staff/42/edit"),
            PathState::detail("42", true)
        );
        assert_eq!(
            parse_path("categories", "/categories/99/view"),
            PathState::detail("99", false)
        );
        assert_eq!(
            parse_path("categories", "/categories/99"),
            PathState::detail("99", false)
        );
    }

    #[test]
    fn test_collection_must_be_first_segment() {
        assert_eq!(parse_path("staff", "/reports/staff/42"), PathState::list());
        assert_eq!(parse_path("staff", "/admin/staff/7/edit"), PathState::list());
        assert!(!is_under_collection("staff", "/reports/staff"));
        assert!(is_under_collection("staff", "/staff/7/edit"));
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("", "/staff/1"), Some("/staff/1"));
        assert_eq!(strip_base("/admin", "/admin/staff/1"), Some("/staff/1"));
        assert_eq!(strip_base("/admin", "/admin"), Some(""));
        assert_eq!(strip_base("/admin", "/admin?tab=1"), Some("?tab=1"));
        assert_eq!(strip_base("/admin", "/administrators/staff"), None);
        assert_eq!(strip_base("/admin", "/staff/1"), None);
    }

    #[test]
    fn test_ids_containing_keywords() {
        assert_eq!(
            parse_path("coupons", "/coupons/preview-2024/view"),
            PathState::detail("preview-2024", false)
        );
        assert_eq!(
            parse_path("coupons", "/coupons/credit/edit"),
            PathState::detail("credit", true)
        );
        assert_eq!(
            parse_path("coupons", "/coupons/create-me"),
            PathState::detail("create-me", false)
        );
    }

    #[test]
    fn test_reserved_segment_alone_is_list() {
        assert_eq!(parse_path("staff", "/staff/edit"), PathState::list());
        assert_eq!(parse_path("staff", "/staff/view"), PathState::list());
        assert_eq!(parse_path("staff", "/staff/1/other"), PathState::list());
    }

    #[test]
    fn test_ids_are_percent_decoded() {
        assert_eq!(
            parse_path("products", "/products/a%2Fb%20c/view"),
            PathState::detail("a/b c", false)
        );
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(
            parse_path("staff", "/staff/5/edit#notes"),
            PathState::detail("5", true)
        );
        assert!(is_under_collection("staff", "/staff?x=1"));
        assert!(!is_under_collection("staff", "/?staff"));
    }
}
