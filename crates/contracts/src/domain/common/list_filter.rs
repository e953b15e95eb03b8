use super::{AggregateRoot, BaseAggregate};

/// Typed list filter of one aggregate.
///
/// Each aggregate has its own filter struct carrying only the fields that
/// aggregate supports; the same struct is the query string of
/// `GET /api/{collection}`.
pub trait ListFilter<E: AggregateRoot> {
    fn matches(&self, item: &E) -> bool;

    /// Free-text part of the filter
    fn search(&self) -> Option<&str>;

    fn set_search(&mut self, search: Option<String>);

    /// `Some(true)` only active records, `Some(false)` only inactive ones
    fn active(&self) -> Option<bool>;

    fn set_active(&mut self, active: Option<bool>);

    /// Rejects contradictory filters before they reach the backend
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Case-insensitive match of `search` against code and description.
///
/// Blank searches match everything.
pub fn matches_search<Id>(base: &BaseAggregate<Id>, search: Option<&str>) -> bool {
    let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    base.code.to_lowercase().contains(&needle)
        || base.description.to_lowercase().contains(&needle)
}

/// Matches the optional `active` flag of a filter
pub fn matches_active<Id>(base: &BaseAggregate<Id>, active: Option<bool>) -> bool {
    active.map_or(true, |a| base.is_active == a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(code: &str, description: &str) -> BaseAggregate<u8> {
        BaseAggregate::new(1, code.into(), description.into())
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let b = base("CAT-001", "Electronics");
        assert!(matches_search(&b, Some("electro")));
        assert!(matches_search(&b, Some("cat-0")));
        assert!(!matches_search(&b, Some("garden")));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let b = base("CAT-001", "Electronics");
        assert!(matches_search(&b, None));
        assert!(matches_search(&b, Some("   ")));
    }

    #[test]
    fn test_active_flag() {
        let mut b = base("CAT-001", "Electronics");
        assert!(matches_active(&b, Some(true)));
        b.is_active = false;
        assert!(!matches_active(&b, Some(true)));
        assert!(matches_active(&b, Some(false)));
        assert!(matches_active(&b, None));
    }
}
