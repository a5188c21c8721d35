use std::collections::HashSet;

/// Set of drain ids a receiver accepts. Empty means every drain is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainAllowList {
    ids: HashSet<String>,
}

impl DrainAllowList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_restricted(&self) -> bool {
        !self.ids.is_empty()
    }

    /// A record without a drain id only passes an unrestricted list.
    pub fn permits(&self, drain_id: Option<&str>) -> bool {
        if !self.is_restricted() {
            return true;
        }
        drain_id.is_some_and(|id| self.ids.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_permits_everything() {
        let list = DrainAllowList::unrestricted();
        assert!(!list.is_restricted());
        assert!(list.permits(Some("d.any")));
        assert!(list.permits(None));
    }

    #[test]
    fn test_restricted_permits_members_only() {
        let list = DrainAllowList::new(["d1", "d3"]);
        assert!(list.is_restricted());
        assert_eq!(list.len(), 2);
        assert!(list.permits(Some("d1")));
        assert!(!list.permits(Some("d2")));
        assert!(!list.permits(None));
    }

    #[test]
    fn test_empty_input_is_unrestricted() {
        let list = DrainAllowList::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert!(list.permits(Some("d2")));
    }
}
