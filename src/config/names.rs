use std::collections::HashSet;

/// Ordered set of validator names. Insertion order is kept and a name is
/// only stored the first time it is seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let set: NameSet = ["tabs", "whitespace", "tabs", "nb_space", "whitespace"]
            .into_iter()
            .collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["tabs", "whitespace", "nb_space"]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = NameSet::new();
        assert!(set.is_empty());
        assert!(set.insert("tabs"));
        assert!(!set.insert("tabs"));
        assert!(set.contains("tabs"));
        assert!(!set.contains("whitespace"));
    }
}
