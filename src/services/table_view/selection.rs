use std::collections::BTreeSet;

/// Selected rows, keyed by item id so selection survives sorting and re-syncs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    ids: BTreeSet<i64>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one row; returns whether it is now selected
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: i64) {
        self.ids.insert(id);
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.ids.extend(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop exactly `ids`, leaving every other selected row alone
    pub fn remove(&mut self, ids: &[i64]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in ascending order
    pub fn selected_ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<i64> for RowSelection {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = RowSelection::new();
        assert!(selection.toggle(4));
        assert!(selection.is_selected(4));
        assert!(!selection.toggle(4));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_only_named_ids() {
        let mut selection: RowSelection = [5, 9, 12].into_iter().collect();
        selection.remove(&[5, 9, 30]);
        assert_eq!(selection.selected_ids(), vec![12]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection = RowSelection::new();
        selection.select_all([3, 1, 2, 3]);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.selected_ids(), vec![1, 2, 3]);
        selection.clear();
        assert!(selection.is_empty());
    }
}
