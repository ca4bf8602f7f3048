//! Per-side search overlay.
//!
//! Search only decides what is visible; it never touches the store. Matching is
//! a case-insensitive substring test, first against the group label and then,
//! if the group label does not match, against each item label.

/// Visibility of one group block and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVisibility {
    /// Whether the group block is shown.
    pub visible: bool,
    /// Visibility of each row, parallel to the labels passed in.
    pub items: Vec<bool>,
}

/// Applies a search query to one group.
///
/// A group whose label matches is shown with every row forced visible.
/// Otherwise each row is shown iff its label matches, and the group is shown
/// iff at least one row is. An empty query shows everything.
#[must_use]
pub fn filter_group(query: &str, group: &str, labels: &[String]) -> GroupVisibility {
    let needle = query.to_lowercase();
    if needle.is_empty() || group.to_lowercase().contains(&needle) {
        return GroupVisibility {
            visible: true,
            items: vec![true; labels.len()],
        };
    }

    let items: Vec<bool> = labels
        .iter()
        .map(|label| label.to_lowercase().contains(&needle))
        .collect();
    GroupVisibility {
        visible: items.iter().any(|shown| *shown),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_query_shows_everything() {
        let vis = filter_group("", "Fruits", &labels(&["Apple", "Orange"]));
        assert!(vis.visible);
        assert_eq!(vis.items, vec![true, true]);
    }

    #[test]
    fn group_label_match_forces_all_rows_visible() {
        let vis = filter_group("FRU", "Fruits", &labels(&["Apple", "Orange"]));
        assert!(vis.visible);
        assert_eq!(vis.items, vec![true, true]);
    }

    #[test]
    fn item_match_shows_group_and_matching_rows() {
        let vis = filter_group("ang", "Fruits", &labels(&["Apple", "Orange"]));
        assert!(vis.visible);
        assert_eq!(vis.items, vec![false, true]);
    }

    #[test]
    fn no_match_hides_group_and_rows() {
        let vis = filter_group("zzz", "Fruits", &labels(&["Apple", "Orange"]));
        assert!(!vis.visible);
        assert_eq!(vis.items, vec![false, false]);

        let empty_group = filter_group("zzz", "Nuts", &[]);
        assert!(!empty_group.visible);
    }
}
