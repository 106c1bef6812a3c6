//! Genre Filter
//!
//! Narrows metric collections to the genres the user has selected and
//! resolves genre ids to display names. Pure functions, no shared state.

use std::collections::HashSet;

use crate::model::{Genre, GenreTagged};

/// The set of genre ids the user has selected. An empty set means no
/// constraint: every genre is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenreSelection {
    ids: HashSet<String>,
}

impl GenreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is selected, i.e. all genres pass.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, genre_id: &str) -> bool {
        self.ids.contains(genre_id)
    }

    /// Add or remove a genre id, the chip-toggle interaction.
    pub fn toggle(&mut self, genre_id: &str) {
        if !self.ids.remove(genre_id) {
            self.ids.insert(genre_id.to_string());
        }
    }

    /// Drop every selection, back to pass-through.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl FromIterator<String> for GenreSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Keep only the records whose genre is in the selection. An empty selection
/// returns the input unchanged. Relative order is always preserved.
pub fn filter_records<T: GenreTagged + Clone>(records: &[T], selection: &GenreSelection) -> Vec<T> {
    if selection.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| selection.contains(record.genre_id()))
        .cloned()
        .collect()
}

/// Resolve a genre id to its display name. Unknown ids fall back to the id
/// itself so axis labels never go blank.
pub fn resolve_name(genre_id: &str, genres: &[Genre]) -> String {
    genres
        .iter()
        .find(|genre| genre.id == genre_id)
        .map(|genre| genre.name.clone())
        .unwrap_or_else(|| genre_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RatingRecord;

    fn rating(genre_id: &str, rating: f64) -> RatingRecord {
        RatingRecord {
            genre_id: genre_id.to_string(),
            rating,
        }
    }

    fn sample() -> Vec<RatingRecord> {
        vec![
            rating("action", 4.2),
            rating("rpg", 4.5),
            rating("action", 3.9),
            rating("puzzle", 4.7),
        ]
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let records = sample();
        let filtered = filter_records(&records, &GenreSelection::new());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_keeps_only_selected_in_order() {
        let selection: GenreSelection = ["action".to_string()].into_iter().collect();
        let filtered = filter_records(&sample(), &selection);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].rating, 4.2);
        assert_eq!(filtered[1].rating, 3.9);
    }

    #[test]
    fn test_filter_multi_genre_selection() {
        let selection: GenreSelection = ["rpg".to_string(), "puzzle".to_string()]
            .into_iter()
            .collect();
        let filtered = filter_records(&sample(), &selection);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].genre_id, "rpg");
        assert_eq!(filtered[1].genre_id, "puzzle");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selection: GenreSelection = ["action".to_string()].into_iter().collect();
        let once = filter_records(&sample(), &selection);
        let twice = filter_records(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = GenreSelection::new();
        selection.toggle("action");
        assert!(selection.contains("action"));
        assert_eq!(selection.len(), 1);

        selection.toggle("action");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear_returns_to_pass_through() {
        let mut selection: GenreSelection =
            ["rpg".to_string(), "action".to_string()].into_iter().collect();
        selection.clear();

        let records = sample();
        assert_eq!(filter_records(&records, &selection), records);
    }

    #[test]
    fn test_resolve_name_known_and_unknown() {
        let genres = vec![
            Genre {
                id: "action".to_string(),
                name: "Action".to_string(),
            },
            Genre {
                id: "rpg".to_string(),
                name: "Role Playing".to_string(),
            },
        ];

        assert_eq!(resolve_name("rpg", &genres), "Role Playing");
        assert_eq!(resolve_name("unknown-id", &genres), "unknown-id");
    }
}
