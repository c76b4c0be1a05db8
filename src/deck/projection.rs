use super::settings::{
    SortMode,
    ViewSettings,
};
use crate::core::models::CardSet;

/// Computes the displayed order as indices into `sets`. Pure: fixed
/// inputs produce an equal index sequence on every call.
pub fn project(sets: &[CardSet], settings: &ViewSettings) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..sets.len())
        .filter(|&index| !settings.bookmarked_only || sets[index].is_bookmarked)
        .collect();

    match settings.sort_mode {
        SortMode::Latest => {
            // Stable sort: equal timestamps keep their relative order.
            indices.sort_by(|&lhs, &rhs| sets[rhs].created_at.cmp(&sets[lhs].created_at));
        }
        SortMode::Random => {
            // The random order is a permutation materialized into the
            // store when the mode is switched on; pass it through.
        }
    }

    indices
}

/// Overview search: case-insensitive substring match against each
/// word's text, translation, and definition. A blank query matches
/// everything.
pub fn matches_search(set: &CardSet, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    set.words.iter().any(|entry| {
        entry.word.to_lowercase().contains(&query)
            || entry.translation.to_lowercase().contains(&query)
            || entry.definition.to_lowercase().contains(&query)
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use uuid::Uuid;

    use super::*;
    use crate::core::models::WordEntry;

    fn set_at(seconds: i64, word: &str) -> CardSet {
        CardSet {
            id: Uuid::new_v4(),
            created_at: DateTime::from_timestamp(seconds, 0).unwrap(),
            words: vec![WordEntry {
                word: word.to_string(),
                phonetic: String::new(),
                translation: format!("{word}-translation"),
                definition: format!("{word}-definition"),
                mnemonic: String::new(),
                examples: Vec::new(),
            }],
            is_bookmarked: false,
        }
    }

    #[test]
    fn test_latest_sorts_by_recency() {
        let sets = vec![set_at(100, "a"), set_at(300, "b"), set_at(200, "c")];
        let indices = project(&sets, &ViewSettings::default());
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_latest_sort_is_stable_on_ties() {
        let sets = vec![set_at(100, "a"), set_at(100, "b"), set_at(100, "c")];
        let indices = project(&sets, &ViewSettings::default());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_bookmark_filter_is_an_order_preserving_subset() {
        let mut sets = vec![set_at(100, "a"), set_at(300, "b"), set_at(200, "c")];
        sets[0].is_bookmarked = true;
        sets[2].is_bookmarked = true;

        let unfiltered = project(&sets, &ViewSettings::default());
        let settings = ViewSettings { bookmarked_only: true, ..Default::default() };
        let filtered = project(&sets, &settings);

        assert_eq!(filtered, vec![2, 0]);
        assert!(filtered.iter().all(|index| sets[*index].is_bookmarked));

        // Relative order matches the unfiltered projection.
        let positions: Vec<usize> = filtered
            .iter()
            .map(|index| unfiltered.iter().position(|other| other == index).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_random_mode_passes_store_order_through() {
        let mut sets = vec![set_at(100, "a"), set_at(300, "b"), set_at(200, "c")];
        sets[1].is_bookmarked = true;

        let settings = ViewSettings { sort_mode: SortMode::Random, ..Default::default() };
        assert_eq!(project(&sets, &settings), vec![0, 1, 2]);

        let settings = ViewSettings {
            sort_mode: SortMode::Random,
            bookmarked_only: true,
            ..Default::default()
        };
        assert_eq!(project(&sets, &settings), vec![1]);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let sets = vec![set_at(100, "a"), set_at(300, "b"), set_at(200, "c")];
        let settings = ViewSettings::default();
        assert_eq!(project(&sets, &settings), project(&sets, &settings));
    }

    #[test]
    fn test_search_matches_word_translation_and_definition() {
        let set = set_at(100, "Dominate");

        assert!(matches_search(&set, "domin"));
        assert!(matches_search(&set, "DOMINATE"));
        assert!(matches_search(&set, "dominate-translation"));
        assert!(matches_search(&set, "dominate-definition"));
        assert!(!matches_search(&set, "nominate-xyz"));

        assert!(matches_search(&set, ""));
        assert!(matches_search(&set, "   "));
    }
}
