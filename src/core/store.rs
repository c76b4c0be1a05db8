use std::sync::Arc;

use uuid::Uuid;

use super::{
    errors::MnemoError,
    models::CardSet,
};

/// Canonical collection of card sets. Mutations build a new collection
/// value behind the `Arc`, so snapshots handed out earlier keep reading
/// the state they were taken from.
pub struct CardStore {
    sets: Arc<Vec<CardSet>>,
}

impl CardStore {
    pub fn new(sets: Vec<CardSet>) -> Self {
        Self { sets: Arc::new(sets) }
    }

    pub fn snapshot(&self) -> Arc<Vec<CardSet>> {
        Arc::clone(&self.sets)
    }

    pub fn sets(&self) -> &[CardSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardSet> {
        self.sets.get(index)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.sets.iter().position(|set| set.id == id)
    }

    pub fn add(&mut self, set: CardSet) {
        let mut sets = self.sets.as_ref().clone();
        sets.push(set);
        self.sets = Arc::new(sets);
    }

    pub fn toggle_bookmark(&mut self, id: Uuid) -> Result<(), MnemoError> {
        if self.position_of(id).is_none() {
            return Err(MnemoError::NotFound(id));
        }

        let sets = self
            .sets
            .iter()
            .map(|set| {
                let mut set = set.clone();
                if set.id == id {
                    set.is_bookmarked = !set.is_bookmarked;
                }
                set
            })
            .collect();
        self.sets = Arc::new(sets);
        Ok(())
    }

    /// Replaces the collection order with `order`, a permutation of the
    /// current indices. Used to materialize a shuffle snapshot.
    pub fn reorder(&mut self, order: &[usize]) {
        let sets = order.iter().filter_map(|&index| self.sets.get(index).cloned()).collect();
        self.sets = Arc::new(sets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::WordEntry;

    fn word(text: &str) -> WordEntry {
        WordEntry {
            word: text.to_string(),
            phonetic: String::new(),
            translation: String::new(),
            definition: String::new(),
            mnemonic: String::new(),
            examples: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_bookmark() {
        let set = CardSet::new(vec![word("dominate")]);
        let id = set.id;
        let mut store = CardStore::new(vec![set]);

        store.toggle_bookmark(id).unwrap();
        assert!(store.get(0).unwrap().is_bookmarked);

        store.toggle_bookmark(id).unwrap();
        assert!(!store.get(0).unwrap().is_bookmarked);

        let missing = Uuid::new_v4();
        assert!(matches!(store.toggle_bookmark(missing), Err(MnemoError::NotFound(_))));
    }

    #[test]
    fn test_snapshot_unaffected_by_mutation() {
        let set = CardSet::new(vec![word("nominate")]);
        let id = set.id;
        let mut store = CardStore::new(vec![set]);

        let before = store.snapshot();
        store.toggle_bookmark(id).unwrap();
        store.add(CardSet::new(vec![word("intimidate")]));

        assert_eq!(before.len(), 1);
        assert!(!before[0].is_bookmarked);
        assert_eq!(store.len(), 2);
        assert!(store.get(0).unwrap().is_bookmarked);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let a = CardSet::new(vec![word("a")]);
        let b = CardSet::new(vec![word("b")]);
        let c = CardSet::new(vec![word("c")]);
        let ids = [a.id, b.id, c.id];
        let mut store = CardStore::new(vec![a, b, c]);

        store.reorder(&[2, 0, 1]);
        assert_eq!(store.get(0).unwrap().id, ids[2]);
        assert_eq!(store.get(1).unwrap().id, ids[0]);
        assert_eq!(store.get(2).unwrap().id, ids[1]);
    }
}
