use std::collections::hash_map::Keys;
use std::collections::HashMap;

use crate::term::internal::HpoTermInternal;
use crate::HpoTermId;

/// Owns every term of the ontology and indexes their alternative ids
pub(crate) struct Arena {
    terms: HashMap<HpoTermId, HpoTermInternal>,
    alt_ids: HashMap<HpoTermId, HpoTermId>,
}

impl Arena {
    /// The number of terms, alternative ids are not counted
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Inserts the term and returns its id
    ///
    /// An existing term with the same id is replaced
    pub fn insert(&mut self, term: HpoTermInternal) -> HpoTermId {
        let id = *term.id();
        self.terms.insert(id, term);
        id
    }

    /// Registers `alt_id` as an alternative id of the primary term `id`
    ///
    /// Returns `false` if `id` is not a term of the arena
    pub fn insert_alt_id(&mut self, id: HpoTermId, alt_id: HpoTermId) -> bool {
        match self.terms.get_mut(&id) {
            Some(term) => {
                term.add_alt_id(alt_id);
                self.alt_ids.insert(alt_id, id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: HpoTermId) -> Option<&HpoTermInternal> {
        self.terms.get(&id)
    }

    pub fn get_mut(&mut self, id: HpoTermId) -> Option<&mut HpoTermInternal> {
        self.terms.get_mut(&id)
    }

    /// `true` only for primary ids
    pub fn contains(&self, id: HpoTermId) -> bool {
        self.terms.contains_key(&id)
    }

    /// The primary id that declares `alt_id`
    pub fn primary_of(&self, alt_id: HpoTermId) -> Option<HpoTermId> {
        self.alt_ids.get(&alt_id).copied()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.terms.keys(),
        }
    }

    pub fn keys(&self) -> Vec<HpoTermId> {
        self.terms.keys().copied().collect()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: HashMap::with_capacity(crate::DEFAULT_NUM_TERMS),
            alt_ids: HashMap::new(),
        }
    }
}

/// Iterates the primary [`HpoTermId`]s of the arena in no particular order
pub(crate) struct Iter<'a> {
    inner: Keys<'a, HpoTermId, HpoTermInternal>,
}

impl Iterator for Iter<'_> {
    type Item = HpoTermId;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alternative_ids() {
        let mut arena = Arena::default();
        let id = arena.insert(HpoTermInternal::new(
            "Autosomal dominant inheritance".into(),
            6u32.into(),
        ));
        assert!(arena.insert_alt_id(id, 1415u32.into()));
        assert!(!arena.insert_alt_id(5u32.into(), 1453u32.into()));

        assert_eq!(arena.primary_of(1415u32.into()), Some(id));
        assert_eq!(arena.primary_of(1453u32.into()), None);
        assert!(arena.contains(id));
        assert!(!arena.contains(1415u32.into()));
        assert_eq!(arena.len(), 1);
        assert!(arena.get(id).unwrap().alt_ids().contains(&1415u32.into()));
    }
}
