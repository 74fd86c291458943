use std::ops::BitOr;

use smallvec::SmallVec;

use crate::HpoTermId;

const DEFAULT_GROUP_SIZE: usize = 30;

/// A sorted set of unique [`HpoTermId`]s
///
/// Used for the parents, ancestors and children of a term and for the
/// observed and excluded features of an individual. Small groups are
/// stored inline and lookups are a binary search.
///
/// ```
/// use phenopacket_tools::{HpoGroup, HpoTermId};
///
/// let organ_systems: HpoGroup = [40064u32, 478, 707, 478]
///     .into_iter()
///     .map(HpoTermId::from)
///     .collect();
///
/// assert_eq!(organ_systems.len(), 3);
/// assert_eq!(organ_systems.iter().next(), Some(HpoTermId::from(478u32)));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HpoGroup {
    ids: SmallVec<[HpoTermId; DEFAULT_GROUP_SIZE]>,
}

impl HpoGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: SmallVec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds the id, returns `false` if it was already present
    pub fn insert(&mut self, id: HpoTermId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    pub fn contains(&self, id: &HpoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Iterates the ids in ascending order
    pub fn iter(&self) -> HpoTermIds<'_> {
        HpoTermIds {
            inner: self.ids.iter(),
        }
    }

    /// The ids in ascending order
    pub fn as_slice(&self) -> &[HpoTermId] {
        &self.ids
    }
}

impl FromIterator<HpoTermId> for HpoGroup {
    fn from_iter<T: IntoIterator<Item = HpoTermId>>(iter: T) -> Self {
        let mut group = HpoGroup::new();
        group.extend(iter);
        group
    }
}

impl Extend<HpoTermId> for HpoGroup {
    fn extend<T: IntoIterator<Item = HpoTermId>>(&mut self, iter: T) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl<'a> IntoIterator for &'a HpoGroup {
    type Item = HpoTermId;
    type IntoIter = HpoTermIds<'a>;

    fn into_iter(self) -> HpoTermIds<'a> {
        self.iter()
    }
}

/// An iterator over the [`HpoTermId`]s of an [`HpoGroup`]
pub struct HpoTermIds<'a> {
    inner: std::slice::Iter<'a, HpoTermId>,
}

impl Iterator for HpoTermIds<'_> {
    type Item = HpoTermId;
    fn next(&mut self) -> Option<HpoTermId> {
        self.inner.next().copied()
    }
}

/// The union of both groups
impl BitOr for &HpoGroup {
    type Output = HpoGroup;

    fn bitor(self, rhs: &HpoGroup) -> HpoGroup {
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut group = large.clone();
        group.extend(small);
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[u32]) -> HpoGroup {
        ids.iter().copied().map(HpoTermId::from).collect()
    }

    #[test]
    fn insert_keeps_order_and_uniqueness() {
        let mut group = HpoGroup::new();
        assert!(group.insert(40064u32.into()));
        assert!(group.insert(118u32.into()));
        assert!(!group.insert(40064u32.into()));
        assert!(group.insert(478u32.into()));

        let expected: Vec<HpoTermId> = vec![118u32.into(), 478u32.into(), 40064u32.into()];
        assert_eq!(group.as_slice(), expected.as_slice());
        assert!(group.contains(&478u32.into()));
        assert!(!group.contains(&1u32.into()));
    }

    #[test]
    fn observed_and_excluded_union() {
        let observed = group(&[1166, 316]);
        let excluded = group(&[707, 316, 598]);

        let all = &observed | &excluded;
        assert_eq!(all, group(&[316, 598, 707, 1166]));
        assert_eq!(&excluded | &observed, all);
        assert_eq!(&observed | &HpoGroup::new(), observed);
    }

    #[test]
    fn extend_with_group() {
        let mut ancestors = group(&[100887]);
        ancestors.extend(&group(&[1, 118, 478]));
        assert_eq!(ancestors.iter().count(), 4);
        assert_eq!(ancestors.iter().last(), Some(100887u32.into()));
    }

    #[test]
    fn spill_beyond_inline_capacity() {
        let group: HpoGroup = (0..100u32).rev().map(HpoTermId::from).collect();
        assert_eq!(group.len(), 100);
        assert_eq!(group.iter().next(), Some(HpoTermId::from(0u32)));
        assert!(group.contains(&99u32.into()));
    }
}
