use crate::term::{HpoChildren, HpoGroup, HpoParents, HpoTermId};
use crate::{PxfResult, DEFAULT_NUM_ALL_PARENTS, DEFAULT_NUM_PARENTS};

/// Whether a term can still be used to annotate phenotypes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TermStatus {
    #[default]
    Current,
    Obsolete { replaced_by: Option<HpoTermId> },
}

/// The owned data of one term, stored in the ontology arena
#[derive(Debug)]
pub(crate) struct HpoTermInternal {
    id: HpoTermId,
    name: String,
    parents: HpoParents,
    ancestors: HpoParents,
    ancestors_cached: bool,
    children: HpoChildren,
    alt_ids: HpoGroup,
    status: TermStatus,
}

impl HpoTermInternal {
    pub fn new(name: String, id: HpoTermId) -> HpoTermInternal {
        HpoTermInternal {
            id,
            name,
            parents: HpoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            ancestors: HpoGroup::with_capacity(DEFAULT_NUM_ALL_PARENTS),
            ancestors_cached: false,
            children: HpoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            alt_ids: HpoGroup::new(),
            status: TermStatus::Current,
        }
    }

    /// Parses the `id` of an OBO stanza
    pub fn try_new(id: &str, name: &str) -> PxfResult<HpoTermInternal> {
        let id = HpoTermId::try_from(id)?;
        Ok(HpoTermInternal::new(name.to_string(), id))
    }

    pub fn id(&self) -> &HpoTermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &HpoParents {
        &self.parents
    }

    pub fn children(&self) -> &HpoChildren {
        &self.children
    }

    /// The transitive closure of `parents`, empty until it is cached
    pub fn ancestors(&self) -> &HpoParents {
        &self.ancestors
    }

    pub fn ancestors_cached(&self) -> bool {
        self.ancestors_cached
    }

    pub fn cache_ancestors(&mut self, ancestors: HpoParents) {
        self.ancestors = ancestors;
        self.ancestors_cached = true;
    }

    pub fn alt_ids(&self) -> &HpoGroup {
        &self.alt_ids
    }

    pub fn add_parent(&mut self, parent_id: HpoTermId) {
        self.parents.insert(parent_id);
        self.ancestors_cached = false;
    }

    pub fn add_child(&mut self, child_id: HpoTermId) {
        self.children.insert(child_id);
    }

    pub fn add_alt_id(&mut self, alt_id: HpoTermId) -> bool {
        self.alt_ids.insert(alt_id)
    }

    pub fn status(&self) -> TermStatus {
        self.status
    }

    pub fn mark_obsolete(&mut self, replaced_by: Option<HpoTermId>) {
        self.status = TermStatus::Obsolete { replaced_by };
    }
}

impl PartialEq for HpoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HpoTermInternal {}
