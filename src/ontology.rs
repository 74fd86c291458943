use core::fmt::Debug;
use std::path::Path;

use tracing::{debug, warn};

use crate::parser;
use crate::term::internal::{HpoTermInternal, TermStatus};
use crate::term::{HpoGroup, HpoTerm};
use crate::{HpoTermId, PhenopacketError, PxfResult};

mod termarena;
use termarena::Arena;

/// `Ontology` holds the Human Phenotype Ontology used by the semantic validators
///
/// The [`Ontology`] struct holds all [`HpoTerm`]s together with their
/// `is_a` hierarchy, the transitive closure of all ancestors, alternative
/// ids and obsolescence information.
///
/// It is immutable after loading and can be shared between validators
/// and threads, e.g. through an `Arc<Ontology>`.
///
/// # Examples
///
/// ```
/// use phenopacket_tools::{HpoTermId, Ontology};
///
/// let ontology = Ontology::from_file("tests/small.obo").unwrap();
///
/// let absent_term = HpoTermId::try_from("HP:9999999").unwrap();
/// assert!(ontology.hpo(absent_term).is_none());
///
/// let present_term = HpoTermId::try_from("HP:0000001").unwrap();
/// let root_term = ontology.hpo(present_term).unwrap();
/// assert_eq!(root_term.name(), "All");
///
/// // simplified way to get an `HpoTerm` by using the `u32` `HpoTermId`
/// let term = ontology.hpo(118u32).unwrap();
/// assert_eq!(term.name(), "Phenotypic abnormality");
///
/// // Iterate all HPO terms
/// for term in &ontology {
///     // do something with term
///     println!("{} | {}", term.id(), term.name());
/// }
/// ```
#[derive(Default)]
pub struct Ontology {
    hpo_terms: Arena,
    version: Option<String>,
    categories: HpoGroup,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.hpo_terms.len())
    }
}

/// Public API of the Ontology
///
/// Those methods are all safe to use
impl Ontology {
    /// Loads the ontology from a file
    ///
    /// The format is derived from the file extension: `.obo` files are
    /// parsed as OBO flat files, `.json` files as OBO Graphs JSON.
    ///
    /// # Errors
    ///
    /// - File not present or not readable: [`PhenopacketError::CannotOpenFile`]
    /// - Unsupported extension: [`PhenopacketError::UnknownFormat`]
    /// - Malformed content: [`PhenopacketError::InvalidInput`] or [`PhenopacketError::Json`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> PxfResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("obo") => Self::from_obo(path),
            Some("json") => Self::from_obographs(path),
            _ => Err(PhenopacketError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Loads the ontology from an `hp.obo` file
    ///
    /// # Errors
    ///
    /// See [`Ontology::from_file`]
    pub fn from_obo<P: AsRef<Path>>(path: P) -> PxfResult<Self> {
        let content = read_file(path.as_ref())?;
        Self::from_obo_str(&content)
    }

    /// Builds the ontology from the content of an OBO flat file
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidInput`] if a `[Term]` stanza is malformed
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    ///
    /// let obo = "format-version: 1.2\n\n[Term]\nid: HP:0000001\nname: All\n";
    /// let ontology = Ontology::from_obo_str(obo).unwrap();
    /// assert_eq!(ontology.len(), 1);
    /// ```
    pub fn from_obo_str(content: &str) -> PxfResult<Self> {
        let mut ont = Ontology::default();
        parser::hp_obo::parse_obo(content, &mut ont)?;
        ont.finalize();
        Ok(ont)
    }

    /// Loads the ontology from an `hp.json` OBO Graphs file
    ///
    /// # Errors
    ///
    /// See [`Ontology::from_file`]
    pub fn from_obographs<P: AsRef<Path>>(path: P) -> PxfResult<Self> {
        let content = read_file(path.as_ref())?;
        Self::from_obographs_str(&content)
    }

    /// Builds the ontology from the content of an OBO Graphs JSON document
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::Json`] if the document is not valid OBO Graphs JSON
    pub fn from_obographs_str(content: &str) -> PxfResult<Self> {
        let mut ont = Ontology::default();
        parser::obographs::parse_obographs(content, &mut ont)?;
        ont.finalize();
        Ok(ont)
    }

    /// Returns the number of HPO-Terms in the Ontology
    pub fn len(&self) -> usize {
        self.hpo_terms.len()
    }

    /// Returns `true` if the Ontology does not contain any HPO-Terms
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    /// let ontology = Ontology::default();
    /// assert!(ontology.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`HpoTerm`] of the provided [`HpoTermId`]
    ///
    /// If no such term is present in the Ontolgy, `None` is returned.
    /// Alternative ids are not resolved, use [`Ontology::primary_id`] for that.
    pub fn hpo<I: Into<HpoTermId>>(&self, term_id: I) -> Option<HpoTerm<'_>> {
        HpoTerm::try_new(self, &term_id.into()).ok()
    }

    /// Returns an Iterator of all [`HpoTerm`]s from the Ontology
    pub fn hpos(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns `true` if the id is a primary or an alternative id of a term
    pub fn contains(&self, term_id: HpoTermId) -> bool {
        self.hpo_terms.contains(term_id) || self.hpo_terms.primary_of(term_id).is_some()
    }

    /// Returns the current primary id of a term
    ///
    /// - a primary, non-obsolete id is returned as is
    /// - an alternative id is mapped to the term that declares it
    /// - an obsolete id is mapped to its replacement, if one is declared
    ///
    /// Returns `None` for unknown ids
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::{HpoTermId, Ontology};
    ///
    /// let ontology = Ontology::from_file("tests/small.obo").unwrap();
    /// // HP:0001415 is an alternative id of HP:0000006
    /// assert_eq!(ontology.primary_id(1415u32.into()), Some(HpoTermId::from(6u32)));
    /// assert_eq!(ontology.primary_id(6u32.into()), Some(HpoTermId::from(6u32)));
    /// assert_eq!(ontology.primary_id(9999999u32.into()), None);
    /// ```
    pub fn primary_id(&self, term_id: HpoTermId) -> Option<HpoTermId> {
        if let Some(primary) = self.hpo_terms.primary_of(term_id) {
            return Some(primary);
        }
        match self.get(term_id)?.status() {
            TermStatus::Obsolete {
                replaced_by: Some(replacement),
            } if self.hpo_terms.contains(replacement) => Some(replacement),
            _ => Some(term_id),
        }
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `term_id`
    ///
    /// A term is never its own ancestor. Both ids must be primary ids.
    pub fn exists_path(&self, term_id: HpoTermId, ancestor: HpoTermId) -> bool {
        self.get(term_id)
            .is_some_and(|term| term.ancestors().contains(&ancestor))
    }

    /// Returns the version of the ontology, e.g. `2022-10-05`
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns a reference to the categories of the Ontology
    ///
    /// Categories are top-level `HpoTermId`s used for categorizing
    /// individual `HpoTerm`s, e.g. the organ systems.
    ///
    /// See [`Ontology::set_default_categories()`] for more information
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    ///
    /// let ontology = Ontology::from_file("tests/small.obo").unwrap();
    /// assert_eq!(ontology.categories().len(), 5);
    /// ```
    pub fn categories(&self) -> &HpoGroup {
        &self.categories
    }

    /// Returns a mutable reference to the categories vector
    ///
    /// See [`Ontology::set_default_categories()`]
    pub fn categories_mut(&mut self) -> &mut HpoGroup {
        &mut self.categories
    }

    /// Sets the default categories for the Ontology
    ///
    /// Each direct child of [`Phenotypic abnormality`](crate::PHENOTYPE_ID)
    /// is considered one category, e.g.:
    ///
    /// - `HP:0000152 | Abnormality of head or neck`
    /// - `HP:0001507 | Growth abnormality`
    /// - ...
    ///
    /// # Errors
    ///
    /// This method requires that `HP:0000118 | Phenotypic abnormality`
    /// is present in the Ontology.
    pub fn set_default_categories(&mut self) -> PxfResult<()> {
        let phenotypes = self
            .hpo(crate::PHENOTYPE_ID)
            .ok_or(PhenopacketError::DoesNotExist)?;
        self.categories = phenotypes.children_ids().clone();
        Ok(())
    }
}

/// Methods to build the ontology
///
/// These methods are used by the parsers and should rarely be used by clients.
/// Calling these functions after [`Ontology::create_cache`] might leave the
/// ancestor cache outdated.
impl Ontology {
    /// Creates and inserts a new term to the ontology
    ///
    /// This method does not link the term to its parents
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    ///
    /// let mut ontology = Ontology::default();
    /// ontology.insert_term("FooBar".into(), 1u32);
    ///
    /// assert_eq!(ontology.len(), 1);
    /// ```
    pub fn insert_term<I: Into<HpoTermId>>(&mut self, name: String, id: I) {
        let term = HpoTermInternal::new(name, id.into());
        self.hpo_terms.insert(term);
    }

    /// Add a connection from an [`HpoTerm`] to its parent
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::DoesNotExist`] if the `parent_id` or `child_id`
    /// is not present in the Ontology
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    ///
    /// let mut ontology = Ontology::default();
    /// ontology.insert_term("Foo".into(), 1u32);
    /// ontology.insert_term("Bar".into(), 2u32);
    ///
    /// ontology.add_parent(1u32, 2u32).unwrap();
    ///
    /// assert!(ontology.hpo(2u32).unwrap().parent_ids().contains(&1u32.into()));
    /// assert!(ontology.add_parent(1u32, 3u32).is_err());
    /// ```
    pub fn add_parent<I: Into<HpoTermId> + Copy, J: Into<HpoTermId> + Copy>(
        &mut self,
        parent_id: I,
        child_id: J,
    ) -> PxfResult<()> {
        if !self.hpo_terms.contains(parent_id.into()) {
            return Err(PhenopacketError::DoesNotExist);
        }
        self.get_mut(child_id)
            .ok_or(PhenopacketError::DoesNotExist)?
            .add_parent(parent_id.into());
        if let Some(parent) = self.get_mut(parent_id) {
            parent.add_child(child_id.into());
        }
        Ok(())
    }

    /// Registers `alt_id` as an alternative id of `term_id`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::DoesNotExist`] if `term_id` is not present
    pub fn add_alt_id(&mut self, term_id: HpoTermId, alt_id: HpoTermId) -> PxfResult<()> {
        if self.hpo_terms.insert_alt_id(term_id, alt_id) {
            Ok(())
        } else {
            Err(PhenopacketError::DoesNotExist)
        }
    }

    /// Flags the term as obsolete, optionally naming its replacement
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::DoesNotExist`] if `term_id` is not present
    pub fn set_obsolete(
        &mut self,
        term_id: HpoTermId,
        replacement: Option<HpoTermId>,
    ) -> PxfResult<()> {
        self.get_mut(term_id)
            .ok_or(PhenopacketError::DoesNotExist)?
            .mark_obsolete(replacement);
        Ok(())
    }

    /// Sets the version of the ontology release
    pub fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    /// Computes the ancestors of every term, which [`Ontology::exists_path`] relies on
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::Ontology;
    ///
    /// let mut ontology = Ontology::default();
    /// ontology.insert_term("Root".into(), 1u32);
    /// ontology.insert_term("Foo".into(), 2u32);
    /// ontology.insert_term("Bar".into(), 3u32);
    ///
    /// ontology.add_parent(1u32, 2u32).unwrap();
    /// ontology.add_parent(2u32, 3u32).unwrap();
    ///
    /// // At this point #3 does not have info about grandparents
    /// assert!(!ontology.hpo(3u32).unwrap().all_parent_ids().contains(&1u32.into()));
    ///
    /// ontology.create_cache();
    /// assert!(ontology.hpo(3u32).unwrap().all_parent_ids().contains(&1u32.into()));
    /// ```
    pub fn create_cache(&mut self) {
        let term_ids: Vec<HpoTermId> = self.hpo_terms.keys();

        for id in term_ids {
            self.create_cache_of_grandparents(id);
        }
    }
}

/// Crate-only functions for setting up and building the Ontology
impl Ontology {
    /// Adds an [`HpoTermInternal`] to the ontology
    pub(crate) fn add_term(&mut self, term: HpoTermInternal) -> HpoTermId {
        self.hpo_terms.insert(term)
    }

    /// Caches all ancestors and derives the organ system categories
    ///
    /// An ontology without `Phenotypic abnormality` has no categories.
    fn finalize(&mut self) {
        self.create_cache();
        if self.set_default_categories().is_err() {
            warn!("The ontology does not contain {}", crate::PHENOTYPE_ID);
        }
        debug!(
            "Loaded ontology with {} terms and {} categories",
            self.len(),
            self.categories.len()
        );
    }

    /// Returns the `HpoGroup` of all ancestors, calculating it if needed
    ///
    /// Cyclic `is_a` relationships are not supported.
    fn all_grandparents(&mut self, term_id: HpoTermId) -> HpoGroup {
        let Some(term) = self.get(term_id) else {
            return HpoGroup::default();
        };
        if !term.ancestors_cached() {
            self.create_cache_of_grandparents(term_id);
        }
        self.get(term_id)
            .map(|term| term.ancestors().clone())
            .unwrap_or_default()
    }

    fn create_cache_of_grandparents(&mut self, term_id: HpoTermId) {
        let Some(term) = self.get(term_id) else {
            return;
        };
        let parents = term.parents().clone();
        let mut ancestors = parents.clone();
        for parent in &parents {
            ancestors.extend(&self.all_grandparents(parent));
        }
        if let Some(term) = self.get_mut(term_id) {
            term.cache_ancestors(ancestors);
        }
    }

    /// Returns the `HpoTermInternal` with the given `HpoTermId`
    ///
    /// Returns `None` if no such term is present
    pub(crate) fn get<I: Into<HpoTermId>>(&self, term_id: I) -> Option<&HpoTermInternal> {
        self.hpo_terms.get(term_id.into())
    }

    /// Returns a mutable reference to the `HpoTermInternal` with the given `HpoTermId`
    ///
    /// Returns `None` if no such term is present
    fn get_mut<I: Into<HpoTermId>>(&mut self, term_id: I) -> Option<&mut HpoTermInternal> {
        self.hpo_terms.get_mut(term_id.into())
    }
}

fn read_file(path: &Path) -> PxfResult<String> {
    std::fs::read_to_string(path)
        .map_err(|err| PhenopacketError::CannotOpenFile(format!("{}: {err}", path.display())))
}

/// Iterates the Ontology and yields [`HpoTerm`]s
pub struct Iter<'a> {
    inner: termarena::Iter<'a>,
    ontology: &'a Ontology,
}

impl<'a> std::iter::Iterator for Iter<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        for id in self.inner.by_ref() {
            if let Some(term) = self.ontology.get(id) {
                return Some(HpoTerm::new(self.ontology, term));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = HpoTerm<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.hpo_terms.iter(),
            ontology: self,
        }
    }
}
