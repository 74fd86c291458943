//! Loading the HPO from OBO and OBO Graphs files

use phenopacket_tools::{HpoTermId, Ontology, PhenopacketError};

use crate::common::{data, hpo};

#[test]
fn obo_and_obographs_are_equivalent() {
    let obo = hpo();
    let graph = Ontology::from_file(data("small.json")).unwrap();

    assert_eq!(obo.len(), graph.len());
    assert_eq!(obo.version(), graph.version());
    assert_eq!(obo.categories(), graph.categories());

    for term in obo.hpos() {
        let other = graph.hpo(*term.id()).unwrap();
        assert_eq!(term.name(), other.name());
        assert_eq!(term.parent_ids(), other.parent_ids(), "{}", term.id());
        assert_eq!(term.all_parent_ids(), other.all_parent_ids(), "{}", term.id());
        assert_eq!(term.is_obsolete(), other.is_obsolete());
    }
}

#[test]
fn obographs_alternative_and_obsolete_ids() {
    let graph = Ontology::from_file(data("small.json")).unwrap();
    assert_eq!(
        graph.primary_id(HpoTermId::from(1447u32)),
        Some(HpoTermId::from(6u32))
    );
    assert_eq!(
        graph.primary_id(HpoTermId::from(284u32)),
        Some(HpoTermId::from(478u32))
    );
    assert!(graph.hpo(284u32).unwrap().is_obsolete());
    assert_eq!(graph.primary_id(HpoTermId::from(9_999_999u32)), None);
}

#[test]
fn obographs_ignores_other_ontologies() {
    let graph = Ontology::from_file(data("small.json")).unwrap();
    let eye = graph.hpo(478u32).unwrap();
    assert_eq!(eye.parent_ids().len(), 1);
    assert!(eye.parent_ids().contains(&HpoTermId::from(118u32)));
}

#[test]
fn organ_system_paths() {
    let ontology = hpo();
    let hypertelorism = HpoTermId::from(316u32);
    assert!(ontology.exists_path(hypertelorism, 478u32.into()));
    assert!(ontology.exists_path(hypertelorism, 152u32.into()));
    assert!(!ontology.exists_path(hypertelorism, 598u32.into()));
}

#[test]
fn unsupported_extension() {
    let err = Ontology::from_file(data("v2-marfan.yaml")).unwrap_err();
    assert!(matches!(err, PhenopacketError::UnknownFormat(_)));
}

#[test]
fn missing_file() {
    let err = Ontology::from_file(data("missing.obo")).unwrap_err();
    assert!(matches!(err, PhenopacketError::CannotOpenFile(_)));
}
