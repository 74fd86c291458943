use serde::Deserialize;
use tracing::{trace, warn};

use crate::term::internal::HpoTermInternal;
use crate::{HpoTermId, Ontology, PxfResult};

const HPO_IRI_PREFIX: &str = "http://purl.obolibrary.org/obo/HP_";
const ALT_ID_PRED: &str = "http://www.geneontology.org/formats/oboInOwl#hasAlternativeId";
const REPLACED_BY_PRED: &str = "http://purl.obolibrary.org/obo/IAO_0100001";

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    graphs: Vec<Graph>,
}

#[derive(Debug, Deserialize)]
struct Graph {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    basic_property_values: Vec<PropertyValue>,
}

#[derive(Debug, Deserialize)]
struct PropertyValue {
    pred: String,
    val: String,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
    #[serde(default)]
    lbl: Option<String>,
    #[serde(default, rename = "type")]
    node_type: Option<String>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    sub: String,
    pred: String,
    obj: String,
}

/// Parses an OBO Graphs JSON document into the ontology
///
/// Only `CLASS` nodes with an HPO IRI and `is_a` edges are used.
pub(crate) fn parse_obographs(content: &str, ontology: &mut Ontology) -> PxfResult<()> {
    let document: GraphDocument = serde_json::from_str(content)?;

    for graph in document.graphs {
        if let Some(version) = graph.meta.as_ref().and_then(|meta| meta.version.as_deref()) {
            ontology.set_version(version_from_iri(version));
        }

        let mut deprecated: Vec<(HpoTermId, Option<HpoTermId>)> = Vec::new();
        let mut alt_ids: Vec<(HpoTermId, HpoTermId)> = Vec::new();

        for node in &graph.nodes {
            if node.node_type.as_deref().is_some_and(|t| t != "CLASS") {
                continue;
            }
            let Some(id) = term_id_from_iri(&node.id) else {
                trace!("Ignoring node {}", node.id);
                continue;
            };
            let name = node.lbl.clone().unwrap_or_else(|| id.to_string());
            let id = ontology.add_term(HpoTermInternal::new(name, id));

            let Some(meta) = &node.meta else {
                continue;
            };
            let mut replacement = None;
            for property in &meta.basic_property_values {
                match property.pred.as_str() {
                    ALT_ID_PRED => match term_id_from_iri(&property.val) {
                        Some(alt_id) => alt_ids.push((id, alt_id)),
                        None => warn!("Invalid alternative id {} of {id}", property.val),
                    },
                    REPLACED_BY_PRED => replacement = term_id_from_iri(&property.val),
                    _ => (),
                }
            }
            if meta.deprecated {
                deprecated.push((id, replacement));
            }
        }

        for edge in &graph.edges {
            if edge.pred != "is_a" {
                continue;
            }
            let (Some(child), Some(parent)) =
                (term_id_from_iri(&edge.sub), term_id_from_iri(&edge.obj))
            else {
                continue;
            };
            if ontology.add_parent(parent, child).is_err() {
                warn!("Unable to link {child} to parent {parent}");
            }
        }

        for (id, alt_id) in alt_ids {
            ontology.add_alt_id(id, alt_id)?;
        }
        for (id, replacement) in deprecated {
            ontology.set_obsolete(id, replacement)?;
        }
    }
    Ok(())
}

/// Accepts `http://purl.obolibrary.org/obo/HP_0000001` and `HP:0000001`
fn term_id_from_iri(value: &str) -> Option<HpoTermId> {
    match value.strip_prefix(HPO_IRI_PREFIX) {
        Some(local) => HpoTermId::try_from(format!("HP:{local}").as_str()).ok(),
        None => HpoTermId::try_from(value).ok(),
    }
}

/// `http://purl.obolibrary.org/obo/hp/releases/2022-10-05/hp.json` -> `2022-10-05`
fn version_from_iri(iri: &str) -> &str {
    iri.split('/')
        .rev()
        .find(|part| part.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(iri)
}

#[cfg(test)]
mod test {
    use super::*;

    const GRAPH: &str = r#"{
      "graphs": [{
        "id": "http://purl.obolibrary.org/obo/hp.json",
        "meta": {"version": "http://purl.obolibrary.org/obo/hp/releases/2022-10-05/hp.json"},
        "nodes": [
          {"id": "http://purl.obolibrary.org/obo/HP_0000001", "lbl": "All", "type": "CLASS"},
          {"id": "http://purl.obolibrary.org/obo/HP_0000118", "lbl": "Phenotypic abnormality", "type": "CLASS"},
          {"id": "http://purl.obolibrary.org/obo/HP_0000478", "lbl": "Abnormality of the eye", "type": "CLASS",
           "meta": {"basicPropertyValues": [
             {"pred": "http://www.geneontology.org/formats/oboInOwl#hasAlternativeId", "val": "HP:0001098"}
           ]}},
          {"id": "http://purl.obolibrary.org/obo/HP_0000284", "lbl": "obsolete Abnormality of the ocular region", "type": "CLASS",
           "meta": {"deprecated": true, "basicPropertyValues": [
             {"pred": "http://purl.obolibrary.org/obo/IAO_0100001", "val": "http://purl.obolibrary.org/obo/HP_0000478"}
           ]}},
          {"id": "http://purl.obolibrary.org/obo/UBERON_0000970", "lbl": "eye", "type": "CLASS"},
          {"id": "http://purl.obolibrary.org/obo/hp#has_part", "type": "PROPERTY"}
        ],
        "edges": [
          {"sub": "http://purl.obolibrary.org/obo/HP_0000118", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/HP_0000001"},
          {"sub": "http://purl.obolibrary.org/obo/HP_0000478", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/HP_0000118"},
          {"sub": "http://purl.obolibrary.org/obo/HP_0000478", "pred": "http://purl.obolibrary.org/obo/BFO_0000050", "obj": "http://purl.obolibrary.org/obo/UBERON_0000970"}
        ]
      }]
    }"#;

    #[test]
    fn parse_graph() {
        let mut ont = Ontology::default();
        parse_obographs(GRAPH, &mut ont).unwrap();

        assert_eq!(ont.len(), 4);
        assert_eq!(ont.version(), Some("2022-10-05"));
        assert_eq!(ont.hpo(478u32).unwrap().parents().count(), 1);
        assert_eq!(ont.primary_id(1098u32.into()), Some(478u32.into()));
        assert!(ont.hpo(284u32).unwrap().is_obsolete());
        assert_eq!(ont.primary_id(284u32.into()), Some(478u32.into()));
    }

    #[test]
    fn categories_from_graph() {
        let ont = Ontology::from_obographs_str(GRAPH).unwrap();
        assert_eq!(ont.categories().len(), 1);
        assert!(ont.exists_path(478u32.into(), crate::ROOT_ID));
    }

    #[test]
    fn iri_conversion() {
        assert_eq!(
            term_id_from_iri("http://purl.obolibrary.org/obo/HP_0001166"),
            Some(1166u32.into())
        );
        assert_eq!(term_id_from_iri("HP:0001166"), Some(1166u32.into()));
        assert_eq!(term_id_from_iri("http://purl.obolibrary.org/obo/MONDO_0001166"), None);
    }

    #[test]
    fn invalid_json() {
        let mut ont = Ontology::default();
        assert!(parse_obographs("{\"graphs\": 3}", &mut ont).is_err());
    }
}
