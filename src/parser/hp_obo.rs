use tracing::{trace, warn};

use crate::term::internal::HpoTermInternal;
use crate::{HpoTermId, Ontology, PhenopacketError, PxfResult};

/// Tuples of `(child, parent)`
type Connections = Vec<(HpoTermId, HpoTermId)>;

/// Everything a `[Term]` stanza declares besides id and name
#[derive(Default)]
struct TermRelations {
    alt_ids: Vec<HpoTermId>,
    obsolete: bool,
    replaced_by: Option<HpoTermId>,
}

/// Parses the content of an OBO flat file into the ontology
///
/// Terms are added first. Parent links, alternative ids and
/// obsolescence are only applied once all terms are known, so the order
/// of the stanzas does not matter.
pub(crate) fn parse_obo(content: &str, ontology: &mut Ontology) -> PxfResult<()> {
    let mut connections: Connections = Vec::new();
    let mut relations: Vec<(HpoTermId, TermRelations)> = Vec::new();

    for (idx, stanza) in stanzas(content).into_iter().enumerate() {
        let Some((header, body)) = stanza.split_first() else {
            continue;
        };
        if idx == 0 && !header.starts_with('[') {
            parse_header(&stanza, ontology);
            continue;
        }
        if *header != "[Term]" {
            trace!("Ignoring stanza: {header}");
            continue;
        }
        let Some(term) = term_from_obo(body)? else {
            continue;
        };
        let id = ontology.add_term(term);
        add_connections(&mut connections, body, id)?;
        relations.push((id, term_relations(body)?));
    }

    for (child, parent) in connections {
        if ontology.add_parent(parent, child).is_err() {
            warn!("Parent {parent} of {child} is not part of the ontology");
        }
    }

    for (id, relation) in relations {
        for alt_id in relation.alt_ids {
            ontology.add_alt_id(id, alt_id)?;
        }
        if relation.obsolete {
            ontology.set_obsolete(id, relation.replaced_by)?;
        }
    }
    Ok(())
}

/// Splits the content at blank lines, ignoring comments and trailing whitespace
fn stanzas(content: &str) -> Vec<Vec<&str>> {
    let mut res: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines().map(str::trim_end) {
        if line.is_empty() {
            if !current.is_empty() {
                res.push(std::mem::take(&mut current));
            }
        } else if line.starts_with('[') && !current.is_empty() {
            res.push(std::mem::take(&mut current));
            current.push(line);
        } else if !line.starts_with('!') {
            current.push(line);
        }
    }
    if !current.is_empty() {
        res.push(current);
    }
    res
}

fn parse_header(lines: &[&str], ontology: &mut Ontology) {
    for line in lines {
        if let Some(("data-version", value)) = parse_line(line) {
            let version = value.rsplit('/').next().unwrap_or(value);
            ontology.set_version(version);
        }
    }
}

/// Returns `None` for terms outside of the `HP` namespace
fn term_from_obo(lines: &[&str]) -> PxfResult<Option<HpoTermInternal>> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    for line in lines {
        match parse_line(line) {
            Some(("id", value)) => id = Some(value),
            Some(("name", value)) => name = Some(value),
            _ => (),
        }
        if id.is_some() && name.is_some() {
            break;
        }
    }

    let Some(id) = id else {
        return Err(PhenopacketError::InvalidInput(format!(
            "Term without id: {}",
            lines.join("\n")
        )));
    };
    if !id.starts_with("HP:") {
        trace!("Ignoring non-HPO term {id}");
        return Ok(None);
    }
    let name = name.unwrap_or_else(|| {
        warn!("Term {id} has no name");
        id
    });
    HpoTermInternal::try_new(id, name).map(Some)
}

fn add_connections(connections: &mut Connections, lines: &[&str], id: HpoTermId) -> PxfResult<()> {
    for line in lines {
        if let Some(("is_a", value)) = parse_line(line) {
            connections.push((id, term_id_from_value(value)?));
        }
    }
    Ok(())
}

fn term_relations(lines: &[&str]) -> PxfResult<TermRelations> {
    let mut relations = TermRelations::default();
    for line in lines {
        match parse_line(line) {
            Some(("alt_id", value)) => relations.alt_ids.push(term_id_from_value(value)?),
            Some(("is_obsolete", value)) => relations.obsolete = value == "true",
            Some(("replaced_by", value)) => {
                relations.replaced_by = Some(term_id_from_value(value)?);
            }
            _ => (),
        }
    }
    Ok(relations)
}

/// Parses `HP:0000001 ! All` or `HP:0000001`
fn term_id_from_value(value: &str) -> PxfResult<HpoTermId> {
    let id = value.split_whitespace().next().unwrap_or_default();
    HpoTermId::try_from(id)
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_stanzas() {
        let content = "format-version: 1.2\n\n! comment\n[Term]\nid: HP:0000001\nname: All\n\n\n[Term]\r\nid: HP:0000002\r\nname: Foo\r\n[Typedef]\nid: part_of\n";
        let stanzas = stanzas(content);
        assert_eq!(stanzas.len(), 4);
        assert_eq!(stanzas[1], vec!["[Term]", "id: HP:0000001", "name: All"]);
        assert_eq!(stanzas[2], vec!["[Term]", "id: HP:0000002", "name: Foo"]);
        assert_eq!(stanzas[3][0], "[Typedef]");
    }

    #[test]
    fn parse_terms() {
        let mut ont = Ontology::default();
        parse_obo(include_str!("../../tests/small.obo"), &mut ont).unwrap();

        assert_eq!(ont.len(), 21);
        assert!(ont.hpo(2u32).is_none());
        assert_eq!(ont.hpo(316u32).unwrap().parents().count(), 2);
        assert_eq!(ont.hpo(1166u32).unwrap().parents().count(), 1);
        assert_eq!(ont.hpo(1u32).unwrap().parents().count(), 0);
        assert_eq!(ont.hpo(1u32).unwrap().children().count(), 2);
        assert_eq!(ont.version(), Some("2022-10-05"));
    }

    #[test]
    fn missing_parent_is_skipped() {
        let mut ont = Ontology::default();
        parse_obo(
            "[Term]\nid: HP:0000002\nname: Orphan\nis_a: HP:0000001 ! All\n",
            &mut ont,
        )
        .unwrap();
        assert_eq!(ont.len(), 1);
        assert_eq!(ont.hpo(2u32).unwrap().parents().count(), 0);
    }

    #[test]
    fn term_without_id() {
        let mut ont = Ontology::default();
        assert!(parse_obo("[Term]\nname: Foo\n", &mut ont).is_err());
    }

    #[test]
    fn foreign_terms_are_ignored() {
        let mut ont = Ontology::default();
        parse_obo(
            "[Term]\nid: UBERON:0000001\nname: Foo\n\n[Term]\nid: HP:0000001\nname: All\n",
            &mut ont,
        )
        .unwrap();
        assert_eq!(ont.len(), 1);
    }

    #[test]
    fn term_id_values() {
        assert_eq!(
            term_id_from_value("HP:0000001 ! All").unwrap(),
            HpoTermId::from(1u32)
        );
        assert!(term_id_from_value("").is_err());
    }
}
