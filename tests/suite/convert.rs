//! Converting the v1 Bethlem myopathy phenopacket

use phenopacket_tools::converter::V1ToV2Converter;
use phenopacket_tools::io::{parse_message, print_message, read_to_end, sniff, PhenopacketFormat};
use phenopacket_tools::model::{v1, v2};
use phenopacket_tools::validator::ValidationWorkflowRunner;
use phenopacket_tools::PhenopacketError;

use crate::common::data;

fn bethlem() -> v1::Phenopacket {
    let bytes = read_to_end(Some(&data("v1-bethlem.json"))).unwrap();
    assert_eq!(sniff(&bytes), PhenopacketFormat::Json);
    parse_message(&bytes, PhenopacketFormat::Json).unwrap()
}

#[test]
fn parse_v1_json() {
    let phenopacket = bethlem();
    assert_eq!(phenopacket.id, "PMID:30808312-COL6A1-Bethlem");
    assert!(phenopacket.phenotypic_features[0].negated);
    assert_eq!(phenopacket.variants.len(), 1);
    assert_eq!(phenopacket.hts_files[0].genome_assembly, "GRCh38");
}

#[test]
fn converted_phenopacket_is_valid_v2() {
    let converted = V1ToV2Converter::new(true)
        .convert_phenopacket(&bethlem())
        .unwrap();
    assert_eq!(converted.interpretations.len(), 1);
    assert!(converted.phenotypic_features[0].excluded);
    assert_eq!(
        converted.meta_data.as_ref().unwrap().phenopacket_schema_version,
        "2.0"
    );

    let runner = ValidationWorkflowRunner::phenopacket().build().unwrap();
    let results = runner.validate_message(&converted);
    assert!(results.results().is_empty(), "{:?}", results.results());
}

#[test]
fn variants_are_dropped_by_default() {
    let converted = V1ToV2Converter::new(false)
        .convert_phenopacket(&bethlem())
        .unwrap();
    assert!(converted.interpretations.is_empty());
    assert_eq!(converted.files.len(), 1);
}

#[test]
fn variants_require_a_single_disease() {
    let mut phenopacket = bethlem();
    phenopacket.diseases.clear();
    let err = V1ToV2Converter::new(true)
        .convert_phenopacket(&phenopacket)
        .unwrap_err();
    assert!(matches!(err, PhenopacketError::InvalidInput(_)));
}

#[test]
fn written_files_decode_in_every_format() {
    let converted = V1ToV2Converter::new(true)
        .convert_phenopacket(&bethlem())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();

    for format in [
        PhenopacketFormat::Protobuf,
        PhenopacketFormat::Json,
        PhenopacketFormat::Yaml,
    ] {
        let path = dir.path().join(format!("bethlem{}", format.suffix()));
        let file = std::fs::File::create(&path).unwrap();
        print_message(&converted, format, file).unwrap();

        let bytes = read_to_end(Some(&path)).unwrap();
        assert_eq!(sniff(&bytes), format);
        let decoded: v2::Phenopacket = parse_message(&bytes, format).unwrap();
        assert_eq!(decoded, converted, "{format}");
    }
}

#[test]
fn v1_input_fails_the_v2_schema() {
    let bytes = read_to_end(Some(&data("v1-bethlem.json"))).unwrap();
    let runner = ValidationWorkflowRunner::phenopacket().build().unwrap();
    let results = runner.validate_bytes(&bytes);
    assert!(!results.is_valid());
    assert!(results
        .results()
        .iter()
        .all(|result| result.validator_info().id() == "BaseValidator"));
}
