mod convert;
mod ontology;
mod validate;
