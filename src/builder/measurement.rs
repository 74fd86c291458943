use crate::model::v2::{
    measurement::MeasurementValue, value, ComplexValue, Measurement, OntologyClass, Procedure,
    Quantity, ReferenceRange, TimeElement, TypedQuantity, Value,
};

impl From<Value> for MeasurementValue {
    fn from(value: Value) -> Self {
        MeasurementValue::Value(value)
    }
}

impl From<ComplexValue> for MeasurementValue {
    fn from(value: ComplexValue) -> Self {
        MeasurementValue::ComplexValue(value)
    }
}

/// Builds a [`Measurement`] of a single or complex value
///
/// ```
/// use phenopacket_tools::builder::{constants, ontology_class, MeasurementBuilder, ReferenceRangeBuilder, TimeElements, ValueBuilder};
///
/// let iop = ontology_class("LOINC:79892-6", "Right eye Intraocular pressure");
/// let range = ReferenceRangeBuilder::of(constants::unit::mm_hg(), 10.0, 21.0);
/// let measurement = MeasurementBuilder::builder(iop, ValueBuilder::with_range(constants::unit::mm_hg(), 29.0, range))
///     .time_observed(TimeElements::age("P71Y1M").unwrap())
///     .build();
///
/// assert!(measurement.time_observed.is_some());
/// ```
pub struct MeasurementBuilder {
    measurement: Measurement,
}

impl MeasurementBuilder {
    pub fn of<V: Into<MeasurementValue>>(assay: OntologyClass, value: V) -> Measurement {
        Self::builder(assay, value).build()
    }

    pub fn builder<V: Into<MeasurementValue>>(assay: OntologyClass, value: V) -> Self {
        Self {
            measurement: Measurement {
                assay: Some(assay),
                measurement_value: Some(value.into()),
                ..Default::default()
            },
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.measurement.description = description.into();
        self
    }

    pub fn time_observed(mut self, time: TimeElement) -> Self {
        self.measurement.time_observed = Some(time);
        self
    }

    pub fn procedure(mut self, procedure: Procedure) -> Self {
        self.measurement.procedure = Some(procedure);
        self
    }

    pub fn build(self) -> Measurement {
        self.measurement
    }
}

/// Constructors for [`Value`]
pub struct ValueBuilder;

impl ValueBuilder {
    /// A quantity without reference range
    pub fn of(unit: OntologyClass, value: f64) -> Value {
        Self::quantity(QuantityBuilder::of(unit, value))
    }

    pub fn with_range(unit: OntologyClass, value: f64, range: ReferenceRange) -> Value {
        Self::quantity(QuantityBuilder::with_range(unit, value, range))
    }

    pub fn quantity(quantity: Quantity) -> Value {
        Value {
            value: Some(value::Value::Quantity(quantity)),
        }
    }

    /// A categorical value, e.g. `NCIT:C25626 | Positive`
    pub fn ontology_class(class: OntologyClass) -> Value {
        Value {
            value: Some(value::Value::OntologyClass(class)),
        }
    }
}

/// Builds a [`Quantity`]
pub struct QuantityBuilder {
    quantity: Quantity,
}

impl QuantityBuilder {
    pub fn of(unit: OntologyClass, value: f64) -> Quantity {
        Self::builder(unit, value).build()
    }

    pub fn with_range(unit: OntologyClass, value: f64, range: ReferenceRange) -> Quantity {
        Self::builder(unit, value).reference_range(range).build()
    }

    pub fn builder(unit: OntologyClass, value: f64) -> Self {
        Self {
            quantity: Quantity {
                unit: Some(unit),
                value,
                reference_range: None,
            },
        }
    }

    pub fn reference_range(mut self, range: ReferenceRange) -> Self {
        self.quantity.reference_range = Some(range);
        self
    }

    pub fn build(self) -> Quantity {
        self.quantity
    }
}

/// Constructor for [`ReferenceRange`]
pub struct ReferenceRangeBuilder;

impl ReferenceRangeBuilder {
    pub fn of(unit: OntologyClass, low: f64, high: f64) -> ReferenceRange {
        ReferenceRange {
            unit: Some(unit),
            low,
            high,
        }
    }
}

/// Constructor for [`TypedQuantity`]
pub struct TypedQuantityBuilder;

impl TypedQuantityBuilder {
    pub fn of(r#type: OntologyClass, quantity: Quantity) -> TypedQuantity {
        TypedQuantity {
            r#type: Some(r#type),
            quantity: Some(quantity),
        }
    }
}

/// Constructor for [`ComplexValue`], e.g. a blood pressure
pub struct ComplexValueBuilder;

impl ComplexValueBuilder {
    pub fn of<I: IntoIterator<Item = TypedQuantity>>(typed_quantities: I) -> ComplexValue {
        ComplexValue {
            typed_quantities: typed_quantities.into_iter().collect(),
        }
    }
}
