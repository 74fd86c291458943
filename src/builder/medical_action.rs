use crate::model::v2::{
    medical_action::Action, treatment::DrugType, DoseInterval, MedicalAction, OntologyClass,
    Procedure, Quantity, RadiationTherapy, TherapeuticRegimen, TimeElement, TimeInterval,
    Treatment,
};

impl From<Procedure> for Action {
    fn from(procedure: Procedure) -> Self {
        Action::Procedure(procedure)
    }
}

impl From<Treatment> for Action {
    fn from(treatment: Treatment) -> Self {
        Action::Treatment(treatment)
    }
}

impl From<RadiationTherapy> for Action {
    fn from(therapy: RadiationTherapy) -> Self {
        Action::RadiationTherapy(therapy)
    }
}

impl From<TherapeuticRegimen> for Action {
    fn from(regimen: TherapeuticRegimen) -> Self {
        Action::TherapeuticRegimen(regimen)
    }
}

/// Builds a [`Procedure`], e.g. a surgery or a biopsy
pub struct ProcedureBuilder {
    procedure: Procedure,
}

impl ProcedureBuilder {
    pub fn of<S: Into<String>, T: Into<String>>(id: S, label: T) -> Procedure {
        Self::builder(id, label).build()
    }

    pub fn builder<S: Into<String>, T: Into<String>>(id: S, label: T) -> Self {
        Self {
            procedure: Procedure {
                code: Some(OntologyClass::new(id, label)),
                ..Default::default()
            },
        }
    }

    pub fn body_site(mut self, site: OntologyClass) -> Self {
        self.procedure.body_site = Some(site);
        self
    }

    pub fn performed(mut self, time: TimeElement) -> Self {
        self.procedure.performed = Some(time);
        self
    }

    pub fn build(self) -> Procedure {
        self.procedure
    }
}

/// Builds a drug [`Treatment`]
pub struct TreatmentBuilder {
    treatment: Treatment,
}

impl TreatmentBuilder {
    pub fn builder(agent: OntologyClass) -> Self {
        Self {
            treatment: Treatment {
                agent: Some(agent),
                ..Default::default()
            },
        }
    }

    pub fn route_of_administration(mut self, route: OntologyClass) -> Self {
        self.treatment.route_of_administration = Some(route);
        self
    }

    pub fn add_dose_interval(mut self, interval: DoseInterval) -> Self {
        self.treatment.dose_intervals.push(interval);
        self
    }

    pub fn drug_type(mut self, drug_type: DrugType) -> Self {
        self.treatment.set_drug_type(drug_type);
        self
    }

    pub fn cumulative_dose(mut self, dose: Quantity) -> Self {
        self.treatment.cumulative_dose = Some(dose);
        self
    }

    pub fn build(self) -> Treatment {
        self.treatment
    }
}

/// Constructor for [`DoseInterval`]
pub struct DoseIntervalBuilder;

impl DoseIntervalBuilder {
    pub fn of(quantity: Quantity, schedule_frequency: OntologyClass, interval: TimeInterval) -> DoseInterval {
        DoseInterval {
            quantity: Some(quantity),
            schedule_frequency: Some(schedule_frequency),
            interval: Some(interval),
        }
    }
}

/// Builds a [`MedicalAction`] around a procedure, treatment, radiation
/// therapy or therapeutic regimen
pub struct MedicalActionBuilder {
    action: MedicalAction,
}

impl MedicalActionBuilder {
    pub fn builder<A: Into<Action>>(action: A) -> Self {
        Self {
            action: MedicalAction {
                action: Some(action.into()),
                ..Default::default()
            },
        }
    }

    pub fn treatment_target(mut self, target: OntologyClass) -> Self {
        self.action.treatment_target = Some(target);
        self
    }

    pub fn treatment_intent(mut self, intent: OntologyClass) -> Self {
        self.action.treatment_intent = Some(intent);
        self
    }

    pub fn response_to_treatment(mut self, response: OntologyClass) -> Self {
        self.action.response_to_treatment = Some(response);
        self
    }

    pub fn add_adverse_event(mut self, event: OntologyClass) -> Self {
        self.action.adverse_events.push(event);
        self
    }

    pub fn treatment_termination_reason(mut self, reason: OntologyClass) -> Self {
        self.action.treatment_termination_reason = Some(reason);
        self
    }

    pub fn build(self) -> MedicalAction {
        self.action
    }
}
