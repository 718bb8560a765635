use serde::{Deserialize, Serialize};

use crate::domain::steps::{EntityKind, StepId};

/// Summary of an entity created during a wizard run: its backend id and a
/// short label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub label: String,
}

impl EntityRef {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// The sole persisted entity of the wizard: the ids and created-entity lists
/// accumulated during one run, plus the navigation bookkeeping used for
/// resume.
///
/// All fields default so that session files written by older versions merge
/// with the initial state instead of failing to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardState {
    /// Set once step 1 succeeds; immutable until a full reset.
    pub application_id: Option<i64>,
    /// Set together with `application_id` in the same initialization.
    pub opportunity_id: Option<i64>,
    pub created_companies: Vec<EntityRef>,
    pub created_contacts: Vec<EntityRef>,
    pub created_documents: Vec<EntityRef>,
    pub created_products: Vec<EntityRef>,
    pub created_events: Vec<EntityRef>,
    pub created_actions: Vec<EntityRef>,
    /// Step the user was on when they last left the wizard, in [1,8].
    pub last_step: Option<u8>,
    /// Furthest step ever reached; never decreases except on full reset.
    pub highest_visited_step: Option<u8>,
}

impl WizardState {
    /// True once both initialization ids are recorded.
    pub fn is_initialized(&self) -> bool {
        self.application_id.is_some() && self.opportunity_id.is_some()
    }

    /// The created-entity list for one category.
    pub fn created(&self, kind: EntityKind) -> &[EntityRef] {
        match kind {
            EntityKind::Company => &self.created_companies,
            EntityKind::Contact => &self.created_contacts,
            EntityKind::Document => &self.created_documents,
            EntityKind::Product => &self.created_products,
            EntityKind::Event => &self.created_events,
            EntityKind::Action => &self.created_actions,
        }
    }

    pub(crate) fn created_mut(&mut self, kind: EntityKind) -> &mut Vec<EntityRef> {
        match kind {
            EntityKind::Company => &mut self.created_companies,
            EntityKind::Contact => &mut self.created_contacts,
            EntityKind::Document => &mut self.created_documents,
            EntityKind::Product => &mut self.created_products,
            EntityKind::Event => &mut self.created_events,
            EntityKind::Action => &mut self.created_actions,
        }
    }

    /// Whether a step already produced data: the id pair for step 1, a
    /// non-empty created list for steps 2-7. The summary step never has data
    /// of its own.
    pub fn has_items(&self, step: StepId) -> bool {
        match step.entity_kind() {
            Some(kind) => !self.created(kind).is_empty(),
            None => step == StepId::Init && self.is_initialized(),
        }
    }

    /// Total number of entities created across all six categories.
    pub fn created_total(&self) -> usize {
        EntityKind::ALL
            .iter()
            .map(|&kind| self.created(kind).len())
            .sum()
    }

    /// Largest id recorded anywhere in the state, or 0 when empty. Used to
    /// seed id allocation when a session resumes.
    pub fn max_entity_id(&self) -> i64 {
        let mut max = 0;
        if let Some(id) = self.application_id {
            max = max.max(id);
        }
        if let Some(id) = self.opportunity_id {
            max = max.max(id);
        }
        for &kind in EntityKind::ALL.iter() {
            for item in self.created(kind) {
                max = max.max(item.id);
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = WizardState::default();
        assert!(state.application_id.is_none());
        assert!(state.opportunity_id.is_none());
        assert!(state.created_companies.is_empty());
        assert!(state.created_actions.is_empty());
        assert!(state.last_step.is_none());
        assert!(state.highest_visited_step.is_none());
        assert!(!state.is_initialized());
        assert_eq!(state.created_total(), 0);
    }

    #[test]
    fn test_has_items_step_one_requires_both_ids() {
        let mut state = WizardState::default();
        assert!(!state.has_items(StepId::Init));

        state.application_id = Some(101);
        assert!(!state.has_items(StepId::Init));

        state.opportunity_id = Some(55);
        assert!(state.has_items(StepId::Init));
    }

    #[test]
    fn test_has_items_creation_steps() {
        let mut state = WizardState::default();
        assert!(!state.has_items(StepId::Documents));

        state.created_documents.push(EntityRef::new(3, "resume.pdf"));
        assert!(state.has_items(StepId::Documents));
        assert!(!state.has_items(StepId::Products));
    }

    #[test]
    fn test_has_items_summary_is_never_true() {
        let mut state = WizardState::default();
        state.application_id = Some(1);
        state.opportunity_id = Some(2);
        state.created_companies.push(EntityRef::new(3, "Acme"));
        assert!(!state.has_items(StepId::Summary));
    }

    #[test]
    fn test_max_entity_id() {
        let mut state = WizardState::default();
        assert_eq!(state.max_entity_id(), 0);

        state.application_id = Some(7);
        state.opportunity_id = Some(4);
        state.created_contacts.push(EntityRef::new(12, "Jo Doe"));
        state.created_events.push(EntityRef::new(9, "Interview"));
        assert_eq!(state.max_entity_id(), 12);
    }

    #[test]
    fn test_older_session_files_merge_with_defaults() {
        // A session written before the watermark field existed still loads.
        let json = r#"{
            "application_id": 5,
            "opportunity_id": 9,
            "created_companies": [{"id": 2, "label": "Acme"}],
            "last_step": 3
        }"#;
        let state: WizardState = serde_json::from_str(json).unwrap();
        assert_eq!(state.application_id, Some(5));
        assert_eq!(state.opportunity_id, Some(9));
        assert_eq!(state.created_companies.len(), 1);
        assert_eq!(state.last_step, Some(3));
        assert!(state.highest_visited_step.is_none());
        assert!(state.created_actions.is_empty());
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let mut state = WizardState::default();
        state.application_id = Some(101);
        state.opportunity_id = Some(55);
        state.created_products.push(EntityRef::new(8, "Portfolio"));
        state.last_step = Some(5);
        state.highest_visited_step = Some(6);

        let json = serde_json::to_string_pretty(&state).unwrap();
        let restored: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
