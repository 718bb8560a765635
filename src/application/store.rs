//! Persisted state container for one wizard run.
//!
//! The store is the single source of truth for [`WizardState`]. It is
//! dependency-injected rather than global: whoever owns the wizard hands it
//! a [`SessionRepository`] and every mutation is written through to that
//! repository synchronously, so a reload resumes exactly where the user
//! left off.

use crate::domain::{EntityKind, EntityRef, StepId, WizardError, WizardResult, WizardState};
use crate::infrastructure::SessionRepository;

pub struct WizardStore {
    state: WizardState,
    repo: SessionRepository,
}

impl WizardStore {
    /// Opens the store against a session repository, resuming any persisted
    /// session. A corrupted session file is discarded and the wizard starts
    /// fresh rather than failing to open.
    pub fn open(repo: SessionRepository) -> Self {
        let state = match repo.load_session() {
            Ok(Some(state)) => state,
            Ok(None) | Err(_) => WizardState::default(),
        };
        Self { state, repo }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Records the application and opportunity ids produced by step 1. The
    /// pair is set together and only once: re-calling with the same ids is
    /// idempotent, re-calling with different ids without an intervening
    /// reset is a precondition violation.
    pub fn set_init_ids(&mut self, application_id: i64, opportunity_id: i64) -> WizardResult<()> {
        if let (Some(app), Some(opp)) = (self.state.application_id, self.state.opportunity_id) {
            if (app, opp) == (application_id, opportunity_id) {
                return Ok(());
            }
            return Err(WizardError::PreconditionViolation {
                existing: (app, opp),
                requested: (application_id, opportunity_id),
            });
        }
        self.state.application_id = Some(application_id);
        self.state.opportunity_id = Some(opportunity_id);
        self.persist()
    }

    /// Appends a created entity to the list for its category. The store
    /// never removes or deduplicates; avoiding duplicate appends is the
    /// caller's responsibility.
    pub fn append_created(&mut self, kind: EntityKind, item: EntityRef) -> WizardResult<()> {
        self.state.created_mut(kind).push(item);
        self.persist()
    }

    pub fn set_last_step(&mut self, step: StepId) -> WizardResult<()> {
        if self.state.last_step == Some(step.index()) {
            return Ok(());
        }
        self.state.last_step = Some(step.index());
        self.persist()
    }

    /// Raises the navigation watermark. Values not above the current
    /// watermark are ignored.
    pub fn set_highest_visited_step(&mut self, step: StepId) -> WizardResult<()> {
        if self.state.highest_visited_step.unwrap_or(0) >= step.index() {
            return Ok(());
        }
        self.state.highest_visited_step = Some(step.index());
        self.persist()
    }

    /// Atomically resets every field to its initial empty value and removes
    /// the session file.
    pub fn clear_wizard(&mut self) -> WizardResult<()> {
        self.state = WizardState::default();
        match self.repo.clear_session() {
            Ok(()) => Ok(()),
            Err(e) => Err(WizardError::Persistence(e)),
        }
    }

    pub fn has_items(&self, step: StepId) -> bool {
        self.state.has_items(step)
    }

    fn persist(&self) -> WizardResult<()> {
        match self.repo.save_session(&self.state) {
            Ok(()) => Ok(()),
            Err(e) => Err(WizardError::Persistence(e)),
        }
    }
}
