//! The wizard state machine.
//!
//! Eight states, one per step. The navigator owns the navigation fields of
//! the persisted state (`last_step` and the watermark); step hosts own their
//! entity lists and the init id pair and reach them through
//! [`WizardNavigator::store_mut`]. The navigator itself never performs I/O
//! beyond the store's write-through persistence and so cannot fail; anything
//! that goes wrong downstream lands in the status message.

use crate::application::store::WizardStore;
use crate::domain::{step_by_id, StepDescriptor, StepId, WizardError, WizardState};

/// Destination emitted when the wizard hands control back to the host
/// application on finish or confirmed cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Opportunities,
}

pub struct WizardNavigator {
    store: WizardStore,
    current_step: StepId,
    completed_steps: Vec<StepId>,
    cancel_dialog_open: bool,
    route: Option<Route>,
    status_message: Option<String>,
}

impl WizardNavigator {
    /// Mounts a navigator over a store, resuming where the previous session
    /// left off.
    ///
    /// The initial step is the persisted `last_step` when it names a valid
    /// step; otherwise the highest creation step that already has data,
    /// scanning 7 down to 1; otherwise step 1. Steps 1 through 7 that
    /// already have data are seeded as completed, so completion survives a
    /// reload even though it is not persisted itself.
    pub fn mount(store: WizardStore) -> Self {
        let current_step = Self::resolve_initial_step(&store);
        let completed_steps = (1..StepId::LAST.index())
            .filter_map(StepId::from_index)
            .filter(|&step| store.has_items(step))
            .collect();
        let mut navigator = Self {
            store,
            current_step,
            completed_steps,
            cancel_dialog_open: false,
            route: None,
            status_message: None,
        };
        navigator.sync_store();
        navigator
    }

    fn resolve_initial_step(store: &WizardStore) -> StepId {
        if let Some(step) = store.state().last_step.and_then(StepId::from_index) {
            return step;
        }
        // Recovery heuristic for sessions with no recorded last step:
        // highest step with data wins, checked from 7 down to 1.
        for index in (1..StepId::LAST.index()).rev() {
            if let Some(step) = StepId::from_index(index) {
                if store.has_items(step) {
                    return step;
                }
            }
        }
        StepId::FIRST
    }

    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    /// Descriptor of the current step.
    pub fn current_step_data(&self) -> &'static StepDescriptor {
        step_by_id(self.current_step)
    }

    /// Steps marked complete, in the order they were completed. Completion
    /// is monotonic: navigating backwards never un-marks a step.
    pub fn completed_steps(&self) -> &[StepId] {
        &self.completed_steps
    }

    pub fn is_completed(&self, step: StepId) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Full snapshot of the persisted wizard state.
    pub fn state(&self) -> &WizardState {
        self.store.state()
    }

    /// Direct store access for step hosts reporting created entities.
    pub fn store_mut(&mut self) -> &mut WizardStore {
        &mut self.store
    }

    /// True if the current step already produced data (the id pair on step
    /// 1, at least one entity on steps 2-7). Drives the Next-vs-Skip
    /// affordance in the UI.
    pub fn show_next_button(&self) -> bool {
        self.store.has_items(self.current_step)
    }

    pub fn has_items(&self, step: StepId) -> bool {
        self.store.has_items(step)
    }

    /// Stepper gating: a step can be jumped to only if the watermark has
    /// reached it.
    pub fn can_jump_to(&self, step: StepId) -> bool {
        let watermark = self
            .state()
            .highest_visited_step
            .unwrap_or(StepId::FIRST.index());
        step.index() <= watermark
    }

    pub fn is_cancel_dialog_open(&self) -> bool {
        self.cancel_dialog_open
    }

    pub fn set_cancel_dialog_open(&mut self, open: bool) {
        self.cancel_dialog_open = open;
    }

    /// Pending navigate-away destination, if finish or cancel has run.
    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn take_route(&mut self) -> Option<Route> {
        self.route.take()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Advances one step. If the current step has data it is marked
    /// completed first; a data-less step is skipped without completion. A
    /// no-op on the summary step.
    pub fn handle_next(&mut self) {
        if let Some(next) = self.current_step.next() {
            if self.store.has_items(self.current_step) {
                self.mark_completed(self.current_step);
            }
            self.set_current_step(next);
        }
    }

    /// Steps back one step. A no-op on step 1. Completion marks are kept.
    pub fn handle_back(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            self.set_current_step(previous);
        }
    }

    /// Jumps to an arbitrary step. Targets outside the closed step space
    /// are dropped with a status note; callers gate reachable targets
    /// through [`Self::can_jump_to`].
    pub fn handle_go_to_step(&mut self, target: u8) {
        match StepId::from_index(target) {
            Some(step) => self.set_current_step(step),
            None => self.report(WizardError::InvalidStepTarget(target)),
        }
    }

    /// Confirms the dossier from the summary step: resets to step 1, clears
    /// the persisted state, and routes back to the opportunities list with a
    /// success notice.
    pub fn handle_finish(&mut self) {
        self.current_step = StepId::FIRST;
        self.completed_steps.clear();
        if let Err(e) = self.store.clear_wizard() {
            self.report(e);
        }
        self.set_status("Application dossier created successfully");
        self.route = Some(Route::Opportunities);
    }

    /// Confirmed cancellation: same full reset and route as finish, minus
    /// the success notice. Already-created backend records are kept.
    pub fn handle_confirm_exit(&mut self) {
        self.current_step = StepId::FIRST;
        self.completed_steps.clear();
        if let Err(e) = self.store.clear_wizard() {
            self.report(e);
        }
        self.cancel_dialog_open = false;
        self.route = Some(Route::Opportunities);
    }

    /// Step 1 succeeded: record the id pair, mark step 1 complete, advance
    /// to step 2. A conflicting re-initialization is reported and leaves
    /// navigation untouched.
    pub fn on_init_success(&mut self, application_id: i64, opportunity_id: i64) {
        if let Err(e) = self.store.set_init_ids(application_id, opportunity_id) {
            self.report(e);
            return;
        }
        self.mark_completed(StepId::Init);
        self.handle_next();
    }

    fn set_current_step(&mut self, step: StepId) {
        self.current_step = step;
        self.sync_store();
    }

    /// Keeps the persisted resume bookkeeping consistent with the live
    /// step: `last_step` follows the current step and the watermark only
    /// rises. Runs on every step change so no command has to remember it.
    fn sync_store(&mut self) {
        if let Err(e) = self.store.set_last_step(self.current_step) {
            self.report(e);
        }
        if let Err(e) = self.store.set_highest_visited_step(self.current_step) {
            self.report(e);
        }
    }

    fn mark_completed(&mut self, step: StepId) {
        if !self.completed_steps.contains(&step) {
            self.completed_steps.push(step);
        }
    }

    fn report(&mut self, error: WizardError) {
        self.status_message = Some(error.to_string());
    }
}
