//! Terminal shell state for the wizard.
//!
//! [`App`] wraps the navigator with the per-step input handling the full
//! product delegates to its entity forms. Committing the creation form
//! stands in for the external mutation hooks: step 1 allocates the
//! application and opportunity id pair, the six creation steps append an
//! entity summary to the matching store list. Creation failures never reach
//! the navigator; they surface on the status line and the user stays on the
//! current step.

use crate::application::navigator::WizardNavigator;
use crate::domain::{EntityRef, StepId};

/// Represents the current input mode of the wizard shell.
#[derive(Debug)]
pub enum AppMode {
    /// Step navigation mode
    Normal,
    /// Typing into the current step's creation form
    Input,
    /// Help screen is displayed
    Help,
}

pub struct App {
    /// The wizard state machine
    pub navigator: WizardNavigator,
    /// Current input mode
    pub mode: AppMode,
    /// Current input buffer (for the creation form)
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Next id handed out by the simulated backend
    next_entity_id: i64,
}

impl App {
    pub fn new(navigator: WizardNavigator) -> Self {
        // Resumed sessions keep allocating above the ids already in use.
        let next_entity_id = navigator.state().max_entity_id() + 1;
        Self {
            navigator,
            mode: AppMode::Normal,
            input: String::new(),
            cursor_position: 0,
            next_entity_id,
        }
    }

    /// True once finish or confirmed cancel has routed away.
    pub fn should_exit(&self) -> bool {
        self.navigator.route().is_some()
    }

    /// Whether a plain quit (leave the wizard, keep the session) is
    /// currently allowed.
    pub fn can_quit(&self) -> bool {
        matches!(self.mode, AppMode::Normal) && !self.navigator.is_cancel_dialog_open()
    }

    /// Opens the creation form for the current step. The summary step has
    /// no form, and step 1 only accepts input until it is initialized.
    pub fn start_input(&mut self) {
        let step = self.navigator.current_step();
        if step == StepId::Summary {
            return;
        }
        if step == StepId::Init && self.navigator.state().is_initialized() {
            return;
        }
        self.mode = AppMode::Input;
        self.input.clear();
        self.cursor_position = 0;
        self.navigator.clear_status();
    }

    /// Commits the creation form and returns to normal mode. An empty label
    /// cancels instead of creating.
    pub fn finish_input(&mut self) {
        let label = self.input.trim().to_string();
        if label.is_empty() {
            self.cancel_input();
            return;
        }

        let step = self.navigator.current_step();
        if step == StepId::Init {
            let application_id = self.allocate_id();
            let opportunity_id = self.allocate_id();
            self.navigator.on_init_success(application_id, opportunity_id);
        } else if let Some(kind) = step.entity_kind() {
            let item = EntityRef::new(self.allocate_id(), label);
            if let Err(e) = self.navigator.store_mut().append_created(kind, item) {
                self.navigator.set_status(e.to_string());
            }
        }

        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Cancels the creation form without creating anything.
    pub fn cancel_input(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::WizardStore;
    use crate::domain::EntityKind;
    use crate::infrastructure::{SessionRepository, DEFAULT_SESSION_FILE};

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = SessionRepository::new(dir.path().join(DEFAULT_SESSION_FILE));
        let navigator = WizardNavigator::mount(WizardStore::open(repo));
        (App::new(navigator), dir)
    }

    #[test]
    fn test_app_starts_in_normal_mode() {
        let (app, _dir) = app();
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.input.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(!app.should_exit());
        assert!(app.can_quit());
    }

    #[test]
    fn test_init_form_creates_id_pair_and_advances() {
        let (mut app, _dir) = app();
        app.start_input();
        assert!(matches!(app.mode, AppMode::Input));

        app.input = "Backend engineer at Acme".to_string();
        app.finish_input();

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.navigator.state().is_initialized());
        assert_eq!(app.navigator.current_step(), StepId::Companies);
    }

    #[test]
    fn test_creation_form_appends_to_current_step_list() {
        let (mut app, _dir) = app();
        app.input = "init".to_string();
        app.finish_input();
        assert_eq!(app.navigator.current_step(), StepId::Companies);

        app.start_input();
        app.input = "Acme Corp".to_string();
        app.finish_input();

        let companies = app.navigator.state().created(EntityKind::Company);
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].label, "Acme Corp");
        // The company id continues after the init pair.
        assert_eq!(companies[0].id, 3);
    }

    #[test]
    fn test_empty_label_cancels_instead_of_creating() {
        let (mut app, _dir) = app();
        app.navigator.handle_go_to_step(2);
        app.start_input();
        app.input = "   ".to_string();
        app.finish_input();

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app
            .navigator
            .state()
            .created(EntityKind::Company)
            .is_empty());
    }

    #[test]
    fn test_no_input_form_on_summary_step() {
        let (mut app, _dir) = app();
        app.navigator.handle_go_to_step(8);
        app.start_input();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_init_form_closed_once_initialized() {
        let (mut app, _dir) = app();
        app.input = "init".to_string();
        app.finish_input();
        app.navigator.handle_go_to_step(1);

        app.start_input();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_id_allocation_resumes_above_restored_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SESSION_FILE);
        {
            let mut store = WizardStore::open(SessionRepository::new(&path));
            store.set_init_ids(101, 55).unwrap();
            store
                .append_created(EntityKind::Contact, EntityRef::new(140, "Jo Doe"))
                .unwrap();
        }

        let navigator = WizardNavigator::mount(WizardStore::open(SessionRepository::new(&path)));
        let mut app = App::new(navigator);
        app.navigator.handle_go_to_step(2);
        app.start_input();
        app.input = "Acme".to_string();
        app.finish_input();

        assert_eq!(app.navigator.state().created(EntityKind::Company)[0].id, 141);
    }
}
