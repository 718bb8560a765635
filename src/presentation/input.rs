use crate::application::{App, AppMode};
use crate::domain::StepId;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if app.navigator.is_cancel_dialog_open() {
            Self::handle_cancel_dialog(app, key);
            return;
        }
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Input => Self::handle_input_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        app.navigator.clear_status();

        match key {
            KeyCode::Right | KeyCode::Char('n') => {
                // Forward from the summary is the finish command only.
                if app.navigator.current_step() != StepId::Summary {
                    app.navigator.handle_next();
                }
            }
            KeyCode::Left | KeyCode::Char('b') => {
                // The back affordance is offered on steps 2-7 only.
                let step = app.navigator.current_step();
                if step != StepId::Init && step != StepId::Summary {
                    app.navigator.handle_back();
                }
            }
            KeyCode::Enter => {
                if app.navigator.current_step() == StepId::Summary {
                    app.navigator.handle_finish();
                } else if app.navigator.show_next_button() {
                    app.navigator.handle_next();
                } else {
                    app.start_input();
                }
            }
            KeyCode::Char('a') => {
                app.start_input();
            }
            KeyCode::Char(c @ '1'..='8') => {
                let target = c as u8 - b'0';
                if let Some(step) = StepId::from_index(target) {
                    if app.navigator.can_jump_to(step) {
                        app.navigator.handle_go_to_step(target);
                    }
                }
            }
            KeyCode::Esc => {
                app.navigator.set_cancel_dialog_open(true);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_input();
            }
            KeyCode::Esc => {
                app.cancel_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.input.len() {
                    app.input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                app.input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_cancel_dialog(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('y') => {
                app.navigator.handle_confirm_exit();
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                app.navigator.set_cancel_dialog_open(false);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{WizardNavigator, WizardStore};
    use crate::domain::EntityKind;
    use crate::infrastructure::{SessionRepository, DEFAULT_SESSION_FILE};

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = SessionRepository::new(dir.path().join(DEFAULT_SESSION_FILE));
        let navigator = WizardNavigator::mount(WizardStore::open(repo));
        (App::new(navigator), dir)
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_digit_jump_is_gated_by_watermark() {
        let (mut app, _dir) = app();

        // Step 5 has never been reached, so the jump is refused.
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.navigator.current_step(), StepId::Init);

        app.navigator.handle_next();
        app.navigator.handle_next();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.navigator.current_step(), StepId::Init);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.navigator.current_step(), StepId::Contacts);
    }

    #[test]
    fn test_escape_opens_cancel_dialog_and_n_closes_it() {
        let (mut app, _dir) = app();

        press(&mut app, KeyCode::Esc);
        assert!(app.navigator.is_cancel_dialog_open());

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.navigator.is_cancel_dialog_open());
        assert!(!app.should_exit());
    }

    #[test]
    fn test_confirming_cancel_dialog_exits_and_clears() {
        let (mut app, _dir) = app();
        app.navigator.handle_go_to_step(3);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        assert!(app.should_exit());
        assert!(app.navigator.state().last_step.is_none());
    }

    #[test]
    fn test_add_type_and_enter_creates_an_entity() {
        let (mut app, _dir) = app();
        // Initialize through the form, which advances to companies.
        press(&mut app, KeyCode::Char('a'));
        for c in "Acme backend role".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current_step(), StepId::Companies);

        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.mode, AppMode::Input));
        for c in "Acme".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);

        let companies = app.navigator.state().created(EntityKind::Company);
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].label, "Acme");
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_enter_on_step_with_items_advances() {
        let (mut app, _dir) = app();
        app.navigator.on_init_success(101, 55);
        app.navigator.handle_go_to_step(1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current_step(), StepId::Companies);
    }

    #[test]
    fn test_n_skips_a_step_without_items() {
        let (mut app, _dir) = app();
        app.navigator.handle_go_to_step(2);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.navigator.current_step(), StepId::Contacts);
        assert!(!app.navigator.is_completed(StepId::Companies));
    }

    #[test]
    fn test_back_key_is_ignored_on_first_and_last_step() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_step(), StepId::Init);

        app.navigator.handle_go_to_step(8);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_step(), StepId::Summary);
    }

    #[test]
    fn test_enter_on_summary_finishes() {
        let (mut app, _dir) = app();
        app.navigator.handle_go_to_step(8);

        press(&mut app, KeyCode::Enter);
        assert!(app.should_exit());
        assert_eq!(app.navigator.state().application_id, None);
    }

    #[test]
    fn test_help_mode_toggles() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.mode, AppMode::Help));

        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.mode, AppMode::Normal));
    }
}
