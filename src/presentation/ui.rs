use crate::application::{App, AppMode};
use crate::domain::{step_by_id, StepId, WIZARD_STEPS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_stepper(f, app, chunks[1]);
    render_step_body(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if app.navigator.is_cancel_dialog_open() {
        render_cancel_dialog(f);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let step = app.navigator.current_step_data();
    let header = Paragraph::new(format!(
        "jobwiz - Application Wizard | Step {}/8: {}",
        step.id.index(),
        step.title
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_stepper(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for descriptor in WIZARD_STEPS.iter() {
        let is_current = descriptor.id == app.navigator.current_step();
        let is_completed = app.navigator.is_completed(descriptor.id);
        let is_reachable = app.navigator.can_jump_to(descriptor.id);

        let (marker, style) = if is_current {
            (
                descriptor.icon,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        } else if is_completed {
            ("✔", Style::default().fg(Color::Green))
        } else if is_reachable {
            (descriptor.icon, Style::default().fg(Color::Yellow))
        } else {
            // Locked: the watermark has not reached this step yet.
            ("⊘", Style::default().fg(Color::DarkGray))
        };

        spans.push(Span::styled(
            format!("{} {}", marker, descriptor.title),
            style,
        ));
        if descriptor.id != StepId::LAST {
            spans.push(Span::styled("  >  ", Style::default().fg(Color::DarkGray)));
        }
    }

    let stepper = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(stepper, area);
}

fn render_step_body(f: &mut Frame, app: &App, area: Rect) {
    let step = app.navigator.current_step();
    match step {
        StepId::Init => render_init_step(f, app, area),
        StepId::Summary => render_summary_step(f, app, area),
        _ => render_creation_step(f, app, area),
    }
}

fn render_init_step(f: &mut Frame, app: &App, area: Rect) {
    let descriptor = app.navigator.current_step_data();
    let state = app.navigator.state();

    let mut lines = vec![
        Line::from(descriptor.description),
        Line::from(""),
    ];
    if let (Some(app_id), Some(opp_id)) = (state.application_id, state.opportunity_id) {
        lines.push(Line::from(Span::styled(
            format!("Application #{} and opportunity #{} are created.", app_id, opp_id),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from("Press Enter to continue."));
    } else {
        lines.push(Line::from(
            "Nothing is created yet. Press 'a' to initialize the opportunity and application.",
        ));
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(descriptor.title),
    );
    f.render_widget(body, area);
}

fn render_creation_step(f: &mut Frame, app: &App, area: Rect) {
    let descriptor = app.navigator.current_step_data();
    let title = format!("{}: {}", descriptor.title, descriptor.description);

    let Some(kind) = descriptor.id.entity_kind() else {
        return;
    };
    let created = app.navigator.state().created(kind);

    if created.is_empty() {
        let body = Paragraph::new(vec![
            Line::from("Nothing here yet."),
            Line::from(""),
            Line::from("Press 'a' to add an entry, or 'n' to skip this step."),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(body, area);
        return;
    }

    let items: Vec<ListItem> = created
        .iter()
        .map(|entity| ListItem::new(format!("#{:<5} {}", entity.id, entity.label)))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_summary_step(f: &mut Frame, app: &App, area: Rect) {
    let state = app.navigator.state();

    let mut lines = Vec::new();
    match (state.application_id, state.opportunity_id) {
        (Some(app_id), Some(opp_id)) => {
            lines.push(Line::from(format!(
                "Application #{} for opportunity #{}",
                app_id, opp_id
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "The dossier was never initialized (step 1 is empty).",
                Style::default().fg(Color::Yellow),
            )));
        }
    }
    lines.push(Line::from(""));

    for index in 2..StepId::LAST.index() {
        let descriptor = step_by_id(StepId::from_index(index).unwrap_or(StepId::Init));
        if let Some(kind) = descriptor.id.entity_kind() {
            lines.push(Line::from(format!(
                "{:<17} {}",
                descriptor.title,
                state.created(kind).len()
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{} attached records in total.",
        state.created_total()
    )));
    lines.push(Line::from(Span::styled(
        "Press Enter to confirm and finish.",
        Style::default().fg(Color::Green),
    )));

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Summary: Review and confirm"),
    );
    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(status) = app.navigator.status_message() {
                status.to_string()
            } else {
                normal_mode_hint(app)
            }
        }
        AppMode::Input => {
            if app.navigator.current_step() == StepId::Init {
                format!(
                    "Opportunity title: {} (Enter to create, Esc to cancel)",
                    app.input
                )
            } else {
                format!(
                    "New {} entry: {} (Enter to add, Esc to cancel)",
                    app.navigator.current_step_data().name,
                    app.input
                )
            }
        }
        AppMode::Help => "Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Input => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn normal_mode_hint(app: &App) -> String {
    let step = app.navigator.current_step();
    let mut parts = Vec::new();

    if step == StepId::Summary {
        parts.push("Enter: confirm and finish".to_string());
    } else if app.navigator.show_next_button() {
        parts.push("Enter/n: next".to_string());
        if step != StepId::Init || !app.navigator.state().is_initialized() {
            parts.push("a: add".to_string());
        }
    } else if step == StepId::Init {
        parts.push("a/Enter: initialize".to_string());
    } else {
        parts.push("a/Enter: add".to_string());
        parts.push("n: skip this step".to_string());
    }

    // Back is offered between steps 2 and 7, matching the navbar rules.
    if step != StepId::Init && step != StepId::Summary {
        parts.push("b/Left: back".to_string());
    }
    parts.push("1-8: jump".to_string());
    parts.push("Esc: cancel wizard".to_string());
    parts.push("q: save and quit".to_string());
    parts.push("?: help".to_string());
    parts.join(" | ")
}

fn render_cancel_dialog(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 8,
        y: area.height / 3,
        width: area.width * 3 / 4,
        height: 9.min(area.height),
    };

    f.render_widget(Clear, popup_area);

    let dialog = Paragraph::new(vec![
        Line::from("You are about to leave the creation wizard."),
        Line::from(""),
        Line::from(Span::styled(
            "Records already saved will not be deleted automatically.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("If you want to remove them, do it from their own pages"),
        Line::from("(opportunity, application, and so on)."),
        Line::from(""),
        Line::from("Enter/y: understood, leave | Esc/n: keep editing"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Leave the wizard?")
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(dialog, popup_area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("jobwiz Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"JOBWIZ KEY REFERENCE

=== THE WIZARD ===
The wizard builds a job application dossier in 8 steps:
1 Initialization, 2 Companies, 3 Contacts, 4 Documents,
5 Products, 6 Scheduled events, 7 Actions, 8 Summary.

Step 1 creates the opportunity and the application; every later
step attaches records to that pair. The summary step confirms
the whole dossier.

=== NAVIGATION ===
Enter           Next step (or continue / confirm, depending on step)
n / Right       Next step, also skips a step with no entries
b / Left        Previous step (steps 2-7)
1-8             Jump to a step you have already reached
a               Add an entry on the current step

=== SESSION ===
q               Leave the wizard, keeping the session on disk;
                the next launch resumes where you left off
Esc             Cancel the wizard (asks for confirmation, then
                clears the saved session)

The session is saved after every change, so a crash or quit
never loses progress.

=== HELP ===
F1 or ?         Show this help
Esc/q           Close this help window"#
        .to_string()
}
