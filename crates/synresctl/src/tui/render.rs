//! Rendering - header, step bar, step panels, footer and overlays

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use synres_shared::VERSION;

use crate::form::Field;
use crate::wizard::{ResultTab, Step};

use super::personas::{card_lines, detail_lines};
use super::results::result_lines;
use super::state::{action_label, Target, TuiState};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Lines per persona card including the gap
const CARD_HEIGHT: usize = 3;

pub fn draw_ui(f: &mut Frame, state: &TuiState) {
    let size = f.size();
    let error_height = if state.wizard.error().is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, chunks[0], state);
    draw_step_bar(f, chunks[1], state);
    if error_height > 0 {
        draw_error(f, chunks[2], state);
    }

    match state.wizard.step() {
        Step::Audience => draw_audience(f, chunks[3], state),
        Step::Personas => draw_personas(f, chunks[3], state),
        Step::Concept => draw_concept(f, chunks[3], state),
        Step::Interview => draw_interview(f, chunks[3], state),
        Step::Results => draw_results(f, chunks[3], state),
    }

    draw_footer(f, chunks[4], state);

    if state.wizard.persona_detail().is_some() {
        draw_persona_overlay(f, size, state);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let header = Line::from(vec![
        Span::styled(
            " Synthetic Respondents",
            Style::default()
                .fg(Color::Rgb(150, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{}", VERSION), Style::default().fg(Color::Gray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.backend_label.clone(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_step_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let current = state.wizard.step();
    let mut spans = Vec::new();

    for (i, step) in Step::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let marker = if state.wizard.is_completed(step) {
            "✓".to_string()
        } else {
            step.number().to_string()
        };
        let style = if step == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if state.wizard.is_completed(step) {
            Style::default().fg(Color::Green)
        } else if state.wizard.can_select(step) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", marker, step.name()), style));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(bar, area);
}

fn draw_error(f: &mut Frame, area: Rect, state: &TuiState) {
    let message = state.wizard.error().unwrap_or_default();
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Error"),
    );
    f.render_widget(banner, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_field(f: &mut Frame, area: Rect, state: &TuiState, field: Field) {
    let focused = state.focused() == Some(Target::Field(field));
    let mut text = state.form.value(field);
    if field == Field::RespondentCount {
        text = format!("◀ {} ▶", text);
    } else if focused {
        text.push('█');
    }

    let widget = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title(field.label()),
    );
    f.render_widget(widget, area);
}

/// The step's button, or the spinner while a call is in flight
fn draw_action(f: &mut Frame, area: Rect, state: &TuiState, detail: Option<String>) {
    let line = if let Some(request) = state.wizard.pending() {
        let frame = SPINNER[state.spinner_frame % SPINNER.len()];
        Line::from(Span::styled(
            format!("{} {}", frame, request.busy_label()),
            Style::default().fg(Color::Cyan),
        ))
    } else if let Some(label) = action_label(state.wizard.step()) {
        let focused = state.focused() == Some(Target::Action);
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut spans = vec![Span::styled(format!("[ {} ]", label), style)];
        if let Some(detail) = detail {
            spans.push(Span::styled(
                format!("  {}", detail),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    } else {
        Line::default()
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}

fn draw_audience(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_field(f, chunks[0], state, Field::TargetProfile);
    draw_field(f, chunks[1], state, Field::AdditionalContext);
    draw_field(f, chunks[2], state, Field::RespondentCount);
    draw_action(f, chunks[3], state, None);
}

fn draw_personas(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let personas = state.wizard.personas();
    let mut lines = Vec::new();
    if personas.is_empty() {
        lines.push(Line::from(Span::styled(
            "No personas yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, persona) in personas.iter().enumerate() {
        lines.extend(card_lines(persona, i == state.selected_persona));
        lines.push(Line::default());
    }

    // Keep the selected card on screen
    let inner = chunks[0].height.saturating_sub(2) as usize;
    let bottom = (state.selected_persona + 1) * CARD_HEIGHT;
    let scroll = bottom.saturating_sub(inner) as u16;

    let list = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Generated Personas ({})", personas.len())),
    );
    f.render_widget(list, chunks[0]);
    draw_action(f, chunks[1], state, Some("Ctrl+N".to_string()));
}

fn draw_concept(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_field(f, chunks[0], state, Field::Concept);
    draw_field(f, chunks[1], state, Field::PricePoint);
    draw_action(f, chunks[2], state, None);
}

fn draw_interview(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    draw_field(f, chunks[0], state, Field::Questions);
    let detail = format!(
        "{} personas × {} questions",
        state.wizard.personas().len(),
        state.form.interview_script().questions.len()
    );
    draw_action(f, chunks[1], state, Some(detail));
}

fn draw_results(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let tab = state.wizard.result_tab();
    let tabs = Tabs::new(ResultTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>())
        .select(tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(tabs, chunks[0]);

    let lines = match state.wizard.results() {
        Some(result) => result_lines(result, tab),
        None => vec![Line::from("No results yet.")],
    };
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(tab.label()));
    f.render_widget(body, chunks[1]);
}

fn hints(state: &TuiState) -> &'static str {
    if state.wizard.persona_detail().is_some() {
        return "Esc close";
    }
    match state.wizard.step() {
        Step::Audience => "Tab focus · ←/→ count · Ctrl+G generate · Ctrl+C quit",
        Step::Personas => "↑/↓ select · Enter details · Ctrl+N continue · F1-F5 steps · Ctrl+C quit",
        Step::Concept => "Tab focus · Ctrl+N continue · F1-F5 steps · Ctrl+C quit",
        Step::Interview => "Tab focus · Ctrl+R run · F1-F5 steps · Ctrl+C quit",
        Step::Results => "Ctrl+T tab · ↑/↓ PgUp/PgDn scroll · F1-F5 steps · Ctrl+C quit",
    }
}

fn draw_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let footer = Line::from(vec![
        Span::styled(
            format!(" {}", Local::now().format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints(state), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(footer), area);
}

/// Rect of `percent_x` x `percent_y` centered in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn draw_persona_overlay(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(persona) = state.wizard.persona_detail() else {
        return;
    };
    let popup = centered_rect(70, 80, area);

    f.render_widget(Clear, popup);
    let detail = Paragraph::new(detail_lines(persona))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!("[{}] {}", persona.initials(), persona.name)),
        );
    f.render_widget(detail, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{demo_personas, demo_result};
    use crate::tui::TuiMessage;
    use crate::wizard::Request;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_audience_panel() {
        let state = TuiState::new("http://localhost:8000");
        let text = screen(&state);
        assert!(text.contains("Target Profile"));
        assert!(text.contains("30-40 year old mothers in Texas"));
        assert!(text.contains("◀ 5 ▶"));
        assert!(text.contains("[ Generate Personas ]"));
    }

    #[test]
    fn test_busy_shows_spinner_label() {
        let mut state = TuiState::new("test");
        state.wizard.begin_request(Request::GeneratePersonas);
        let text = screen(&state);
        assert!(text.contains("Generating Personas..."));
        assert!(!text.contains("[ Generate Personas ]"));
    }

    #[test]
    fn test_personas_panel_title_counts() {
        let mut state = TuiState::new("test");
        state.wizard.begin_request(Request::GeneratePersonas);
        state.apply(TuiMessage::PersonasLoaded(Ok(demo_personas())));
        let text = screen(&state);
        assert!(text.contains("Generated Personas (5)"));
        assert!(text.contains("Sarah Martinez"));
        assert!(text.contains("✓ Audience"));
    }

    #[test]
    fn test_error_banner() {
        let mut state = TuiState::new("test");
        state.wizard.begin_request(Request::GeneratePersonas);
        state.apply(TuiMessage::PersonasLoaded(Err("Failed to generate personas".into())));
        let text = screen(&state);
        assert!(text.contains("Failed to generate personas"));
        assert!(text.contains("[ Generate Personas ]"));
    }

    #[test]
    fn test_persona_overlay() {
        let mut state = TuiState::new("test");
        state.wizard.begin_request(Request::GeneratePersonas);
        state.apply(TuiMessage::PersonasLoaded(Ok(demo_personas())));
        state.open_selected_persona();
        let text = screen(&state);
        assert!(text.contains("[SM] Sarah Martinez"));
        assert!(text.contains("Demographics"));
        assert!(text.contains("Esc close"));
    }

    #[test]
    fn test_results_tabs() {
        let mut state = TuiState::new("test");
        state.wizard.begin_request(Request::GeneratePersonas);
        state.apply(TuiMessage::PersonasLoaded(Ok(demo_personas())));
        state.wizard.continue_to_concept();
        state.wizard.continue_to_interview();
        state.wizard.begin_request(Request::RunStudy);
        let request = state.form.study_request(state.wizard.personas());
        state.apply(TuiMessage::StudyCompleted(Ok(demo_result(&request))));

        let text = screen(&state);
        assert!(text.contains("Individual Interviews"));
        assert!(text.contains("[SM] Sarah Martinez"));

        state.wizard.toggle_tab();
        let text = screen(&state);
        assert!(text.contains("Purchase Intent: 78%"));
        assert!(text.contains("Recommendations"));
    }
}
