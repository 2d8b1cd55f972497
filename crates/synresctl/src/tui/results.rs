//! Study result views: interview transcripts and the executive summary.
//!
//! Pure display. Every field is shown as returned by the backend.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use synres_shared::persona::initials;
use synres_shared::{StudyResult, Summary};

use crate::wizard::ResultTab;

fn heading(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// One block per interview: badge and name, then each Q and quoted answer
pub fn interview_lines(result: &StudyResult) -> Vec<Line<'static>> {
    if result.interviews.is_empty() {
        return vec![Line::from(Span::styled(
            "No interviews were returned.",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for interview in &result.interviews {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", initials(&interview.persona_name)),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(
                interview.persona_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        for qa in &interview.responses {
            lines.push(Line::from(Span::styled(
                format!("  Q: {}", qa.question),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(Span::styled(
                format!("  \"{}\"", qa.response),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

fn metric(label: &str, value: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

/// Metrics, findings, concerns and numbered recommendations
pub fn summary_lines(summary: Option<&Summary>) -> Vec<Line<'static>> {
    let Some(summary) = summary else {
        return vec![Line::from(Span::styled(
            "No summary available for this study.",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let mut metrics = Vec::new();
    metrics.extend(metric("Purchase Intent", &summary.purchase_intent));
    metrics.extend(metric("Appeal Score", &summary.appeal_score));
    metrics.extend(metric("Value Perception", &summary.value_perception));

    let mut lines = vec![Line::from(metrics), Line::default()];

    lines.push(heading("Positive Findings", Color::Green));
    for finding in &summary.positive_findings {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::raw(finding.clone()),
        ]));
    }
    lines.push(Line::default());

    lines.push(heading("Concerns", Color::Yellow));
    for concern in &summary.concerns {
        lines.push(Line::from(vec![
            Span::styled("  ⚠ ", Style::default().fg(Color::Yellow)),
            Span::raw(concern.clone()),
        ]));
    }
    lines.push(Line::default());

    lines.push(heading("Recommendations", Color::Magenta));
    for (i, rec) in summary.recommendations.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::Magenta)),
            Span::raw(rec.clone()),
        ]));
    }
    lines
}

/// Lines for the selected tab
pub fn result_lines(result: &StudyResult, tab: ResultTab) -> Vec<Line<'static>> {
    match tab {
        ResultTab::Interviews => interview_lines(result),
        ResultTab::Summary => summary_lines(result.summary.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synres_shared::{Interview, QuestionResponse};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn sample() -> StudyResult {
        StudyResult {
            interviews: vec![Interview {
                persona_name: "Sarah Martinez".to_string(),
                persona_id: 1,
                responses: vec![QuestionResponse {
                    question: "Would you buy it?".to_string(),
                    response: "Probably, yeah.".to_string(),
                }],
            }],
            summary: Some(Summary {
                purchase_intent: "78%".to_string(),
                appeal_score: "7.2/10".to_string(),
                value_perception: "6.8/10".to_string(),
                positive_findings: vec!["Strong brand".to_string()],
                concerns: vec!["Artificial flavor".to_string()],
                recommendations: vec!["30-count".to_string(), "Natural".to_string()],
            }),
        }
    }

    #[test]
    fn test_interview_lines() {
        let lines = text(&interview_lines(&sample()));
        assert_eq!(lines[0], "[SM] Sarah Martinez");
        assert_eq!(lines[1], "  Q: Would you buy it?");
        assert_eq!(lines[2], "  \"Probably, yeah.\"");
    }

    #[test]
    fn test_summary_lines() {
        let result = sample();
        let lines = text(&summary_lines(result.summary.as_ref()));
        assert!(lines[0].contains("Purchase Intent: 78%"));
        assert!(lines[0].contains("Appeal Score: 7.2/10"));
        assert!(lines[0].contains("Value Perception: 6.8/10"));
        assert!(lines.contains(&"  ✓ Strong brand".to_string()));
        assert!(lines.contains(&"  ⚠ Artificial flavor".to_string()));
        assert!(lines.contains(&"  2. Natural".to_string()));
    }

    #[test]
    fn test_missing_summary_placeholder() {
        let result = StudyResult {
            summary: None,
            ..sample()
        };
        let lines = text(&result_lines(&result, ResultTab::Summary));
        assert_eq!(lines, vec!["No summary available for this study."]);
    }

    #[test]
    fn test_tab_switches_view() {
        let result = sample();
        let interviews = text(&result_lines(&result, ResultTab::Interviews));
        let summary = text(&result_lines(&result, ResultTab::Summary));
        assert_ne!(interviews, summary);
    }
}
