//! Persona cards and the detail overlay

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use synres_shared::persona::attribute_text;
use synres_shared::{AttributeMap, Persona};

/// "coffee_consumption" -> "Coffee consumption", "decisionStyle" -> "Decision style"
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c == '_' || c == '-' {
            out.push(' ');
        } else if c.is_uppercase() && i > 0 {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn kids_text(kids: u32) -> String {
    match kids {
        1 => "1 kid".to_string(),
        n => format!("{} kids", n),
    }
}

/// Two-line card: initials badge and name, then the short profile
pub fn card_lines(persona: &Persona, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    vec![
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("[{}]", persona.initials()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(persona.name.clone(), name_style),
        ]),
        Line::from(Span::styled(
            format!(
                "     {} · {} · {} · {}",
                persona.age,
                persona.profession,
                persona.location,
                kids_text(persona.kids)
            ),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn section(title: &str, attrs: &AttributeMap, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    if attrs.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (key, value) in attrs {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", humanize_key(key)),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(attribute_text(value)),
        ]));
    }
    lines.push(Line::default());
}

/// Full profile for the overlay
pub fn detail_lines(persona: &Persona) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{}, {} · {} · {}",
                persona.name, persona.age, persona.profession, persona.location
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    section("Demographics", &persona.demographics, &mut lines);
    section("Psychographics", &persona.psychographics, &mut lines);
    section(
        "Behavioral Attributes",
        &persona.behavioral_attributes,
        &mut lines,
    );

    lines.push(Line::from(Span::styled(
        "Biases",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for bias in &persona.biases {
        lines.push(Line::from(format!("  • {}", bias)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_personas;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("coffee_consumption"), "Coffee consumption");
        assert_eq!(humanize_key("decisionStyle"), "Decision style");
        assert_eq!(humanize_key("income"), "Income");
    }

    #[test]
    fn test_card_lines() {
        let persona = &demo_personas()[0];
        let lines = text(&card_lines(persona, true));
        assert_eq!(lines[0], "▶ [SM] Sarah Martinez");
        assert_eq!(lines[1], "     34 · Teacher · Austin, TX · 2 kids");
    }

    #[test]
    fn test_detail_lines_cover_all_sections() {
        let persona = &demo_personas()[1];
        let lines = text(&detail_lines(persona));
        assert!(lines.contains(&"Demographics".to_string()));
        assert!(lines.contains(&"  Family: Married, 3 kids".to_string()));
        assert!(lines.contains(&"  Brand loyalty: Medium".to_string()));
        assert!(lines.contains(&"  Coffee consumption: 2-3 cups/day".to_string()));
        assert!(lines.contains(&"  • Influenced by mom friends".to_string()));
    }
}
