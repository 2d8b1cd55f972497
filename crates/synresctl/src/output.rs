//! Plain terminal output for the non-interactive subcommands

use owo_colors::OwoColorize;
use synres_shared::persona::attribute_text;
use synres_shared::{AttributeMap, HealthStatus, Persona};

fn attributes(title: &str, attrs: &AttributeMap, out: &mut String) {
    if attrs.is_empty() {
        return;
    }
    out.push_str(&format!("  {}\n", title.dimmed()));
    for (key, value) in attrs {
        out.push_str(&format!("    {}: {}\n", key, attribute_text(value)));
    }
}

/// One persona as an indented block
pub fn format_persona(persona: &Persona) -> String {
    let mut out = format!(
        "{} {}  {}, {}, {}, {} kids\n",
        format!("[{}]", persona.initials()).cyan(),
        persona.name.bold(),
        persona.age,
        persona.profession,
        persona.location,
        persona.kids
    );
    attributes("demographics", &persona.demographics, &mut out);
    attributes("psychographics", &persona.psychographics, &mut out);
    attributes("behavioral", &persona.behavioral_attributes, &mut out);
    if !persona.biases.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            "biases".dimmed(),
            persona.biases.join("; ")
        ));
    }
    out
}

pub fn print_personas(personas: &[Persona]) {
    println!("{}", format!("Generated Personas ({})", personas.len()).bold());
    println!();
    for persona in personas {
        println!("{}", format_persona(persona));
    }
}

pub fn format_health(api_url: &str, health: &HealthStatus) -> String {
    let status = if health.is_healthy() {
        format!("[OK] {}", health.status).bright_green().to_string()
    } else {
        format!("[FAIL] {}", health.status).bright_red().to_string()
    };
    format!("{}  {}  ollama: {}", status, api_url, health.ollama)
}
