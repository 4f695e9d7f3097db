//! Plain-text rendering of the builder view.
//!
//! The generated-code section is omitted while the form holds no code, and
//! deployment steps are numbered from 1 in table order.

use std::fmt::Write as _;

use builder::{ActionFailure, FormState, Platform, TEMPLATES, Template};

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

pub const TITLE: &str = "AI App Builder";

fn heading(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out, "{}", "=".repeat(text.chars().count()));
}

/// Name, description, and numbered feature inputs.
#[must_use]
pub fn render_form(form: &FormState) -> String {
    let mut out = String::new();
    heading(&mut out, TITLE);
    let _ = writeln!(out, "App Name: {}", form.app_name());
    let _ = writeln!(out, "App Description: {}", form.app_description());
    out.push('\n');
    heading(&mut out, "Features");
    for (index, feature) in form.feature_list().iter().enumerate() {
        let _ = writeln!(out, "Feature {}: {feature}", index + 1);
    }
    out
}

/// `None` until the form holds generated code.
#[must_use]
pub fn render_generated_code(form: &FormState) -> Option<String> {
    let code = form.generated_code();
    if code.is_empty() {
        return None;
    }
    let mut out = String::new();
    heading(&mut out, "Generated Code");
    out.push_str(code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    Some(out)
}

#[must_use]
pub fn render_deployment_steps(platform: Platform) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Steps to Deploy ({platform})"));
    for (index, step) in platform.steps().iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", index + 1);
    }
    out
}

fn render_template(out: &mut String, template: &Template) {
    let _ = writeln!(out, "{}", template.name);
    let _ = writeln!(out, "  App Name: {}", template.app_name);
    let _ = writeln!(out, "  App Description: {}", template.app_description);
    for feature in template.feature_list {
        let _ = writeln!(out, "  - {feature}");
    }
}

/// Every template with its seed values, in table order.
#[must_use]
pub fn render_templates() -> String {
    let mut out = String::new();
    heading(&mut out, "Templates");
    for (index, template) in TEMPLATES.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_template(&mut out, template);
    }
    out
}

#[must_use]
pub fn render_failure(failure: &ActionFailure) -> String {
    format!("{} failed: {}", failure.action, failure.message)
}
