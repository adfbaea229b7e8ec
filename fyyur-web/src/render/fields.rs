//! Form widgets shared by the listing forms

use super::escape_html;
use crate::forms::choices::{GENRES, STATES};
use crate::forms::FieldErrors;

/// Whether a form lists a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Form action under `base` (`/venues`, `/artists`)
    pub fn action(self, base: &str) -> String {
        match self {
            FormMode::Create => format!("{}/create", base),
            FormMode::Edit(id) => format!("{}/{}/edit", base, id),
        }
    }
}

fn field_errors(errors: &FieldErrors, name: &str) -> String {
    let messages = errors.for_field(name);
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape_html(m)))
        .collect();
    format!(r#"<ul class="errors">{}</ul>"#, items)
}

/// Summary line plus one entry per field error
pub fn error_summary(errors: &FieldErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .messages()
        .iter()
        .map(|m| format!("<li>{}</li>", escape_html(m)))
        .collect();
    format!(
        r#"<div class="alert alert-danger errors"><p>{}</p><ul>{}</ul></div>"#,
        escape_html(&errors.summary()),
        items
    )
}

pub fn text_input(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label><br><input type="text" id="{name}" name="{name}" value="{value}">{errs}</p>"#,
        name = name,
        label = escape_html(label),
        value = escape_html(value),
        errs = field_errors(errors, name),
    )
}

pub fn textarea(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label><br><textarea id="{name}" name="{name}" rows="3">{value}</textarea></p>"#,
        name = name,
        label = escape_html(label),
        value = escape_html(value),
    )
}

pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<p><label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label></p>"#,
        name = name,
        label = escape_html(label),
        checked = if checked { " checked" } else { "" },
    )
}

fn options(choices: &[&str], is_selected: impl Fn(&str) -> bool) -> String {
    choices
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = escape_html(c),
                sel = if is_selected(*c) { " selected" } else { "" }
            )
        })
        .collect()
}

pub fn state_select(value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<p><label for="state">State</label><br><select id="state" name="state"><option value="">--</option>{}</select>{}</p>"#,
        options(STATES, |c| c == value),
        field_errors(errors, "state"),
    )
}

pub fn genres_select(selected: &[String], errors: &FieldErrors) -> String {
    format!(
        r#"<p><label for="genres">Genres</label><br><select id="genres" name="genres" multiple size="8">{}</select>{}</p>"#,
        options(GENRES, |c| selected.iter().any(|s| s == c)),
        field_errors(errors, "genres"),
    )
}
