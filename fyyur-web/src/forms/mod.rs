//! Form binding and validation
//!
//! Bodies arrive as `application/x-www-form-urlencoded` and are decoded into
//! an ordered list of pairs so repeated keys (`genres`) survive. Each form
//! keeps the raw submitted strings for re-rendering and validates them into
//! the record's editable attributes.

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

use choices::{GENRES, STATES};
use url::{Host, Url};

/// Decoded form body
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`, trimmed; empty when absent
    pub fn value(&self, key: &str) -> String {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Every non-blank value for `key`, in submission order
    pub fn values(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }

    /// Checkbox state: present with a truthy value
    pub fn checked(&self, key: &str) -> bool {
        self.pairs
            .iter()
            .any(|(k, v)| k == key && matches!(v.trim(), "y" | "on" | "true" | "1" | "yes"))
    }
}

/// Field-level validation errors, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded against `field`
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// `field: message` for every error
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect()
    }

    /// One-line summary shown above the form
    pub fn summary(&self) -> String {
        format!("Please fix the following errors: {}", self.messages().join(", "))
    }
}

/// `None` for blank input
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn check_required(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "This field is required.");
    }
}

pub(crate) fn check_state(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.add(field, "This field is required.");
    } else if !STATES.contains(&value) {
        errors.add(field, "Not a valid choice.");
    }
}

pub(crate) fn check_genres(errors: &mut FieldErrors, field: &'static str, values: &[String]) {
    if values.is_empty() {
        errors.add(field, "This field is required.");
        return;
    }
    for value in values {
        if !GENRES.contains(&value.as_str()) {
            errors.add(field, format!("'{}' is not a valid choice for this field.", value));
        }
    }
}

/// Blank is fine; otherwise an absolute http(s) URL whose host is an IP
/// address or a dotted domain name with no empty labels
pub(crate) fn check_url(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        return;
    }
    let valid = match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && valid_host(url.host()),
        Err(_) => false,
    };
    if !valid {
        errors.add(field, "Invalid URL.");
    }
}

fn valid_host(host: Option<Host<&str>>) -> bool {
    match host {
        Some(Host::Domain(domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Blank is fine; otherwise ten digits once `-`, `.`, spaces and
/// parentheses are removed
pub(crate) fn check_phone(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        return;
    }
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | ' ' | '(' | ')'))
        .collect();
    if stripped.len() != 10 || !stripped.chars().all(|c| c.is_ascii_digit()) {
        errors.add(field, "Invalid phone number, expected xxx-xxx-xxxx.");
    }
}
