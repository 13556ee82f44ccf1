//! The submitted forms, along with the validation that turns them into
//! the values the platform works with.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use crate::error::ValidationError;

mod animal;
mod comment;
mod intake;
mod task;

pub use animal::AnimalForm;
pub use comment::{
    CommentForm,
    TaskItemForm,
};
pub use intake::{
    Applicant,
    IntakeForm,
};
pub use task::{
    TaskEditForm,
    TaskForm,
};

pub const REQUIRED: &str = "This field is required.";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$")
        .expect("the email pattern is valid"))
}

fn check_length(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
    max: usize,
) {
    let len = value.chars().count();
    if len > max {
        errors.add(field, format!(
            "Ensure this value has at most {max} characters (it has {len})."
        ));
    }
}

/// Returns the trimmed value, recording an error if it is empty or too
/// long.
fn required(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
    max: usize,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else {
        check_length(errors, field, value, max);
    }
    value.to_string()
}

fn optional(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
    max: usize,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        check_length(errors, field, value, max);
        Some(value.to_string())
    }
}

fn email(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
    max: usize,
) -> String {
    let value = required(errors, field, value, max);
    if !value.is_empty() && !email_regex().is_match(&value) {
        errors.add(field, "Enter a valid email address.");
    }
    value
}

/// Parse an optional `YYYY-MM-DD` date into the timestamp at the start
/// of that day.
fn date(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp()),
        Err(_) => {
            errors.add(field, "Enter a valid date.");
            None
        }
    }
}

/// Parse an optional choice; an empty value is the absence of a choice.
fn choice<T: std::str::FromStr>(
    errors: &mut ValidationError,
    field: &str,
    value: &str,
) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(field, format!(
                "Select a valid choice. {value} is not one of the available choices."
            ));
            None
        }
    }
}
