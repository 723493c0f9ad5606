//! Name Validator: staged checks against a resource type's naming rule.
//!
//! Checks run in a fixed order (pattern, minimum length, maximum length,
//! forbidden characters) and all diagnostics accumulate; a name failing the
//! pattern still gets its length and character problems reported. Two checks
//! carry a delimiter-strip retry: a corrected name with the delimiter removed
//! is accepted in place of the original when it passes.

use regex::Regex;

use crate::domain::composer::{CandidateName, DELIMITER_NOT_ALLOWED_MESSAGE};
use crate::domain::entities::{ResourceDelimiter, ResourceType};

pub const PATTERN_FAILED_MESSAGE: &str =
    "Regex failed - Please review the Resource Type Naming Guidelines.";
pub const PATTERN_UNEVALUABLE_MESSAGE: &str =
    "The naming pattern for this resource type could not be evaluated.";
pub const TOO_SHORT_MESSAGE: &str =
    "Generated name is less than the minimum length for the selected resource type.";
pub const TOO_LONG_MESSAGE: &str =
    "Generated name is more than the maximum length for the selected resource type.";
pub const REMOVE_OPTIONAL_COMPONENTS_MESSAGE: &str = "Please remove any optional components or \
     contact your admin to update the required components for this resource type.";
pub const TOO_LONG_DELIMITER_REMOVED_MESSAGE: &str =
    "Generated name with the selected delimiter is more than the maximum length for the selected \
     resource type. The delimiter has been removed.";
pub const INSTANCE_NOT_NUMERIC_MESSAGE: &str = "Resource Instance must be a numeric value.";

/// The verdict for one candidate name.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub valid: bool,
    /// The accepted name. May differ from the input when a delimiter-strip
    /// retry produced a passing correction.
    pub name: String,
    pub messages: Vec<String>,
}

impl ValidationOutcome {
    /// All diagnostics joined into one space-separated string.
    pub fn message(&self) -> String {
        self.messages.join(" ")
    }
}

/// Validates a bare name string against a type's rule.
pub fn validate_name(
    rule: &ResourceType,
    name: &str,
    delimiter: &ResourceDelimiter,
) -> ValidationOutcome {
    let mut valid = true;
    let mut name = name.to_string();
    let mut messages = Vec::new();
    let stripped = |n: &str| {
        if delimiter.is_empty() {
            n.to_string()
        } else {
            n.replace(&delimiter.delimiter, "")
        }
    };

    match Regex::new(&rule.pattern) {
        Ok(pattern) => {
            if !pattern.is_match(&name) {
                // Some patterns forbid the delimiter itself; retry without it.
                if !delimiter.is_empty() && pattern.is_match(&stripped(&name)) {
                    name = stripped(&name);
                    messages.push(DELIMITER_NOT_ALLOWED_MESSAGE.to_string());
                } else {
                    valid = false;
                    messages.push(PATTERN_FAILED_MESSAGE.to_string());
                }
            }
        }
        Err(error) => {
            tracing::warn!(
                resource_type = %rule.short_name,
                pattern = %rule.pattern,
                %error,
                "naming pattern failed to compile"
            );
            valid = false;
            messages.push(PATTERN_UNEVALUABLE_MESSAGE.to_string());
        }
    }

    if name.len() < rule.length_min {
        valid = false;
        messages.push(TOO_SHORT_MESSAGE.to_string());
    }

    if name.len() > rule.length_max {
        let corrected = stripped(&name);
        if !delimiter.is_empty() && corrected.len() <= rule.length_max {
            name = corrected;
            messages.push(TOO_LONG_DELIMITER_REMOVED_MESSAGE.to_string());
        } else {
            valid = false;
            messages.push(TOO_LONG_MESSAGE.to_string());
            messages.push(REMOVE_OPTIONAL_COMPONENTS_MESSAGE.to_string());
        }
    }

    for c in rule.invalid_characters.chars() {
        if name.contains(c) {
            valid = false;
            messages.push(format!("Name cannot contain the following character: {c}"));
        }
    }
    for c in rule.invalid_characters_start.chars() {
        if name.starts_with(c) {
            valid = false;
            messages.push(format!("Name cannot start with the following character: {c}"));
        }
    }
    for c in rule.invalid_characters_end.chars() {
        if name.ends_with(c) {
            valid = false;
            messages.push(format!("Name cannot end with the following character: {c}"));
        }
    }
    for c in rule.invalid_characters_consecutive.chars() {
        let doubled = format!("{c}{c}");
        if name.contains(&doubled) {
            valid = false;
            messages.push(format!(
                "Name cannot contain the following consecutive character: {c}"
            ));
        }
    }

    ValidationOutcome { valid, name, messages }
}

/// Validates a composed candidate, adding the instance-numeric check.
pub fn validate_candidate(
    rule: &ResourceType,
    candidate: &CandidateName,
    delimiter: &ResourceDelimiter,
) -> ValidationOutcome {
    let mut outcome = validate_name(rule, &candidate.text, delimiter);

    let instance_numeric = candidate
        .components
        .iter()
        .filter(|c| c.name == "ResourceInstance")
        .all(|c| !c.value.is_empty() && c.value.chars().all(|ch| ch.is_ascii_digit()));
    if !instance_numeric {
        outcome.valid = false;
        outcome.messages.push(INSTANCE_NOT_NUMERIC_MESSAGE.to_string());
    }

    outcome
}
