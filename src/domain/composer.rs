//! Name Composer: ordered component composition with delimiter policy.
//!
//! Walks the enabled component catalog in sort order, resolves one value per
//! component from the request, and accumulates the candidate name plus a
//! structured breakdown of contributing components. Pure and synchronous;
//! all catalog state comes in through the [`CatalogSnapshot`].

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::{NameComponent, ResourceComponent, ResourceType};
use crate::domain::snapshot::{
    BuiltinComponent, CatalogSnapshot, ComponentValue, NameRequestValues,
};

/// Message emitted when a type's static value bypasses composition.
pub const STATIC_VALUE_MESSAGE: &str =
    "The requested resource type name is a static value with specific requirements.";

/// Message emitted when the delimiter is suppressed during composition.
pub const DELIMITER_NOT_ALLOWED_MESSAGE: &str =
    "The specified delimiter is not allowed for this resource type and has been removed.";

/// The unvalidated composed name plus its component breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateName {
    pub text: String,
    /// Contributing components in composition order.
    pub components: Vec<NameComponent>,
}

/// A successful composition: the candidate plus any advisory messages.
#[derive(Debug, Clone)]
pub struct Composition {
    pub candidate: CandidateName,
    pub messages: Vec<String>,
    /// True when the type's static value was returned and validation,
    /// duplicate checking, and persistence must all be skipped.
    pub is_static: bool,
}

/// Accumulated missing/invalid component problems from one composition.
///
/// Composition does not stop at the first problem; every missing required
/// component and every unresolvable code is reported together.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeError {
    pub missing: Vec<String>,
    pub invalid: Vec<String>,
}

impl ComposeError {
    pub fn has_invalid_values(&self) -> bool {
        !self.invalid.is_empty()
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You must supply the required components.")?;
        for message in self.missing.iter().chain(self.invalid.iter()) {
            write!(f, " {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ComposeError {}

/// Where component values come from.
pub enum ValueSource<'a> {
    /// Strict per-field short codes; enumerated and custom codes are
    /// resolved against the snapshot.
    ShortCodes(&'a NameRequestValues),
    /// Pre-resolved values keyed by normalized component name; taken as
    /// supplied.
    Resolved(&'a BTreeMap<String, String>),
}

/// Composes a candidate name for one target type.
///
/// Components excluded by the type are skipped before any requirement check;
/// components without a supplied value are skipped silently when optional and
/// reported otherwise. The delimiter is inserted before every value except
/// the first, unless (and permanently after) it is found among the type's
/// forbidden characters.
pub fn compose(
    rule: &ResourceType,
    snapshot: &CatalogSnapshot,
    source: &ValueSource<'_>,
) -> Result<Composition, ComposeError> {
    if let Some(static_value) = rule.static_value() {
        return Ok(Composition {
            candidate: CandidateName {
                text: static_value.to_string(),
                components: Vec::new(),
            },
            messages: vec![STATIC_VALUE_MESSAGE.to_string()],
            is_static: true,
        });
    }

    let delimiter = snapshot.delimiter.delimiter.as_str();
    let mut name = String::new();
    let mut breakdown = Vec::new();
    let mut messages = Vec::new();
    let mut missing = Vec::new();
    let mut invalid = Vec::new();
    let mut delimiter_suppressed = false;

    for component in &snapshot.components {
        let normalized = component.normalized_name();
        if rule.is_excluded(&normalized) {
            continue;
        }

        let Some(supplied) = lookup(component, &normalized, source) else {
            if !rule.is_optional(&normalized) {
                missing.push(format!("{} value was not provided.", component.name));
            }
            continue;
        };

        let resolved = match supplied {
            ComponentValue::Enumerated { kind, code } => {
                if snapshot.resolve_enumerated(kind, &code).is_none() {
                    invalid.push(format!("{} value is invalid.", component.name));
                    continue;
                }
                code
            }
            ComponentValue::Custom(code) => {
                let code = code.to_lowercase();
                if snapshot.resolve_custom(&normalized, &code).is_none() {
                    invalid.push(format!(
                        "{} value is not a valid custom component short name.",
                        component.name
                    ));
                    continue;
                }
                code
            }
            ComponentValue::FreeText(text) | ComponentValue::Numeric(text) => text,
        };

        if !delimiter.is_empty() && !delimiter_suppressed {
            if rule.invalid_characters.contains(delimiter) {
                messages.push(DELIMITER_NOT_ALLOWED_MESSAGE.to_string());
                delimiter_suppressed = true;
            } else if !name.is_empty() {
                name.push_str(delimiter);
            }
        }

        name.push_str(&resolved);
        breakdown.push(NameComponent {
            name: component.name.clone(),
            value: resolved,
        });
    }

    if !missing.is_empty() || !invalid.is_empty() {
        return Err(ComposeError { missing, invalid });
    }

    Ok(Composition {
        candidate: CandidateName {
            text: name,
            components: breakdown,
        },
        messages,
        is_static: false,
    })
}

/// Resolves the supplied value for one component, tagged with its kind.
///
/// Returns `None` when nothing (or an empty string) was supplied, which the
/// caller treats as "missing" subject to the optional set. A non-custom
/// component whose name maps to no built-in accessor is likewise treated as
/// not supplied.
fn lookup(
    component: &ResourceComponent,
    normalized: &str,
    source: &ValueSource<'_>,
) -> Option<ComponentValue> {
    match source {
        ValueSource::Resolved(values) => values
            .get(normalized)
            .filter(|value| !value.is_empty())
            .map(|value| ComponentValue::FreeText(value.clone())),
        ValueSource::ShortCodes(values) => {
            if component.is_custom {
                let supplied = values.custom(normalized).filter(|v| !v.is_empty())?;
                if component.is_free_text {
                    Some(ComponentValue::FreeText(supplied.to_string()))
                } else {
                    Some(ComponentValue::Custom(supplied.to_string()))
                }
            } else {
                let builtin = BuiltinComponent::from_normalized(normalized)?;
                let supplied = values.builtin(builtin).filter(|v| !v.is_empty())?;
                Some(match builtin.catalog() {
                    Some(kind) => ComponentValue::Enumerated {
                        kind,
                        code: supplied.to_string(),
                    },
                    None => ComponentValue::Numeric(supplied.to_string()),
                })
            }
        }
    }
}
