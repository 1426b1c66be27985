//! Field rules for contact forms.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{EnhanceError, Result};

const NAME_PATTERN: &str = r"^[a-zA-ZÀ-ÿ\s'\-]{2,50}$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[0-9\s+\-()]{10,20}$";
const MESSAGE_MIN_LENGTH: usize = 10;

/// Label used when a field has no label, placeholder, name or id.
pub const FALLBACK_LABEL: &str = "This field";

/// A single check applied to a trimmed, non-empty value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The whole value must match.
    Pattern(Regex),
    /// The value must have at least this many characters.
    MinLength(usize),
}

impl Rule {
    /// Whether `value` satisfies the rule.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Pattern(regex) => regex.is_match(value),
            Rule::MinLength(min) => value.chars().count() >= *min,
        }
    }
}

/// A rule with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// The check.
    pub rule: Rule,
    /// Inline error text.
    pub message: String,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVerdict {
    /// The field passes; it gets the valid styling.
    Valid,
    /// Optional field left empty: passes, but gets no styling.
    Empty,
    /// The field fails with the given inline message.
    Invalid(String),
}

impl FieldVerdict {
    /// Whether the field passes (including the empty-optional case).
    pub fn is_valid(&self) -> bool {
        !matches!(self, FieldVerdict::Invalid(_))
    }

    /// Error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldVerdict::Valid | FieldVerdict::Empty => None,
            FieldVerdict::Invalid(message) => Some(message),
        }
    }
}

/// Everything the validator needs to know about a form control, read from
/// the DOM by the caller.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot<'a> {
    /// `name` attribute, possibly empty.
    pub name: &'a str,
    /// `id` attribute, possibly empty.
    pub id: &'a str,
    /// Raw, untrimmed value.
    pub value: &'a str,
    /// Whether the control carries `required`.
    pub required: bool,
    /// Text of the sibling `<label>`, if one exists.
    pub label: Option<&'a str>,
    /// `placeholder` attribute, if present.
    pub placeholder: Option<&'a str>,
}

impl FieldSnapshot<'_> {
    /// Key used for rule lookup: the name, falling back to the id.
    pub fn key(&self) -> &str {
        if self.name.is_empty() {
            self.id
        } else {
            self.name
        }
    }

    /// Human label used in the "is required" message.
    pub fn label(&self) -> String {
        if let Some(label) = self.label {
            return label.replace('*', "").trim().to_string();
        }
        if let Some(placeholder) = self.placeholder.filter(|p| !p.is_empty()) {
            return placeholder.to_string();
        }
        let key = self.key();
        if key.is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            key.to_string()
        }
    }
}

/// Message for a required field left empty.
pub fn required_message(label: &str) -> String {
    format!("{label} is required.")
}

/// Mapping from field key to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, FieldRule>,
}

impl RuleTable {
    /// Empty table: every non-empty value passes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The contact-form rules: names, email, phone and message.
    pub fn contact_form() -> Result<Self> {
        Ok(Self::empty()
            .with_pattern(
                "firstName",
                NAME_PATTERN,
                "First name must be 2-50 characters and contain only letters, spaces, \
                 hyphens, or apostrophes.",
            )?
            .with_pattern(
                "lastName",
                NAME_PATTERN,
                "Last name must be 2-50 characters and contain only letters, spaces, \
                 hyphens, or apostrophes.",
            )?
            .with_pattern(
                "email",
                EMAIL_PATTERN,
                "Please enter a valid email address (e.g., example@domain.com).",
            )?
            .with_pattern(
                "phone",
                PHONE_PATTERN,
                "Phone number must be 10-20 characters and contain only digits, spaces, +, \
                 -, (, ).",
            )?
            .with_min_length(
                "message",
                MESSAGE_MIN_LENGTH,
                "Message must be at least 10 characters long.",
            ))
    }

    /// Add or replace a pattern rule.
    pub fn with_pattern(mut self, field: &str, pattern: &str, message: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| EnhanceError::InvalidRule {
            field: field.to_string(),
            source,
        })?;
        self.rules.insert(field.to_string(), FieldRule {
            rule: Rule::Pattern(regex),
            message: message.to_string(),
        });
        Ok(self)
    }

    /// Add or replace a minimum-length rule.
    pub fn with_min_length(mut self, field: &str, min: usize, message: &str) -> Self {
        self.rules.insert(field.to_string(), FieldRule {
            rule: Rule::MinLength(min),
            message: message.to_string(),
        });
        self
    }

    /// Rule registered for `key`, if any.
    pub fn rule_for(&self, key: &str) -> Option<&FieldRule> {
        self.rules.get(key)
    }

    /// Validate one field.
    ///
    /// Order: required-and-empty, then empty (passes), then the field's rule.
    pub fn validate(&self, field: &FieldSnapshot<'_>) -> FieldVerdict {
        let value = field.value.trim();

        if field.required && value.is_empty() {
            return FieldVerdict::Invalid(required_message(&field.label()));
        }
        if value.is_empty() {
            return FieldVerdict::Empty;
        }

        match self.rule_for(field.key()) {
            Some(rule) if !rule.rule.accepts(value) => FieldVerdict::Invalid(rule.message.clone()),
            _ => FieldVerdict::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn table() -> RuleTable {
        RuleTable::contact_form().expect("builtin rules compile")
    }

    fn field<'a>(name: &'a str, value: &'a str) -> FieldSnapshot<'a> {
        FieldSnapshot {
            name,
            value,
            ..FieldSnapshot::default()
        }
    }

    #[test]
    fn required_empty_field_uses_label_text() {
        let snapshot = FieldSnapshot {
            name: "firstName",
            required: true,
            label: Some("First name *"),
            ..FieldSnapshot::default()
        };
        assert_eq!(
            table().validate(&snapshot),
            FieldVerdict::Invalid("First name is required.".to_string())
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut snapshot = field("email", "   ");
        assert_eq!(table().validate(&snapshot), FieldVerdict::Empty);
        snapshot.required = true;
        snapshot.placeholder = Some("Email");
        assert_eq!(table().validate(&snapshot).message(), Some("Email is required."));
    }

    #[test]
    fn label_falls_back_through_placeholder_name_id() {
        let mut snapshot = FieldSnapshot {
            id: "company",
            ..FieldSnapshot::default()
        };
        assert_eq!(snapshot.label(), "company");
        snapshot.name = "org";
        assert_eq!(snapshot.label(), "org");
        snapshot.placeholder = Some("");
        assert_eq!(snapshot.label(), "org");
        snapshot.placeholder = Some("Company");
        assert_eq!(snapshot.label(), "Company");
        assert_eq!(FieldSnapshot::default().label(), FALLBACK_LABEL);
    }

    #[test]
    fn email_rule_accepts_common_addresses() {
        let rules = table();
        assert_eq!(
            rules.validate(&field("email", "a@b")).message(),
            Some("Please enter a valid email address (e.g., example@domain.com).")
        );
        assert!(rules.validate(&field("email", "a@b.com")).is_valid());
        assert!(rules.validate(&field("email", "  a@b.com  ")).is_valid());
    }

    #[test]
    fn name_rule_accepts_accents_and_hyphens() {
        let rules = table();
        assert!(rules.validate(&field("firstName", "Zoë-Anne O'Neil")).is_valid());
        assert!(!rules.validate(&field("lastName", "X")).is_valid());
        assert!(!rules.validate(&field("lastName", "R2D2")).is_valid());
    }

    #[test]
    fn phone_rule_checks_charset_and_length() {
        let rules = table();
        assert!(rules.validate(&field("phone", "+1 (555) 010-2030")).is_valid());
        assert!(!rules.validate(&field("phone", "555-0102")).is_valid());
        assert!(!rules.validate(&field("phone", "call me maybe 1234")).is_valid());
    }

    #[test]
    fn message_rule_counts_characters() {
        let rules = table();
        assert_eq!(
            rules.validate(&field("message", "too short")).message(),
            Some("Message must be at least 10 characters long.")
        );
        assert!(rules.validate(&field("message", "ten chars!")).is_valid());
    }

    #[test]
    fn id_is_used_when_name_is_missing() {
        let snapshot = FieldSnapshot {
            id: "email",
            value: "nope",
            ..FieldSnapshot::default()
        };
        assert!(!table().validate(&snapshot).is_valid());
    }

    #[test]
    fn unknown_fields_pass_when_filled() {
        assert!(table().validate(&field("company", "x")).is_valid());
    }

    #[test]
    fn bad_pattern_reports_field() {
        let err = RuleTable::empty().with_pattern("zip", "([0-9]", "bad").unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidRule { ref field, .. } if field == "zip"));
    }

    proptest! {
        #[test]
        fn email_verdict_agrees_with_pattern(value in "[a-z@. ]{0,12}") {
            let rules = table();
            let regex = Regex::new(EMAIL_PATTERN).expect("pattern");
            let trimmed = value.trim();
            let verdict = rules.validate(&field("email", &value));
            if trimmed.is_empty() || regex.is_match(trimmed) {
                prop_assert!(verdict.is_valid());
            } else {
                prop_assert_eq!(
                    verdict.message(),
                    Some("Please enter a valid email address (e.g., example@domain.com).")
                );
            }
        }
    }
}
