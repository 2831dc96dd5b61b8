//! Pure, rule-driven form validation
//!
//! One rule engine serves the checkout, login and signup forms; each form is
//! just a different rule table over the same value bag. `validate` has no
//! side effects and collects every failing field, one message per field.

use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation errors; empty iff the form is acceptable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<String, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A single form value
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Bag of raw form values keyed by field name
#[derive(Debug, Clone, Default)]
pub struct FormValues(BTreeMap<&'static str, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: &'static str, value: &str) -> Self {
        self.0.insert(field, FieldValue::Text(value.to_string()));
        self
    }

    pub fn flag(mut self, field: &'static str, value: bool) -> Self {
        self.0.insert(field, FieldValue::Flag(value));
        self
    }

    fn get_text(&self, field: &str) -> &str {
        match self.0.get(field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    fn get_flag(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(FieldValue::Flag(true)))
    }
}

/// A validation predicate over the value bag
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Trimmed length must be at least this many characters
    MinTrimmedLen(usize),
    /// Raw length must be at least this many characters
    MinLen(usize),
    /// Standard local@domain.tld shape
    Email,
    /// Exactly this many ASCII digits and nothing else
    Digits(usize),
    /// Boolean field must be true
    MustBeTrue,
    /// Text must be one of a closed set
    OneOf(&'static [&'static str]),
    /// Must equal another text field (e.g. password confirmation)
    EqualsField(&'static str),
}

/// One configured check: field, predicate, message on failure
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

/// Supported payment methods, as the form spells them
pub const PAYMENT_METHODS: &[&str] = &["cash", "upi"];

/// Minimal local@domain.tld shape check (no lookup, no RFC pedantry)
fn is_email_shaped(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.chars().all(|c| c.is_ascii_digit())
}

impl Rule {
    fn passes(&self, field: &str, values: &FormValues) -> bool {
        match self {
            Rule::MinTrimmedLen(min) => values.get_text(field).trim().chars().count() >= *min,
            Rule::MinLen(min) => values.get_text(field).chars().count() >= *min,
            Rule::Email => is_email_shaped(values.get_text(field)),
            Rule::Digits(count) => is_digits(values.get_text(field), *count),
            Rule::MustBeTrue => values.get_flag(field),
            Rule::OneOf(set) => set.contains(&values.get_text(field)),
            Rule::EqualsField(other) => values.get_text(field) == values.get_text(other),
        }
    }
}

/// Run a rule table over a value bag; collects all failures, no short-circuit
pub fn validate(rules: &[FieldRule], values: &FormValues) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for rule in rules {
        // first failing rule per field wins; later rules don't overwrite
        if errors.get(rule.field).is_none() && !rule.rule.passes(rule.field, values) {
            errors.insert(rule.field, rule.message);
        }
    }
    errors
}

/// Checkout form rule table
pub fn checkout_rules() -> &'static [FieldRule] {
    &[
        FieldRule {
            field: "name",
            rule: Rule::MinTrimmedLen(3),
            message: "Name must be at least 3 characters",
        },
        FieldRule {
            field: "email",
            rule: Rule::Email,
            message: "Please enter a valid email address",
        },
        FieldRule {
            field: "phone",
            rule: Rule::Digits(10),
            message: "Please enter a valid 10-digit phone number",
        },
        FieldRule {
            field: "address",
            rule: Rule::MinTrimmedLen(5),
            message: "Please enter a valid address",
        },
        FieldRule {
            field: "city",
            rule: Rule::MinTrimmedLen(2),
            message: "Please enter a valid city",
        },
        FieldRule {
            field: "zipcode",
            rule: Rule::Digits(6),
            message: "Please enter a valid 6-digit zipcode",
        },
        FieldRule {
            field: "terms",
            rule: Rule::MustBeTrue,
            message: "You must agree to the terms and conditions",
        },
        FieldRule {
            field: "payment",
            rule: Rule::OneOf(PAYMENT_METHODS),
            message: "Please select a valid payment method",
        },
    ]
}

/// Login form rule table
pub fn login_rules() -> &'static [FieldRule] {
    &[
        FieldRule {
            field: "email",
            rule: Rule::Email,
            message: "Please enter a valid email address",
        },
        FieldRule {
            field: "password",
            rule: Rule::MinLen(6),
            message: "Password must be at least 6 characters",
        },
    ]
}

/// Signup form rule table
pub fn signup_rules() -> &'static [FieldRule] {
    &[
        FieldRule {
            field: "name",
            rule: Rule::MinTrimmedLen(3),
            message: "Name must be at least 3 characters",
        },
        FieldRule {
            field: "email",
            rule: Rule::Email,
            message: "Please enter a valid email address",
        },
        FieldRule {
            field: "phone",
            rule: Rule::Digits(10),
            message: "Please enter a valid 10-digit phone number",
        },
        FieldRule {
            field: "password",
            rule: Rule::MinLen(6),
            message: "Password must be at least 6 characters",
        },
        FieldRule {
            field: "confirm_password",
            rule: Rule::EqualsField("password"),
            message: "Passwords do not match",
        },
    ]
}
