use crate::{AnswerValue, Inputs, PredicateFn};

/// A predicate over one answer.
///
/// Used as a node condition (checked against the parent question's answer) and as
/// the input validation of a text question. Option items are compared by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// The value is exactly this string.
    Equals(String),

    /// The value is present and differs from this string.
    NotEquals(String),

    StartsWith(String),

    EndsWith(String),

    /// The value contains this substring.
    Includes(String),

    /// The value has at least this many characters.
    MinLength(usize),

    /// The value has at most this many characters.
    MaxLength(usize),

    /// The value is one of these strings.
    OneOf(Vec<String>),

    /// The selected list contains this id. A single value must equal it.
    Contains(String),

    /// The selected list contains every one of these ids.
    ContainsAll(Vec<String>),

    /// The selected list contains at least one of these ids.
    ContainsAny(Vec<String>),

    MinItems(usize),

    MaxItems(usize),

    /// Caller-supplied predicate over the value and the whole bag.
    Func(PredicateFn),
}

impl Validation {
    /// Shorthand for `Validation::Equals`.
    pub fn equals(value: impl Into<String>) -> Self {
        Self::Equals(value.into())
    }

    /// Shorthand for `Validation::Contains`.
    pub fn contains(value: impl Into<String>) -> Self {
        Self::Contains(value.into())
    }

    /// Build a `Validation::Func` from a closure.
    pub fn func(
        f: impl Fn(Option<&AnswerValue>, &Inputs) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self::Func(PredicateFn::new(f))
    }

    /// Check a value, returning a human readable message on failure.
    ///
    /// Every comparator fails on an absent value; only `Func` can accept one.
    pub fn validate(&self, value: Option<&AnswerValue>, inputs: &Inputs) -> Result<(), String> {
        if let Self::Func(predicate) = self {
            return predicate.check(value, inputs);
        }
        let Some(value) = value else {
            return Err("a value is required".to_string());
        };

        match self {
            Self::Contains(id) => {
                let found = match value.list_ids() {
                    Some(ids) => ids.contains(&id.as_str()),
                    None => value.scalar_id() == Some(id.as_str()),
                };
                expect(found, || format!("selection must contain '{id}'"))
            }
            Self::ContainsAll(wanted) => {
                let ids = list(value)?;
                let missing: Vec<&str> = wanted
                    .iter()
                    .map(String::as_str)
                    .filter(|w| !ids.contains(w))
                    .collect();
                expect(missing.is_empty(), || {
                    format!("selection is missing: {}", missing.join(", "))
                })
            }
            Self::ContainsAny(wanted) => {
                let ids = list(value)?;
                expect(wanted.iter().any(|w| ids.contains(&w.as_str())), || {
                    format!("selection must contain one of: {}", wanted.join(", "))
                })
            }
            Self::MinItems(min) => {
                let count = list(value)?.len();
                expect(count >= *min, || format!("select at least {min} item(s)"))
            }
            Self::MaxItems(max) => {
                let count = list(value)?.len();
                expect(count <= *max, || format!("select at most {max} item(s)"))
            }
            scalar => {
                let Some(s) = value.scalar_id() else {
                    let actual = value.type_name();
                    return Err(format!("expected a single value, got {actual}"));
                };
                scalar.validate_str(s)
            }
        }
    }

    /// Condition form of [`validate`](Self::validate).
    pub fn check(&self, value: Option<&AnswerValue>, inputs: &Inputs) -> bool {
        self.validate(value, inputs).is_ok()
    }

    fn validate_str(&self, s: &str) -> Result<(), String> {
        match self {
            Self::Equals(expected) => {
                expect(s == expected, || format!("value must be '{expected}'"))
            }
            Self::NotEquals(other) => expect(s != other, || format!("value must not be '{other}'")),
            Self::StartsWith(prefix) => expect(s.starts_with(prefix.as_str()), || {
                format!("value must start with '{prefix}'")
            }),
            Self::EndsWith(suffix) => expect(s.ends_with(suffix.as_str()), || {
                format!("value must end with '{suffix}'")
            }),
            Self::Includes(needle) => expect(s.contains(needle.as_str()), || {
                format!("value must contain '{needle}'")
            }),
            Self::MinLength(min) => expect(s.chars().count() >= *min, || {
                format!("value must be at least {min} characters long")
            }),
            Self::MaxLength(max) => expect(s.chars().count() <= *max, || {
                format!("value must be at most {max} characters long")
            }),
            Self::OneOf(allowed) => expect(allowed.iter().any(|a| a == s), || {
                format!("value must be one of: {}", allowed.join(", "))
            }),
            _ => Ok(()),
        }
    }
}

fn expect(ok: bool, message: impl FnOnce() -> String) -> Result<(), String> {
    if ok { Ok(()) } else { Err(message()) }
}

fn list(value: &AnswerValue) -> Result<Vec<&str>, String> {
    value
        .list_ids()
        .ok_or_else(|| format!("expected a list, got {}", value.type_name()))
}
