use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, OptionItem};

/// The surface a traversal is running on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "vsc")]
    VSCode,
    #[default]
    #[serde(rename = "cli")]
    CLI,
    #[serde(rename = "vs")]
    VS,
    #[serde(rename = "cli_help")]
    CLIHelp,
}

/// Error type for answer bag access operations.
#[derive(Debug, thiserror::Error)]
pub enum InputsError {
    #[error("Missing answer for question: {0}")]
    Missing(String),

    #[error("Type mismatch for question '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The answer bag shared by a whole traversal.
///
/// Answers are keyed by question name. The bag is created by the caller, written
/// by the engine as questions are answered, and stays with the caller afterwards,
/// including after a failed traversal. Only one traversal may write to a bag at a
/// time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub platform: Platform,

    #[serde(flatten)]
    values: HashMap<String, AnswerValue>,
}

impl Inputs {
    /// Create an empty bag for the given platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert), handy for seeding answers.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AnswerValue> {
        self.values.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a string answer.
    pub fn get_string(&self, name: &str) -> Result<&str, InputsError> {
        match self.get(name) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "String", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    /// Get a string list answer.
    pub fn get_string_list(&self, name: &str) -> Result<&[String], InputsError> {
        match self.get(name) {
            Some(AnswerValue::StringList(list)) => Ok(list),
            Some(other) => Err(mismatch(name, "StringList", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    /// Get an option item answer.
    pub fn get_item(&self, name: &str) -> Result<&OptionItem, InputsError> {
        match self.get(name) {
            Some(AnswerValue::Item(item)) => Ok(item),
            Some(other) => Err(mismatch(name, "Item", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    /// Get an option item list answer.
    pub fn get_item_list(&self, name: &str) -> Result<&[OptionItem], InputsError> {
        match self.get(name) {
            Some(AnswerValue::ItemList(items)) => Ok(items),
            Some(other) => Err(mismatch(name, "ItemList", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, InputsError> {
        match self.get(name) {
            Some(AnswerValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "Bool", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64, InputsError> {
        match self.get(name) {
            Some(AnswerValue::Int(i)) => Ok(*i),
            Some(other) => Err(mismatch(name, "Int", other)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }

    /// Get the id of a single selection, whether it was stored as a string or as an item.
    pub fn selected_id(&self, name: &str) -> Result<&str, InputsError> {
        match self.get(name) {
            Some(value) => value
                .scalar_id()
                .ok_or_else(|| mismatch(name, "String or Item", value)),
            None => Err(InputsError::Missing(name.to_string())),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &AnswerValue) -> InputsError {
    InputsError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl<'a> IntoIterator for &'a Inputs {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
