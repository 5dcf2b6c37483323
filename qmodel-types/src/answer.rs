use serde::{Deserialize, Serialize};

/// A selectable option of a single or multi select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Stable identifier, stored in the answer bag when objects are not requested.
    pub id: String,

    /// Text shown to the user.
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Optional heading used by front ends that group options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl OptionItem {
    /// Create an option with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            detail: None,
            group: None,
        }
    }

    /// Set the description line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the group heading.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// The options of a select question, as written by the question author.
///
/// Plain strings and full items behave differently when a question asks for
/// objects back: a plain string option is always stored as its string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticOptions {
    Strings(Vec<String>),
    Items(Vec<OptionItem>),
}

impl StaticOptions {
    /// Number of options.
    pub fn len(&self) -> usize {
        match self {
            Self::Strings(s) => s.len(),
            Self::Items(items) => items.len(),
        }
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the options are full items (and can be returned as objects).
    pub fn is_items(&self) -> bool {
        matches!(self, Self::Items(_))
    }

    /// Resolve the options into items for presentation.
    ///
    /// A plain string `s` becomes `{ id: s, label: s }`.
    pub fn to_items(&self) -> Vec<OptionItem> {
        match self {
            Self::Strings(strings) => strings.iter().map(|s| OptionItem::new(s, s)).collect(),
            Self::Items(items) => items.clone(),
        }
    }

    /// Find the option with the given id.
    pub fn find(&self, id: &str) -> Option<OptionItem> {
        match self {
            Self::Strings(strings) => strings
                .iter()
                .find(|s| s.as_str() == id)
                .map(|s| OptionItem::new(s, s)),
            Self::Items(items) => items.iter().find(|item| item.id == id).cloned(),
        }
    }
}

impl From<Vec<String>> for StaticOptions {
    fn from(strings: Vec<String>) -> Self {
        Self::Strings(strings)
    }
}

impl From<Vec<&str>> for StaticOptions {
    fn from(strings: Vec<&str>) -> Self {
        Self::Strings(strings.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<OptionItem>> for StaticOptions {
    fn from(items: Vec<OptionItem>) -> Self {
        Self::Items(items)
    }
}

/// A single value stored in the answer bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Text input, a selected id, or a file/folder path.
    String(String),

    /// Selected ids of a multi select, or several file paths.
    StringList(Vec<String>),

    /// A selected option kept as an object.
    Item(OptionItem),

    /// Selected options kept as objects.
    ItemList(Vec<OptionItem>),

    Bool(bool),

    Int(i64),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a string list.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as an option item.
    pub fn as_item(&self) -> Option<&OptionItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Try to get this value as a list of option items.
    pub fn as_item_list(&self) -> Option<&[OptionItem]> {
        match self {
            Self::ItemList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string this value is compared by: the string itself, or an item's id.
    pub fn scalar_id(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Item(item) => Some(&item.id),
            _ => None,
        }
    }

    /// The ids this value is compared by when treated as a list.
    pub fn list_ids(&self) -> Option<Vec<&str>> {
        match self {
            Self::StringList(list) => Some(list.iter().map(String::as_str).collect()),
            Self::ItemList(items) => Some(items.iter().map(|item| item.id.as_str()).collect()),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::StringList(_) => "StringList",
            Self::Item(_) => "Item",
            Self::ItemList(_) => "ItemList",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<OptionItem> for AnswerValue {
    fn from(item: OptionItem) -> Self {
        Self::Item(item)
    }
}

impl From<Vec<OptionItem>> for AnswerValue {
    fn from(items: Vec<OptionItem>) -> Self {
        Self::ItemList(items)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
