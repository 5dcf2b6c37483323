//! Scripted backend for driving traversals without user interaction.
//!
//! `ScriptedInteraction` answers prompts from per-question queues of canned
//! replies and records every prompt it receives. This is useful for testing
//! question trees, including back navigation and cancellation.
//!
//! # Example
//!
//! ```rust
//! use qmodel::{Inputs, Question, QuestionNode, ScriptedInteraction, traverse};
//!
//! let root = QuestionNode::group()
//!     .with_child(Question::text("name", "Name").into())
//!     .with_child(Question::single_select("lang", "Language", vec!["ts", "js"]).into());
//!
//! let mut ui = ScriptedInteraction::new()
//!     .with_text("name", "contoso")
//!     .with_back("lang")
//!     .with_text("name", "fabrikam")
//!     .with_selection("lang", "ts");
//!
//! let mut inputs = Inputs::default();
//! traverse(&root, &mut inputs, &mut ui).unwrap();
//!
//! assert_eq!(inputs.get_string("name").unwrap(), "fabrikam");
//! assert_eq!(ui.prompted_names(), ["name", "lang", "name", "lang"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::{
    InputResult, InputTextConfig, MultiSelectConfig, PromptInfo, QuestionError, SelectFileConfig,
    SelectFilesConfig, SelectFolderConfig, SingleSelectConfig, UserInteraction,
};

/// A canned reply to one prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Selection(String),
    Selections(Vec<String>),
    Path(String),
    Paths(Vec<String>),
    Back,
    Cancel,
}

impl Reply {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Selection(_) => "Selection",
            Self::Selections(_) => "Selections",
            Self::Path(_) => "Path",
            Self::Paths(_) => "Paths",
            Self::Back => "Back",
            Self::Cancel => "Cancel",
        }
    }
}

/// Which prompt was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    SingleSelect,
    MultiSelect,
    File,
    Files,
    Folder,
}

/// A prompt received by [`ScriptedInteraction`].
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub name: String,
    pub step: Option<usize>,
    pub total_steps: Option<usize>,
    /// Ids of the options offered (selects only).
    pub options: Vec<String>,
    /// Whether the select allowed a sole option to be accepted unasked.
    pub skip_single_option: bool,
}

impl Prompt {
    fn new(kind: PromptKind, info: &PromptInfo) -> Self {
        Self {
            kind,
            name: info.name.clone(),
            step: info.step,
            total_steps: info.total_steps,
            options: Vec::new(),
            skip_single_option: false,
        }
    }
}

/// Error type for ScriptedInteraction.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted reply left for question: {0}")]
    MissingReply(String),

    #[error("Scripted reply for '{name}' is {actual}, but the prompt expects {expected}")]
    WrongReply {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Validation failed for '{name}': {message}")]
    ValidationFailed { name: String, message: String },
}

/// A user interaction that replays scripted replies.
///
/// Replies are queued per question name and consumed in order, so a question
/// visited twice (after going back) takes its second reply on the second visit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    replies: HashMap<String, VecDeque<Reply>>,
    prompts: Vec<Prompt>,
}

impl ScriptedInteraction {
    /// Create a new interaction with no replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for a question.
    pub fn with_reply(mut self, name: impl Into<String>, reply: Reply) -> Self {
        self.replies
            .entry(name.into())
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a text answer.
    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Text(value.into()))
    }

    /// Queue a single selection, by option id.
    pub fn with_selection(self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Selection(id.into()))
    }

    /// Queue a multi selection, by option ids.
    pub fn with_selections<I, S>(self, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        self.with_reply(name, Reply::Selections(ids))
    }

    /// Queue a file path.
    pub fn with_file(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Path(path.into()))
    }

    /// Queue several file paths.
    pub fn with_files<I, S>(self, name: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths = paths.into_iter().map(Into::into).collect();
        self.with_reply(name, Reply::Paths(paths))
    }

    /// Queue a folder path.
    pub fn with_folder(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Path(path.into()))
    }

    /// Queue a request to go back.
    pub fn with_back(self, name: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Back)
    }

    /// Queue a cancellation.
    pub fn with_cancel(self, name: impl Into<String>) -> Self {
        self.with_reply(name, Reply::Cancel)
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Names of the prompted questions, in order.
    pub fn prompted_names(&self) -> Vec<&str> {
        self.prompts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether every queued reply was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.replies.values().all(VecDeque::is_empty)
    }

    /// Record `prompt` and take the next reply queued for it.
    fn next_reply(&mut self, prompt: Prompt) -> Result<Reply, QuestionError> {
        let name = prompt.name.clone();
        self.prompts.push(prompt);

        match self.replies.get_mut(&name).and_then(VecDeque::pop_front) {
            Some(Reply::Cancel) => Err(QuestionError::Cancelled),
            Some(reply) => Ok(reply),
            None => Err(QuestionError::backend(ScriptError::MissingReply(name))),
        }
    }
}

fn wrong_reply(prompt: &PromptInfo, expected: &'static str, reply: &Reply) -> QuestionError {
    QuestionError::backend(ScriptError::WrongReply {
        name: prompt.name.clone(),
        expected,
        actual: reply.type_name(),
    })
}

impl UserInteraction for ScriptedInteraction {
    fn select_option(
        &mut self,
        config: &SingleSelectConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        let prompt = Prompt {
            options: config.options.iter().map(|o| o.id.clone()).collect(),
            skip_single_option: config.skip_single_option,
            ..Prompt::new(PromptKind::SingleSelect, &config.prompt)
        };
        match self.next_reply(prompt)? {
            Reply::Selection(id) => Ok(InputResult::Success(id)),
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Selection", &other)),
        }
    }

    fn select_options(
        &mut self,
        config: &MultiSelectConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError> {
        let prompt = Prompt {
            options: config.options.iter().map(|o| o.id.clone()).collect(),
            skip_single_option: config.skip_single_option,
            ..Prompt::new(PromptKind::MultiSelect, &config.prompt)
        };
        match self.next_reply(prompt)? {
            Reply::Selections(ids) => Ok(InputResult::Success(ids)),
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Selections", &other)),
        }
    }

    fn input_text(
        &mut self,
        config: &InputTextConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        match self.next_reply(Prompt::new(PromptKind::Text, &config.prompt))? {
            Reply::Text(value) => {
                // Validate like a real front end would before accepting
                if let Err(message) = config.check(&value) {
                    return Err(QuestionError::backend(ScriptError::ValidationFailed {
                        name: config.prompt.name.clone(),
                        message,
                    }));
                }
                Ok(InputResult::Success(value))
            }
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Text", &other)),
        }
    }

    fn select_file(
        &mut self,
        config: &SelectFileConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        match self.next_reply(Prompt::new(PromptKind::File, &config.prompt))? {
            Reply::Path(path) => Ok(InputResult::Success(path)),
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Path", &other)),
        }
    }

    fn select_files(
        &mut self,
        config: &SelectFilesConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError> {
        match self.next_reply(Prompt::new(PromptKind::Files, &config.prompt))? {
            Reply::Paths(paths) => Ok(InputResult::Success(paths)),
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Paths", &other)),
        }
    }

    fn select_folder(
        &mut self,
        config: &SelectFolderConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        match self.next_reply(Prompt::new(PromptKind::Folder, &config.prompt))? {
            Reply::Path(path) => Ok(InputResult::Success(path)),
            Reply::Back => Ok(InputResult::Back),
            other => Err(wrong_reply(&config.prompt, "Path", &other)),
        }
    }
}
