use crate::{Inputs, OptionItem, QuestionError, Validation};

/// What a prompt produced when it was not cancelled.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult<T> {
    /// The user answered.
    Success(T),

    /// The user asked to return to the previous question.
    Back,
}

impl<T> InputResult<T> {
    pub fn is_back(&self) -> bool {
        matches!(self, Self::Back)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> InputResult<U> {
        match self {
            Self::Success(value) => InputResult::Success(f(value)),
            Self::Back => InputResult::Back,
        }
    }
}

/// Fields shared by every prompt configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptInfo {
    /// The question name (answer key).
    pub name: String,

    pub title: String,

    /// 1-based number of this prompt among the prompts shown so far.
    pub step: Option<usize>,

    /// Estimated number of prompts in the whole traversal.
    pub total_steps: Option<usize>,
}

impl PromptInfo {
    /// `title` prefixed with `[step/total]` when step numbers are known.
    pub fn progress_title(&self) -> String {
        match (self.step, self.total_steps) {
            (Some(step), Some(total)) => format!("[{step}/{total}] {}", self.title),
            (Some(step), None) => format!("[{step}] {}", self.title),
            _ => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTextConfig {
    pub prompt: PromptInfo,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub password: bool,
    pub validation: Option<Validation>,
    /// Snapshot of the answers when the prompt was built, for validations that
    /// look at other questions.
    pub inputs: Inputs,
}

impl InputTextConfig {
    /// Check typed text against the question's validation, if any.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match &self.validation {
            Some(validation) => validation.validate(Some(&value.into()), &self.inputs),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleSelectConfig {
    pub prompt: PromptInfo,
    pub options: Vec<OptionItem>,
    /// Id of the option selected initially.
    pub default: Option<String>,
    /// A sole option may be accepted without showing the prompt.
    pub skip_single_option: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelectConfig {
    pub prompt: PromptInfo,
    pub options: Vec<OptionItem>,
    /// Ids of the options selected initially.
    pub defaults: Vec<String>,
    /// A sole option may be accepted without showing the prompt.
    pub skip_single_option: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectFileConfig {
    pub prompt: PromptInfo,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectFilesConfig {
    pub prompt: PromptInfo,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectFolderConfig {
    pub prompt: PromptInfo,
    pub default: Option<String>,
}

/// The prompting capability a traversal is driven through.
///
/// Front ends (terminal, editor, scripted tests) implement this trait. Each call
/// blocks until the user answers, asks to go back, or cancels; cancelling is
/// reported as [`QuestionError::Cancelled`]. Selects report the chosen option
/// id(s); mapping them onto option objects is the engine's job.
pub trait UserInteraction {
    /// Pick one option; returns its id.
    fn select_option(
        &mut self,
        config: &SingleSelectConfig,
    ) -> Result<InputResult<String>, QuestionError>;

    /// Pick any number of options; returns their ids.
    fn select_options(
        &mut self,
        config: &MultiSelectConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError>;

    fn input_text(&mut self, config: &InputTextConfig)
    -> Result<InputResult<String>, QuestionError>;

    fn select_file(
        &mut self,
        config: &SelectFileConfig,
    ) -> Result<InputResult<String>, QuestionError>;

    fn select_files(
        &mut self,
        config: &SelectFilesConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError>;

    fn select_folder(
        &mut self,
        config: &SelectFolderConfig,
    ) -> Result<InputResult<String>, QuestionError>;
}
