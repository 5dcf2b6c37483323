//! Dialoguer implementation of the UserInteraction trait.

use std::path::Path;

use dialoguer::{
    FuzzySelect, Input, MultiSelect, Password, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use qmodel::{
    InputResult, InputTextConfig, MultiSelectConfig, OptionItem, QuestionError, SelectFileConfig,
    SelectFilesConfig, SelectFolderConfig, SingleSelectConfig, UserInteraction,
};
use thiserror::Error;

/// Typed at a text, file or folder prompt to return to the previous question.
pub const DEFAULT_BACK_KEYWORD: &str = "<";

/// Single selects with more options than this get a fuzzy search box.
const FUZZY_THRESHOLD: usize = 10;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the prompt (pressed Ctrl+C).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[source] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

impl From<dialoguer::Error> for DialoguerError {
    fn from(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            Self::Cancelled
        } else {
            Self::Dialoguer(err)
        }
    }
}

impl From<DialoguerError> for QuestionError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => QuestionError::Cancelled,
            other => QuestionError::backend(other),
        }
    }
}

/// What a path prompt has to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathKind {
    File,
    Folder,
}

/// Dialoguer front end for interactive CLI prompts.
///
/// Selects go back on Escape. Text, file and folder prompts go back when the
/// back keyword is entered.
#[derive(Debug, Clone)]
pub struct DialoguerInteraction {
    /// Use colorful theme for prompts.
    colorful: bool,
    back_keyword: String,
}

impl Default for DialoguerInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerInteraction {
    /// Create a new Dialoguer interaction with the colorful theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            back_keyword: DEFAULT_BACK_KEYWORD.to_string(),
        }
    }

    /// Create an interaction with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Use a different keyword for going back from typed prompts.
    pub fn with_back_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.back_keyword = keyword.into();
        self
    }

    pub fn back_keyword(&self) -> &str {
        &self.back_keyword
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn is_back(&self, value: &str) -> bool {
        value.trim() == self.back_keyword
    }

    fn typed_prompt(&self, title: &str, hint: Option<&str>) -> String {
        match hint {
            Some(hint) => format!("{title} ({hint}, '{}' to go back)", self.back_keyword),
            None => format!("{title} ('{}' to go back)", self.back_keyword),
        }
    }

    fn ask_option(
        &self,
        config: &SingleSelectConfig,
    ) -> Result<InputResult<String>, DialoguerError> {
        if let Some(only) = sole_option(&config.options, config.skip_single_option) {
            return Ok(InputResult::Success(only.id.clone()));
        }

        let theme = self.theme();
        let labels: Vec<String> = config.options.iter().map(option_label).collect();

        let prompt = config.prompt.progress_title();
        let default = default_index(&config.options, config.default.as_deref());

        let result = if labels.len() > FUZZY_THRESHOLD {
            let mut builder = FuzzySelect::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&labels);
            if let Some(index) = default {
                builder = builder.default(index);
            }
            builder.interact_opt()?
        } else {
            let mut builder = Select::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&labels);
            if let Some(index) = default {
                builder = builder.default(index);
            }
            builder.interact_opt()?
        };

        match result {
            Some(index) => Ok(InputResult::Success(config.options[index].id.clone())),
            None => Ok(InputResult::Back),
        }
    }

    fn ask_options(
        &self,
        config: &MultiSelectConfig,
    ) -> Result<InputResult<Vec<String>>, DialoguerError> {
        if let Some(only) = sole_option(&config.options, config.skip_single_option) {
            return Ok(InputResult::Success(vec![only.id.clone()]));
        }

        let theme = self.theme();
        let labels: Vec<String> = config.options.iter().map(option_label).collect();
        let defaults = default_flags(&config.options, &config.defaults);

        let result = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(config.prompt.progress_title())
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()?;

        match result {
            Some(indices) => Ok(InputResult::Success(
                indices
                    .into_iter()
                    .map(|index| config.options[index].id.clone())
                    .collect(),
            )),
            None => Ok(InputResult::Back),
        }
    }

    fn ask_text(&self, config: &InputTextConfig) -> Result<InputResult<String>, DialoguerError> {
        let prompt = self.typed_prompt(
            &config.prompt.progress_title(),
            config.placeholder.as_deref(),
        );

        loop {
            let theme = self.theme();
            let value = if config.password {
                Password::with_theme(theme.as_ref())
                    .with_prompt(&prompt)
                    .allow_empty_password(true)
                    .interact()?
            } else {
                let mut builder: Input<String> = Input::with_theme(theme.as_ref())
                    .with_prompt(&prompt)
                    .allow_empty(true);
                if let Some(default) = &config.default {
                    builder = builder.default(default.clone());
                }
                builder.interact_text()?
            };

            if self.is_back(&value) {
                return Ok(InputResult::Back);
            }
            if let Err(msg) = config.check(&value) {
                println!("Error: {msg}");
                continue;
            }
            return Ok(InputResult::Success(value));
        }
    }

    /// Ask for one or more paths, re-prompting until every path exists.
    fn ask_paths(
        &self,
        title: &str,
        default: Option<&str>,
        kind: PathKind,
        multiple: bool,
    ) -> Result<InputResult<Vec<String>>, DialoguerError> {
        let hint = multiple.then_some("comma separated");
        let prompt = self.typed_prompt(title, hint);

        loop {
            let theme = self.theme();
            let mut builder: Input<String> = Input::with_theme(theme.as_ref()).with_prompt(&prompt);
            if let Some(default) = default {
                builder = builder.default(default.to_string());
            }
            let value = builder.interact_text()?;

            if self.is_back(&value) {
                return Ok(InputResult::Back);
            }

            let paths = if multiple {
                split_paths(&value)
            } else {
                vec![value.trim().to_string()]
            };
            match paths.iter().find_map(|path| check_path(path, kind).err()) {
                Some(msg) => println!("Error: {msg}"),
                None if paths.is_empty() => println!("Error: at least one path is required"),
                None => return Ok(InputResult::Success(paths)),
            }
        }
    }
}

/// The text shown for an option in a select list.
fn option_label(option: &OptionItem) -> String {
    match &option.description {
        Some(description) => format!("{} - {description}", option.label),
        None => option.label.clone(),
    }
}

/// The option to accept without prompting, when the select allows it.
fn sole_option(options: &[OptionItem], skip_single_option: bool) -> Option<&OptionItem> {
    match options {
        [only] if skip_single_option => Some(only),
        _ => None,
    }
}

fn default_index(options: &[OptionItem], default: Option<&str>) -> Option<usize> {
    let default = default?;
    options.iter().position(|option| option.id == default)
}

fn default_flags(options: &[OptionItem], defaults: &[String]) -> Vec<bool> {
    options
        .iter()
        .map(|option| defaults.contains(&option.id))
        .collect()
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_path(path: &str, kind: PathKind) -> Result<(), String> {
    let path_ref = Path::new(path);
    match kind {
        PathKind::File if path_ref.is_file() => Ok(()),
        PathKind::Folder if path_ref.is_dir() => Ok(()),
        PathKind::File => Err(format!("'{path}' is not an existing file")),
        PathKind::Folder => Err(format!("'{path}' is not an existing folder")),
    }
}

fn single_path(result: InputResult<Vec<String>>) -> InputResult<String> {
    result.map(|mut paths| paths.swap_remove(0))
}

impl UserInteraction for DialoguerInteraction {
    fn select_option(
        &mut self,
        config: &SingleSelectConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        Ok(self.ask_option(config)?)
    }

    fn select_options(
        &mut self,
        config: &MultiSelectConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError> {
        Ok(self.ask_options(config)?)
    }

    fn input_text(
        &mut self,
        config: &InputTextConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        Ok(self.ask_text(config)?)
    }

    fn select_file(
        &mut self,
        config: &SelectFileConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        let result = self.ask_paths(
            &config.prompt.progress_title(),
            config.default.as_deref(),
            PathKind::File,
            false,
        )?;
        Ok(single_path(result))
    }

    fn select_files(
        &mut self,
        config: &SelectFilesConfig,
    ) -> Result<InputResult<Vec<String>>, QuestionError> {
        Ok(self.ask_paths(
            &config.prompt.progress_title(),
            config.default.as_deref(),
            PathKind::File,
            true,
        )?)
    }

    fn select_folder(
        &mut self,
        config: &SelectFolderConfig,
    ) -> Result<InputResult<String>, QuestionError> {
        let result = self.ask_paths(
            &config.prompt.progress_title(),
            config.default.as_deref(),
            PathKind::Folder,
            false,
        )?;
        Ok(single_path(result))
    }
}
