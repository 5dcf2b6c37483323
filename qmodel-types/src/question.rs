use crate::{AnswerValue, ComputeFn, Inputs, OptionsFn, StaticOptions, Validation};

/// A single answerable question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key this question's answer is stored under in the answer bag.
    name: String,

    /// The prompt text shown to the user.
    title: String,

    /// The kind of question (determines which prompt is used).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
        }
    }

    /// A free-text question.
    pub fn text(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, QuestionKind::Text(TextQuestion::default()))
    }

    /// A pick-one question over static options.
    pub fn single_select(
        name: impl Into<String>,
        title: impl Into<String>,
        options: impl Into<StaticOptions>,
    ) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::SingleSelect(SingleSelectQuestion::new(options.into())),
        )
    }

    /// A pick-many question over static options.
    pub fn multi_select(
        name: impl Into<String>,
        title: impl Into<String>,
        options: impl Into<StaticOptions>,
    ) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::MultiSelect(MultiSelectQuestion::new(options.into())),
        )
    }

    /// A computed value; never shown to the user.
    pub fn func(
        name: impl Into<String>,
        func: impl Fn(&Inputs) -> anyhow::Result<AnswerValue> + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        Self::new(
            name.clone(),
            name,
            QuestionKind::Func(FuncQuestion {
                func: ComputeFn::new(func),
            }),
        )
    }

    pub fn single_file(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::SingleFile(FileQuestion::default()),
        )
    }

    pub fn multi_file(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::MultiFile(FileQuestion::default()),
        )
    }

    pub fn folder(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, QuestionKind::Folder(FileQuestion::default()))
    }

    /// Get the answer key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Whether answering this question prompts the user. Only `func` questions don't.
    pub fn is_interactive(&self) -> bool {
        !matches!(self.kind, QuestionKind::Func(_))
    }

    /// Ask for the selected option object(s) instead of id(s). Selects only.
    pub fn with_return_object(mut self, return_object: bool) -> Self {
        match &mut self.kind {
            QuestionKind::SingleSelect(q) => q.return_object = return_object,
            QuestionKind::MultiSelect(q) => q.return_object = return_object,
            _ => {}
        }
        self
    }

    /// Accept a sole option without prompting. Selects only.
    pub fn with_skip_single_option(mut self, skip: bool) -> Self {
        match &mut self.kind {
            QuestionKind::SingleSelect(q) => q.skip_single_option = skip,
            QuestionKind::MultiSelect(q) => q.skip_single_option = skip,
            _ => {}
        }
        self
    }

    /// Compute the options from the answers collected so far. Selects only.
    pub fn with_dynamic_options(
        mut self,
        options: impl Fn(&Inputs) -> anyhow::Result<StaticOptions> + Send + Sync + 'static,
    ) -> Self {
        let dynamic = SelectOptions::Dynamic(OptionsFn::new(options));
        match &mut self.kind {
            QuestionKind::SingleSelect(q) => q.options = dynamic,
            QuestionKind::MultiSelect(q) => q.options = dynamic,
            _ => {}
        }
        self
    }

    /// Set the pre-filled value: a text default, a select's default id, or a default path.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = Some(default.into());
        match &mut self.kind {
            QuestionKind::Text(q) => q.default = default,
            QuestionKind::SingleSelect(q) => q.default = default,
            QuestionKind::MultiSelect(q) => q.defaults.extend(default),
            QuestionKind::SingleFile(q) | QuestionKind::MultiFile(q) | QuestionKind::Folder(q) => {
                q.default = default
            }
            QuestionKind::Func(_) => {}
        }
        self
    }

    /// Validate text input. Text questions only.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        if let QuestionKind::Text(q) = &mut self.kind {
            q.validation = Some(validation);
        }
        self
    }

    /// Hide typed characters. Text questions only.
    pub fn with_password(mut self, password: bool) -> Self {
        if let QuestionKind::Text(q) = &mut self.kind {
            q.password = password;
        }
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let QuestionKind::Text(q) = &mut self.kind {
            q.placeholder = Some(placeholder.into());
        }
        self
    }
}

/// The kind of question, determining the prompt used and the stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Free-text input; stores a string.
    Text(TextQuestion),

    /// Choose one option; stores an id or an item.
    SingleSelect(SingleSelectQuestion),

    /// Choose any number of options; stores ids or items.
    MultiSelect(MultiSelectQuestion),

    /// Computed from the bag; no prompt.
    Func(FuncQuestion),

    /// Pick one file; stores its path.
    SingleFile(FileQuestion),

    /// Pick several files; stores their paths.
    MultiFile(FileQuestion),

    /// Pick a folder; stores its path.
    Folder(FileQuestion),
}

impl QuestionKind {
    /// Short name used in logs and prompt records.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::SingleSelect(_) => "singleSelect",
            Self::MultiSelect(_) => "multiSelect",
            Self::Func(_) => "func",
            Self::SingleFile(_) => "singleFile",
            Self::MultiFile(_) => "multiFile",
            Self::Folder(_) => "folder",
        }
    }
}

/// Configuration for a text input question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuestion {
    pub default: Option<String>,

    pub placeholder: Option<String>,

    /// Mask the typed characters.
    pub password: bool,

    /// Checked by the front end before accepting the input.
    pub validation: Option<Validation>,
}

/// Where a select question's options come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOptions {
    Static(StaticOptions),

    /// Resolved against the bag when the question is reached.
    Dynamic(OptionsFn),
}

impl SelectOptions {
    /// Resolve to concrete options for the current answers.
    pub fn resolve(&self, inputs: &Inputs) -> anyhow::Result<StaticOptions> {
        match self {
            Self::Static(options) => Ok(options.clone()),
            Self::Dynamic(options) => options.resolve(inputs),
        }
    }
}

/// Configuration for a pick-one question.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSelectQuestion {
    pub options: SelectOptions,

    /// Store the selected option as an object rather than its id.
    pub return_object: bool,

    /// With exactly one option, accept it without prompting.
    pub skip_single_option: bool,

    /// Id of the option selected initially.
    pub default: Option<String>,
}

impl SingleSelectQuestion {
    pub fn new(options: StaticOptions) -> Self {
        Self {
            options: SelectOptions::Static(options),
            return_object: false,
            skip_single_option: false,
            default: None,
        }
    }
}

/// Configuration for a pick-many question.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectQuestion {
    pub options: SelectOptions,

    /// Store the selected options as objects rather than their ids.
    pub return_object: bool,

    /// With exactly one option, accept it without prompting.
    pub skip_single_option: bool,

    /// Ids of the options selected initially.
    pub defaults: Vec<String>,
}

impl MultiSelectQuestion {
    pub fn new(options: StaticOptions) -> Self {
        Self {
            options: SelectOptions::Static(options),
            return_object: false,
            skip_single_option: false,
            defaults: Vec::new(),
        }
    }
}

/// Configuration for a computed question.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncQuestion {
    pub func: ComputeFn,
}

/// Configuration for file and folder questions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileQuestion {
    pub default: Option<String>,
}
