//! Core types for the qmodel crate.
//!
//! This crate provides the foundational types for interactive question trees:
//! - `QuestionNode` and `Question` - The tree of questions and its simplification (`trim`)
//! - `Validation` - Conditions on tree nodes and input validation on text questions
//! - `Inputs` and `AnswerValue` - The answer bag shared by a traversal
//! - `UserInteraction` - The prompting capability front ends implement

mod answer;
pub use answer::{AnswerValue, OptionItem, StaticOptions};

mod inputs;
pub use inputs::{Inputs, InputsError, Platform};

mod callback;
pub use callback::{Callback, ComputeFn, OptionsFn, PredicateFn};

mod validation;
pub use validation::Validation;

mod question;
pub use question::{
    FileQuestion, FuncQuestion, MultiSelectQuestion, Question, QuestionKind, SelectOptions,
    SingleSelectQuestion, TextQuestion,
};

mod node;
pub use node::{NodeData, QuestionNode};

mod interaction;
pub use interaction::{
    InputResult, InputTextConfig, MultiSelectConfig, PromptInfo, SelectFileConfig,
    SelectFilesConfig, SelectFolderConfig, SingleSelectConfig, UserInteraction,
};

mod error;
pub use error::{QuestionError, TreeError};
