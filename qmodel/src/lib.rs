//! # qmodel
//!
//! Interactive question trees, walked one prompt at a time. Backend-agnostic.
//!
//! A tree of [`QuestionNode`]s describes a wizard: groups structure it, conditions
//! gate subtrees on earlier answers, `func` questions compute values, and select
//! questions with a single option can be accepted without asking. [`traverse`]
//! walks the tree depth-first, prompting through a [`UserInteraction`] and writing
//! every answer into a shared [`Inputs`] bag. The user may go back to the previous
//! question at any prompt, or cancel.
//!
//! ## Usage
//!
//! ```rust
//! use qmodel::{
//!     Inputs, Platform, Question, QuestionNode, ScriptedInteraction, Validation, traverse,
//! };
//!
//! let mut root = QuestionNode::group();
//! let capability = root.add_child(
//!     Question::single_select("capability", "Select a capability", vec!["bot", "tab"]).into(),
//! );
//! capability.add_child(
//!     QuestionNode::new(Question::text("bot-name", "Bot name"))
//!         .with_condition(Validation::equals("bot")),
//! );
//!
//! // Any front end works here; this one replays canned answers.
//! let mut ui = ScriptedInteraction::new()
//!     .with_selection("capability", "bot")
//!     .with_text("bot-name", "helpdesk");
//!
//! let mut inputs = Inputs::new(Platform::CLI);
//! traverse(&root, &mut inputs, &mut ui)?;
//! assert_eq!(inputs.get_string("bot-name")?, "helpdesk");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `UserInteraction`:
//! - `qmodel-dialoguer-wizard` - CLI prompts via dialoguer
//!
//! [`ScriptedInteraction`] replays canned answers for tests.

// Re-export all types from qmodel-types
pub use qmodel_types::*;

mod traverse;
pub use traverse::traverse;

// Scripted backend for driving traversals without user interaction
mod scripted;
pub use scripted::{Prompt, PromptKind, Reply, ScriptError, ScriptedInteraction};
