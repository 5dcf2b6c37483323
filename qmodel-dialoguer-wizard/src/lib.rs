//! # qmodel-dialoguer-wizard
//!
//! Dialoguer front end for qmodel.
//!
//! This crate provides a command-line wizard interface for answering question
//! trees using the `dialoguer` library. Questions are presented step-by-step with
//! a `[step/total]` prefix. Escape on a select list, or the back keyword on a
//! typed prompt, returns to the previous question.
//!
//! ## Example
//!
//! ```rust,no_run
//! use qmodel::{Inputs, Question, QuestionNode, traverse};
//! use qmodel_dialoguer_wizard::DialoguerInteraction;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = QuestionNode::group()
//!         .with_child(Question::text("app-name", "Application name").into())
//!         .with_child(Question::single_select("language", "Language", vec!["ts", "js"]).into());
//!
//!     let mut inputs = Inputs::default();
//!     traverse(&root, &mut inputs, &mut DialoguerInteraction::new())?;
//!     println!("{}", inputs.get_string("app-name")?);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DEFAULT_BACK_KEYWORD, DialoguerError, DialoguerInteraction};
