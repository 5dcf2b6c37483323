use std::fmt;
use std::sync::Arc;

use crate::{AnswerValue, Inputs, StaticOptions};

/// A shared, caller-supplied function stored inside a question tree.
///
/// Two callbacks are equal only if they point at the same function object, so
/// trees holding callbacks can still be compared and cloned.
pub struct Callback<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> PartialEq for Callback<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Computes the value of a `func` question from the current answers.
pub type ComputeFn = Callback<dyn Fn(&Inputs) -> anyhow::Result<AnswerValue> + Send + Sync>;

/// Produces the options of a select question from the current answers.
pub type OptionsFn = Callback<dyn Fn(&Inputs) -> anyhow::Result<StaticOptions> + Send + Sync>;

/// Custom predicate over an answer and the bag; `Err` carries the failure message.
pub type PredicateFn =
    Callback<dyn Fn(Option<&AnswerValue>, &Inputs) -> Result<(), String> + Send + Sync>;

impl ComputeFn {
    pub fn new(f: impl Fn(&Inputs) -> anyhow::Result<AnswerValue> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn compute(&self, inputs: &Inputs) -> anyhow::Result<AnswerValue> {
        (self.0)(inputs)
    }
}

impl OptionsFn {
    pub fn new(
        f: impl Fn(&Inputs) -> anyhow::Result<StaticOptions> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn resolve(&self, inputs: &Inputs) -> anyhow::Result<StaticOptions> {
        (self.0)(inputs)
    }
}

impl PredicateFn {
    pub fn new(
        f: impl Fn(Option<&AnswerValue>, &Inputs) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn check(&self, value: Option<&AnswerValue>, inputs: &Inputs) -> Result<(), String> {
        (self.0)(value, inputs)
    }
}
