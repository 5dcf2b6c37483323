//! Depth-first walk of a question tree.
//!
//! The tree is flattened into an arena once. A stack of pending arena indices
//! drives the walk, and a history of settled nodes is unwound when the user goes
//! back.

use tracing::{debug, info};

use crate::{
    AnswerValue, InputResult, InputTextConfig, Inputs, MultiSelectConfig, NodeData, PromptInfo,
    Question, QuestionError, QuestionKind, QuestionNode, SelectFileConfig, SelectFilesConfig,
    SelectFolderConfig, SelectOptions, SingleSelectConfig, StaticOptions, UserInteraction,
};

/// How a visited node was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settled {
    Group,
    /// Answered through the user interaction.
    Prompted,
    /// A select with a single option accepted without prompting.
    AutoSkipped,
    /// A `func` question.
    Computed,
    /// Already answered in the bag before it was reached.
    Preset,
    /// Condition did not hold; the subtree was not entered.
    Skipped,
}

enum Visit {
    Settled(Settled),
    Back,
}

struct Entry<'a> {
    node: &'a QuestionNode,
    parent: Option<usize>,
    children: Vec<usize>,
}

fn flatten<'a>(node: &'a QuestionNode, parent: Option<usize>, arena: &mut Vec<Entry<'a>>) -> usize {
    let index = arena.len();
    arena.push(Entry {
        node,
        parent,
        children: Vec::new(),
    });
    let children = node
        .children
        .iter()
        .map(|child| flatten(child, Some(index), arena))
        .collect();
    arena[index].children = children;
    index
}

/// Walk `root` depth-first, prompting for every reachable question and storing
/// each answer in `inputs` under the question's name.
///
/// - Groups are passed through without prompting.
/// - A node whose condition fails against its parent's answer is skipped along
///   with its whole subtree. Conditions are checked when the node is reached.
/// - Questions already answered in `inputs` are not asked again and take no step
///   number.
/// - `func` questions are computed from the bag, never prompted.
/// - A select with `skip_single_option` and exactly one option takes that option
///   without prompting.
/// - When a prompt reports [`InputResult::Back`], the previously prompted question
///   is asked again and everything answered after it is cleared. Going back from
///   the first prompt cancels the traversal.
///
/// On failure the answers written so far stay in `inputs`.
pub fn traverse(
    root: &QuestionNode,
    inputs: &mut Inputs,
    ui: &mut dyn UserInteraction,
) -> Result<(), QuestionError> {
    let mut arena = Vec::new();
    let root_index = flatten(root, None, &mut arena);

    let mut pending = vec![root_index];
    let mut history: Vec<(usize, Settled)> = Vec::new();

    while let Some(current) = pending.pop() {
        if !condition_holds(&arena, current, inputs) {
            debug!(node = %node_label(arena[current].node), "condition not met, skipping subtree");
            history.push((current, Settled::Skipped));
            continue;
        }

        let step = 1 + history
            .iter()
            .filter(|(_, settled)| *settled == Settled::Prompted)
            .count();
        let total_steps = step
            + pending
                .iter()
                .filter(|&&index| !arena[index].node.is_group())
                .count();

        match visit(arena[current].node, inputs, ui, step, total_steps)? {
            Visit::Settled(settled) => {
                history.push((current, settled));
                push_children(&arena, current, &mut pending);
            }
            Visit::Back => {
                pending.push(current);
                go_back(&arena, &mut history, &mut pending, inputs)?;
            }
        }
    }

    info!(answers = inputs.len(), "traversal complete");
    Ok(())
}

/// Check a node's condition against its parent's answer.
///
/// The parent's answer is absent when the parent is a group (or for the root),
/// so only custom predicates can hold there.
fn condition_holds(arena: &[Entry<'_>], index: usize, inputs: &Inputs) -> bool {
    let entry = &arena[index];
    let Some(condition) = &entry.node.condition else {
        return true;
    };
    let parent_answer = entry
        .parent
        .and_then(|parent| arena[parent].node.question())
        .and_then(|question| inputs.get(question.name()));
    condition.check(parent_answer, inputs)
}

/// Queue the children of a settled node, first child on top.
fn push_children(arena: &[Entry<'_>], index: usize, pending: &mut Vec<usize>) {
    pending.extend(arena[index].children.iter().rev());
}

/// Unwind history up to and including the most recently prompted question.
///
/// Every unwound node is queued again (the prompted one last, so it comes first)
/// after its still-pending children are dropped; it re-queues them when it is
/// settled again. Skipped nodes are queued too, so their conditions are checked
/// again. Answers the engine wrote are cleared, preset answers kept.
fn go_back(
    arena: &[Entry<'_>],
    history: &mut Vec<(usize, Settled)>,
    pending: &mut Vec<usize>,
    inputs: &mut Inputs,
) -> Result<(), QuestionError> {
    while let Some((index, settled)) = history.pop() {
        while pending
            .last()
            .is_some_and(|&top| arena[top].parent == Some(index))
        {
            pending.pop();
        }
        pending.push(index);

        let node = arena[index].node;
        let answered_here = matches!(
            settled,
            Settled::Prompted | Settled::AutoSkipped | Settled::Computed
        );
        if let Some(question) = node.question()
            && answered_here
        {
            inputs.remove(question.name());
        }

        if settled == Settled::Prompted {
            info!(question = %node_label(node), "going back");
            return Ok(());
        }
    }

    info!("went back from the first question, cancelling");
    Err(QuestionError::Cancelled)
}

fn visit(
    node: &QuestionNode,
    inputs: &mut Inputs,
    ui: &mut dyn UserInteraction,
    step: usize,
    total_steps: usize,
) -> Result<Visit, QuestionError> {
    let question = match &node.data {
        NodeData::Group => return Ok(Visit::Settled(Settled::Group)),
        NodeData::Question(question) => question,
    };
    let name = question.name();

    if inputs.contains(name) {
        debug!(question = name, "already answered, skipping");
        return Ok(Visit::Settled(Settled::Preset));
    }

    let prompt = PromptInfo {
        name: name.to_string(),
        title: question.title().to_string(),
        step: Some(step),
        total_steps: Some(total_steps),
    };

    let answer = match question.kind() {
        QuestionKind::Func(func) => {
            let value = func
                .func
                .compute(inputs)
                .map_err(|source| callback_error(question, source))?;
            debug!(question = name, "computed");
            inputs.insert(name, value);
            return Ok(Visit::Settled(Settled::Computed));
        }

        QuestionKind::Text(text) => {
            debug!(question = name, step, total_steps, "prompting for text");
            let config = InputTextConfig {
                prompt,
                default: text.default.clone(),
                placeholder: text.placeholder.clone(),
                password: text.password,
                validation: text.validation.clone(),
                inputs: inputs.clone(),
            };
            ui.input_text(&config)?.map(AnswerValue::String)
        }

        QuestionKind::SingleSelect(select) => {
            let options = resolve_options(question, &select.options, inputs)?;
            if select.skip_single_option && options.len() == 1 {
                let only = options.to_items().remove(0).id;
                let value = single_answer(question, &options, select.return_object, &only)?;
                debug!(question = name, option = %only, "single option, auto-selected");
                inputs.insert(name, value);
                return Ok(Visit::Settled(Settled::AutoSkipped));
            }

            debug!(question = name, step, total_steps, "prompting for a choice");
            let config = SingleSelectConfig {
                prompt,
                options: options.to_items(),
                default: select.default.clone(),
                skip_single_option: select.skip_single_option,
            };
            match ui.select_option(&config)? {
                InputResult::Success(id) => {
                    let value = single_answer(question, &options, select.return_object, &id)?;
                    InputResult::Success(value)
                }
                InputResult::Back => InputResult::Back,
            }
        }

        QuestionKind::MultiSelect(select) => {
            let options = resolve_options(question, &select.options, inputs)?;
            if select.skip_single_option && options.len() == 1 {
                let only = options.to_items().remove(0).id;
                let value = multi_answer(question, &options, select.return_object, &[only])?;
                debug!(question = name, "single option, auto-selected");
                inputs.insert(name, value);
                return Ok(Visit::Settled(Settled::AutoSkipped));
            }

            debug!(question = name, step, total_steps, "prompting for options");
            let config = MultiSelectConfig {
                prompt,
                options: options.to_items(),
                defaults: select.defaults.clone(),
                skip_single_option: select.skip_single_option,
            };
            match ui.select_options(&config)? {
                InputResult::Success(ids) => {
                    let value = multi_answer(question, &options, select.return_object, &ids)?;
                    InputResult::Success(value)
                }
                InputResult::Back => InputResult::Back,
            }
        }

        QuestionKind::SingleFile(file) => {
            debug!(question = name, step, total_steps, "prompting for a file");
            let config = SelectFileConfig {
                prompt,
                default: file.default.clone(),
            };
            ui.select_file(&config)?.map(AnswerValue::String)
        }

        QuestionKind::MultiFile(file) => {
            debug!(question = name, step, total_steps, "prompting for files");
            let config = SelectFilesConfig {
                prompt,
                default: file.default.clone(),
            };
            ui.select_files(&config)?.map(AnswerValue::StringList)
        }

        QuestionKind::Folder(folder) => {
            debug!(question = name, step, total_steps, "prompting for a folder");
            let config = SelectFolderConfig {
                prompt,
                default: folder.default.clone(),
            };
            ui.select_folder(&config)?.map(AnswerValue::String)
        }
    };

    match answer {
        InputResult::Success(value) => {
            inputs.insert(name, value);
            Ok(Visit::Settled(Settled::Prompted))
        }
        InputResult::Back => {
            debug!(question = name, "back requested");
            Ok(Visit::Back)
        }
    }
}

fn resolve_options(
    question: &Question,
    options: &SelectOptions,
    inputs: &Inputs,
) -> Result<StaticOptions, QuestionError> {
    let options = options
        .resolve(inputs)
        .map_err(|source| callback_error(question, source))?;
    if options.is_empty() {
        return Err(QuestionError::EmptyOptions {
            name: question.name().to_string(),
        });
    }
    Ok(options)
}

/// Store a selection as its id, or as the option object when asked to and the
/// options are objects.
fn single_answer(
    question: &Question,
    options: &StaticOptions,
    return_object: bool,
    id: &str,
) -> Result<AnswerValue, QuestionError> {
    let item = find_option(question, options, id)?;
    if return_object && options.is_items() {
        Ok(AnswerValue::Item(item))
    } else {
        Ok(AnswerValue::String(item.id))
    }
}

fn multi_answer(
    question: &Question,
    options: &StaticOptions,
    return_object: bool,
    ids: &[String],
) -> Result<AnswerValue, QuestionError> {
    let items = ids
        .iter()
        .map(|id| find_option(question, options, id))
        .collect::<Result<Vec<_>, _>>()?;
    if return_object && options.is_items() {
        Ok(AnswerValue::ItemList(items))
    } else {
        Ok(AnswerValue::StringList(
            items.into_iter().map(|item| item.id).collect(),
        ))
    }
}

fn find_option(
    question: &Question,
    options: &StaticOptions,
    id: &str,
) -> Result<crate::OptionItem, QuestionError> {
    let Some(item) = options.find(id) else {
        return Err(QuestionError::UnknownOption {
            name: question.name().to_string(),
            id: id.to_string(),
        });
    };
    Ok(item)
}

fn callback_error(question: &Question, source: anyhow::Error) -> QuestionError {
    QuestionError::Callback {
        name: question.name().to_string(),
        source,
    }
}

fn node_label(node: &QuestionNode) -> &str {
    node.question().map_or("<group>", Question::name)
}
