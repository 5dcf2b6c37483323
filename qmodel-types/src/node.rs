use std::collections::HashSet;

use crate::{Question, TreeError, Validation};

/// What a tree node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// A pure container. Never produces an answer.
    Group,

    Question(Question),
}

/// A node of a question tree.
///
/// Children are visited in insertion order. A node's `condition` is checked
/// against its parent's answer (or against no value when the parent is a group)
/// before the node and its subtree are entered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionNode {
    pub data: NodeData,
    pub condition: Option<Validation>,
    pub children: Vec<QuestionNode>,
}

impl QuestionNode {
    /// Create a node holding a question.
    pub fn new(question: Question) -> Self {
        Self {
            data: NodeData::Question(question),
            condition: None,
            children: Vec::new(),
        }
    }

    /// Create an empty group node.
    pub fn group() -> Self {
        Self {
            data: NodeData::Group,
            condition: None,
            children: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: Validation) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Append a child, returning a mutable reference to it.
    pub fn add_child(&mut self, child: QuestionNode) -> &mut QuestionNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: QuestionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_group(&self) -> bool {
        matches!(self.data, NodeData::Group)
    }

    /// The question held by this node, if it is not a group.
    pub fn question(&self) -> Option<&Question> {
        match &self.data {
            NodeData::Group => None,
            NodeData::Question(question) => Some(question),
        }
    }

    /// Number of question (non-group) nodes in this subtree.
    pub fn question_count(&self) -> usize {
        let nested: usize = self.children.iter().map(Self::question_count).sum();
        usize::from(!self.is_group()) + nested
    }

    /// Remove redundant groups.
    ///
    /// Children are trimmed first. Then a group with no children disappears, and a
    /// group with a single child folds into it:
    /// - neither has a condition: the child replaces the group;
    /// - only the group has one: the child takes over the group's condition;
    /// - only the child has one: the child replaces the group;
    /// - both have one: the group is kept around the child.
    ///
    /// Question nodes are never removed.
    pub fn trim(self) -> Option<QuestionNode> {
        let Self {
            data,
            condition,
            children,
        } = self;
        let mut children: Vec<_> = children.into_iter().filter_map(Self::trim).collect();

        if matches!(data, NodeData::Group) {
            if children.is_empty() {
                return None;
            }
            if children.len() == 1 {
                let mut child = children.remove(0);
                let child_has_condition = child.condition.is_some();
                match (condition, child_has_condition) {
                    (None, _) => return Some(child),
                    (Some(condition), false) => {
                        child.condition = Some(condition);
                        return Some(child);
                    }
                    (Some(condition), true) => {
                        return Some(Self {
                            data,
                            condition: Some(condition),
                            children: vec![child],
                        });
                    }
                }
            }
        }

        Some(Self {
            data,
            condition,
            children,
        })
    }

    /// Check that every question has a non-empty name unique within the tree.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        self.collect_names(&mut seen)
    }

    fn collect_names<'a>(&'a self, seen: &mut HashSet<&'a str>) -> Result<(), TreeError> {
        if let Some(question) = self.question() {
            if question.name().is_empty() {
                return Err(TreeError::EmptyName);
            }
            if !seen.insert(question.name()) {
                return Err(TreeError::DuplicateName(question.name().to_string()));
            }
        }
        for child in &self.children {
            child.collect_names(seen)?;
        }
        Ok(())
    }
}

impl From<Question> for QuestionNode {
    fn from(question: Question) -> Self {
        Self::new(question)
    }
}
