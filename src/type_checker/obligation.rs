//! Proof obligations: the tree explaining why a unit does or does not
//! type check.
//!
//! Leaves are single assertions (`E(x) = int`, `int := int`). Groups name a
//! construct and its synthesized type (`S0 : void`) and hold when all of
//! their children hold.

use std::fmt::Display;

use serde::Serialize;

/// Label of the leaf standing in for a construct with nothing to prove.
pub const NO_OBLIGATION: &str = "true";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProofObligation {
    Leaf { label: String, holds: bool },
    Group { label: String, children: Vec<ProofObligation> },
}

impl ProofObligation {
    pub fn leaf(label: impl Into<String>, holds: bool) -> Self {
        ProofObligation::Leaf {
            label: label.into(),
            holds,
        }
    }

    /// Builds a group, giving it a trivially true leaf when it has no children.
    pub fn group(label: impl Into<String>, mut children: Vec<ProofObligation>) -> Self {
        if children.is_empty() {
            children.push(ProofObligation::leaf(NO_OBLIGATION, true));
        }
        ProofObligation::Group {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProofObligation::Leaf { label, .. } | ProofObligation::Group { label, .. } => label,
        }
    }

    pub fn holds(&self) -> bool {
        match self {
            ProofObligation::Leaf { holds, .. } => *holds,
            ProofObligation::Group { children, .. } => children.iter().all(ProofObligation::holds),
        }
    }

    pub fn children(&self) -> &[ProofObligation] {
        match self {
            ProofObligation::Leaf { .. } => &[],
            ProofObligation::Group { children, .. } => children,
        }
    }

    /// Every leaf that does not hold, in tree order.
    pub fn failing_leaves(&self) -> Vec<&ProofObligation> {
        let mut failing = Vec::new();
        self.collect_failing(&mut failing);
        failing
    }

    fn collect_failing<'a>(&'a self, failing: &mut Vec<&'a ProofObligation>) {
        match self {
            ProofObligation::Leaf { holds: false, .. } => failing.push(self),
            ProofObligation::Leaf { .. } => {}
            ProofObligation::Group { children, .. } => {
                for child in children {
                    child.collect_failing(failing);
                }
            }
        }
    }

    /// Looks up a direct child by label.
    pub fn child(&self, label: &str) -> Option<&ProofObligation> {
        self.children().iter().find(|child| child.label() == label)
    }

    fn render(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let marker = if self.holds() { "[ok]  " } else { "[FAIL]" };
        writeln!(f, "{:indent$}{} {}", "", marker, self.label(), indent = depth * 2)?;
        for child in self.children() {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl Display for ProofObligation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, 0)
    }
}

/// The verdict for a compilation unit and the proof tree behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCheckResult {
    pub well_typed: bool,
    pub root: ProofObligation,
}
