//! State of an interactive proof construction.

use crate::Command;
use log::{debug, info};
use sequent::focus::subtree_at;
use sequent::rule::{expand_leaf, weaken_leaf};
use sequent::{builder, Optional, ReductionTree, Sequent, TreeFocus};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Whether the user is entering formulas or applying rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Input,
    Infer,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Infer => write!(f, "infer"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "infer" => Ok(Self::Infer),
            _ => Err(format!("unknown mode: {}", s)),
        }
    }
}

/// Reason why a command was not executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// editing requires a prior `focus` command
    NoFocus,
    /// the command is only available in the given mode
    Mode(Mode),
    NoNode(TreeFocus),
    NotALeaf(TreeFocus),
    NoHistory,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFocus => write!(f, "no formulas selected"),
            Self::Mode(m) => write!(f, "command requires {} mode", m),
            Self::NoNode(focus) => write!(f, "no node at {}", focus),
            Self::NotALeaf(focus) => write!(f, "node at {} is not a leaf", focus),
            Self::NoHistory => write!(f, "no previous tree"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Did the command change the tree?
pub type Change = bool;

pub struct Session {
    tree: ReductionTree,
    history: Vec<ReductionTree>,
    focus: Option<TreeFocus>,
    mode: Mode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ReductionTree::leaf(Sequent::default()))
    }
}

impl Session {
    /// Start a session in input mode.
    pub fn new(tree: ReductionTree) -> Self {
        Self {
            tree,
            history: Vec::new(),
            focus: None,
            mode: Mode::Input,
        }
    }

    pub fn tree(&self) -> &ReductionTree {
        &self.tree
    }

    pub fn focus(&self) -> Option<&TreeFocus> {
        self.focus.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Verify that the focus points to a leaf of the current tree.
    fn check_leaf(&self, focus: &TreeFocus) -> Result<(), Rejection> {
        match subtree_at(&focus.path).get(&self.tree) {
            None => Err(Rejection::NoNode(focus.clone())),
            Some(node) if !node.is_leaf() => Err(Rejection::NotALeaf(focus.clone())),
            Some(_) => Ok(()),
        }
    }

    fn require(&self, mode: Mode) -> Result<(), Rejection> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(Rejection::Mode(mode))
        }
    }

    /// Replace the current tree, remembering the old one if it differs.
    fn commit(&mut self, tree: ReductionTree) -> Change {
        if tree == self.tree {
            debug!("tree unchanged");
            return false;
        }
        let old = std::mem::replace(&mut self.tree, tree);
        self.history.push(old);
        self.retain_focus();
        true
    }

    /// Drop the focus if it no longer points to a leaf.
    fn retain_focus(&mut self) {
        if let Some(focus) = &self.focus {
            if self.check_leaf(focus).is_err() {
                info!("dropping focus {}", focus);
                self.focus = None;
            }
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Change, Rejection> {
        match cmd {
            Command::Focus(focus) => {
                self.check_leaf(&focus)?;
                self.focus = Some(focus);
                Ok(false)
            }
            Command::Edit(edit) => {
                self.require(Mode::Input)?;
                let focus = self.focus.as_ref().ok_or(Rejection::NoFocus)?;
                let tree = builder::edit(&self.tree, focus, &edit);
                Ok(self.commit(tree))
            }
            Command::Expand(focus, index) => {
                self.require(Mode::Infer)?;
                self.check_leaf(&focus)?;
                let tree = expand_leaf(&self.tree, &focus, index);
                Ok(self.commit(tree))
            }
            Command::Weaken(focus, index) => {
                self.require(Mode::Infer)?;
                self.check_leaf(&focus)?;
                let tree = weaken_leaf(&self.tree, &focus, index);
                Ok(self.commit(tree))
            }
            Command::Mode(mode) => {
                self.mode = mode;
                Ok(false)
            }
            Command::Back => {
                let tree = self.history.pop().ok_or(Rejection::NoHistory)?;
                self.tree = tree;
                self.retain_focus();
                Ok(true)
            }
            Command::Reset => {
                self.focus = None;
                self.mode = Mode::Input;
                Ok(self.commit(ReductionTree::leaf(Sequent::default())))
            }
            Command::Show | Command::Leaves => Ok(false),
        }
    }
}
