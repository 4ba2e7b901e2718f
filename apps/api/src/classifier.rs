//! Classifier adapter — wraps the pre-trained stress model artifact.
//!
//! The artifact is a JSON decision-forest export produced by the training
//! pipeline (`{version, n_features, n_classes, trees}`). It is loaded exactly
//! once at startup, validated structurally, and then shared read-only across
//! requests for the process lifetime. Load failure is fatal: there is no
//! recovery path and no request can succeed without the model.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::assessment::FEATURE_COUNT;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// The input vector did not match the shape the artifact was trained on.
#[derive(Debug, Error)]
#[error("classifier expects {expected} features, got {got}")]
pub struct ClassificationError {
    pub expected: usize,
    pub got: usize,
}

/// Human-readable stress label for a classifier output class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// Fixed ordinal mapping: 0→Low, 1→Medium, 2→High. Anything else has no
    /// label — callers surface that as a server error rather than guessing.
    pub fn from_class(class: usize) -> Option<Self> {
        match class {
            0 => Some(StressLevel::Low),
            1 => Some(StressLevel::Medium),
            2 => Some(StressLevel::High),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            StressLevel::Low => 0,
            StressLevel::Medium => 1,
            StressLevel::High => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a decision tree. Split nodes route on a feature threshold,
/// leaf nodes carry the predicted class.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: usize,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walks from the root to a leaf. Node and feature indices were bounds-
    /// checked at load time, and children always point forward, so this
    /// terminates.
    fn decide(&self, features: &[f64]) -> usize {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { leaf } => return *leaf,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// The pre-trained stress classifier: a majority-vote decision forest.
#[derive(Debug, Deserialize)]
pub struct StressModel {
    #[allow(dead_code)]
    version: u32,
    n_features: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

impl StressModel {
    /// Reads, parses and structurally validates the artifact.
    /// Called once at startup; any error here aborts the process.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let raw = fs::read_to_string(path)?;
        let model: StressModel = serde_json::from_str(&raw)?;
        model.validate()?;
        Ok(model)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.n_features != FEATURE_COUNT {
            return Err(ModelLoadError::Invalid(format!(
                "artifact was trained on {} features, this service produces {}",
                self.n_features, FEATURE_COUNT
            )));
        }
        if self.n_classes == 0 {
            return Err(ModelLoadError::Invalid("artifact declares zero classes".into()));
        }
        if self.trees.is_empty() {
            return Err(ModelLoadError::Invalid("artifact contains no trees".into()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelLoadError::Invalid(format!("tree {t} has no nodes")));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Leaf { leaf } => {
                        if *leaf >= self.n_classes {
                            return Err(ModelLoadError::Invalid(format!(
                                "tree {t} node {i}: leaf class {leaf} out of range"
                            )));
                        }
                    }
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.n_features {
                            return Err(ModelLoadError::Invalid(format!(
                                "tree {t} node {i}: feature index {feature} out of range"
                            )));
                        }
                        // Children must point strictly forward: traversal
                        // always terminates and never revisits a node.
                        let bad = |child: usize| child <= i || child >= tree.nodes.len();
                        if bad(*left) || bad(*right) {
                            return Err(ModelLoadError::Invalid(format!(
                                "tree {t} node {i}: child index out of range"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Scores one feature vector. Deterministic: each tree votes, the class
    /// with the most votes wins, and ties break toward the lower class.
    pub fn predict(&self, features: &[f64]) -> Result<usize, ClassificationError> {
        if features.len() != self.n_features {
            return Err(ClassificationError {
                expected: self.n_features,
                got: features.len(),
            });
        }
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.decide(features)] += 1;
        }
        let mut winner = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[winner] {
                winner = class;
            }
        }
        Ok(winner)
    }
}
