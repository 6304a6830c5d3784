//! Evaluation of XGBoost models saved with `save_model("model.json")`.
//!
//! Only numeric splits on single-target `gbtree` boosters are supported.
//! Categorical splits, `gblinear` and multi-output models are rejected at
//! load time.

use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;

// ── JSON layout ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Document {
    learner: Learner,
}

#[derive(Deserialize)]
struct Learner {
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: GradientBooster,
    learner_model_param: LearnerModelParam,
    objective: ObjectiveSpec,
}

/// Set by early stopping; prediction only uses the rounds up to it.
#[derive(Deserialize, Default)]
struct Attributes {
    #[serde(default)]
    best_iteration: Option<String>,
}

#[derive(Deserialize)]
struct GradientBooster {
    name: String,
    model: Option<BoosterModel>,
}

#[derive(Deserialize)]
struct BoosterModel {
    #[serde(default)]
    gbtree_model_param: Option<GbtreeModelParam>,
    #[serde(default)]
    trees: Vec<TreeSpec>,
}

#[derive(Deserialize)]
struct GbtreeModelParam {
    #[serde(default)]
    num_parallel_tree: Option<String>,
}

#[derive(Deserialize)]
struct LearnerModelParam {
    base_score: String,
    num_feature: String,
    #[serde(default)]
    num_class: Option<String>,
    #[serde(default)]
    num_target: Option<String>,
}

#[derive(Deserialize)]
struct ObjectiveSpec {
    name: String,
}

#[derive(Deserialize)]
struct TreeSpec {
    left_children: Vec<i32>,
    right_children: Vec<i32>,
    split_indices: Vec<u32>,
    split_conditions: Vec<f32>,
    default_left: Vec<Flag>,
    #[serde(default)]
    split_type: Vec<u8>,
}

/// `default_left` is written as integers by some versions and booleans by others.
#[derive(Deserialize, Clone, Copy)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(u8),
}

impl Flag {
    const fn is_set(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Int(i) => i != 0,
        }
    }
}

// ── Objective ──────────────────────────────────────────────────────

/// Inverse link applied to the summed margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Identity,
    Sigmoid,
    Exp,
}

impl Link {
    fn from_objective(name: &str) -> Result<Self, ModelError> {
        if name.ends_with(":logistic") {
            Ok(Self::Sigmoid)
        } else if matches!(name, "count:poisson" | "reg:gamma" | "reg:tweedie" | "survival:cox") {
            Ok(Self::Exp)
        } else if (name.starts_with("reg:") && name.ends_with("error")) || name == "binary:logitraw" {
            Ok(Self::Identity)
        } else {
            Err(ModelError::Unsupported(format!("objective {name}")))
        }
    }

    /// Convert the stored base score into margin space.
    fn base_margin(self, base_score: f64) -> Result<f64, ModelError> {
        match self {
            Self::Identity => Ok(base_score),
            Self::Sigmoid if base_score > 0.0 && base_score < 1.0 => {
                Ok((base_score / (1.0 - base_score)).ln())
            }
            Self::Exp if base_score > 0.0 => Ok(base_score.ln()),
            _ => Err(ModelError::Unsupported(format!(
                "base_score {base_score} outside the domain of {self:?}"
            ))),
        }
    }

    fn apply(self, margin: f64) -> f64 {
        match self {
            Self::Identity => margin,
            Self::Sigmoid => 1.0 / (1.0 + (-margin).exp()),
            Self::Exp => margin.exp(),
        }
    }
}

// ── Trees ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
        default_left: bool,
    },
    Leaf(f32),
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn from_spec(index: usize, spec: TreeSpec, num_features: usize) -> Result<Self, ModelError> {
        let malformed = |reason: String| ModelError::MalformedTree {
            tree: index,
            reason,
        };

        let n = spec.left_children.len();
        if n == 0 {
            return Err(malformed("no nodes".into()));
        }
        let columns = [
            spec.right_children.len(),
            spec.split_indices.len(),
            spec.split_conditions.len(),
            spec.default_left.len(),
        ];
        if columns.iter().any(|&len| len != n) {
            return Err(malformed(format!(
                "node arrays disagree in length ({n} vs {columns:?})"
            )));
        }

        let mut nodes = Vec::with_capacity(n);
        for id in 0..n {
            let (left, right) = (spec.left_children[id], spec.right_children[id]);
            if left == -1 && right == -1 {
                nodes.push(Node::Leaf(spec.split_conditions[id]));
                continue;
            }
            if spec.split_type.get(id).copied().unwrap_or(0) != 0 {
                return Err(ModelError::Unsupported(format!(
                    "categorical split in tree {index} node {id}"
                )));
            }
            let child = |c: i32| {
                usize::try_from(c)
                    .ok()
                    .filter(|&c| c > id && c < n)
                    .ok_or_else(|| malformed(format!("node {id} has invalid child {c}")))
            };
            let feature = spec.split_indices[id] as usize;
            if feature >= num_features {
                return Err(malformed(format!(
                    "node {id} splits on feature {feature} of {num_features}"
                )));
            }
            nodes.push(Node::Split {
                feature,
                threshold: spec.split_conditions[id],
                left: child(left)?,
                right: child(right)?,
                default_left: spec.default_left[id].is_set(),
            });
        }
        Ok(Self { nodes })
    }

    /// Children always have larger ids than their parent, so the walk ends.
    fn leaf_value(&self, row: &[f32]) -> f32 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let x = row[feature];
                    id = if x.is_nan() {
                        if default_left { left } else { right }
                    } else if x < threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

// ── Model ──────────────────────────────────────────────────────────

/// A gradient-boosted tree ensemble loaded from XGBoost's JSON format.
#[derive(Debug, Clone)]
pub struct XgbModel {
    feature_names: Vec<String>,
    num_features: usize,
    objective: String,
    link: Link,
    base_margin: f64,
    trees: Vec<Tree>,
}

impl XgbModel {
    /// Load a model from a `model.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the file cannot be read or is not a
    /// supported model.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let model = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            trees = model.trees.len(),
            objective = %model.objective,
            "loaded model"
        );
        Ok(model)
    }

    /// Parse a model from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for invalid JSON, unsupported boosters or
    /// objectives, and malformed trees.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let doc: Document = serde_json::from_str(text)?;
        let learner = doc.learner;
        let params = learner.learner_model_param;

        if learner.gradient_booster.name != "gbtree" {
            return Err(ModelError::Unsupported(format!(
                "booster {}",
                learner.gradient_booster.name
            )));
        }
        for (field, value) in [("num_class", &params.num_class), ("num_target", &params.num_target)] {
            let count = value.as_deref().map_or(Ok(0), parse_count)?;
            if count > 1 {
                return Err(ModelError::Unsupported(format!("{field} = {count}")));
            }
        }

        let num_features = parse_count(&params.num_feature)?;
        if !learner.feature_names.is_empty() && learner.feature_names.len() != num_features {
            return Err(ModelError::FeatureCount {
                expected: num_features,
                found: learner.feature_names.len(),
            });
        }

        let link = Link::from_objective(&learner.objective.name)?;
        let base_margin = link.base_margin(parse_base_score(&params.base_score)?)?;

        let (mut specs, trees_per_round) = match learner.gradient_booster.model {
            Some(model) => {
                let per_round = model
                    .gbtree_model_param
                    .and_then(|p| p.num_parallel_tree)
                    .as_deref()
                    .map_or(Ok(1), parse_count)?
                    .max(1);
                (model.trees, per_round)
            }
            None => (Vec::new(), 1),
        };
        if let Some(best) = learner.attributes.best_iteration.as_deref() {
            let rounds = parse_count(best)?.saturating_add(1);
            specs.truncate(rounds.saturating_mul(trees_per_round));
        }
        let trees = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Tree::from_spec(i, spec, num_features))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            feature_names: learner.feature_names,
            num_features,
            objective: learner.objective.name,
            link,
            base_margin,
            trees,
        })
    }

    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    #[must_use]
    pub const fn link(&self) -> Link {
        self.link
    }

    #[must_use]
    pub const fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.feature_names
    }

    pub(crate) const fn width(&self) -> usize {
        self.num_features
    }

    /// Predict one row that is already known to have the right width.
    pub(crate) fn predict_row(&self, row: &[f32]) -> f32 {
        let margin = self
            .trees
            .iter()
            .fold(self.base_margin, |acc, tree| acc + f64::from(tree.leaf_value(row)));
        #[allow(clippy::cast_possible_truncation)]
        let out = self.link.apply(margin) as f32;
        out
    }
}

fn parse_count(text: &str) -> Result<usize, ModelError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ModelError::Unsupported(format!("non-numeric model parameter {text:?}")))
}

/// Accepts `"5E-1"`, `"0.5"` and the bracketed `"[5E-1]"` form.
fn parse_base_score(text: &str) -> Result<f64, ModelError> {
    let inner = text.trim().trim_start_matches('[').trim_end_matches(']');
    let mut values = inner.split(',').map(str::trim).filter(|v| !v.is_empty());
    let first = values
        .next()
        .ok_or_else(|| ModelError::Unsupported("empty base_score".into()))?;
    if values.next().is_some() {
        return Err(ModelError::Unsupported(format!("vector base_score {text}")));
    }
    first
        .parse::<f64>()
        .map_err(|_| ModelError::Unsupported(format!("base_score {text:?}")))
}
