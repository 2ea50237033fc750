//! Binary decision tree induction over binary attributes.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the tree produced by `DecisionTree`.
pub mod dtree_classifier;

/// Defines the nodes of `DecisionTreeClassifier`.
mod node;
mod impurity;
mod attribute_set;


pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use dtree_classifier::DecisionTreeClassifier;
pub use node::{Node, InternalNode, LeafNode};
pub use impurity::Impurity;
pub use attribute_set::AttributeSet;
