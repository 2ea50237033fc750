#![warn(missing_docs)]

//!
//! A crate that builds binary decision trees
//! over records with binary attributes.
//!
//! The tree is grown top-down:
//! each internal node tests one attribute (`0` goes left, `1` goes right),
//! chosen among the attributes not yet used on its path
//! by the least weighted impurity.
//! Each leaf predicts the majority class of the records reaching it
//! and reports two confidence values;
//! - **coverage**: the fraction of all training records reaching the leaf,
//! - **accuracy**: the fraction of those records in the predicted class.
//!
//! A tree can be evaluated in three ways;
//! - the error on its own training records,
//! - the error on an independently labeled set,
//! - leave-one-out, which rebuilds the tree once per record.
//!
//! Raw labels in the input files are mapped to binary attribute values
//! and class codes by a codec, see [`LabelCodec`].

pub mod error;
pub mod codec;
pub mod sample;
pub mod hypothesis;
pub mod decision_tree;
pub mod validation;
pub mod session;

pub mod prelude;


pub use error::{Error, DecodeError, Result};

pub use codec::{
    AttributeCodec,
    ClassCodec,
    LabelCodec,
    AttributeLabels,
};

pub use sample::{
    Record,
    RecordStore,
    RecordReader,
};

pub use hypothesis::Classifier;

pub use decision_tree::{
    AttributeSet,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Impurity,
    InternalNode,
    LeafNode,
    Node,
};

pub use validation::{
    ErrorReport,
    LeaveOneOut,
    holdout_error,
    training_error,
};

pub use session::Session;
