//! Defines the inner representation
//! of the Decision Tree class.
use std::fmt;


/// Enumeration of `InternalNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Internal(InternalNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the internal nodes of decision tree.
/// A record goes to `left` if its value at `condition_attribute` is `0`
/// and to `right` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalNode {
    pub(super) condition_attribute: usize,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl InternalNode {
    /// Returns the attribute this node tests.
    #[inline]
    pub fn condition_attribute(&self) -> usize {
        self.condition_attribute
    }


    /// Returns the subtree for records with value `0`.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// Returns the subtree for records with value `1`.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafNode {
    pub(super) predicted_class: usize,
    pub(super) coverage: f64,
    pub(super) accuracy: f64,
}


impl LeafNode {
    /// Returns the class this leaf predicts.
    #[inline]
    pub fn predicted_class(&self) -> usize {
        self.predicted_class
    }


    /// Returns the fraction of the training records
    /// that reach this leaf.
    #[inline]
    pub fn coverage(&self) -> f64 {
        self.coverage
    }


    /// Returns the fraction of the records reaching this leaf
    /// that belong to the predicted class.
    #[inline]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}


impl Node {
    /// Construct an internal node.
    #[inline]
    pub(super) fn internal(condition_attribute: usize, left: Node, right: Node)
        -> Self
    {
        Self::Internal(InternalNode {
            condition_attribute,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Construct a leaf node.
    #[inline]
    pub(super) fn leaf(predicted_class: usize, coverage: f64, accuracy: f64)
        -> Self
    {
        Self::Leaf(LeafNode { predicted_class, coverage, accuracy })
    }


    /// Walks down from this node and returns the leaf
    /// that `attributes` reaches.
    pub fn classify(&self, attributes: &[u8]) -> &LeafNode {
        let mut current = self;
        loop {
            match current {
                Node::Internal(node) => {
                    current = if attributes[node.condition_attribute] == 0 {
                        node.left()
                    } else {
                        node.right()
                    };
                },
                Node::Leaf(leaf) => return leaf,
            }
        }
    }


    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Internal(node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the leaves of this sub-tree from left to right.
    pub fn leaves(&self) -> Vec<&LeafNode> {
        match self {
            Node::Internal(node) => {
                let mut leaves = node.left.leaves();
                leaves.append(&mut node.right.leaves());
                leaves
            },
            Node::Leaf(leaf) => vec![leaf],
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Internal(node) => {
                let info = format!(
                    "\tnode_{id} [ label = \"x[{attr}] == 0 ?\" ];\n",
                    attr = node.condition_attribute,
                );

                let left_id = id + 1;
                let (     left,  right_id) = node.left.to_dot_info(left_id);
                let (mut right, return_id) = node.right.to_dot_info(right_id);

                let mut infos = left;
                infos.push(info);
                infos.append(&mut right);

                infos.push(format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                ));
                infos.push(format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                ));

                (infos, return_id)
            },
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"class {c}\\ncoverage {cov:.3}\\naccuracy {acc:.3}\", \
                     shape = box ];\n",
                    c = leaf.predicted_class,
                    cov = leaf.coverage,
                    acc = leaf.accuracy,
                );

                (vec![info], id + 1)
            }
        }
    }


    pub(super) fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize)
        -> fmt::Result
    {
        let pad = "    ".repeat(depth);
        match self {
            Node::Internal(node) => {
                let attr = node.condition_attribute;
                writeln!(f, "{pad}x[{attr}] == 0:")?;
                node.left.fmt_indented(f, depth + 1)?;
                writeln!(f, "{pad}x[{attr}] == 1:")?;
                node.right.fmt_indented(f, depth + 1)
            },
            Node::Leaf(leaf) => {
                writeln!(
                    f,
                    "{pad}class {} (coverage {:.3}, accuracy {:.3})",
                    leaf.predicted_class, leaf.coverage, leaf.accuracy,
                )
            },
        }
    }
}
