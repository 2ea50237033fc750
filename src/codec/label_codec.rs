use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DecodeError, Result};
use super::codec_traits::*;


/// The pair of labels of a binary attribute column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLabels {
    /// Label encoded as `0`.
    pub zero: String,
    /// Label encoded as `1`.
    pub one: String,
}


impl AttributeLabels {
    /// Construct a new pair of labels.
    pub fn new<S, T>(zero: S, one: T) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        Self { zero: zero.into(), one: one.into() }
    }
}


/// A codec driven by mapping tables.
/// Class codes are the 1-based positions in `classes`.
///
/// The tables are configuration; they are read from a JSON file
/// of the form
/// ```text
/// {
///     "attributes": [ { "zero": "highschool", "one": "college" }, ... ],
///     "classes": [ "highrisk", "mediumrisk", "lowrisk" ]
/// }
/// ```
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let codec = LabelCodec::from_json_file("/path/to/codec.json").unwrap();
/// let bit = codec.encode_attribute("smoker", 1).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCodec {
    attributes: Vec<AttributeLabels>,
    classes: Vec<String>,
}


impl LabelCodec {
    /// Construct a new codec from the given tables.
    pub fn new(attributes: Vec<AttributeLabels>, classes: Vec<String>)
        -> Self
    {
        Self { attributes, classes }
    }


    /// Read the tables from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let codec = serde_json::from_reader(BufReader::new(file))?;
        Ok(codec)
    }


    /// Parse the tables from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let codec = serde_json::from_str(json)?;
        Ok(codec)
    }


    /// Returns the attribute tables.
    pub fn attributes(&self) -> &[AttributeLabels] {
        &self.attributes[..]
    }


    /// Returns the class labels ordered by class code.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }
}


impl Default for LabelCodec {
    /// The risk assessment tables.
    fn default() -> Self {
        let attributes = vec![
            AttributeLabels::new("highschool", "college"),
            AttributeLabels::new("smoker", "nonsmoker"),
            AttributeLabels::new("married", "single"),
            AttributeLabels::new("male", "female"),
            AttributeLabels::new("works", "retired"),
        ];
        let classes = ["highrisk", "mediumrisk", "lowrisk"]
            .into_iter()
            .map(String::from)
            .collect();

        Self { attributes, classes }
    }
}


impl AttributeCodec for LabelCodec {
    fn n_columns(&self) -> usize {
        self.attributes.len()
    }


    fn encode_attribute(&self, raw: &str, column: usize)
        -> std::result::Result<u8, DecodeError>
    {
        let labels = self.attributes.get(column)
            .ok_or(DecodeError::ColumnOutOfRange {
                column,
                n_columns: self.attributes.len(),
            })?;

        if raw == labels.zero {
            Ok(0)
        } else if raw == labels.one {
            Ok(1)
        } else {
            Err(DecodeError::UnknownAttributeLabel {
                column,
                raw: raw.to_string(),
            })
        }
    }
}


impl ClassCodec for LabelCodec {
    fn n_classes(&self) -> usize {
        self.classes.len()
    }


    fn encode_class(&self, raw: &str) -> std::result::Result<usize, DecodeError> {
        self.classes.iter()
            .position(|label| label == raw)
            .map(|ix| ix + 1)
            .ok_or_else(|| DecodeError::UnknownClassLabel {
                raw: raw.to_string(),
            })
    }


    fn decode_class(&self, code: usize) -> std::result::Result<&str, DecodeError> {
        code.checked_sub(1)
            .and_then(|ix| self.classes.get(ix))
            .map(String::as_str)
            .ok_or(DecodeError::UnknownClassCode { code })
    }
}
