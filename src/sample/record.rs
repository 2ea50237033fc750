use std::fmt;


/// A training record:
/// a fixed-length vector of binary attribute values
/// and a class code in `[1, n_classes]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    attributes: Vec<u8>,
    class: usize,
}


impl Record {
    /// Construct a new record.
    #[inline]
    pub fn new(attributes: Vec<u8>, class: usize) -> Self {
        Self { attributes, class }
    }


    /// Returns the attribute vector.
    #[inline]
    pub fn attributes(&self) -> &[u8] {
        &self.attributes[..]
    }


    /// Returns the class code.
    #[inline]
    pub fn class(&self) -> usize {
        self.class
    }


    /// Returns the value of the `attribute`-th attribute.
    #[inline]
    pub fn value(&self, attribute: usize) -> u8 {
        self.attributes[attribute]
    }
}


impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self.attributes.iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({attributes}) -> {}", self.class)
    }
}
