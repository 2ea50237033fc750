use crate::error::DecodeError;


/// A trait that maps a raw attribute label to its binary value.
pub trait AttributeCodec {
    /// Returns the number of attribute columns this codec knows.
    fn n_columns(&self) -> usize;


    /// Encodes `raw`, read from the zero-based attribute `column`,
    /// into `0` or `1`.
    fn encode_attribute(&self, raw: &str, column: usize)
        -> Result<u8, DecodeError>;
}


/// A trait that maps class labels to class codes in `[1, n_classes]`
/// and back.
pub trait ClassCodec {
    /// Returns the number of classes this codec knows.
    fn n_classes(&self) -> usize;


    /// Encodes a raw class label into its class code.
    fn encode_class(&self, raw: &str) -> Result<usize, DecodeError>;


    /// Decodes a class code into its label.
    fn decode_class(&self, code: usize) -> Result<&str, DecodeError>;
}
