//! Conversion between raw textual labels and
//! binary attribute values / integer class codes.

/// Defines `AttributeCodec` and `ClassCodec` traits.
pub(crate) mod codec_traits;
/// Defines the table-driven codec.
pub(crate) mod label_codec;


pub use codec_traits::{AttributeCodec, ClassCodec};
pub use label_codec::{LabelCodec, AttributeLabels};
