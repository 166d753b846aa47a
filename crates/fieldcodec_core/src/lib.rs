//! Public library API for converting typed character fields to and from document-store values.

/// Shape descriptors, stored/typed value models, and the field codecs.
pub mod codec;
