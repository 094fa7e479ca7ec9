//! Input data model and decoders.

mod parser;
mod source;
mod value;

pub use parser::{decode_file, Decoder, DecoderConfig, DelimitedDecoder, JsonDecoder};
pub use source::SourceMetadata;
pub use value::{cell, row, Dataset, Row, Value};
