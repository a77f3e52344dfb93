/// Core decoder for `.black` tokenized material files.
pub mod black;
/// Error definitions
pub mod error;
/// Planet graphic entries from the SDE's `graphics.yaml`.
pub mod graphics;
/// Decoder output types.
pub mod preset;
/// Parser for the client's `resfileindex.txt` resource index.
pub mod resfileindex;

pub use black::{BlackFile, FormatError, decode};
pub use preset::{OrderedMap, ShaderPreset};
