// Types representing swim practices and the vocabulary they are written in

mod error;
mod types;
pub mod vocabulary;

// Re-export all public symbols
pub use error::*;
pub use types::*;
pub use vocabulary::{
    infer_set_kind, normalize_equipment, normalize_intensity, normalize_stroke, Equipment,
    Intensity, SetKind, Stroke,
};
