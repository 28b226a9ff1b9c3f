// Program wide top-level error handling

mod format;
mod messages;

// Re-export all public symbols
pub use format::*;
use lanes::{
    formatting::{render_item, Render},
    language::*,
};

/// Trait for practice types that can present themselves via a renderer
pub trait Present {
    /// Present this value using the given renderer
    fn present(&self, renderer: &dyn Render) -> String;
}

impl Present for Item {
    fn present(&self, renderer: &dyn Render) -> String {
        render_item(self, renderer)
    }
}
