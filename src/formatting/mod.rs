// Turning parsed practices back into notation

pub mod formatter;
mod renderer;
mod syntax;

pub use formatter::{format_with_renderer, render_item};
pub use renderer::*;
pub use syntax::*;
