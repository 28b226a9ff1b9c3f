//! Renderers for presenting practice notation

mod terminal;

pub use terminal::Terminal;
