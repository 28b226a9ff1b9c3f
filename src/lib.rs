//! Parser and formatter for swim practice notation.
//!
//! Coaches write practices as plain text, one line per item of work, grouped
//! into sets by `##` headers:
//!
//! ```text
//! ## WARMUP
//! 400 Free
//! 4x50 Kick @1:00 [kickboard]
//!
//! ## MAIN SET
//! 8x100 Free @1:30 - descend 1-4 (fast) [paddles, pull_buoy]
//! ```
//!
//! [`parsing::parse`] turns such text into [`language::Set`]s or reports
//! every invalid line; [`formatting::to_text`] goes the other way.

#[macro_use]
mod regex;

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;
