//! Two pass rendering of practices back into text

use crate::formatting::*;
use crate::language::Set;

/// We do the formatting in two passes. First we convert the Sets into a Vec
/// of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished/highlighted
/// String.
pub fn render(renderer: &dyn Render, sets: &[Set]) -> String {
    // Pass 1: Format Sets to tagged fragments
    let fragments = format_with_renderer(sets);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Canonical plain text for the given Sets, suitable for storing and parsing
/// again later.
pub fn to_text(sets: &[Set]) -> String {
    render(&Identity, sets)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
