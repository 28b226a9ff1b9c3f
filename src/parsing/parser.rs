//! Line oriented parser for practice notation.
//!
//! A practice is written as a sequence of lines. Lines starting with `##`
//! open a new set; blank lines are ignored; everything else describes one
//! item of work, for example
//!
//! ```text
//! 4x100 Free @1:30 - descend 1-4 (moderate) [fins, paddles]
//! ```
//!
//! Fields are pulled off an item line one at a time, each step removing what
//! it matched before the next one looks: equipment in brackets, intensity in
//! parenthesis, a trailing description after " - ", an interval after `@`,
//! and finally the repetitions, distance, and stroke from what is left.
//!
//! Errors on one line do not stop the parse; every bad line is reported.

use std::fmt;
use tracing::debug;

use crate::language::vocabulary::listing;
use crate::language::*;

const DEFAULT_SET_NAME: &str = "Set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnknownEquipment(usize, Vec<String>),
    UnknownIntensity(usize, String),
    UnknownStroke(usize, String),
    UnrecognizedItem(usize, String),
    InvalidCount(usize, String),
}

impl ParsingError {
    /// The line the problem was found on, counting from 1.
    pub fn line(&self) -> usize {
        match self {
            ParsingError::UnknownEquipment(line, _) => *line,
            ParsingError::UnknownIntensity(line, _) => *line,
            ParsingError::UnknownStroke(line, _) => *line,
            ParsingError::UnrecognizedItem(line, _) => *line,
            ParsingError::InvalidCount(line, _) => *line,
        }
    }

    /// The offending text, as it was written.
    pub fn fragment(&self) -> String {
        match self {
            ParsingError::UnknownEquipment(_, tokens) => tokens.join(", "),
            ParsingError::UnknownIntensity(_, raw) => raw.clone(),
            ParsingError::UnknownStroke(_, raw) => raw.clone(),
            ParsingError::UnrecognizedItem(_, raw) => raw.clone(),
            ParsingError::InvalidCount(_, raw) => raw.clone(),
        }
    }

    /// Single sentence explanation including a hint at what would have been
    /// accepted.
    pub fn message(&self) -> String {
        match self {
            ParsingError::UnknownEquipment(_, tokens) => format!(
                "Unknown equipment: {}. Use: {}",
                tokens.join(", "),
                listing(&Equipment::ALL)
            ),
            ParsingError::UnknownIntensity(_, raw) => format!(
                "Unknown intensity: {}. Use: {}",
                raw,
                listing(&Intensity::ALL)
            ),
            ParsingError::UnknownStroke(_, raw) => format!(
                "Unknown stroke: \"{}\". Use: {}",
                raw,
                listing(&Stroke::ALL)
            ),
            ParsingError::UnrecognizedItem(_, raw) => format!(
                "Could not parse: \"{}\". Format: \"4x100 Free @1:30\"",
                raw
            ),
            ParsingError::InvalidCount(_, raw) => format!(
                "Invalid count: \"{}\". Repetitions and distance must be positive whole numbers",
                raw
            ),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line(), self.message())
    }
}

/// Parse practice notation into sets, or return every error found.
pub fn parse_with_recovery(content: &str) -> Result<Vec<Set>, Vec<ParsingError>> {
    let mut input = Parser::new();
    input.initialize(content);
    input.parse_collecting_errors()
}

#[derive(Debug)]
pub struct Parser<'i> {
    source: &'i str,
    line: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser { source: "", line: 0 }
    }

    pub fn initialize(&mut self, content: &'i str) {
        // editors on some platforms save a byte order mark
        self.source = content
            .strip_prefix('\u{feff}')
            .unwrap_or(content);
        self.line = 0;
    }

    /// Walk the input line by line, accumulating sets. A set only makes it
    /// into the result once it has at least one item; a header followed
    /// directly by another header is dropped.
    pub fn parse_collecting_errors(&mut self) -> Result<Vec<Set>, Vec<ParsingError>> {
        let mut sets: Vec<Set> = Vec::new();
        let mut current: Option<Set> = None;
        let mut errors = Vec::new();

        for (i, content) in self
            .source
            .lines()
            .enumerate()
        {
            self.line = i + 1;

            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            if is_set_header(content) {
                if let Some(set) = current.take() {
                    keep_set(&mut sets, set);
                }
                let name = read_set_name(content);
                current = Some(Set::new(name, sets.len()));
                continue;
            }

            let set = current.get_or_insert_with(|| Set::new(DEFAULT_SET_NAME, sets.len()));

            match self.read_item(content) {
                Ok(item) => set.push(item),
                Err(error) => {
                    debug!(line = self.line, ?error);
                    errors.push(error);
                }
            }
        }

        if let Some(set) = current.take() {
            keep_set(&mut sets, set);
        }

        if errors.is_empty() {
            Ok(sets)
        } else {
            Err(errors)
        }
    }

    /// Parse a single (already trimmed) item line.
    pub fn read_item(&self, content: &str) -> Result<Item, ParsingError> {
        let (equipment, remainder) = self.read_equipment(content)?;
        let (intensity, remainder) = self.read_intensity(&remainder)?;
        let (description, remainder) = read_description(&remainder);
        let (interval, remainder) = read_interval(&remainder);
        let (reps, distance, stroke) = self.read_counts(&remainder)?;
        let stroke = self.read_stroke(stroke)?;

        Ok(Item {
            order: 0,
            reps,
            distance,
            stroke,
            interval,
            description,
            intensity,
            equipment,
        })
    }

    fn read_equipment(&self, content: &str) -> Result<(Vec<Equipment>, String), ParsingError> {
        let re = regex!(r"\[([^\]]*)\]");

        let (inner, remainder) = match take_match(re, content) {
            Some(found) => found,
            None => return Ok((Vec::new(), content.to_string())),
        };

        let mut equipment = Vec::new();
        let mut unknown = Vec::new();

        for token in inner
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
        {
            match normalize_equipment(token) {
                Some(value) => equipment.push(value),
                None => unknown.push(token.to_string()),
            }
        }

        if !unknown.is_empty() {
            return Err(ParsingError::UnknownEquipment(self.line, unknown));
        }

        Ok((equipment, remainder))
    }

    fn read_intensity(&self, content: &str) -> Result<(Option<Intensity>, String), ParsingError> {
        let re = regex!(r"\(([^)]*)\)");

        match take_match(re, content) {
            Some((inner, remainder)) => match normalize_intensity(&inner) {
                Some(intensity) => Ok((Some(intensity), remainder)),
                None => Err(ParsingError::UnknownIntensity(
                    self.line,
                    inner
                        .trim()
                        .to_string(),
                )),
            },
            None => Ok((None, content.to_string())),
        }
    }

    /// Repetitions, distance, and the raw stroke text. Either "4x100 Free"
    /// or, for a single repetition, "200 IM".
    fn read_counts<'a>(&self, content: &'a str) -> Result<(u32, u32, &'a str), ParsingError> {
        let re = regex!(r"^(\d+)\s*[xX×]\s*(\d+)\s*(.*)$");

        if let Some(cap) = re.captures(content) {
            let reps = self.read_count(&cap[1], content)?;
            let distance = self.read_count(&cap[2], content)?;
            let stroke = cap
                .get(3)
                .map_or("", |m| m.as_str());
            return Ok((reps, distance, stroke.trim()));
        }

        let re = regex!(r"^(\d+)\s*(.*)$");

        if let Some(cap) = re.captures(content) {
            let distance = self.read_count(&cap[1], content)?;
            let stroke = cap
                .get(2)
                .map_or("", |m| m.as_str());
            return Ok((1, distance, stroke.trim()));
        }

        Err(ParsingError::UnrecognizedItem(
            self.line,
            content.to_string(),
        ))
    }

    fn read_count(&self, digits: &str, content: &str) -> Result<u32, ParsingError> {
        match digits.parse::<u32>() {
            Ok(0) | Err(_) => Err(ParsingError::InvalidCount(
                self.line,
                content.to_string(),
            )),
            Ok(count) => Ok(count),
        }
    }

    fn read_stroke(&self, raw: &str) -> Result<Stroke, ParsingError> {
        normalize_stroke(raw).ok_or_else(|| ParsingError::UnknownStroke(self.line, raw.to_string()))
    }
}

fn keep_set(sets: &mut Vec<Set>, set: Set) {
    if set.is_empty() {
        debug!("Dropping set without items: {}", set.name);
        return;
    }
    sets.push(set);
}

fn is_set_header(content: &str) -> bool {
    content.starts_with("##")
}

fn read_set_name(content: &str) -> &str {
    content
        .strip_prefix("##")
        .unwrap_or(content)
        .trim()
}

/// A trailing " - some words" is the description. Matching is leftmost, so
/// the first spaced hyphen starts it and any further ones are kept as text.
fn read_description(content: &str) -> (Option<String>, String) {
    let re = regex!(r"\s+-\s+(.+)$");

    match take_match(re, content) {
        Some((inner, remainder)) => (
            Some(
                inner
                    .trim()
                    .to_string(),
            ),
            remainder,
        ),
        None => (None, content.to_string()),
    }
}

/// The interval is kept verbatim; "1:30", ":45", and "2:00r" are all fine.
fn read_interval(content: &str) -> (Option<String>, String) {
    let re = regex!(r"@(\S+)");

    match take_match(re, content) {
        Some((inner, remainder)) => (Some(inner), remainder),
        None => (None, content.to_string()),
    }
}

/// Cut the first match of a pattern out of a line, returning the contents of
/// its first capture group and the rest of the line with the match replaced
/// by a single space.
fn take_match(re: &regex::Regex, content: &str) -> Option<(String, String)> {
    let cap = re.captures(content)?;
    let whole = cap.get(0)?;
    let inner = cap.get(1)?;

    let remainder = format!(
        "{} {}",
        content[..whole.start()].trim_end(),
        content[whole.end()..].trim_start()
    );

    Some((
        inner
            .as_str()
            .to_string(),
        remainder
            .trim()
            .to_string(),
    ))
}

#[cfg(test)]
#[path = "checks/parser.rs"]
mod check;

#[cfg(test)]
#[path = "checks/errors.rs"]
mod errors;
