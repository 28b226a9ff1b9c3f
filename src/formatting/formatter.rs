//! Code formatter for practice notation

use crate::formatting::*;
use crate::language::*;

/// Convert Sets into tagged fragments of canonical notation. Each set gets a
/// `##` header with its name in upper case, one line per item, and a blank
/// line after.
pub fn format_with_renderer(sets: &[Set]) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for set in sets {
        output.format_set(set);
    }

    // Flush any remaining content
    output.flush_current();

    output.fragments
}

/// Render a single item as one line of notation, without a trailing newline.
pub fn render_item(item: &Item, renderer: &dyn Render) -> String {
    let mut output = Formatter::new();
    output.append_item(item);
    output.flush_current();

    output
        .fragments
        .iter()
        .map(|(syntax, content)| renderer.style(*syntax, content))
        .collect()
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    current: Syntax,
    buffer: String,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            current: Syntax::Neutral,
            buffer: String::new(),
        }
    }

    fn append_fragment(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    /// Append content with specific syntax tagging, maintaining order
    fn append(&mut self, syntax: Syntax, content: &str) {
        // Flush any pending buffer content first to maintain order
        self.flush_current();
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn switch_syntax(&mut self, new_syntax: Syntax) {
        self.flush_current();
        self.current = new_syntax;
    }

    fn reset_syntax(&mut self) {
        self.switch_syntax(Syntax::Neutral);
    }

    fn flush_current(&mut self) {
        if !self
            .buffer
            .is_empty()
        {
            self.fragments
                .push((
                    self.current,
                    self.buffer
                        .clone(),
                ));
            self.buffer
                .clear();
        }
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
        self.buffer
            .clear();
        self.current = Syntax::Neutral;
    }

    fn append_char(&mut self, c: char) {
        if c == '\n' {
            // Flush any existing buffer before adding newline
            self.flush_current();
            self.append_fragment(Syntax::Newline, "\n");
        } else {
            self.buffer
                .push(c);
        }
    }

    fn append_str(&mut self, text: &str) {
        for c in text.chars() {
            self.append_char(c);
        }
    }

    fn format_set(&mut self, set: &Set) {
        self.switch_syntax(Syntax::Header);
        self.append_str("## ");
        self.append_str(
            &set.name
                .to_uppercase(),
        );
        self.reset_syntax();
        self.append_char('\n');

        for item in &set.items {
            self.append_item(item);
            self.append_char('\n');
        }

        self.append_char('\n');
    }

    fn append_item(&mut self, item: &Item) {
        self.append(Syntax::Count, &format!("{}x{}", item.reps, item.distance));
        self.append_char(' ');
        self.append(
            Syntax::Stroke,
            item.stroke
                .display_name(),
        );

        if let Some(interval) = present(&item.interval) {
            self.append_char(' ');
            self.append(Syntax::Structure, "@");
            self.append(Syntax::Interval, interval);
        }

        if let Some(description) = present(&item.description) {
            self.append_char(' ');
            self.append(Syntax::Structure, "-");
            self.append_char(' ');
            self.append(Syntax::Description, description);
        }

        if let Some(intensity) = &item.intensity {
            self.append_char(' ');
            self.append_intensity(intensity);
        }

        if !item
            .equipment
            .is_empty()
        {
            self.append_char(' ');
            self.append_equipment(&item.equipment);
        }
    }

    fn append_intensity(&mut self, intensity: &Intensity) {
        self.append(Syntax::Structure, "(");
        self.append(Syntax::Intensity, intensity.as_str());
        self.append(Syntax::Structure, ")");
    }

    fn append_equipment(&mut self, equipment: &[Equipment]) {
        self.append(Syntax::Structure, "[");
        for (i, value) in equipment
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Structure, ",");
                self.append_char(' ');
            }
            self.append(Syntax::Equipment, value.as_str());
        }
        self.append(Syntax::Structure, "]");
    }

    #[cfg(test)]
    fn to_string(&self) -> String {
        let mut result = String::new();
        for (_, content) in &self.fragments {
            result.push_str(content);
        }
        result.push_str(&self.buffer);
        result
    }
}

// Optional text fields that are empty would produce notation that doesn't
// parse back, so they are treated as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn items() {
        let mut output = Formatter::new();

        output.append_item(&Item::new(4, 100, Stroke::Free));
        assert_eq!(output.to_string(), "4x100 Free");

        output.reset();
        output.append_item(&Item::new(1, 200, Stroke::Medley));
        assert_eq!(output.to_string(), "1x200 IM");

        output.reset();
        output.append_item(&Item {
            order: 0,
            reps: 4,
            distance: 100,
            stroke: Stroke::Free,
            interval: Some("1:30".to_string()),
            description: Some("descend".to_string()),
            intensity: Some(Intensity::Moderate),
            equipment: vec![Equipment::Fins, Equipment::PullBuoy],
        });
        assert_eq!(
            output.to_string(),
            "4x100 Free @1:30 - descend (moderate) [fins, pull_buoy]"
        );
    }

    #[test]
    fn empty_optional_text_is_omitted() {
        let mut output = Formatter::new();

        let mut item = Item::new(8, 50, Stroke::Kick);
        item.interval = Some("".to_string());
        item.description = Some("  ".to_string());

        output.append_item(&item);
        assert_eq!(output.to_string(), "8x50 Kick");
    }

    #[test]
    fn single_item_rendering() {
        let mut item = Item::new(6, 50, Stroke::Drill);
        item.description = Some("catch-up".to_string());

        assert_eq!(render_item(&item, &Identity), "6x50 Drill - catch-up");
    }

    #[test]
    fn sets() {
        let mut warmup = Set::new("Warm up", 0);
        warmup.push(Item::new(1, 400, Stroke::Choice));

        let mut main = Set::new("Main Set", 1);
        main.push(Item::new(10, 100, Stroke::Free));
        main.push(Item::new(4, 50, Stroke::Fly));

        let mut output = Formatter::new();
        output.format_set(&warmup);
        output.format_set(&main);

        assert_eq!(
            output.to_string(),
            "## WARM UP\n1x400 Choice\n\n## MAIN SET\n10x100 Free\n4x50 Fly\n\n"
        );
    }

    #[test]
    fn fragments_are_tagged() {
        let mut set = Set::new("Cooldown", 0);
        let mut item = Item::new(2, 100, Stroke::Back);
        item.intensity = Some(Intensity::Easy);
        set.push(item);

        let fragments = format_with_renderer(&[set]);
        assert_eq!(
            fragments,
            vec![
                (Syntax::Header, "## COOLDOWN".to_string()),
                (Syntax::Newline, "\n".to_string()),
                (Syntax::Count, "2x100".to_string()),
                (Syntax::Neutral, " ".to_string()),
                (Syntax::Stroke, "Back".to_string()),
                (Syntax::Neutral, " ".to_string()),
                (Syntax::Structure, "(".to_string()),
                (Syntax::Intensity, "easy".to_string()),
                (Syntax::Structure, ")".to_string()),
                (Syntax::Newline, "\n".to_string()),
                (Syntax::Newline, "\n".to_string()),
            ]
        );
    }
}
