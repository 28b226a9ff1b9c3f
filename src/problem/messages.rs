use crate::problem::Present;
use lanes::{
    formatting::{Render, Syntax},
    language::*,
    parsing::ParsingError,
};

/// Generate problem and detail messages for parsing errors, using example
/// items rendered the same way the formatter would write them.
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::UnknownEquipment(_, tokens) => {
            let mut example = Item::new(8, 50, Stroke::Kick);
            example.equipment = vec![Equipment::Fins, Equipment::Kickboard];

            (
                format!("Unknown equipment '{}'", tokens.join("', '")),
                format!(
                    r#"
Equipment goes in square brackets at the end of an item, separated by commas.
Only the following are recognized:

    {}

For example:

    {}
                    "#,
                    vocabulary(&Equipment::ALL, Syntax::Equipment, renderer),
                    example.present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnknownIntensity(_, raw) => {
            let mut example = Item::new(4, 100, Stroke::Free);
            example.interval = Some("1:20".to_string());
            example.intensity = Some(Intensity::RacePace);

            (
                format!("Unknown intensity '{}'", raw),
                format!(
                    r#"
The effort for an item goes in parenthesis and must be one of:

    {}

Spaces can be used in place of underscores, so "race pace" is the same as
race_pace. For example:

    {}
                    "#,
                    vocabulary(&Intensity::ALL, Syntax::Intensity, renderer),
                    example.present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnknownStroke(_, raw) => {
            let examples = vec![
                Item::new(4, 100, Stroke::Free),
                Item::new(1, 200, Stroke::Medley),
                Item::new(6, 50, Stroke::Choice),
            ];

            let problem = if raw.is_empty() {
                "Missing stroke".to_string()
            } else {
                format!("Unknown stroke '{}'", raw)
            };

            (
                problem,
                format!(
                    r#"
Every item needs a stroke after its distance. The recognized strokes are:

    {}

Common abbreviations like "fr" for free or "bk" for back are accepted too.
Some examples:

    {}
    {}
    {}
                    "#,
                    vocabulary(&Stroke::ALL, Syntax::Stroke, renderer),
                    examples[0].present(renderer),
                    examples[1].present(renderer),
                    examples[2].present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnrecognizedItem(_, _) => {
            let mut full = Item::new(4, 100, Stroke::Free);
            full.interval = Some("1:30".to_string());
            full.description = Some("descend 1-4".to_string());
            full.intensity = Some(Intensity::Moderate);
            full.equipment = vec![Equipment::Fins];

            let single = Item::new(1, 200, Stroke::Medley);

            (
                "Unrecognized item".to_string(),
                format!(
                    r#"
Items are written as repetitions and distance followed by a stroke, then
optionally an interval, a description, an intensity, and equipment:

    {}

A single repetition can leave off the count, so "200 IM" is the same as

    {}

Set names are written on their own line starting with ## markers.
                    "#,
                    full.present(renderer),
                    single.present(renderer)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::InvalidCount(_, _) => (
            "Invalid count".to_string(),
            r#"
The number of repetitions and the distance of each must both be whole numbers
greater than zero.
            "#
            .trim_ascii()
            .to_string(),
        ),
    }
}

fn vocabulary<T: std::fmt::Display>(values: &[T], syntax: Syntax, renderer: &dyn Render) -> String {
    values
        .iter()
        .map(|value| renderer.style(syntax, &value.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}
