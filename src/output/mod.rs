//! Output generation for the lanes CLI application

use lanes::language::{total_distance, Set};
use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

static TEMPLATE: &'static str = r#"{{ for set in sets }}{set.name} ({set.kind}): {set.items} item{{ if set.plural }}s{{ endif }}, {set.distance}
{{ endfor }}Total: {total}
"#;

#[derive(Serialize)]
struct Context {
    sets: Vec<Entry>,
    total: u64,
}

#[derive(Serialize)]
struct Entry {
    name: String,
    kind: String,
    items: usize,
    plural: bool,
    distance: u64,
}

/// Per-set and overall distance for a practice, one line per set.
pub fn summary(sets: &[Set]) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    let context = Context {
        sets: sets
            .iter()
            .map(|set| Entry {
                name: set
                    .name
                    .clone(),
                kind: set
                    .kind
                    .to_string(),
                items: set
                    .items
                    .len(),
                plural: set
                    .items
                    .len()
                    != 1,
                distance: set.total_distance(),
            })
            .collect(),
        total: total_distance(sets),
    };

    debug!("Summarizing {} sets", context.sets.len());

    tt.render("summary", &context)
}
