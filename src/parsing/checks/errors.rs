use super::*;

/// Helper function to check if parsing produces the expected error
fn expect_error(content: &str, expected: ParsingError) {
    let result = parse_with_recovery(content);
    match result {
        Ok(_) => panic!(
            "Expected parsing to fail, but it succeeded for input: {}",
            content
        ),
        Err(errors) => {
            // Check if any error exactly matches the expected error
            let found_expected = errors.contains(&expected);

            if !found_expected {
                panic!(
                    "Expected error {:?} but got: {:?} for input '{}'",
                    expected, errors, content
                );
            }
        }
    }
}

#[test]
fn unknown_equipment() {
    expect_error(
        "4x100 Free [floaties]",
        ParsingError::UnknownEquipment(1, vec!["floaties".to_string()]),
    );
}

#[test]
fn unknown_equipment_lists_all_bad_tokens() {
    expect_error(
        r#"
## Main
4x100 Free [fins, noodle, paddles, wings]
        "#
        .trim_ascii(),
        ParsingError::UnknownEquipment(2, vec!["noodle".to_string(), "wings".to_string()]),
    );
}

#[test]
fn unknown_intensity() {
    expect_error(
        "4x100 Free (hard)",
        ParsingError::UnknownIntensity(1, "hard".to_string()),
    );
}

#[test]
fn unknown_stroke() {
    expect_error(
        "4x100 Doggy Paddle @1:30",
        ParsingError::UnknownStroke(1, "Doggy Paddle".to_string()),
    );
}

#[test]
fn dryland_work_is_not_a_stroke() {
    expect_error(
        r#"
## Dryland Circuit
3x10 Pushups
        "#
        .trim_ascii(),
        ParsingError::UnknownStroke(2, "Pushups".to_string()),
    );
}

#[test]
fn unrecognized_item() {
    expect_error(
        "Free four hundred",
        ParsingError::UnrecognizedItem(1, "Free four hundred".to_string()),
    );
}

#[test]
fn unrecognized_item_reports_what_remained() {
    // the interval and description have been taken off by the time the
    // counts are looked for
    expect_error(
        "Free @1:30 - easy",
        ParsingError::UnrecognizedItem(1, "Free".to_string()),
    );
}

#[test]
fn single_hash_is_not_a_header() {
    expect_error(
        "# Warmup",
        ParsingError::UnrecognizedItem(1, "# Warmup".to_string()),
    );
}

#[test]
fn zero_repetitions() {
    expect_error(
        "0x100 Free",
        ParsingError::InvalidCount(1, "0x100 Free".to_string()),
    );
}

#[test]
fn equipment_is_checked_before_stroke() {
    // a line with several problems reports only the first one found
    let result = parse_with_recovery("4x100 Doggy (hard) [floaties]");
    assert_eq!(
        result,
        Err(vec![ParsingError::UnknownEquipment(
            1,
            vec!["floaties".to_string()]
        )])
    );
}

#[test]
fn messages() {
    assert_eq!(
        ParsingError::UnknownEquipment(1, vec!["floaties".to_string()]).message(),
        "Unknown equipment: floaties. Use: fins, paddles, snorkel, kickboard, pull_buoy, band"
    );
    assert_eq!(
        ParsingError::UnknownIntensity(1, "hard".to_string()).message(),
        "Unknown intensity: hard. Use: easy, moderate, fast, sprint, race_pace"
    );
    assert_eq!(
        ParsingError::UnknownStroke(1, "Doggy".to_string()).message(),
        "Unknown stroke: \"Doggy\". Use: free, back, breast, fly, IM, choice, drill, kick"
    );
    assert_eq!(
        ParsingError::UnrecognizedItem(1, "Free".to_string()).message(),
        "Could not parse: \"Free\". Format: \"4x100 Free @1:30\""
    );
    assert_eq!(
        ParsingError::UnknownStroke(7, "Doggy".to_string()).to_string(),
        "line 7: Unknown stroke: \"Doggy\". Use: free, back, breast, fly, IM, choice, drill, kick"
    );
}

#[test]
fn errors_arrive_in_line_order() {
    let content = r#"
## Warmup
400 Swim
200 Free

## Main
8x100 Free (hard)
4x50 Fly [fins]
4x50 Back [flippers]
    "#;

    let result = parse_with_recovery(content);
    let errors = match result {
        Ok(_) => panic!("Expected errors"),
        Err(errors) => errors,
    };

    let lines: Vec<usize> = errors
        .iter()
        .map(|error| error.line())
        .collect();
    assert_eq!(lines, vec![3, 7, 9]);
}
