use super::*;

fn item(reps: u32, distance: u32, stroke: Stroke) -> Item {
    Item::new(reps, distance, stroke)
}

#[test]
fn set_headers() {
    assert!(is_set_header("## WARMUP"));
    assert!(is_set_header("##Main"));
    assert!(!is_set_header("# Title"));
    assert!(!is_set_header("4x100 Free"));

    assert_eq!(read_set_name("## WARMUP"), "WARMUP");
    assert_eq!(read_set_name("##   Main Set  "), "Main Set");
    assert_eq!(read_set_name("##"), "");
}

#[test]
fn taking_matches() {
    let re = regex!(r"\[([^\]]*)\]");

    let result = take_match(re, "4x100 Free [fins] @1:30");
    assert_eq!(
        result,
        Some(("fins".to_string(), "4x100 Free @1:30".to_string()))
    );

    let result = take_match(re, "4x100 Free[fins]");
    assert_eq!(result, Some(("fins".to_string(), "4x100 Free".to_string())));

    let result = take_match(re, "4x100 Free");
    assert_eq!(result, None);
}

#[test]
fn reading_equipment() {
    let mut input = Parser::new();
    input.initialize("");
    input.line = 1;

    let result = input.read_equipment("4x100 Free [fins, Paddles]");
    assert_eq!(
        result,
        Ok((
            vec![Equipment::Fins, Equipment::Paddles],
            "4x100 Free".to_string()
        ))
    );

    let result = input.read_equipment("4x100 Free");
    assert_eq!(result, Ok((vec![], "4x100 Free".to_string())));

    let result = input.read_equipment("4x100 Free [fins,]");
    assert_eq!(result, Ok((vec![Equipment::Fins], "4x100 Free".to_string())));

    // duplicates are kept, in the order written
    let result = input.read_equipment("4x100 Free [fins, paddles, fins]");
    assert_eq!(
        result,
        Ok((
            vec![Equipment::Fins, Equipment::Paddles, Equipment::Fins],
            "4x100 Free".to_string()
        ))
    );

    let result = input.read_equipment("4x100 Free [fins, floaties, noodle]");
    assert_eq!(
        result,
        Err(ParsingError::UnknownEquipment(
            1,
            vec!["floaties".to_string(), "noodle".to_string()]
        ))
    );
}

#[test]
fn reading_intensity() {
    let mut input = Parser::new();
    input.initialize("");
    input.line = 3;

    let result = input.read_intensity("4x100 Free (race pace) @1:30");
    assert_eq!(
        result,
        Ok((Some(Intensity::RacePace), "4x100 Free @1:30".to_string()))
    );

    let result = input.read_intensity("4x100 Free");
    assert_eq!(result, Ok((None, "4x100 Free".to_string())));

    let result = input.read_intensity("4x100 Free ( hard )");
    assert_eq!(
        result,
        Err(ParsingError::UnknownIntensity(3, "hard".to_string()))
    );
}

#[test]
fn reading_descriptions() {
    assert_eq!(
        read_description("4x100 Free @1:30 - descend 1-4"),
        (
            Some("descend 1-4".to_string()),
            "4x100 Free @1:30".to_string()
        )
    );
    assert_eq!(
        read_description("4x100 Free - odds fast - evens easy"),
        (
            Some("odds fast - evens easy".to_string()),
            "4x100 Free".to_string()
        )
    );
    assert_eq!(
        read_description("4x100 Free-ish"),
        (None, "4x100 Free-ish".to_string())
    );
}

#[test]
fn reading_intervals() {
    assert_eq!(
        read_interval("4x100 Free @1:30"),
        (Some("1:30".to_string()), "4x100 Free".to_string())
    );
    assert_eq!(
        read_interval("10x50 Kick @:45"),
        (Some(":45".to_string()), "10x50 Kick".to_string())
    );
    assert_eq!(
        read_interval("200 IM"),
        (None, "200 IM".to_string())
    );
}

#[test]
fn reading_counts() {
    let mut input = Parser::new();
    input.initialize("");
    input.line = 2;

    assert_eq!(input.read_counts("4x100 Free"), Ok((4, 100, "Free")));
    assert_eq!(input.read_counts("4 x 100 Free"), Ok((4, 100, "Free")));
    assert_eq!(input.read_counts("4X100 Free"), Ok((4, 100, "Free")));
    assert_eq!(input.read_counts("4×100 Free"), Ok((4, 100, "Free")));
    assert_eq!(input.read_counts("200 IM"), Ok((1, 200, "IM")));
    assert_eq!(
        input.read_counts("8x25 individual medley"),
        Ok((8, 25, "individual medley"))
    );

    assert_eq!(
        input.read_counts("Free 4x100"),
        Err(ParsingError::UnrecognizedItem(2, "Free 4x100".to_string()))
    );
    assert_eq!(
        input.read_counts("0x100 Free"),
        Err(ParsingError::InvalidCount(2, "0x100 Free".to_string()))
    );
    assert_eq!(
        input.read_counts("4x0 Free"),
        Err(ParsingError::InvalidCount(2, "4x0 Free".to_string()))
    );
    assert_eq!(
        input.read_counts("99999999999x100 Free"),
        Err(ParsingError::InvalidCount(
            2,
            "99999999999x100 Free".to_string()
        ))
    );
}

#[test]
fn reading_items() {
    let mut input = Parser::new();
    input.initialize("");
    input.line = 1;

    let result = input.read_item("4x100 Free @1:30 - descend (moderate) [fins]");
    assert_eq!(
        result,
        Ok(Item {
            order: 0,
            reps: 4,
            distance: 100,
            stroke: Stroke::Free,
            interval: Some("1:30".to_string()),
            description: Some("descend".to_string()),
            intensity: Some(Intensity::Moderate),
            equipment: vec![Equipment::Fins],
        })
    );

    // fields can come in other orders
    let result = input.read_item("4x100 free [fins] (moderate) @1:30 - descend");
    assert_eq!(
        result,
        Ok(Item {
            order: 0,
            reps: 4,
            distance: 100,
            stroke: Stroke::Free,
            interval: Some("1:30".to_string()),
            description: Some("descend".to_string()),
            intensity: Some(Intensity::Moderate),
            equipment: vec![Equipment::Fins],
        })
    );

    let result = input.read_item("200 IM");
    assert_eq!(result, Ok(item(1, 200, Stroke::Medley)));

    let result = input.read_item("4x100 Doggy");
    assert_eq!(
        result,
        Err(ParsingError::UnknownStroke(1, "Doggy".to_string()))
    );

    let result = input.read_item("4x100");
    assert_eq!(result, Err(ParsingError::UnknownStroke(1, "".to_string())));
}

#[test]
fn stroke_synonyms_parse_the_same() {
    for text in ["1x100 Free", "1x100 freestyle", "1x100 FR"] {
        let sets = parse_with_recovery(text).unwrap();
        assert_eq!(sets[0].items[0].stroke, Stroke::Free, "{}", text);
    }
}

#[test]
fn default_set_when_headerless() {
    let sets = parse_with_recovery("4x100 Free @1:30").unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "Set");
    assert_eq!(sets[0].kind, SetKind::MainSet);
    assert_eq!(sets[0].order, 0);
    assert_eq!(sets[0].items.len(), 1);
}

#[test]
fn set_kind_inference() {
    let sets = parse_with_recovery("## COOLDOWN\n4x100 Choice").unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "COOLDOWN");
    assert_eq!(sets[0].kind, SetKind::Cooldown);
    assert_eq!(sets[0].items[0].stroke, Stroke::Choice);
}

#[test]
fn reps_default_to_one() {
    let sets = parse_with_recovery("200 IM").unwrap();
    let item = &sets[0].items[0];

    assert_eq!(item.reps, 1);
    assert_eq!(item.distance, 200);
    assert_eq!(item.stroke, Stroke::Medley);
}

#[test]
fn empty_set_dropped() {
    let sets = parse_with_recovery("## WARMUP\n## MAIN SET\n4x100 Free").unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "MAIN SET");
    assert_eq!(sets[0].order, 0);

    // trailing header with nothing under it
    let sets = parse_with_recovery("## MAIN SET\n4x100 Free\n## COOLDOWN\n").unwrap();
    assert_eq!(sets.len(), 1);

    // nothing at all
    let sets = parse_with_recovery("").unwrap();
    assert!(sets.is_empty());
    let sets = parse_with_recovery("\n   \n\t\n").unwrap();
    assert!(sets.is_empty());
}

#[test]
fn ordering_is_dense() {
    let content = r#"
## Warm Up
400 Free
4x50 Kick [kickboard]

## Pre-Set
8x25 Fly @:40

## Main Set
10x100 Free @1:30 (fast)
4x50 Back @1:00
200 Choice (easy)
    "#;

    let sets = parse_with_recovery(content).unwrap();
    assert_eq!(sets.len(), 3);

    for (i, set) in sets
        .iter()
        .enumerate()
    {
        assert_eq!(set.order, i);
        for (j, item) in set
            .items
            .iter()
            .enumerate()
        {
            assert_eq!(item.order, j);
        }
    }

    assert_eq!(sets[0].kind, SetKind::Warmup);
    assert_eq!(sets[1].kind, SetKind::PreSet);
    assert_eq!(sets[2].kind, SetKind::MainSet);
    assert_eq!(sets[2].items.len(), 3);
}

#[test]
fn implicit_set_then_header() {
    let sets = parse_with_recovery("400 Free\n## Main\n4x100 Free").unwrap();

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].name, "Set");
    assert_eq!(sets[1].name, "Main");
    assert_eq!(sets[1].order, 1);
}

#[test]
fn multiple_error_collection() {
    let content = "4x100 Doggy\n4x100 Free\n4x100 Free [floaties]";

    let result = parse_with_recovery(content);
    match result {
        Ok(_) => panic!("Expected errors for invalid content"),
        Err(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].line(), 1);
            assert_eq!(errors[1].line(), 3);
        }
    }
}

#[test]
fn unknown_equipment_fails_whole_parse() {
    let result = parse_with_recovery("4x100 Free [floaties]");
    match result {
        Ok(_) => panic!("Expected unknown equipment to fail"),
        Err(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].line(), 1);
            assert!(errors[0]
                .message()
                .contains("floaties"));
        }
    }
}

#[test]
fn line_numbers_count_blank_lines() {
    let result = parse_with_recovery("## Main\n\n4x100 Free\n\nnonsense");
    assert_eq!(
        result,
        Err(vec![ParsingError::UnrecognizedItem(
            5,
            "nonsense".to_string()
        )])
    );
}

#[test]
fn byte_order_mark_is_ignored() {
    let result = parse_with_recovery("\u{feff}## WARMUP\n400 Free");
    let sets = result.unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "WARMUP");
    assert_eq!(sets[0].kind, SetKind::Warmup);
    assert_eq!(sets[0].items, vec![item(1, 400, Stroke::Free)]);
}
