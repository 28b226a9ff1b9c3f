#[cfg(test)]
mod verify {
    use std::path::Path;

    use lanes::formatting::to_text;
    use lanes::language::*;
    use lanes::parsing::{self, ParsingError};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn full_practice() {
        let content = trim(
            r#"
## Warmup
400 Free
4x50 Kick @1:10 [kickboard]

## Main Set
8x100 Free @1:30 - descend 1-4 (fast) [paddles, pull_buoy]
            "#,
        );

        let sets = parsing::parse(content).unwrap();
        assert_eq!(
            sets,
            vec![
                Set {
                    name: "Warmup".to_string(),
                    kind: SetKind::Warmup,
                    order: 0,
                    items: vec![
                        Item {
                            order: 0,
                            reps: 1,
                            distance: 400,
                            stroke: Stroke::Free,
                            interval: None,
                            description: None,
                            intensity: None,
                            equipment: vec![],
                        },
                        Item {
                            order: 1,
                            reps: 4,
                            distance: 50,
                            stroke: Stroke::Kick,
                            interval: Some("1:10".to_string()),
                            description: None,
                            intensity: None,
                            equipment: vec![Equipment::Kickboard],
                        },
                    ],
                },
                Set {
                    name: "Main Set".to_string(),
                    kind: SetKind::MainSet,
                    order: 1,
                    items: vec![Item {
                        order: 0,
                        reps: 8,
                        distance: 100,
                        stroke: Stroke::Free,
                        interval: Some("1:30".to_string()),
                        description: Some("descend 1-4".to_string()),
                        intensity: Some(Intensity::Fast),
                        equipment: vec![Equipment::Paddles, Equipment::PullBuoy],
                    }],
                },
            ]
        );
    }

    #[test]
    fn synonym_equivalence() {
        let free = parsing::parse("1x100 Free").unwrap();
        let freestyle = parsing::parse("1x100 freestyle").unwrap();
        let fr = parsing::parse("1x100 FR").unwrap();

        assert_eq!(free[0].items[0].stroke, Stroke::Free);
        assert_eq!(free, freestyle);
        assert_eq!(free, fr);
    }

    #[test]
    fn unknown_equipment_returns_no_sets() {
        let result = parsing::parse("4x100 Free [floaties]");
        match result {
            Ok(_) => panic!("Expected unknown equipment to be rejected"),
            Err(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].line(), 1);
                assert!(errors[0]
                    .to_string()
                    .contains("floaties"));
            }
        }
    }

    #[test]
    fn valid_lines_between_invalid_ones() {
        let result = parsing::parse("4x100 Doggy\n4x100 Free\n4x100 Free (hard)");
        assert_eq!(
            result,
            Err(vec![
                ParsingError::UnknownStroke(1, "Doggy".to_string()),
                ParsingError::UnknownIntensity(3, "hard".to_string()),
            ])
        );
    }

    #[test]
    fn round_trip_is_exact() {
        let content = trim(
            r#"
## Warm Up
400 freestyle
4x50 kick @1:10 [kickboard, fins, kickboard]
## preset
8x25 butterfly @:40 - fast turns (race pace)
## Main
10x100 fr @1:30 - hold 1:10s (moderate) [paddles]
200 individual medley
            "#,
        );

        let first = parsing::parse(content).unwrap();
        let text = to_text(&first);
        let second = parsing::parse(&text).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first
            .iter()
            .zip(second.iter())
        {
            assert_eq!(a.name.to_uppercase(), b.name);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.order, b.order);
            assert_eq!(a.items, b.items);
        }

        // and once canonical, formatting again changes nothing
        assert_eq!(to_text(&second), text);
    }

    #[test]
    fn delimiters_in_descriptions_do_not_survive_formatting() {
        let sets = parsing::parse("4x100 Free (fast) - a (b)").unwrap();
        let item = &sets[0].items[0];
        assert_eq!(item.description, Some("a (b)".to_string()));
        assert_eq!(item.intensity, Some(Intensity::Fast));

        let text = to_text(&sets);
        assert_eq!(text, "## SET\n4x100 Free - a (b) (fast)\n\n");
        assert_eq!(
            parsing::parse(&text),
            Err(vec![ParsingError::UnknownIntensity(2, "b".to_string())])
        );

        let sets = parsing::parse("4x100 Free [fins] - a [b").unwrap();
        assert_eq!(sets[0].items[0].description, Some("a [b".to_string()));

        let text = to_text(&sets);
        assert_eq!(text, "## SET\n4x100 Free - a [b [fins]\n\n");
        assert!(parsing::parse(&text).is_err());
    }

    #[test]
    fn load_then_parse() {
        let content = parsing::load(Path::new("tests/samples/monday.swim")).unwrap();
        let sets = parsing::parse(&content).unwrap();

        let kinds: Vec<SetKind> = sets
            .iter()
            .map(|set| set.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SetKind::Warmup,
                SetKind::PreSet,
                SetKind::MainSet,
                SetKind::Cooldown
            ]
        );
        assert_eq!(total_distance(&sets), 2900);
    }

    #[test]
    fn header_only_sets_are_dropped() {
        let content = parsing::load(Path::new("tests/samples/empty-headers.swim")).unwrap();
        let sets = parsing::parse(&content).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "Warmup");
        assert_eq!(sets[0].order, 0);
    }
}
