#[cfg(test)]
mod verify {
    use lanes::formatting::*;
    use lanes::language::*;
    use lanes::rendering::Terminal;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail
    }

    fn combine(fragments: Vec<(Syntax, String)>) -> String {
        let mut result = String::new();
        for fragment in fragments {
            result.push_str(&fragment.1);
        }
        result
    }

    fn practice() -> Vec<Set> {
        let mut warmup = Set::new("Warmup", 0);
        warmup.push(Item::new(1, 400, Stroke::Free));

        let mut item = Item::new(4, 50, Stroke::Kick);
        item.interval = Some("1:10".to_string());
        item.equipment = vec![Equipment::Kickboard];
        warmup.push(item);

        let mut main = Set::new("Main Set", 1);
        let mut item = Item::new(8, 100, Stroke::Medley);
        item.interval = Some("1:45".to_string());
        item.description = Some("odds fly, evens choice".to_string());
        item.intensity = Some(Intensity::RacePace);
        main.push(item);

        vec![warmup, main]
    }

    #[test]
    fn sets_and_items() {
        let result = format_with_renderer(&practice());
        assert_eq!(
            combine(result),
            trim(
                r#"
## WARMUP
1x400 Free
4x50 Kick @1:10 [kickboard]

## MAIN SET
8x100 IM @1:45 - odds fly, evens choice (race_pace)

                "#
            )
        );
    }

    #[test]
    fn plain_text_matches_fragments() {
        let sets = practice();
        assert_eq!(to_text(&sets), combine(format_with_renderer(&sets)));
    }

    #[test]
    fn stroke_spelling() {
        let spelled: Vec<String> = Stroke::ALL
            .iter()
            .map(|stroke| render_item(&Item::new(1, 25, *stroke), &Identity))
            .collect();

        assert_eq!(
            spelled,
            vec![
                "1x25 Free",
                "1x25 Back",
                "1x25 Breast",
                "1x25 Fly",
                "1x25 IM",
                "1x25 Choice",
                "1x25 Drill",
                "1x25 Kick",
            ]
        );
    }

    #[test]
    fn terminal_output_keeps_text() {
        let sets = practice();
        let coloured = render(&Terminal, &sets);

        assert_ne!(coloured, to_text(&sets));
        assert!(coloured.contains("Kick"));
        assert!(coloured.contains("kickboard"));
    }
}
