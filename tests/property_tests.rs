use proptest::prelude::*;
use serde_json::json;
use stats_printer::format::{Colors, format_size, format_time};
use stats_printer::rules::{apply_preferred_order, join_one_line};
use stats_printer::{Element, RenderOptions, StatsPrinter};

fn field_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

proptest! {
    #[test]
    fn preferred_order_keeps_every_element_once(
        elements in prop::collection::hash_set(field_name(), 0..12),
        preferred in prop::collection::vec(field_name(), 0..8),
    ) {
        let original: Vec<String> = elements.into_iter().collect();
        let preferred: Vec<&str> = preferred.iter().map(String::as_str).collect();
        let mut ordered = original.clone();
        apply_preferred_order(&mut ordered, &preferred);

        let mut sorted_before = original.clone();
        sorted_before.sort();
        let mut sorted_after = ordered.clone();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);

        // Elements nobody asked for keep their relative order at the tail.
        let rest: Vec<&String> = original
            .iter()
            .filter(|element| !preferred.contains(&element.as_str()))
            .collect();
        let tail: Vec<&String> = ordered[ordered.len() - rest.len()..].iter().collect();
        prop_assert_eq!(rest, tail);
    }

    #[test]
    fn preferred_order_is_idempotent(
        elements in prop::collection::hash_set(field_name(), 0..12),
        preferred in prop::collection::vec(field_name(), 0..8),
    ) {
        let preferred: Vec<&str> = preferred.iter().map(String::as_str).collect();
        let mut once: Vec<String> = elements.into_iter().collect();
        apply_preferred_order(&mut once, &preferred);
        let mut twice = once.clone();
        apply_preferred_order(&mut twice, &preferred);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn small_sizes_print_in_bytes(size in 1u32..1000) {
        prop_assert_eq!(format_size(f64::from(size)), format!("{size} bytes"));
    }

    #[test]
    fn sizes_carry_a_known_unit(size in 1.0f64..1e12) {
        let text = format_size(size);
        prop_assert!(
            ["bytes", "KiB", "MiB", "GiB"].iter().any(|unit| text.ends_with(unit)),
            "{}", text
        );
    }

    #[test]
    fn fast_phases_stay_plain(reference in 160.0f64..1e6, share in 0.0f64..0.06) {
        let time = (reference * share).floor();
        let text = format_time(time, Some(reference), false, &Colors::enabled());
        prop_assert!(!text.contains('\u{1b}'), "{}", text);
        prop_assert!(text.ends_with(" ms"));
    }

    #[test]
    fn slow_phases_are_red(reference in 16.0f64..1e6, share in 0.5f64..0.99) {
        let time = reference * share;
        let text = format_time(time, Some(reference), false, &Colors::enabled());
        prop_assert!(text.starts_with("\u{1b}[1m\u{1b}[31m"), "{}", text);
    }

    #[test]
    fn one_line_join_matches_space_join(words in prop::collection::vec("[a-z]{1,5}", 0..8)) {
        let elements: Vec<Element> = words
            .iter()
            .enumerate()
            .map(|(index, word)| Element {
                element: format!("e{index}"),
                content: Some(word.clone()),
            })
            .collect();
        prop_assert_eq!(join_one_line(&elements), words.join(" "));
    }

    #[test]
    fn filtered_module_counts_pluralize(count in 1u32..500) {
        let printer = StatsPrinter::with_default_rules().expect("default rules");
        let output = printer.render(
            &json!({"modules": [], "filteredModules": count}),
            &RenderOptions::default(),
        );
        let noun = if count == 1 { "module" } else { "modules" };
        prop_assert_eq!(output, format!("{count} {noun}"));
    }

    #[test]
    fn rendering_is_deterministic(
        names in prop::collection::vec("[a-z]{1,8}\\.js", 1..6),
        size in 0u32..10_000_000,
    ) {
        let assets: Vec<_> = names
            .iter()
            .map(|name| json!({"name": name, "size": size, "emitted": true}))
            .collect();
        let stats = json!({"assets": assets, "errorsCount": 0, "warningsCount": 0});
        let printer = StatsPrinter::with_default_rules().expect("default rules");
        let first = printer.render(&stats, &RenderOptions::default());
        let second = printer.render(&stats, &RenderOptions::default());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.lines().count(), names.len() + 1);
        prop_assert!(first.ends_with("Rspack compiled successfully"));
    }
}
