//! Property-based tests for rust_pattern_logger using proptest

use proptest::prelude::*;
use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{compile, level_name, UNKNOWN_LEVEL};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

prop_compose! {
    fn any_event()(
        line in any::<u32>(),
        elapsed in any::<u64>(),
        thread_id in any::<u64>(),
        fiber_id in any::<u64>(),
        time in 0i64..4_000_000_000,
        message in ".*",
    ) -> LogEvent {
        LogEvent::builder("prop.rs", line)
            .elapsed(elapsed)
            .thread_id(thread_id)
            .fiber_id(fiber_id)
            .time(time)
            .message(message)
            .build()
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(level.to_string(), level.to_str());
    }

    /// Test that LogLevel ordering is consistent with ordinals
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1.ordinal();
        let val2 = level2.ordinal();

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Test that every ordinal maps to a name and only 1..=5 are known
    #[test]
    fn test_level_name_total(ordinal in any::<u8>()) {
        let name = level_name(ordinal);
        match LogLevel::from_ordinal(ordinal) {
            Some(level) => prop_assert_eq!(name, level.to_str()),
            None => prop_assert_eq!(name, UNKNOWN_LEVEL),
        }
    }
}

// ============================================================================
// Pattern Tests
// ============================================================================

proptest! {
    /// A pattern without '%' renders verbatim regardless of input
    #[test]
    fn test_literal_pattern_verbatim(
        pattern in "[^%]*",
        name in "[a-z]{0,12}",
        level in any_level(),
        event in any_event(),
    ) {
        let formatter = Formatter::new(pattern.clone());
        prop_assert!(!formatter.has_errors());
        prop_assert_eq!(formatter.render(&name, level, &event), pattern);
    }

    /// '%%' always renders a single '%'
    #[test]
    fn test_escaped_percent(prefix in "[^%]*", suffix in "[^%]*", event in any_event()) {
        let formatter = Formatter::new(format!("{prefix}%%{suffix}"));
        prop_assert_eq!(
            formatter.render("x", LogLevel::Info, &event),
            format!("{prefix}%{suffix}")
        );
    }

    /// The message is inserted without reinterpretation
    #[test]
    fn test_message_verbatim(event in any_event()) {
        let formatter = Formatter::new("[%m]");
        let rendered = formatter.render("x", LogLevel::Info, &event);
        prop_assert_eq!(rendered, format!("[{}]", event.message()));
    }

    /// Numeric fields render as plain decimal
    #[test]
    fn test_numeric_fields(event in any_event()) {
        let formatter = Formatter::new("%r %t %F %l");
        let expected = format!(
            "{} {} {} {}",
            event.elapsed(),
            event.thread_id(),
            event.fiber_id(),
            event.line()
        );
        prop_assert_eq!(formatter.render("x", LogLevel::Info, &event), expected);
    }

    /// Compiling and rendering arbitrary patterns never panics and is deterministic
    #[test]
    fn test_arbitrary_pattern_deterministic(
        pattern in "[%a-zA-Z{}:\\- ]{0,40}",
        level in any_level(),
        event in any_event(),
    ) {
        let formatter = Formatter::new(pattern.clone());
        let first = formatter.render("prop", level, &event);
        let second = formatter.render("prop", level, &event);
        prop_assert_eq!(&first, &second);

        // Recompiling yields the same items
        prop_assert_eq!(compile(&pattern).items.len(), formatter.items().len());
    }

    /// Every compile error surfaces as an error item
    #[test]
    fn test_errors_have_items(pattern in "[%a-zA-Z{}]{0,30}") {
        let compiled = compile(&pattern);
        let error_items = compiled.items.iter().filter(|item| item.is_error()).count();
        prop_assert_eq!(error_items, compiled.errors.len());
    }
}
