//! Tests for optional-value combinators.

use std::cell::Cell;
use std::path::PathBuf;

use super::optional::*;

mod construction {
    use super::*;

    #[test]
    fn some_wraps_value() {
        assert_eq!(some(5), Some(5));
    }

    #[test]
    fn none_is_absent() {
        assert_eq!(none::<i32>(), None);
    }

    #[test]
    fn present_keeps_meaningful_strings() {
        assert_eq!(present("config.json"), Some("config.json"));
        assert_eq!(present(String::from("a")), Some(String::from("a")));
    }

    #[test]
    fn present_collapses_blank_strings() {
        assert_eq!(present(""), None);
        assert_eq!(present("  \t"), None);
        assert_eq!(present(String::new()), None);
    }

    #[test]
    fn present_collapses_empty_path() {
        assert_eq!(present(PathBuf::new()), None);
        assert_eq!(present(PathBuf::from("a")), Some(PathBuf::from("a")));
    }

    #[test]
    fn present_collapses_nested_none() {
        assert_eq!(present(None::<i32>), None);
        assert_eq!(present(Some(1)), Some(Some(1)));
    }
}

mod value_or {
    use super::*;

    #[test]
    fn present_value_wins() {
        assert_eq!(some("s").value_or("x"), "s");
    }

    #[test]
    fn absent_falls_back_to_default() {
        assert_eq!(none::<&str>().value_or("x"), "x");
    }
}

mod laziness {
    use super::*;

    #[test]
    fn map_on_absent_never_calls_function() {
        let called = Cell::new(false);
        let result = none::<i32>().map(|v| {
            called.set(true);
            v + 1
        });

        assert_eq!(result, None);
        assert!(!called.get());
    }

    #[test]
    fn bind_on_absent_never_calls_function() {
        let called = Cell::new(false);
        let result = none::<i32>().bind(|v| {
            called.set(true);
            Some(v)
        });

        assert_eq!(result, None);
        assert!(!called.get());
    }

    #[test]
    fn filter_on_absent_never_calls_predicate() {
        let called = Cell::new(false);
        let result = none::<i32>().filter(|_| {
            called.set(true);
            true
        });

        assert_eq!(result, None);
        assert!(!called.get());
    }
}

mod combinators {
    use super::*;

    #[test]
    fn map_transforms_present_value() {
        assert_eq!(some(2).map(|v| v * 10), Some(20));
    }

    #[test]
    fn bind_chains_optional_functions() {
        let half = |v: i32| if v % 2 == 0 { Some(v / 2) } else { None };

        assert_eq!(some(4).bind(half), Some(2));
        assert_eq!(some(3).bind(half), None);
    }

    #[test]
    fn filter_drops_values_failing_predicate() {
        assert_eq!(some(4).filter(|v| *v > 3), Some(4));
        assert_eq!(some(2).filter(|v| *v > 3), None);
    }

    #[test]
    fn or_else_uses_fallback_only_when_absent() {
        assert_eq!(some(1).or_else(|| Some(2)), Some(1));
        assert_eq!(none().or_else(|| Some(2)), Some(2));
    }

    #[test]
    fn match_with_selects_branch() {
        assert_eq!(some(3).match_with(|v| v.to_string(), || "none".into()), "3");
        assert_eq!(
            none::<i32>().match_with(|v| v.to_string(), || "none".into()),
            "none"
        );
    }

    #[test]
    fn if_some_runs_only_for_present_value() {
        let seen = Cell::new(0);
        let kept = some(7).if_some(|v| seen.set(*v));
        let _ = none::<i32>().if_some(|_| seen.set(-1));

        assert_eq!(kept, Some(7));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn if_none_runs_only_for_absent_value() {
        let count = Cell::new(0);
        let _ = none::<i32>().if_none(|| count.set(count.get() + 1));
        let _ = some(1).if_none(|| count.set(count.get() + 1));

        assert_eq!(count.get(), 1);
    }
}

mod flattening {
    use super::*;

    #[test]
    fn nested_present_collapses_to_present() {
        assert_eq!(flatten(some(some("v"))), Some("v"));
    }

    #[test]
    fn present_absent_collapses_to_absent() {
        assert_eq!(flatten(some(none::<i32>())), None);
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(flatten(none::<Option<i32>>()), None);
    }
}
