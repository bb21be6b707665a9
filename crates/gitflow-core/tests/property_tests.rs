use gitflow_core::validate::RESERVED_BRANCH_CHARS;
use gitflow_core::{validate_branch_name, validate_commit_message};
use proptest::prelude::*;

fn has_reserved(s: &str) -> bool {
    s.chars().any(|c| RESERVED_BRANCH_CHARS.contains(&c))
}

proptest! {
    #[test]
    fn test_branch_name_rule(s in "\\PC*") {
        // Rejected exactly when empty, slash-bounded or carrying a reserved character
        let expected = !s.is_empty() && !s.starts_with('/') && !s.ends_with('/') && !has_reserved(&s);
        prop_assert_eq!(validate_branch_name(&s), expected);
    }

    #[test]
    fn test_reserved_character_always_rejected(
        prefix in "[a-z/]{0,8}",
        reserved in prop::sample::select(RESERVED_BRANCH_CHARS.to_vec()),
        suffix in "[a-z]{0,8}",
    ) {
        let name = format!("{prefix}{reserved}{suffix}");
        prop_assert!(!validate_branch_name(&name));
    }

    #[test]
    fn test_hierarchical_names_accepted(parts in prop::collection::vec("[a-z0-9._-]{1,8}", 1..5)) {
        let name = parts.join("/");
        prop_assert!(validate_branch_name(&name));
    }

    #[test]
    fn test_whitespace_only_messages_rejected(s in "[ \\t\\r\\n]*") {
        prop_assert!(!validate_commit_message(&s));
    }

    #[test]
    fn test_messages_with_visible_text_accepted(
        pad in "[ \\t]{0,4}",
        text in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,30}",
    ) {
        let message = format!("{pad}{text}{pad}");
        prop_assert!(validate_commit_message(&message));
    }
}
