//! Property-based tests for inputguard-validator.

use inputguard_validator::prelude::*;
use inputguard_validator::rules;
use proptest::prelude::*;

// ============================================================================
// TOTALITY AND IDEMPOTENCY: every rule answers, and answers the same twice
// ============================================================================

proptest! {
    #[test]
    fn every_rule_is_total_and_idempotent(s in "\\PC{0,64}") {
        for rule in Rule::ALL {
            let first = rule.check(&s, &[]);
            let second = rule.check(&s, &[]);
            prop_assert_eq!(first, second, "rule {} flipped on {:?}", rule, s);
        }
    }

    #[test]
    fn arbitrary_parameters_never_panic(s in ".{0,32}", param in ".{0,8}") {
        for rule in Rule::ALL {
            let _ = rule.check(&s, &[param.as_str()]);
        }
    }

    #[test]
    fn input_is_not_mutated(s in ".{0,32}") {
        let before = s.clone();
        for rule in Rule::ALL {
            let _ = rule.check(&s, &[]);
        }
        prop_assert_eq!(s, before);
    }
}

// ============================================================================
// LAYER AGREEMENT: flat predicate == typed validator == registry
// ============================================================================

proptest! {
    #[test]
    fn tag_layers_agree(s in "[a-zA-Z-]{0,40}") {
        let flat = rules::is_tag(&s);
        prop_assert_eq!(flat, tag().is_valid(&s));
        prop_assert_eq!(flat, Rule::Tag.check(&s, &[]));
    }

    #[test]
    fn password_layers_agree(s in "\\PC{0,40}") {
        let flat = rules::is_password(&s);
        prop_assert_eq!(flat, password().is_valid(&s));
        prop_assert_eq!(flat, Rule::Password.check(&s, &[]));
    }

    #[test]
    fn alphanumeric_parameter_matches_option(s in "[a-z0-9_:-]{0,20}", max in 0usize..25) {
        let param = max.to_string();
        prop_assert_eq!(
            Rule::Alphanumeric.check(&s, &[param.as_str()]),
            rules::is_alphanumeric(&s, Some(max))
        );
    }
}

// ============================================================================
// LENGTH BOUNDS: a longer input never passes once the bound is exceeded
// ============================================================================

proptest! {
    #[test]
    fn tag_over_bound_rejected(len in (TAG_MAX_LENGTH + 1)..200) {
        prop_assert!(!rules::is_tag(&"a".repeat(len)));
    }

    #[test]
    fn alphanumeric_bound_counts_chars(len in 1usize..40, max in 0usize..40) {
        let s = "a".repeat(len);
        prop_assert_eq!(rules::is_alphanumeric(&s, Some(max)), len <= max);
    }

    #[test]
    fn numeric_accepts_all_digit_strings(s in "[0-9]{1,30}") {
        prop_assert!(rules::is_numeric(&s));
    }

    #[test]
    fn memory_size_bound(digits in "[0-9]{1,12}") {
        let s = format!("{digits}Mi");
        prop_assert_eq!(rules::is_memory_size(&s), s.len() <= 9);
    }
}

// ============================================================================
// PASSWORD POLICY: length is mandatory regardless of classes
// ============================================================================

proptest! {
    #[test]
    fn password_length_is_mandatory(body in "[a-zA-Z0-9!@#]{0,40}") {
        let s = format!("Aa1!{body}");
        prop_assert_eq!(rules::is_password(&s), (8..=32).contains(&s.len()));
    }

    #[test]
    fn single_class_passwords_rejected(s in "[a-z]{8,32}") {
        prop_assert!(!rules::is_password(&s));
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in "[a-zA-Z0-9 _-]{0,30}") {
        let combined = tag().and(lowercase());
        prop_assert_eq!(
            combined.is_valid(&s),
            tag().is_valid(&s) && lowercase().is_valid(&s)
        );
    }

    #[test]
    fn or_passes_iff_either_passes(s in "[a-zA-Z0-9/_-]{0,20}") {
        let combined = path().or(alphanumeric());
        prop_assert_eq!(
            combined.is_valid(&s),
            path().is_valid(&s) || alphanumeric().is_valid(&s)
        );
    }

    #[test]
    fn double_negation(s in ".{0,20}") {
        prop_assert_eq!(not(not(email())).is_valid(&s), email().is_valid(&s));
    }
}
