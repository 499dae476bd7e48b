//! Property-based tests for envguard using proptest.
//!
//! These tests verify invariants that must hold for all possible inputs, not
//! just hand-picked examples.

use proptest::prelude::*;

use envguard::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Generate plausible environment variable names.
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}"
}

/// Generate arbitrary raw values, including whitespace and unicode.
fn arb_raw() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ \t]{0,3}-?[0-9]{1,6}(\\.[0-9]{1,3})?[ \t]{0,3}",
        "(true|false|yes|no|1|0|TRUE|Yes)",
    ]
}

// ============================================================================
// Validator Totality
// ============================================================================

proptest! {
    /// Property: validators never panic, whatever the input.
    #[test]
    fn prop_validators_are_total(raw in arb_raw()) {
        let _ = number_env(&raw);
        let _ = integer_env(&raw);
        let _ = port_env(&raw);
        let _ = timestamp_env(&raw);
        let _ = bool_env(&raw);
        let _ = email_env(&raw);
        let _ = ipv4_env(&raw);
        let _ = ipv6_env(&raw);
        let _ = credit_card_env(&raw);
        let _ = phone_env(&raw);
        let _ = json_env(&raw);
        let _ = array_env(",")(&raw);
        let _ = number_array_env(",")(&raw);
    }

    /// Property: failures echo the raw value they rejected.
    #[test]
    fn prop_errors_echo_raw(raw in arb_raw()) {
        if let Err(e) = number_env(&raw) {
            prop_assert_eq!(e.value, raw.clone());
        }
        if let Err(e) = bool_env(&raw) {
            prop_assert_eq!(e.value, raw);
        }
    }

    /// Property: string_env is the identity.
    #[test]
    fn prop_string_env_identity(raw in any::<String>()) {
        prop_assert_eq!(string_env(&raw).unwrap(), raw);
    }

    /// Property: length validators count characters, not bytes.
    #[test]
    fn prop_length_counts_chars(raw in any::<String>()) {
        let n = raw.chars().count();
        prop_assert!(length(n)(&raw).is_ok());
        prop_assert!(min_length(n)(&raw).is_ok());
        prop_assert!(max_length(n)(&raw).is_ok());
        prop_assert!(min_length(n + 1)(&raw).is_err());
    }
}

// ============================================================================
// Numeric Properties
// ============================================================================

proptest! {
    /// Property: every u16 renders to a valid port that parses back.
    #[test]
    fn prop_port_accepts_every_u16(port in any::<u16>()) {
        prop_assert_eq!(port_env(&port.to_string()), Ok(port));
    }

    /// Property: ports above 65535 are rejected.
    #[test]
    fn prop_port_rejects_out_of_range(port in 65_536u32..10_000_000) {
        prop_assert!(port_env(&port.to_string()).is_err());
    }

    /// Property: range bounds are inclusive, and values just outside fail.
    #[test]
    fn prop_range_is_inclusive(min in -1000i32..1000, span in 0i32..1000) {
        let max = min + span;
        let check = range_env(min as f64, max as f64);

        prop_assert!(check(&min.to_string()).is_ok());
        prop_assert!(check(&max.to_string()).is_ok());
        prop_assert!(check(&(min - 1).to_string()).is_err());
        prop_assert!(check(&(max + 1).to_string()).is_err());
    }

    /// Property: integers render and parse back unchanged.
    #[test]
    fn prop_integer_roundtrip(n in -(1i64 << 53)..=(1i64 << 53)) {
        prop_assert_eq!(integer_env(&n.to_string()), Ok(n));
    }

    /// Property: a non-zero fractional part is never an integer.
    #[test]
    fn prop_fraction_is_not_integer(n in -100_000i64..100_000, frac in 1u32..1000) {
        let raw = format!("{}.{:03}", n, frac);
        prop_assert!(integer_env(&raw).is_err());
    }
}

// ============================================================================
// Array Properties
// ============================================================================

proptest! {
    /// Property: joining trimmed, non-empty segments and splitting again gives
    /// back the same segments.
    #[test]
    fn prop_array_split_join(segments in prop::collection::vec("[a-z0-9]{1,8}", 0..8)) {
        let raw = segments.join(" , ");
        prop_assert_eq!(array_env(",")(&raw).unwrap(), segments);
    }

    /// Property: integer arrays keep order.
    #[test]
    fn prop_integer_array_order(values in prop::collection::vec(-1000i64..1000, 0..10)) {
        let raw = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(";");
        prop_assert_eq!(integer_array_env(";")(&raw).unwrap(), values);
    }
}

// ============================================================================
// Resolution Properties
// ============================================================================

proptest! {
    /// Property: batch results line up with the requested names, absent or not.
    #[test]
    fn prop_resolve_multiple_preserves_order(
        entries in prop::collection::btree_map(arb_name(), "[a-z]{0,8}", 0..6),
        absent in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let env = MockEnv::new().with_envs(entries.clone());
        let resolver = Resolver::new(&env);

        // Lowercase names never collide with the uppercase present set.
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.extend(absent.iter().cloned());

        let values = resolver.resolve_multiple(names.clone()).unwrap();
        prop_assert_eq!(values.len(), names.len());
        for (name, value) in names.iter().zip(values) {
            let expected = entries.get(name).map(|v| Value::String(v.clone()));
            prop_assert_eq!(value, expected);
        }
    }

    /// Property: require_all reports exactly the absent names, in order.
    #[test]
    fn prop_require_all_lists_missing(
        present in prop::collection::btree_set(arb_name(), 0..5),
        absent in prop::collection::btree_set("[a-z]{1,8}", 1..5),
    ) {
        let env = MockEnv::new().with_envs(present.iter().map(|n| (n.clone(), "v".to_string())));
        let resolver = Resolver::new(&env);

        let specs: Vec<VarSpec> = present
            .iter()
            .chain(absent.iter())
            .map(|n| VarSpec::new(n.as_str()))
            .collect();

        let err = resolver.require_all(&specs).unwrap_err();
        let expected: Vec<&str> = absent.iter().map(String::as_str).collect();
        prop_assert_eq!(err.names(), expected);
    }

    /// Property: a default is returned verbatim when the variable is absent.
    #[test]
    fn prop_default_bypasses_validator(default in any::<f64>()) {
        let env = MockEnv::new();
        let resolver = Resolver::new(&env);

        let value = resolver.get_or("RATIO", range_env(0.0, 1.0), default).unwrap();
        prop_assert!(value == default || (value.is_nan() && default.is_nan()));
    }
}
