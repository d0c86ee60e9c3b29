//! End-to-end tests composing domain records from validated fields.
//!
//! Covers smart-constructor correctness over arbitrary input, accumulating
//! composition of a record, predicate-based record rules, and decoding a
//! record from untrusted JSON.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]

use bastion_core::predicate::{Predicate, exclusive_between, matches};
use bastion_core::prelude::*;
use proptest::prelude::*;
use tap::Pipe;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: NonEmptyString,
    age: PositiveInt,
    addresses: NonEmptySeq<String>,
}

impl Person {
    fn validate(
        name: &str,
        age: i64,
        addresses: Vec<String>,
    ) -> Result<Self, NonEmptySeq<Error>> {
        let build = |name: NonEmptyString| {
            move |age: PositiveInt| move |addresses: NonEmptySeq<String>| Self {
                name,
                age,
                addresses,
            }
        };
        lift(build)
            .apply(NonEmptyString::named(name, "name"))
            .apply(PositiveInt::named(age, "age"))
            .apply(NonEmptySeq::named(addresses, "addresses"))
    }
}

#[test]
fn test_all_invalid_fields_are_reported_in_order() {
    let errors = Person::validate("", -5, Vec::new()).unwrap_err().into_vec();

    assert_eq!(
        errors,
        vec![
            Error::empty_string(Some("name")),
            Error::negative(Some("age"), -5),
            Error::empty_sequence(Some("addresses")),
        ]
    );
    assert!(errors.iter().zip(["name", "age", "addresses"]).all(|(e, field)| {
        e.to_string().contains(&format!("'{field}'"))
    }));
}

#[test]
fn test_valid_fields_build_the_record() {
    let person = Person::validate("Alice", 30, vec!["Main St".to_string()]).unwrap();

    assert_eq!(person.name.as_str(), "Alice");
    assert_eq!(person.age.get(), 30);
    assert_eq!(person.addresses.clone().into_vec(), vec!["Main St".to_string()]);
}

#[test]
fn test_single_invalid_field_is_the_only_error() {
    let errors = Person::validate("Bob", -1, vec!["Elm St".to_string()])
        .unwrap_err()
        .into_vec();
    assert_eq!(errors, vec![Error::negative(Some("age"), -1)]);
}

// ==========================================================================
// PROPERTY: Smart constructors reject exactly the invalid inputs
// ==========================================================================

proptest! {
    #[test]
    fn prop_positive_int_rejects_only_negatives(i in any::<i64>()) {
        prop_assert_eq!(PositiveInt::maybe(i).is_none(), i < 0);
        prop_assert_eq!(PositiveInt::new(i).is_err(), i < 0);
    }

    #[test]
    fn prop_non_empty_string_rejects_only_empty(s in ".{0,8}") {
        prop_assert_eq!(NonEmptyString::maybe(s.clone()).is_none(), s.is_empty());
        prop_assert_eq!(NonEmptyString::new(s.clone()).is_err(), s.is_empty());
    }

    #[test]
    fn prop_non_empty_seq_rejects_only_empty(xs in prop::collection::vec(any::<u8>(), 0..5)) {
        prop_assert_eq!(NonEmptySeq::maybe(xs.clone()).is_none(), xs.is_empty());
        prop_assert_eq!(NonEmptySeq::new(xs.clone()).is_err(), xs.is_empty());
    }

    #[test]
    fn prop_record_fails_iff_some_field_fails(
        name in "[a-z]{0,3}",
        age in -3i64..3,
        addresses in prop::collection::vec("[a-z]{1,4}", 0..2),
    ) {
        let expected_errors = usize::from(name.is_empty())
            + usize::from(age < 0)
            + usize::from(addresses.is_empty());
        match Person::validate(&name, age, addresses) {
            Ok(_) => prop_assert_eq!(expected_errors, 0),
            Err(errors) => prop_assert_eq!(errors.len().get(), expected_errors),
        }
    }
}

// ==========================================================================
// Predicate-based record rules
// ==========================================================================

#[derive(Debug, PartialEq, Eq)]
struct Member {
    name: NonEmptyString,
    age: PositiveInt,
}

impl Member {
    fn maybe(name: NonEmptyString, age: PositiveInt) -> Option<Self> {
        matches(name.as_str(), r"^[a-zA-Z\. ]+$")
            .and_lazy(|| exclusive_between(&age.get(), &0, &100))
            .then_some(Self { name, age })
    }
}

proptest! {
    #[test]
    fn prop_member_rules_hold(name in "[a-zA-Z0-9. ]{1,10}", age in 0i64..150) {
        let expected = matches(&name, r"^[a-zA-Z\. ]+$").and(age > 0 && age < 100);
        let member = NonEmptyString::maybe(name)
            .zip(PositiveInt::maybe(age))
            .and_then(|(name, age)| Member::maybe(name, age));
        prop_assert_eq!(member.is_some(), expected);
    }
}

// ==========================================================================
// Untrusted JSON boundary
// ==========================================================================

#[cfg(feature = "serde")]
mod json_boundary {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct PersonDto {
        name: Untrusted<String>,
        age: Untrusted<i64>,
    }

    impl PersonDto {
        fn into_member(self) -> Option<Member> {
            self.name
                .unwrap(NonEmptyString::maybe)
                .zip(self.age.unwrap(PositiveInt::maybe))
                .and_then(|(name, age)| Member::maybe(name, age))
        }
    }

    #[test]
    fn test_member_decoded_from_untrusted_json() {
        let member = r#"{ "name": "philip", "age": 53 }"#
            .pipe(serde_json::from_str::<PersonDto>)
            .unwrap()
            .into_member()
            .unwrap();

        assert_eq!(member.name.as_str(), "philip");
        assert_eq!(member.age.get(), 53);
    }

    #[test]
    fn test_untrusted_json_with_bad_fields_is_rejected() {
        let rejected = [
            r#"{ "name": "", "age": 53 }"#,
            r#"{ "name": "philip", "age": -1 }"#,
            r#"{ "name": "R2D2", "age": 53 }"#,
            r#"{ "name": "philip", "age": 100 }"#,
        ];
        for raw in rejected {
            let dto: PersonDto = serde_json::from_str(raw).unwrap();
            assert_eq!(dto.into_member(), None, "{raw} should be rejected");
        }
    }
}
