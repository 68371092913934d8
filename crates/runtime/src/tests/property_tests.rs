// Classifier Property Tests
//
// Arbitrary value trees, built directly rather than through the parser, so
// every object kind and number edge case shows up.

use crate::{
    all_same_type, all_unique_real_type, coarse_type, count_real_types, real_type, real_types_of,
    types_of, Function, FunctionKind, Object, Value,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn function_kind() -> impl Strategy<Value = FunctionKind> {
    prop_oneof![
        Just(FunctionKind::Normal),
        Just(FunctionKind::Arrow),
        Just(FunctionKind::Generator),
        Just(FunctionKind::Async),
        Just(FunctionKind::AsyncArrow),
        Just(FunctionKind::AsyncGenerator),
        Just(FunctionKind::Class),
        Just(FunctionKind::Native),
    ]
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Number),
        prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
            .prop_map(Value::Number),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
        proptest::option::of("[a-z]{0,4}").prop_map(Value::symbol),
    ]
}

fn leaf_object() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<f64>().prop_map(|t| Value::object(Object::Date(t))),
        ("[a-z]{1,4}", "[gim]{0,1}")
            .prop_map(|(source, flags)| Value::object(Object::RegExp { source, flags })),
        "[A-Za-z]{0,6}".prop_map(|message| Value::object(Object::Error {
            name: "Error".to_string(),
            message,
        })),
        (0usize..64).prop_map(|len| Value::object(Object::ArrayBuffer(len))),
        (0usize..64).prop_map(|size| Value::object(Object::Blob {
            size,
            mime: String::new(),
        })),
        Just(Value::object(Object::Opaque("WeakMap".to_string()))),
        primitive().prop_map(|inner| Value::object(Object::Boxed(inner))),
        function_kind().prop_map(|kind| Value::function(Function {
            name: "f".to_string(),
            kind,
            params: Vec::new(),
        })),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![primitive(), leaf_object()].prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| Value::object(Object::Set(items))),
            prop::collection::vec((inner.clone(), inner.clone()), 0..3)
                .prop_map(|entries| Value::object(Object::Map(entries))),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..3)
                .prop_map(|props| Value::object(Object::Plain(props))),
        ]
    })
}

fn values() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(value(), 0..10)
}

proptest! {
    #[test]
    fn prop_real_type_refines_coarse_type(v in value()) {
        prop_assert_eq!(real_type(&v).coarse_type(), coarse_type(&v));
    }

    #[test]
    fn prop_classification_is_deterministic(v in value()) {
        let copy = v.clone();
        prop_assert_eq!(real_type(&v), real_type(&copy));
        prop_assert_eq!(coarse_type(&v), coarse_type(&copy));
    }

    #[test]
    fn prop_list_mapping_preserves_length(list in values()) {
        prop_assert_eq!(types_of(&list).len(), list.len());
        prop_assert_eq!(real_types_of(&list).len(), list.len());
    }

    #[test]
    fn prop_counts_sum_to_length(list in values()) {
        let total: usize = count_real_types(Some(&list)).iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, list.len());
    }

    #[test]
    fn prop_counts_sorted_and_positive(list in values()) {
        let counts = count_real_types(Some(&list));
        for pair in counts.windows(2) {
            prop_assert!(pair[0].0.as_str() < pair[1].0.as_str());
        }
        prop_assert!(counts.iter().all(|(_, n)| *n > 0));
    }

    #[test]
    fn prop_counts_ignore_order(
        (list, shuffled) in values().prop_flat_map(|list| (Just(list.clone()), Just(list).prop_shuffle()))
    ) {
        prop_assert_eq!(count_real_types(Some(&list)), count_real_types(Some(&shuffled)));
    }

    #[test]
    fn prop_unique_means_one_per_tag(list in values()) {
        let distinct = count_real_types(Some(&list)).len();
        prop_assert_eq!(all_unique_real_type(&list), distinct == list.len());
    }

    #[test]
    fn prop_same_type_means_one_coarse_tag(list in values()) {
        let tags: HashSet<_> = types_of(&list).into_iter().collect();
        prop_assert_eq!(all_same_type(&list), tags.len() <= 1);
    }

    #[test]
    fn prop_single_value_is_same_and_unique(v in value()) {
        let list = vec![v];
        prop_assert!(all_same_type(&list));
        prop_assert!(all_unique_real_type(&list));
    }
}
