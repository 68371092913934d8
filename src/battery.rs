// The assertion battery
//
// A fixed sequence of labelled checks over the classifier and the list
// analyzers. Every sample input is a fixture expression evaluated at the
// point of use.

use runtime::{
    all_same_type, all_unique_real_type, coarse_type, count_real_types, real_type, real_types_of,
    types_of, RealType, TypeTag,
};

use crate::reporter::Reporter;

const COARSE_CASES: &[(&str, TypeTag)] = &[
    ("true", TypeTag::Boolean),
    ("null", TypeTag::Object),
    ("123", TypeTag::Number),
    ("NaN", TypeTag::Number),
    ("10n", TypeTag::BigInt),
    ("\"abc\"", TypeTag::String),
    ("undefined", TypeTag::Undefined),
    ("Symbol(\"id\")", TypeTag::Symbol),
    ("function f() {}", TypeTag::Function),
    ("class Point {}", TypeTag::Function),
    ("[]", TypeTag::Object),
    ("new Date()", TypeTag::Object),
    ("new String(\"12\")", TypeTag::Object),
];

const REAL_CASES: &[(&str, RealType)] = &[
    ("null", RealType::Null),
    ("NaN", RealType::NaN),
    ("0 / 0", RealType::NaN),
    ("[]", RealType::Array),
    ("[1, \"two\", [3]]", RealType::Array),
    ("new Date()", RealType::Date),
    ("new Date(\"not a date\")", RealType::Date),
    ("new RegExp(\"ab+c\", \"i\")", RealType::RegExp),
    ("new Set([1, 2, 2])", RealType::Set),
    ("new Map([[\"a\", 1]])", RealType::Map),
    ("new Error(\"boom\")", RealType::Error),
    ("new TypeError(\"bad type\")", RealType::Error),
    ("new ArrayBuffer(8)", RealType::Buffer),
    ("new Blob([\"abc\"], { type: \"text/plain\" })", RealType::Blob),
    ("Infinity", RealType::Infinity),
    ("1 / 0", RealType::Infinity),
    ("function* numbers() {}", RealType::GeneratorFunction),
    (
        "function* counter() { let i = 0; while (i < 3) yield i++; }",
        RealType::GeneratorFunction,
    ),
    ("-Infinity", RealType::Coarse(TypeTag::Number)),
    ("42", RealType::Coarse(TypeTag::Number)),
    ("{}", RealType::Coarse(TypeTag::Object)),
    ("{ a: 1 }", RealType::Coarse(TypeTag::Object)),
    ("new String(\"12\")", RealType::Coarse(TypeTag::Object)),
    ("new WeakMap()", RealType::Coarse(TypeTag::Object)),
    ("true", RealType::Coarse(TypeTag::Boolean)),
    ("\"text\"", RealType::Coarse(TypeTag::String)),
    ("Date()", RealType::Coarse(TypeTag::String)),
    ("undefined", RealType::Coarse(TypeTag::Undefined)),
    ("Symbol()", RealType::Coarse(TypeTag::Symbol)),
    ("10n", RealType::Coarse(TypeTag::BigInt)),
    ("function f() {}", RealType::Coarse(TypeTag::Function)),
    ("() => 1", RealType::Coarse(TypeTag::Function)),
    ("async function* stream() {}", RealType::Coarse(TypeTag::Function)),
    ("class Point {}", RealType::Coarse(TypeTag::Function)),
];

/// Run every group against `reporter`
pub fn run(reporter: &mut Reporter) {
    coarse_types(reporter);
    real_types(reporter);
    list_mapping(reporter);
    same_type(reporter);
    unique_real_type(reporter);
    real_type_counts(reporter);
}

fn coarse_types(reporter: &mut Reporter) {
    reporter.start_group("coarse_type");
    for (source, expected) in COARSE_CASES {
        if let Some(value) = reporter.fixture(source) {
            reporter.check(&format!("coarse_type({})", source), &coarse_type(&value), expected);
        }
    }
}

fn real_types(reporter: &mut Reporter) {
    reporter.start_group("real_type");
    for (source, expected) in REAL_CASES {
        if let Some(value) = reporter.fixture(source) {
            let actual = real_type(&value);
            reporter.check(&format!("real_type({})", source), &actual, expected);
            reporter.check(
                &format!("real_type({}) refines coarse_type", source),
                &actual.coarse_type(),
                &coarse_type(&value),
            );
        }
    }
}

fn list_mapping(reporter: &mut Reporter) {
    reporter.start_group("types_of / real_types_of");
    let sources = ["1", "null", "\"a\"", "[]", "NaN"];
    let Some(list) = reporter.fixtures(&sources) else {
        return;
    };

    reporter.check(
        "types_of([1, null, \"a\", [], NaN])",
        &types_of(&list),
        &vec![
            TypeTag::Number,
            TypeTag::Object,
            TypeTag::String,
            TypeTag::Object,
            TypeTag::Number,
        ],
    );
    reporter.check(
        "real_types_of([1, null, \"a\", [], NaN])",
        &real_types_of(&list),
        &vec![
            RealType::Coarse(TypeTag::Number),
            RealType::Null,
            RealType::Coarse(TypeTag::String),
            RealType::Array,
            RealType::NaN,
        ],
    );
    reporter.check("types_of([])", &types_of(&[]), &Vec::new());
    reporter.check("real_types_of([])", &real_types_of(&[]), &Vec::new());
}

fn same_type(reporter: &mut Reporter) {
    reporter.start_group("all_same_type");
    let cases: [(&[&str], bool); 5] = [
        (&["11", "12", "13"], true),
        (&["\"11\"", "new String(\"12\")", "\"13\""], false),
        (&["\"11\"", "String(12)", "\"13\""], true),
        (&["null", "{}", "[]", "new Date()"], true),
        (&[], true),
    ];
    for (sources, expected) in cases {
        if let Some(list) = reporter.fixtures(sources) {
            let label = format!("all_same_type([{}])", sources.join(", "));
            reporter.check(&label, &all_same_type(&list), &expected);
        }
    }
}

fn unique_real_type(reporter: &mut Reporter) {
    reporter.start_group("all_unique_real_type");
    let cases: [(&[&str], bool); 5] = [
        (&["true", "123", "\"123\""], true),
        (&["true", "123", "\"123\" == 123"], false),
        (&["null", "{}", "[]", "NaN", "Infinity", "1"], true),
        (&["NaN", "0 / 0"], false),
        (&[], true),
    ];
    for (sources, expected) in cases {
        if let Some(list) = reporter.fixtures(sources) {
            let label = format!("all_unique_real_type([{}])", sources.join(", "));
            reporter.check(&label, &all_unique_real_type(&list), &expected);
        }
    }
}

fn real_type_counts(reporter: &mut Reporter) {
    reporter.start_group("count_real_types");
    let expected = vec![
        (RealType::Coarse(TypeTag::Boolean), 3),
        (RealType::Null, 1),
        (RealType::Coarse(TypeTag::Object), 1),
    ];

    for sources in [
        ["{}", "null", "true", "!null", "!!null"],
        ["true", "null", "!null", "!!null", "{}"],
    ] {
        if let Some(list) = reporter.fixtures(&sources) {
            let label = format!("count_real_types([{}])", sources.join(", "));
            reporter.check(&label, &count_real_types(Some(&list)), &expected);
        }
    }

    if let Some(list) = reporter.fixtures(&["[]", "NaN", "Infinity", "[1]"]) {
        reporter.check(
            "count_real_types([[], NaN, Infinity, [1]])",
            &count_real_types(Some(&list)),
            &vec![(RealType::Infinity, 1), (RealType::NaN, 1), (RealType::Array, 2)],
        );
    }

    reporter.check("count_real_types([])", &count_real_types(Some(&[])), &Vec::new());

    // A fixture that is not a list counts as an absent one
    if let Some(absent) = reporter.fixture("null") {
        reporter.check(
            "count_real_types(null)",
            &count_real_types(absent.as_array()),
            &Vec::new(),
        );
    }
}
