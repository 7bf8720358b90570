use matchkit::format::{format, to_string, Formatted, Spec, Verb};
use matchkit::Value;

/// All eight specifier combinations, in the order `s`, `+s`, `#s`, `v`, `+v`,
/// `#v`, `q`, `#q`.
fn render_all(value: &Value) -> [String; 8] {
    [
        to_string(Spec::new(Verb::Str), value),
        to_string(Spec::new(Verb::Str).plus(), value),
        to_string(Spec::new(Verb::Str).sharp(), value),
        to_string(Spec::new(Verb::Default), value),
        to_string(Spec::new(Verb::Default).plus(), value),
        to_string(Spec::new(Verb::Default).sharp(), value),
        to_string(Spec::new(Verb::Quote), value),
        to_string(Spec::new(Verb::Quote).sharp(), value),
    ]
}

#[test]
fn string() {
    assert_eq!(
        [
            "foobar",
            "foobar",
            "\"foobar\"",
            "string(foobar)",
            "string(foobar)",
            "string(\"foobar\")",
            "\"foobar\"",
            "string(\"foobar\")",
        ],
        render_all(&Value::from("foobar"))
    );
}

#[test]
fn int() {
    assert_eq!(
        [
            "42",
            "42",
            "42",
            "int(42)",
            "int(42)",
            "int(42)",
            "int(42)",
            "int(42)",
        ],
        render_all(&Value::from(42))
    );
}

#[test]
fn float() {
    assert_eq!(
        [
            "1.5",
            "1.5",
            "1.5",
            "float(1.5)",
            "float(1.5)",
            "float(1.5)",
            "float(1.5)",
            "float(1.5)",
        ],
        render_all(&Value::from(1.5))
    );

    // Whole floats keep their point only in literal form.
    assert_eq!("1", to_string(Spec::new(Verb::Str), &Value::from(1.0)));
    assert_eq!(
        "float(1.0)",
        to_string(Spec::new(Verb::Default).sharp(), &Value::from(1.0))
    );
}

#[test]
fn string_seq() {
    assert_eq!(
        [
            "[foobar]",
            "[foobar]",
            "[\"foobar\"]",
            "seq([foobar])",
            "seq([foobar])",
            "seq{\"foobar\"}",
            "seq([foobar])",
            "seq{\"foobar\"}",
        ],
        render_all(&Value::seq(["foobar"]))
    );
}

#[test]
fn byte_seq() {
    assert_eq!(
        [
            "[102, 111, 111, 98, 97, 114]",
            "[102, 111, 111, 98, 97, 114]",
            "[102, 111, 111, 98, 97, 114]",
            "bytes([102, 111, 111, 98, 97, 114])",
            "bytes([102, 111, 111, 98, 97, 114])",
            "bytes{102, 111, 111, 98, 97, 114}",
            "bytes([102, 111, 111, 98, 97, 114])",
            "bytes{102, 111, 111, 98, 97, 114}",
        ],
        render_all(&Value::bytes(*b"foobar"))
    );
}

#[test]
fn raw_json_renders_verbatim_everywhere() {
    let payload = r#"{"foo":"bar"}"#;
    let value = Value::json(payload);

    for rendered in render_all(&value) {
        assert_eq!(payload, rendered);
    }
}

#[test]
fn compiled_regex_renders_as_its_pattern() {
    let value = Value::from(regex::Regex::new(".*").unwrap());

    assert_eq!(
        [
            ".*",
            ".*",
            "\".*\"",
            "regex(.*)",
            "regex(.*)",
            "regex(\".*\")",
            "\".*\"",
            "regex(\".*\")",
        ],
        render_all(&value)
    );
}

#[test]
fn map() {
    let value = Value::map([("a", 1)]);

    assert_eq!("{a: 1}", to_string(Spec::new(Verb::Str), &value));
    assert_eq!("map({a: 1})", to_string(Spec::new(Verb::Default), &value));
    assert_eq!(
        "map{\"a\": 1}",
        to_string(Spec::new(Verb::Default).sharp(), &value)
    );
}

#[test]
fn record() {
    let value = Value::record(
        "user",
        [("name", Value::from("alice")), ("age", Value::from(42u8))],
    );

    assert_eq!("{alice, 42}", to_string(Spec::new(Verb::Str), &value));
    assert_eq!(
        "{name: alice, age: 42}",
        to_string(Spec::new(Verb::Str).plus(), &value)
    );
    assert_eq!(
        "user({alice, 42})",
        to_string(Spec::new(Verb::Default), &value)
    );
    assert_eq!(
        "user({name: alice, age: 42})",
        to_string(Spec::new(Verb::Default).plus(), &value)
    );
    assert_eq!(
        "user{name: \"alice\", age: 42}",
        to_string(Spec::new(Verb::Default).sharp(), &value)
    );
}

#[test]
fn pointer() {
    let value = Value::some("foo");

    assert_eq!("&foo", to_string(Spec::new(Verb::Str), &value));
    assert_eq!(
        "*string(&foo)",
        to_string(Spec::new(Verb::Default), &value)
    );
    assert_eq!(
        "*string(&\"foo\")",
        to_string(Spec::new(Verb::Default).sharp(), &value)
    );
}

#[test]
fn nil() {
    assert_eq!("nil", to_string(Spec::new(Verb::Str), &Value::Nil));
    assert_eq!("nil", to_string(Spec::new(Verb::Str), &Value::none()));
}

#[test]
fn formatted_adapter() {
    let value = Value::from("foobar");
    let message = format!(
        "expected {}",
        Formatted::new(Spec::new(Verb::Default).sharp(), &value)
    );

    assert_eq!("expected string(\"foobar\")", message);
}

#[test]
fn writes_to_any_sink() {
    let mut out = String::new();

    format(&mut out, Spec::new(Verb::Default), &Value::from(42)).unwrap();

    assert_eq!("int(42)", out);
}
