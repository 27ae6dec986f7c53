// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::argument::Argument;
use crate::arguments::Arguments;
use crate::error::*;
use crate::value::Value;

fn tokens(vs: &[&str]) -> Vec<String> {
    vs.iter().map(|v| (*v).to_owned()).collect()
}

fn expect_configuration_error(result: Result<usize>) {
    match result {
        Err(Error::Configuration(_)) => (),
        r => panic!("Expected configuration error, got {:?}", r),
    }
}

#[test]
fn test_indices_follow_registration_order() {
    let mut args = Arguments::new("test");
    assert_eq!(0, args.add_arg("first", "", true, false).unwrap());
    assert_eq!(1, args.add_arg("second", "", true, false).unwrap());

    // A rejected registration must not consume an index.
    expect_configuration_error(args.add_arg("second", "duplicate", true, false));
    assert_eq!(2, args.add_arg("third", "", false, false).unwrap());

    for (i, arg) in args.args().iter().enumerate() {
        assert_eq!(i, arg.index());
    }
    assert_eq!(0, args.arg("first").unwrap().index());
    assert_eq!(2, args.arg("third").unwrap().index());
}

#[test]
fn test_duplicate_and_invalid_names_are_rejected() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "", true, false).unwrap();
    expect_configuration_error(args.add_arg("name", "", false, false));
    expect_configuration_error(args.add_arg("", "", false, false));
    expect_configuration_error(args.add_arg("not a name", "", false, false));
    assert_eq!(1, args.args().len());
}

#[test]
fn test_nothing_may_follow_an_arrayed_argument() {
    let mut args = Arguments::new("test");
    args.add_arg("files", "", true, true).unwrap();
    expect_configuration_error(args.add_arg("more", "", false, true));
    expect_configuration_error(args.add_arg("single", "", false, false));
}

#[test]
fn test_required_after_optional_is_rejected() {
    let mut args = Arguments::new("test");
    args.add_arg("required1", "", true, false).unwrap();
    args.add_arg("optional1", "", false, false).unwrap();
    expect_configuration_error(args.add_arg("required2", "", true, false));

    // Another optional argument is still fine.
    args.add_arg("optional2", "", false, false).unwrap();
}

#[test]
fn test_missing_required_argument() {
    let mut args = Arguments::new("test");
    args.add_argument(Argument::required("name", "").with_show_name("NAME"))
        .unwrap();

    match args.parse_args(&[]) {
        Err(Error::MissingArgument { name, position }) => {
            assert_eq!("NAME", name);
            assert_eq!(1, position);
        }
        r => panic!("Expected missing-argument error, got {:?}", r),
    }
}

#[test]
fn test_arrayed_argument_absorbs_remaining_tokens() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "", true, false).unwrap();
    args.add_arg("tags", "", false, true).unwrap();

    args.parse_args(&tokens(&["alice", "a", "b", "c"])).unwrap();

    assert_eq!(Some(Value::from("alice")), args.arg("name").unwrap().value());
    assert_eq!(
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        args.arg("tags").unwrap().array()
    );
}

#[test]
fn test_arrayed_argument_consumes_everything_under_strict_count() {
    let mut args = Arguments::new("test");
    args.set_validate_num(true);
    args.add_arg("name", "", true, false).unwrap();
    args.add_arg("tags", "", false, true).unwrap();

    args.parse_args(&tokens(&["alice", "a", "b", "c"])).unwrap();
    assert_eq!(
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        args.arg("tags").unwrap().array()
    );
}

#[test]
fn test_strict_count_rejects_leftover_tokens() {
    let mut args = Arguments::new("test");
    args.set_validate_num(true);
    args.add_arg("name", "", true, false).unwrap();

    match args.parse_args(&tokens(&["a", "b"])) {
        Err(Error::TooManyArguments(leftover)) => assert_eq!(tokens(&["b"]), leftover),
        r => panic!("Expected too-many-arguments error, got {:?}", r),
    }
}

#[test]
fn test_leftover_tokens_are_ignored_without_strict_count() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "", true, false).unwrap();

    args.parse_args(&tokens(&["a", "b"])).unwrap();
    assert_eq!(Some(Value::from("a")), args.arg("name").unwrap().value());
}

#[test]
fn test_strict_count_with_no_arguments_registered() {
    let mut args = Arguments::new("test");
    args.set_validate_num(true);

    args.parse_args(&[]).unwrap();
    match args.parse_args(&tokens(&["a", "b"])) {
        Err(Error::TooManyArguments(leftover)) => assert_eq!(tokens(&["a", "b"]), leftover),
        r => panic!("Expected too-many-arguments error, got {:?}", r),
    }
}

#[test]
fn test_validator_rejection_aborts_parse_and_keeps_earlier_bindings() {
    let mut args = Arguments::new("test");
    args.add_arg("first", "", true, false).unwrap();
    args.add_argument(Argument::required("second", "").with_validator(|_| {
        Err(Error::Validation {
            name: "second".to_owned(),
            message: "always rejected".to_owned(),
        })
    }))
    .unwrap();
    args.add_arg("third", "", false, false).unwrap();

    match args.parse_args(&tokens(&["a", "b", "c"])) {
        Err(Error::Validation { name, .. }) => assert_eq!("second", name),
        r => panic!("Expected validation error, got {:?}", r),
    }

    assert_eq!(Some(Value::from("a")), args.arg("first").unwrap().value());
    assert!(!args.arg("second").unwrap().has_value());
    assert!(!args.arg("third").unwrap().has_value());
}

#[test]
fn test_optional_arguments_are_left_unset_when_input_runs_out() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "", true, false).unwrap();
    args.add_argument(Argument::optional("mode", "").with_value("default"))
        .unwrap();
    args.add_arg("extra", "", false, false).unwrap();

    args.parse_args(&tokens(&["alice"])).unwrap();

    assert_eq!(Some(Value::from("alice")), args.arg("name").unwrap().value());
    // There is no gap-filling; the pass simply stops, leaving the
    // configured default in place.
    assert_eq!(
        Some(Value::from("default")),
        args.arg("mode").unwrap().value()
    );
    assert!(!args.arg("extra").unwrap().has_value());
}

#[test]
fn test_lookup_by_name_and_index() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "the name argument", true, false).unwrap();

    let arg = args.arg("name").unwrap();
    assert_eq!("name", arg.get_name());
    assert_eq!("the name argument", arg.get_help());
    assert_eq!("name", args.arg_by_index(0).unwrap().get_name());

    match args.arg("nope") {
        Err(Error::Lookup(_)) => (),
        r => panic!("Expected lookup error, got {:?}", r),
    }
    match args.arg_by_index(1) {
        Err(Error::Lookup(_)) => (),
        r => panic!("Expected lookup error, got {:?}", r),
    }
}

#[test]
fn test_existence_checks() {
    let mut args = Arguments::new("test");
    assert!(!args.has_args());
    assert!(!args.has_arg("name"));

    args.add_arg("name", "", true, false).unwrap();
    assert!(args.has_args());
    assert!(args.has_arg("name"));
    assert!(!args.has_arg("other"));
}

#[test]
fn test_arg_mut_allows_rebinding() {
    let mut args = Arguments::new("test");
    args.add_arg("name", "", true, false).unwrap();
    args.parse_args(&tokens(&["alice"])).unwrap();

    args.arg_mut("name")
        .unwrap()
        .bind_value(Value::from("bob"))
        .unwrap();
    assert_eq!(Some(Value::from("bob")), args.arg("name").unwrap().value());
}

#[test]
fn test_typed_value_access() {
    let mut args = Arguments::new("test");
    args.add_arg("count", "", true, false).unwrap();
    args.parse_args(&tokens(&["42"])).unwrap();

    let value = args.arg("count").unwrap().value().unwrap();
    assert_eq!(vec![42], value.parse_as::<_, u64>().unwrap());
}
