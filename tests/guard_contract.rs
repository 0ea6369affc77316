//! Contract tests for the guard API.
//!
//! Exercises the crate the way host code uses it: guards inlined as guard
//! clauses at the top of a function, errors propagated with `?`.

use guard_core::{guard, Error, Result};
use pretty_assertions::assert_eq;

/// Typical consumer: every parameter validated and bound in one line.
fn register_user(name: Option<&str>, age: i32, tags: &[&str]) -> Result<String> {
    let name = guard::against_none(name, "name")?;
    let name = guard::against_empty_string(name, "name")?;
    let age = guard::against_out_of_range(age, 0, 130, "age")?;
    let tags = guard::against_empty_collection(tags, "tags")?;
    Ok(format!("{name} ({age}): {}", tags.join(",")))
}

#[test]
fn guard_clauses_pass_valid_input_through() {
    let out = register_user(Some("ada"), 36, &["admin"]).unwrap();
    assert_eq!(out, "ada (36): admin");
}

#[test]
fn first_violated_guard_wins() {
    // name is checked before age, so the null failure surfaces even though
    // age is also invalid
    let err = register_user(None, -5, &[]).unwrap_err();
    assert_eq!(err, Error::null_value("name"));
}

#[test]
fn out_of_range_message_mentions_label_value_and_bounds() {
    let err = guard::against_out_of_range(150, 0, 100, "age").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("age"), "missing label: {msg}");
    assert!(msg.contains("150"), "missing value: {msg}");
    assert!(msg.contains('0'), "missing lower bound: {msg}");
    assert!(msg.contains("100"), "missing upper bound: {msg}");

    assert_eq!(guard::against_out_of_range(50, 0, 100, "age").unwrap(), 50);
}

#[test]
fn every_rule_maps_to_a_distinct_error() {
    let errs = vec![
        guard::against_none::<i32>(None, "a").unwrap_err(),
        guard::against_empty_string("", "b").unwrap_err(),
        guard::against_negative(-1, "c").unwrap_err(),
        guard::against_zero(0, "d").unwrap_err(),
        guard::against_out_of_range(9, 0, 5, "e").unwrap_err(),
        guard::against_missing_file("/no/such/file", "f").unwrap_err(),
        guard::against_missing_dir("/no/such/dir", "g").unwrap_err(),
    ];
    for (i, left) in errs.iter().enumerate() {
        for right in &errs[i + 1..] {
            assert_ne!(
                std::mem::discriminant(left),
                std::mem::discriminant(right)
            );
        }
    }
}

#[test]
fn rechecking_a_passing_value_passes_again() {
    let once = guard::against_negative(17, "count").unwrap();
    let twice = guard::against_negative(once, "count").unwrap();
    assert_eq!(twice, 17);

    let s = guard::against_empty_string("storage", "module").unwrap();
    let s = guard::against_empty_string(s, "module").unwrap();
    assert_eq!(s, "storage");
}

#[test]
fn filesystem_guards_follow_real_paths() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("state.json");
    std::fs::write(&file, "{}").unwrap();

    assert!(guard::against_missing_dir(dir.path(), "workdir").is_ok());
    assert!(guard::against_missing_file(&file, "state").is_ok());

    // Swapped kinds fail
    assert_eq!(
        guard::against_missing_file(dir.path(), "state").unwrap_err(),
        Error::file_not_found(dir.path())
    );
    assert_eq!(
        guard::against_missing_dir(&file, "workdir").unwrap_err(),
        Error::directory_not_found(&file)
    );
}

#[test]
fn labels_only_affect_messages() {
    let with_label = guard::against_zero(0u8, "port").unwrap_err();
    let other_label = guard::against_zero(0u8, "anything").unwrap_err();
    assert_eq!(
        std::mem::discriminant(&with_label),
        std::mem::discriminant(&other_label)
    );
    assert!(with_label.to_string().contains("port"));
}
