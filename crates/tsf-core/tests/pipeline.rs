//! Integration test: canned LIST output through the parse/filter pipeline.
//!
//! Feeds a realistic archive listing (mixed releases and suffix encodings,
//! banner and blank lines) through `parse_listing` and `list_matching`, and
//! asserts the selection and ordering the CLI relies on.

use tsf_core::filter::{list_matching, QuarterFilter, ReleaseFilter};
use tsf_core::listing::{parse_listing, EntryKind};
use tsf_core::FetchError;

fn archive_listing() -> Vec<String> {
    [
        "06-21-19  04:10PM              3511200 25331-f40.zip",
        "01-09-24  09:45AM              4301124 25331-i10.zip",
        "03-15-24  02:30PM              4412167 25331-i60.zip",
        "02-02-24  11:20AM              4388001 25331-i40.zip",
        "",
        "05-11-20  03:00PM              4100233 25331-160500.zip",
        "04-04-24  08:05AM              4420990 25331-i70.zip",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn listing_parses_every_file_line() {
    let entries = parse_listing(&archive_listing());
    assert_eq!(entries.len(), 6);
    assert!(entries.iter().all(|e| e.kind == EntryKind::File));
    assert!(entries.iter().all(|e| e.size.is_some()));
}

#[test]
fn concrete_release_and_quarter_pick_the_newest_match() {
    let entries = parse_listing(&archive_listing());
    let matched = list_matching(
        entries,
        ReleaseFilter::from_arg("18").unwrap(),
        QuarterFilter::from_arg("2024-01").unwrap(),
    )
    .unwrap();

    let names: Vec<&str> = matched.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["25331-i60.zip", "25331-i40.zip", "25331-i10.zip"]);
    // The head of the list is what a concrete-release invocation downloads.
    assert_eq!(matched[0].name, "25331-i60.zip");
}

#[test]
fn six_char_suffixes_filter_like_three_char_ones() {
    let entries = parse_listing(&archive_listing());
    let matched =
        list_matching(entries, ReleaseFilter::from_arg("16").unwrap(), QuarterFilter::Any)
            .unwrap();
    let names: Vec<&str> = matched.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["25331-160500.zip"]);
}

#[test]
fn wildcard_release_lists_everything_in_the_window() {
    let entries = parse_listing(&archive_listing());
    let matched = list_matching(
        entries,
        ReleaseFilter::Any,
        QuarterFilter::from_arg("2024-02").unwrap(),
    )
    .unwrap();

    let names: Vec<&str> = matched.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["25331-i70.zip", "25331-i60.zip", "25331-i40.zip"]);
}

#[test]
fn out_of_window_quarter_matches_nothing() {
    let entries = parse_listing(&archive_listing());
    let matched = list_matching(
        entries,
        ReleaseFilter::Any,
        QuarterFilter::from_arg("2020-01").unwrap(),
    )
    .unwrap();
    assert!(matched.is_empty());
}

#[test]
fn undecodable_suffix_is_a_terminal_error() {
    let mut lines = archive_listing();
    lines.push("02-18-10  01:11PM                  512 25331-10.zip".to_string());
    let entries = parse_listing(&lines);
    assert!(matches!(
        list_matching(entries, ReleaseFilter::Any, QuarterFilter::Any),
        Err(FetchError::UnrecognizedVersionSuffix(_))
    ));
}
