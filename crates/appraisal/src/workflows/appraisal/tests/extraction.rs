use super::common::{sample_workbook, FACULTY_NAME};
use crate::workflows::appraisal::sheet::{
    extract_for, find_header_row, InMemorySheetSource, SheetTable, NAME_ALIASES,
};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn locator_finds_header_below_preamble_rows() {
    let workbook = sample_workbook();
    assert_eq!(find_header_row(&workbook, "Journal Publication"), Some(1));
    assert_eq!(find_header_row(&workbook, "Book Publication"), Some(0));
}

#[test]
fn locator_matches_alternate_header_label_case_insensitively() {
    let source = InMemorySheetSource::new().with_sheet(
        "Sheet",
        grid(&[
            &["some banner"],
            &["  NAME OF THE FACULTY  ", "Topic"],
        ]),
    );
    assert_eq!(find_header_row(&source, "Sheet"), Some(1));
}

#[test]
fn locator_returns_none_when_no_marker_in_prefix() {
    let source = InMemorySheetSource::new().with_sheet("Sheet", grid(&[&["a", "b"], &["c", "d"]]));
    assert_eq!(find_header_row(&source, "Sheet"), None);
}

#[test]
fn aliases_resolve_in_declaration_order() {
    let table = SheetTable::from_grid(grid(&[
        &["Name", "Faculty Name", "Topic"],
        &["x", FACULTY_NAME, "t"],
    ]));
    // "Faculty Name" is the first alias, so it wins over "Name".
    assert_eq!(table.resolve_column(&NAME_ALIASES), Some(1));
}

#[test]
fn unresolved_name_column_is_an_error_not_a_panic() {
    let table = SheetTable::from_grid(grid(&[&["Author", "Topic"], &["x", "t"]]));
    assert!(extract_for(&table, &NAME_ALIASES, FACULTY_NAME).is_err());
}

#[test]
fn forward_fill_propagates_the_nearest_preceding_value() {
    let table = SheetTable::from_grid(grid(&[
        &["Faculty Name", "Topic"],
        &[FACULTY_NAME, "first"],
        &["", "second"],
        &["   ", "third"],
        &["Dr. Someone Else", "fourth"],
        &["", "fifth"],
    ]));

    let extraction = extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("column resolves");
    let topics: Vec<String> = extraction
        .iter()
        .map(|row| row.text_or("Topic", "-"))
        .collect();
    assert_eq!(topics, vec!["first", "second", "third"]);
}

#[test]
fn forward_fill_is_idempotent() {
    let mut table = SheetTable::from_grid(grid(&[
        &["Faculty Name", "Topic"],
        &[FACULTY_NAME, "first"],
        &["", "second"],
    ]));
    table.forward_fill(0);
    let once = extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("resolves");
    table.forward_fill(0);
    let twice = extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("resolves");
    assert_eq!(once.len(), twice.len());
}

#[test]
fn name_match_trims_but_stays_case_sensitive() {
    let padded = format!("  {FACULTY_NAME}  ");
    let lowercased = FACULTY_NAME.to_lowercase();
    let table = SheetTable::from_grid(grid(&[
        &["Faculty Name", "Topic"],
        &[padded.as_str(), "padded"],
        &[lowercased.as_str(), "wrong case"],
    ]));

    let extraction = extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("resolves");
    assert_eq!(extraction.len(), 1);
    let topic = extraction.iter().next().expect("one row").text_or("Topic", "-");
    assert_eq!(topic, "padded");
}

#[test]
fn text_or_defaults_for_missing_and_blank_fields() {
    let table = SheetTable::from_grid(grid(&[
        &["Faculty Name", "Topic"],
        &[FACULTY_NAME, "  "],
    ]));
    let extraction = extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("resolves");
    let row = extraction.iter().next().expect("one row");
    assert_eq!(row.text_or("Topic", "-"), "-");
    assert_eq!(row.text_or("Missing Column", "-"), "-");
    assert_eq!(row.number("Missing Column"), 0.0);
    assert_eq!(row.number_opt("Topic"), None);
}
