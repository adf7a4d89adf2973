use crate::tests::{decode, report_json};
use crate::{CATEGORY, ExportError, Timesheet};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serde_json::json;

#[test]
fn given_projects_and_entries_when_built_then_one_row_per_entry() {
    // Given
    let report = decode(&report_json(3, 4));

    // When
    let timesheet = Timesheet::from_report(&report, "Jane").unwrap();

    // Then
    assert_that!(timesheet.len(), eq(12));
}

#[test]
fn given_entries_when_built_then_rows_keep_response_order() {
    // Given
    let report = decode(&report_json(2, 2));

    // When
    let timesheet = Timesheet::from_report(&report, "Jane").unwrap();

    // Then
    let names: Vec<&str> = timesheet
        .rows
        .iter()
        .map(|row| row.entry_name.as_str())
        .collect();
    assert_that!(names, eq(&vec!["Task 0.0", "Task 0.1", "Task 1.0", "Task 1.1"]));
    assert_that!(timesheet.rows[2].project.as_str(), eq("Project 1"));
    assert_that!(timesheet.rows[0].user_name.as_str(), eq("Jane"));
}

#[test]
fn given_entries_when_built_then_total_is_sum_of_rounded_hours() {
    // Given: 0ms (0.25 floor), 1h, ~0.28h (0.25), 1.5h
    let report = decode(&json!({
        "data": [
            { "title": { "project": "A" }, "items": [
                { "title": { "time_entry": "a" }, "time": 0 },
                { "title": { "time_entry": "b" }, "time": 3_600_000 }
            ]},
            { "title": { "project": "B" }, "items": [
                { "title": { "time_entry": "c" }, "time": 1_000_000 },
                { "title": { "time_entry": "d" }, "time": 5_400_000 }
            ]}
        ]
    }));

    // When
    let timesheet = Timesheet::from_report(&report, "Jane").unwrap();

    // Then
    let hours: Vec<f64> = timesheet.rows.iter().map(|row| row.hours).collect();
    assert_that!(hours, eq(&vec![0.25, 1.0, 0.25, 1.5]));
    assert_that!(timesheet.total_hours, eq(3.0));
}

#[test]
fn given_row_when_converted_to_record_then_five_columns_with_category() {
    // Given
    let report = decode(&report_json(1, 2));
    let timesheet = Timesheet::from_report(&report, "Jane").unwrap();

    // When
    let record = timesheet.rows[1].to_record();

    // Then
    assert_that!(
        record.to_vec(),
        eq(&vec![
            "Jane".to_string(),
            "Project 0".to_string(),
            CATEGORY.to_string(),
            "Task 0.1".to_string(),
            "1.00".to_string(),
        ])
    );
}

#[test]
fn given_empty_report_when_built_then_no_rows_and_zero_total() {
    // Given
    let report = decode(&json!({ "data": [] }));

    // When
    let timesheet = Timesheet::from_report(&report, "Jane").unwrap();

    // Then
    assert!(timesheet.is_empty());
    assert_that!(timesheet.total_hours, eq(0.0));
}

#[test]
fn given_project_without_title_when_built_then_missing_title_error() {
    // Given
    let report = decode(&json!({
        "data": [
            { "title": { "project": "A" }, "items": [] },
            { "title": null, "items": [ { "title": { "time_entry": "x" }, "time": 60_000 } ] }
        ]
    }));

    // When
    let result = Timesheet::from_report(&report, "Jane");

    // Then
    let err = result.unwrap_err();
    assert!(
        matches!(
            err,
            ExportError::MissingTitle {
                kind: "project",
                project_index: 1,
                entry_index: 0,
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn given_untitled_project_with_no_entries_when_built_then_ok() {
    // Given
    let report = decode(&json!({ "data": [ { "items": [] } ] }));

    // When
    let result = Timesheet::from_report(&report, "Jane");

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_entry_without_title_when_built_then_error_names_time_entry() {
    // Given
    let report = decode(&json!({
        "data": [ { "title": { "project": "A" }, "items": [ { "time": 60_000 } ] } ]
    }));

    // When
    let result = Timesheet::from_report(&report, "Jane");

    // Then
    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("time entry"));
}
