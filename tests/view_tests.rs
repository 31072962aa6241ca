mod common;
use common::FILL_HEADER;

use chrono::NaiveDate;
use fuellog::core::view::{ViewLogic, ViewQuery, parse_id};
use fuellog::store::schema::col;
use fuellog::store::{DEDUCTION, Dataset, FILL_UP};

const FMT: &str = "%d/%m/%Y";

fn fills() -> Dataset {
    let csv = format!(
        "{FILL_HEADER}\n\
         0,101,01/02/2025,08:00,Surtidor,0,0,40,50000,1,2,,Ana\n\
         1,102,02/02/2025,09:00,Tanque,100,140,40,0,2,3,,Ana\n\
         2,103,01/02/2025,18:30,Surtidor,0,0,20,25000,3,4,,Luis\n\
         3,104,,10:00,Surtidor,0,0,10,9000,4,5,,Luis\n\
         4,105,2025-02-03,11:00,Tanque,140,150,10,0,5,6,,Ana\n"
    );
    Dataset::parse(csv.as_bytes()).expect("parse")
}

fn ids(rows: &[Vec<String>]) -> Vec<String> {
    rows.iter().map(|r| r[0].clone()).collect()
}

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_unfiltered_view_is_sorted_by_id_descending() {
    let view = ViewLogic::build(&fills(), &FILL_UP, &ViewQuery::default(), FMT);

    assert_eq!(ids(&view.rows), ["4", "3", "2", "1", "0"]);
    assert_eq!(view.header.join(","), FILL_HEADER);
}

#[test]
fn test_date_filter_returns_exactly_matching_rows() {
    let query = ViewQuery {
        date: Some(date(1, 2, 2025)),
    };
    let view = ViewLogic::build(&fills(), &FILL_UP, &query, FMT);

    assert_eq!(ids(&view.rows), ["2", "0"]);
    assert!(view.rows.iter().all(|r| r[2] == "01/02/2025"));
}

#[test]
fn test_date_filter_with_no_match_is_empty() {
    let query = ViewQuery {
        date: Some(date(9, 9, 2030)),
    };
    let view = ViewLogic::build(&fills(), &FILL_UP, &query, FMT);
    assert!(view.rows.is_empty());
}

#[test]
fn test_dates_are_formatted_for_display() {
    let view = ViewLogic::build(&fills(), &FILL_UP, &ViewQuery::default(), FMT);

    // iso date re-formatted, empty stays empty
    assert_eq!(view.rows[0][2], "03/02/2025");
    assert_eq!(view.rows[1][2], "");
}

#[test]
fn test_iso_stored_date_matches_filter() {
    let query = ViewQuery {
        date: Some(date(3, 2, 2025)),
    };
    let view = ViewLogic::build(&fills(), &FILL_UP, &query, FMT);
    assert_eq!(ids(&view.rows), ["4"]);
}

#[test]
fn test_earliest_date_spans_whole_dataset() {
    let query = ViewQuery {
        date: Some(date(3, 2, 2025)),
    };
    let view = ViewLogic::build(&fills(), &FILL_UP, &query, FMT);
    assert_eq!(view.earliest, Some(date(1, 2, 2025)));
}

#[test]
fn test_float_and_invalid_ids_sort() {
    let ds = Dataset::parse(
        b"idRestaLitros,coche,fecha,hora,litrosRestados,comentario,usuario\n\
          0.0,1,,,,,A\n\
          x,2,,,,,B\n\
          2.0,3,,,,,C\n\
          1,4,,,,,D\n",
    )
    .expect("parse");

    let view = ViewLogic::build(&ds, &DEDUCTION, &ViewQuery::default(), FMT);
    let users: Vec<&str> = view.rows.iter().map(|r| r[6].as_str()).collect();
    assert_eq!(users, ["C", "D", "A", "B"]);
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id("12"), Some(12));
    assert_eq!(parse_id(" 3.0 "), Some(3));
    assert_eq!(parse_id("3.5"), None);
    assert_eq!(parse_id(""), None);
}

#[test]
fn test_json_output_has_one_object_per_row() {
    let view = ViewLogic::build(&fills(), &FILL_UP, &ViewQuery::default(), FMT);
    let json = view.to_json().expect("json");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][col::FILL_UP_ID], "4");
    assert_eq!(rows[0][col::VEHICLE], "105");
}

#[test]
fn test_table_render_contains_header_and_rows() {
    let view = ViewLogic::build(&fills(), &FILL_UP, &ViewQuery::default(), FMT);
    let out = view.to_table().render();

    let mut lines = out.lines();
    assert!(lines.next().expect("header").starts_with("idCarga"));
    assert!(lines.next().expect("rule").starts_with("---"));
    assert_eq!(out.lines().count(), 2 + 5);
}
