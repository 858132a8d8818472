//! Tests for output module

use super::*;
use crate::types::{Gender, Nationality, PersonRecord, Probability};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn prob(value: f64) -> Probability {
    Probability::from_f64(value).unwrap()
}

fn person(id: &str, first: &str, last: &str) -> PersonRecord {
    let mut record = PersonRecord {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        ethnicity: "W_NL".to_string(),
        ethnicity_accuracy: prob(0.75),
        alt_ethnicity: "HL".to_string(),
        ethnicity_alt_accuracy: prob(0.125),
        country_origin: None,
        country_full_name: None,
        country_origin_accuracy: None,
        country_origin_alt: None,
        country_full_name_alt: None,
        country_origin_alt_accuracy: None,
        gender: None,
        gender_accuracy: None,
    };
    record.set_nationality(Nationality {
        country_origin: "US".to_string(),
        country_full_name: "United States".to_string(),
        accuracy: prob(0.5),
        country_origin_alt: "CA".to_string(),
        country_full_name_alt: "Canada".to_string(),
        alt_accuracy: prob(0.25),
    });
    record.set_gender(Gender {
        gender: "female".to_string(),
        accuracy: prob(0.875),
    });
    record
}

// ============================================================================
// Document Tests
// ============================================================================

#[test]
fn test_document_two_space_indent() {
    let body = document_to_string(&[person("1", "Ann", "Lee")]).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  \"classifications\": [");
    assert_eq!(lines[2], "    {");
    assert_eq!(lines[3], "      \"id\": \"1\",");
    assert_eq!(lines[4], "      \"firstName\": \"Ann\",");
    assert_eq!(lines.last(), Some(&"}"));
}

#[test]
fn test_document_empty() {
    let body = document_to_string(&[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, json!({"classifications": []}));
}

#[test]
fn test_document_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("classifications.json");
    let records = vec![person("1", "Ann", "Lee"), person("2", "Bo", "Ng")];

    assert_eq!(write_document(&path, &records).unwrap(), 2);
    assert_eq!(read_document(&path).unwrap(), records);
}

#[test]
fn test_document_key_order() {
    let body = document_to_string(&[person("1", "Ann", "Lee")]).unwrap();
    let positions: Vec<usize> = [
        "\"id\"",
        "\"ethnicityAltAccuracy\"",
        "\"countryOrigin\"",
        "\"countryOriginAltAccuracy\"",
        "\"gender\"",
        "\"genderAccuracy\"",
    ]
    .iter()
    .map(|key| body.find(key).unwrap())
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_read_document_invalid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"records": []}"#).unwrap();

    let err = read_document(&path).unwrap_err();
    assert!(err.to_string().contains("classifications"));
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_table_header_and_rows() {
    let mut buf = Vec::new();
    let rows = records_to_rows(&[person("1", "Ann", "Lee"), person("2", "Bo", "Ng")]).unwrap();
    assert_eq!(write_rows(&mut buf, &rows).unwrap(), 2);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,firstName,lastName,ethnicity,ethnicityAccuracy,altEthnicity,ethnicityAltAccuracy,\
         countryOrigin,countryFullName,countryOriginAccuracy,countryOriginAlt,countryFullNameAlt,\
         countryOriginAltAccuracy,gender,genderAccuracy"
    );
    assert_eq!(
        lines[1],
        "1,Ann,Lee,W_NL,0.75,HL,0.125,US,United States,0.5,CA,Canada,0.25,female,0.875"
    );
    assert!(text.ends_with('\n'));
}

#[test]
fn test_integer_probabilities_written_as_read() {
    let entries: Vec<crate::decode::EthnicityEntry> = crate::decode::decode_partition(
        r#"{"personalNames": [{"id": "1", "firstName": "A", "lastName": "B",
            "raceEthnicity": "A", "probabilityCalibrated": 1,
            "raceEthnicityAlt": "W_NL", "probabilityAltCalibrated": 0}]}"#,
        "eth.json",
    )
    .unwrap();
    let classifications = crate::engine::seed_ethnicity(entries).unwrap();
    let records = classifications.records();

    let body = document_to_string(records).unwrap();
    assert!(body.contains("\"ethnicityAccuracy\": 1,"), "{body}");
    assert!(body.contains("\"ethnicityAltAccuracy\": 0\n"), "{body}");

    let mut buf = Vec::new();
    write_rows(&mut buf, &records_to_rows(records).unwrap()).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "id,firstName,lastName,ethnicity,ethnicityAccuracy,altEthnicity,ethnicityAltAccuracy\n\
         1,A,B,A,1,W_NL,0\n"
    );
}

#[test]
fn test_table_quotes_embedded_commas() {
    let mut buf = Vec::new();
    let rows = records_to_rows(&[person("1", "Ann", "Lee, Jr.")]).unwrap();
    write_rows(&mut buf, &rows).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("1,Ann,\"Lee, Jr.\","));
}

#[test]
fn test_table_empty_rows() {
    let mut buf = Vec::new();
    assert_eq!(write_rows(&mut buf, &[]).unwrap(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_table_rows_keep_own_order() {
    let rows = vec![
        json!({"a": 1, "b": "x"}).as_object().unwrap().clone(),
        json!({"b": "y", "a": 2}).as_object().unwrap().clone(),
        json!({"a": 3}).as_object().unwrap().clone(),
    ];
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "a,b\n1,x\ny,2\n3\n");
}

#[test]
fn test_table_null_cell() {
    let rows = vec![json!({"a": null, "b": true}).as_object().unwrap().clone()];
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n,true\n");
}

#[test]
fn test_write_table_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("classifications.csv");
    let records = vec![person("1", "Ann", "Lee")];

    assert_eq!(write_table(&path, &records).unwrap(), 1);
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert_eq!(text.lines().next().unwrap().split(',').count(), 15);
}
