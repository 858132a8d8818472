//! Integration tests over partition files on disk
//!
//! Tests the full end-to-end flow: YAML pipeline → partition files → JSON/CSV output

use namsor_merge::engine::Pipeline;
use namsor_merge::loader::{load_pipeline, JoinStrategy};
use namsor_merge::output::{read_document, records_to_rows};
use namsor_merge::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Fixtures
// ============================================================================

const NAMES: &[(&str, &str, &str)] = &[
    ("1", "Maria", "Garcia"),
    ("2", "Wei", "Zhang"),
    ("3", "Aisha", "Bello"),
    ("4", "John", "Smith"),
    ("5", "Olga", "Ivanova"),
    ("6", "Kenji", "Sato"),
    ("7", "Emily", "Clark"),
];

const ORIGINS: &[(&str, &str)] = &[
    ("ES", "MX"),
    ("CN", "TW"),
    ("NG", "GH"),
    ("GB", "IE"),
    ("RU", "UA"),
    ("JP", "KR"),
    ("US", "CA"),
];

const GENDERS: &[&str] = &["female", "male", "female", "male", "female", "male", "female"];

fn write_partition(path: &Path, entries: Vec<Value>) {
    let doc = json!({ "personalNames": entries });
    fs::write(path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
}

fn ethnicity_entries(range: std::ops::Range<usize>) -> Vec<Value> {
    NAMES[range]
        .iter()
        .map(|(id, first, last)| {
            json!({
                "script": "LATIN",
                "id": id,
                "firstName": first,
                "lastName": last,
                "raceEthnicityAlt": "W_NL",
                "raceEthnicity": "A",
                "score": 9.5,
                "probabilityCalibrated": 0.625,
                "probabilityAltCalibrated": 0.25
            })
        })
        .collect()
}

fn nationality_entries(range: std::ops::Range<usize>) -> Vec<Value> {
    range
        .map(|i| {
            json!({
                "id": NAMES[i].0,
                "name": format!("{} {}", NAMES[i].1, NAMES[i].2),
                "countryOrigin": ORIGINS[i].0,
                "countryOriginAlt": ORIGINS[i].1,
                "probabilityCalibrated": 0.5,
                "probabilityAltCalibrated": 0.125
            })
        })
        .collect()
}

fn gender_entries(range: std::ops::Range<usize>) -> Vec<Value> {
    range
        .map(|i| {
            json!({
                "id": NAMES[i].0,
                "firstName": NAMES[i].1,
                "lastName": NAMES[i].2,
                "likelyGender": GENDERS[i],
                "genderScale": -0.9,
                "probabilityCalibrated": 0.875
            })
        })
        .collect()
}

/// Ethnicity and nationality split 3+4, gender split 5+2
fn fixture(join: &str) -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("ethnicity")).unwrap();
    fs::create_dir_all(root.join("nationality")).unwrap();
    fs::create_dir_all(root.join("genders")).unwrap();

    write_partition(&root.join("ethnicity/ethnicity_1_3.json"), ethnicity_entries(0..3));
    write_partition(&root.join("ethnicity/ethnicity_4_7.json"), ethnicity_entries(3..7));
    write_partition(
        &root.join("nationality/nationality_1_3.json"),
        nationality_entries(0..3),
    );
    write_partition(
        &root.join("nationality/nationality_4_7.json"),
        nationality_entries(3..7),
    );
    write_partition(&root.join("genders/genders_1_5.json"), gender_entries(0..5));
    write_partition(&root.join("genders/genders_6_7.json"), gender_entries(5..7));

    fs::write(
        root.join("pipeline.yaml"),
        format!(
            r"
name: staff-intake
join: {join}
inputs:
  ethnicity:
    - ethnicity/ethnicity_1_3.json
    - ethnicity/ethnicity_4_7.json
  nationality:
    - nationality/nationality_1_3.json
    - nationality/nationality_4_7.json
  gender:
    - genders/genders_1_5.json
    - genders/genders_6_7.json
output:
  json: out/staff_intake_classifications.json
  csv: out/staff_intake_classifications.csv
"
        ),
    )
    .unwrap();

    dir
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_run_record_counts_match_inputs() {
    for join in ["id", "position"] {
        let dir = fixture(join);
        let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
        let summary = Pipeline::new(def).run().unwrap();

        assert_eq!(summary.records, NAMES.len(), "{join} join");
        assert_eq!(summary.files_read(), 6);
    }
}

#[test]
fn test_document_round_trips_to_merged_records() {
    let dir = fixture("id");
    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    let pipeline = Pipeline::new(def);

    let merged = pipeline.merge().unwrap();
    let summary = pipeline.run().unwrap();
    let parsed = read_document(&summary.json_path).unwrap();

    assert_eq!(parsed, merged.into_records());
}

#[test]
fn test_merged_record_fields() {
    let dir = fixture("position");
    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    assert_eq!(def.join, JoinStrategy::Position);
    let summary = Pipeline::new(def).run().unwrap();

    let body = fs::read_to_string(&summary.json_path).unwrap();
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        doc["classifications"][6],
        json!({
            "id": "7",
            "firstName": "Emily",
            "lastName": "Clark",
            "ethnicity": "A",
            "ethnicityAccuracy": 0.625,
            "altEthnicity": "W_NL",
            "ethnicityAltAccuracy": 0.25,
            "countryOrigin": "US",
            "countryFullName": "United States",
            "countryOriginAccuracy": 0.5,
            "countryOriginAlt": "CA",
            "countryFullNameAlt": "Canada",
            "countryOriginAltAccuracy": 0.125,
            "gender": "female",
            "genderAccuracy": 0.875
        })
    );
    assert!(body.starts_with("{\n  \"classifications\": [\n    {\n      \"id\": \"1\","));
}

#[test]
fn test_table_shape() {
    let dir = fixture("id");
    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    let summary = Pipeline::new(def).run().unwrap();

    let records = read_document(&summary.json_path).unwrap();
    let key_count = records_to_rows(&records).unwrap()[0].len();

    let mut reader = csv::Reader::from_path(&summary.csv_path).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), key_count);
    assert_eq!(&header[0], "id");
    assert_eq!(&header[14], "genderAccuracy");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), records.len());
    assert!(rows.iter().all(|r| r.len() == key_count));
    assert_eq!(&rows[3][1], "John");
    assert_eq!(&rows[3][8], "United Kingdom");
    assert_eq!(&rows[3][13], "male");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_nationality_shortfall_fails_in_both_join_modes() {
    for join in ["id", "position"] {
        let dir = fixture(join);
        write_partition(
            &dir.path().join("nationality/nationality_4_7.json"),
            nationality_entries(3..6),
        );

        let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
        let json_path = def.json_path();
        let err = Pipeline::new(def).run().unwrap_err();

        assert!(err.is_merge_error(), "{join} join: {err}");
        assert!(!json_path.exists(), "{join} join wrote partial output");
    }
}

#[test]
fn test_gender_overflow_fails() {
    let dir = fixture("position");
    write_partition(&dir.path().join("genders/genders_6_7.json"), gender_entries(4..7));

    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    let err = Pipeline::new(def).run().unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            expected: 7,
            actual: 8,
            ..
        }
    ));
}

#[test]
fn test_id_join_tolerates_reordered_partitions() {
    let dir = fixture("id");
    let mut reversed = gender_entries(0..5);
    reversed.reverse();
    write_partition(&dir.path().join("genders/genders_1_5.json"), reversed);

    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    let merged = Pipeline::new(def).merge().unwrap();
    for (record, expected) in merged.iter().zip(GENDERS) {
        assert_eq!(record.gender.as_deref(), Some(*expected));
    }
}

#[test]
fn test_missing_field_fails() {
    let dir = fixture("id");
    fs::write(
        dir.path().join("genders/genders_6_7.json"),
        r#"{"personalNames": [{"id": "6", "probabilityCalibrated": 0.9}]}"#,
    )
    .unwrap();

    let def = load_pipeline(dir.path().join("pipeline.yaml")).unwrap();
    let err = Pipeline::new(def).run().unwrap_err();
    match err {
        Error::Decode { path, message } => {
            assert!(path.ends_with("genders_6_7.json"));
            assert!(message.contains("likelyGender"));
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }
}
