use std::fs;

use mrc_classify::Classifier;
use mrc_metadata::{
    METADATA_FILE_NAME, MetadataError, build_document, load_header, parse_timezone,
    write_document,
};
use mrc_model::{MetadataDocument, OverrideRule};

const HEADER: &str = r#"{
    "SeriesDescription": "AX T2 FLAIR",
    "Modality": "MR",
    "OperatorsName": "tech",
    "PatientSex": "F",
    "PatientAge": "030Y",
    "PatientName": "Doe^Jane",
    "StudyDate": "20170102",
    "StudyTime": "103000",
    "AcquisitionDate": "20170102",
    "AcquisitionTime": "104512.5",
    "EchoTime": "120",
    "PixelData": "AAAA",
    "[Unknown]": "x",
    "ReferencedImageSequence": [{"ReferencedSOPClassUID": "1.2"}]
}"#;

#[test]
fn header_to_metadata_document() {
    let dir = tempfile::tempdir().unwrap();
    let header_path = dir.path().join("header.json");
    fs::write(&header_path, HEADER).unwrap();

    let header = load_header(&header_path).unwrap();
    let tz = parse_timezone("America/Chicago").unwrap();
    let document = build_document(&header, &Classifier::new(), Some(tz));

    insta::assert_json_snapshot!(document, @r#"
    {
      "session": {
        "timestamp": "2017-01-02T10:30:00-06:00",
        "operator": "tech",
        "subject": {
          "sex": "female",
          "age": 946080000,
          "firstname": "Jane",
          "lastname": "Doe"
        }
      },
      "acquisition": {
        "instrument": "MR",
        "label": "AX T2 FLAIR",
        "timestamp": "2017-01-02T10:45:12-06:00",
        "classification": {
          "Intent": [
            "Structural"
          ],
          "Measurement": [
            "T2"
          ]
        },
        "metadata": {
          "AcquisitionDate": 20170102,
          "AcquisitionTime": 104512.5,
          "EchoTime": 120,
          "Modality": "MR",
          "OperatorsName": "tech",
          "PatientAge": "030Y",
          "PatientName": "Doe^Jane",
          "PatientSex": "F",
          "SeriesDescription": "AX T2 FLAIR",
          "StudyDate": 20170102,
          "StudyTime": 103000
        }
      }
    }
    "#);
}

#[test]
fn overrides_apply_to_series_description() {
    let header = serde_json::from_str(
        r#"{"SeriesDescription": "Localizer 3-plane", "PixelData": "AA"}"#,
    )
    .unwrap();
    let classifier =
        Classifier::with_overrides(&[OverrideRule::new("*localizer*", "Intent: Custom-Loc")]);
    let document = build_document(&header, &classifier, None);
    assert_eq!(
        serde_json::to_value(&document.acquisition.classification).unwrap(),
        serde_json::json!({"Intent": ["Custom-Loc"]})
    );
}

#[test]
fn written_document_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let header = serde_json::from_str(r#"{"SeriesDescription": "ScreenSave"}"#).unwrap();
    let document = build_document(&header, &Classifier::new(), None);

    let out = dir.path().join("out");
    let path = write_document(&document, &out).unwrap();
    assert_eq!(path, out.join(METADATA_FILE_NAME));

    let text = fs::read_to_string(&path).unwrap();
    let parsed: MetadataDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, document);
    assert_eq!(
        serde_json::to_value(&parsed.acquisition.classification).unwrap(),
        serde_json::json!({"Intent": ["Non-Image"]})
    );
}

#[test]
fn non_object_header_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        load_header(&path),
        Err(MetadataError::NotAnObject { .. })
    ));

    fs::write(&path, "{not json").unwrap();
    assert!(matches!(load_header(&path), Err(MetadataError::Json { .. })));
}
