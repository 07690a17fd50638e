//! Tests for loading documents handed over by the text stages.

use archlink_model::{Document, MappingId, MappingKind, ModelError};

const DOCUMENT: &str = r#"{
    "name": "teastore",
    "text": [
        { "text": "The", "position": 0, "sentence_no": 0 },
        { "text": "Database", "position": 1, "sentence_no": 0 },
        { "text": "component", "position": 2, "sentence_no": 0 }
    ],
    "mappings": [
        { "id": 1, "reference": "Database", "words": [1], "name_confidence": 0.9 },
        { "id": 2, "reference": "component", "words": [2], "type_confidence": 0.8 }
    ]
}"#;

#[test]
fn document_loads_and_indexes_mappings() {
    let document: Document = serde_json::from_str(DOCUMENT).expect("parse document");
    let (text, state) = document.into_parts().expect("valid document");

    assert_eq!(text.len(), 3);
    assert_eq!(state.mappings().len(), 2);

    let names: Vec<_> = state.mappings_by_word_and_kind(1, MappingKind::Name).collect();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].reference, "Database");
    // occurrences default to empty when omitted from the JSON
    assert!(names[0].occurrences.is_empty());

    assert_eq!(state.types().count(), 1);
    assert!(state.mapping(MappingId::new(2)).is_some());
    assert_eq!(state.mappings_by_word(0).count(), 0);
}

#[test]
fn mapping_with_unknown_word_is_rejected() {
    let json = DOCUMENT.replace(r#""words": [2]"#, r#""words": [9]"#);
    let document: Document = serde_json::from_str(&json).expect("parse document");
    let err = document.into_parts().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownWord {
            mapping: MappingId::new(2),
            position: 9
        }
    );
}

#[test]
fn occurrence_span_with_unknown_word_is_rejected() {
    let json = DOCUMENT.replace(
        r#""words": [1],"#,
        r#""words": [1], "occurrences": [{ "text": "Database x", "words": [1, 7] }],"#,
    );
    let document: Document = serde_json::from_str(&json).expect("parse document");
    assert_eq!(
        document.into_parts().unwrap_err(),
        ModelError::UnknownWord {
            mapping: MappingId::new(1),
            position: 7
        }
    );
}

#[test]
fn duplicate_mapping_ids_are_rejected() {
    let json = DOCUMENT.replace(r#""id": 2"#, r#""id": 1"#);
    let document: Document = serde_json::from_str(&json).expect("parse document");
    assert_eq!(
        document.into_parts().unwrap_err(),
        ModelError::DuplicateMappingId(MappingId::new(1))
    );
}

#[test]
fn duplicate_word_positions_fail_deserialization() {
    let json = DOCUMENT.replace(r#""position": 2"#, r#""position": 1"#);
    assert!(serde_json::from_str::<Document>(&json).is_err());
}
