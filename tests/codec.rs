use minitree::prelude::*;
use minitree::{DecodeError, Error};


#[test]
fn default_tables() {
    let codec = LabelCodec::default();
    assert_eq!(codec.n_columns(), 5);
    assert_eq!(codec.n_classes(), 3);

    assert_eq!(codec.encode_attribute("highschool", 0), Ok(0));
    assert_eq!(codec.encode_attribute("college", 0), Ok(1));
    assert_eq!(codec.encode_attribute("retired", 4), Ok(1));

    assert_eq!(codec.encode_class("highrisk"), Ok(1));
    assert_eq!(codec.encode_class("lowrisk"), Ok(3));
    assert_eq!(codec.decode_class(2), Ok("mediumrisk"));
}


#[test]
fn unknown_labels_are_errors() {
    let codec = LabelCodec::default();

    assert_eq!(
        codec.encode_attribute("college", 1),
        Err(DecodeError::UnknownAttributeLabel { column: 1, raw: "college".into() }),
    );
    assert_eq!(
        codec.encode_attribute("works", 5),
        Err(DecodeError::ColumnOutOfRange { column: 5, n_columns: 5 }),
    );
    assert_eq!(
        codec.encode_class("undetermined"),
        Err(DecodeError::UnknownClassLabel { raw: "undetermined".into() }),
    );
    assert_eq!(codec.decode_class(0), Err(DecodeError::UnknownClassCode { code: 0 }));
    assert_eq!(codec.decode_class(4), Err(DecodeError::UnknownClassCode { code: 4 }));
}


#[test]
fn error_messages_name_the_column_and_value() {
    let err = DecodeError::UnknownAttributeLabel { column: 3, raw: "robot".into() };
    assert_eq!(err.to_string(), "unrecognized label `robot` in attribute column 3");
}


#[test]
fn codec_from_json_file() {
    let codec = LabelCodec::from_json_file("tests/dataset/codec.json").unwrap();
    assert_eq!(codec.attributes()[1], AttributeLabels::new("warm", "cold"));
    assert_eq!(codec.classes(), ["play", "stay"]);

    let store = RecordReader::new(&codec)
        .parse_training("2 2 2\nsunny warm play\nrainy cold stay\n")
        .unwrap();
    assert_eq!(store[0], Record::new(vec![0, 0], 1));
    assert_eq!(store[1], Record::new(vec![1, 1], 2));
}


#[test]
fn malformed_codec_configuration() {
    let result = LabelCodec::from_json_str(r#"{ "attributes": [] }"#);
    assert!(matches!(result, Err(Error::Config(_))));
}
