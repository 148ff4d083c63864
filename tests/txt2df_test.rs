//! End-to-end tests for the txt2df conversion

use txtframe::{txt2df, FrameError, FrameReader, Namespace, Value};

#[test]
fn test_headers_and_row_count() {
    let frame = txt2df("--headers", "a,b,c\n1,2,3\n4,5,6\n", None).unwrap();
    assert_eq!(frame.names(), vec!["a", "b", "c"]);
    assert_eq!(frame.num_rows(), 2);
    assert_eq!(frame.column("b").unwrap(), &[Value::Int(2), Value::Int(5)]);
}

#[test]
fn test_auto_named_columns_without_headers() {
    let frame = txt2df("", "1,2,3\n4,5,6\n", None).unwrap();
    assert_eq!(frame.names(), vec!["column_0", "column_1", "column_2"]);
    assert_eq!(frame.num_rows(), 2);
}

#[test]
fn test_blank_lines_do_not_count_as_rows() {
    let frame = txt2df("--headers", "a,b\n\n1,2\n\n\n3,4\n", None).unwrap();
    assert_eq!(frame.num_rows(), 2);
}

#[test]
fn test_idempotence() {
    let line = "--headers";
    let cell = "a,b\n1,x\n2.5,y\n";
    let first = txt2df(line, cell, None).unwrap();
    let second = txt2df(line, cell, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_all_na_columns_dropped_by_default() {
    // trailing delimiters produce a final column of nothing but NA
    let frame = txt2df("--headers", "a,b,c\n1,2,\n3,4,\n", None).unwrap();
    assert_eq!(frame.names(), vec!["a", "b"]);
}

#[test]
fn test_keepna_retains_all_na_columns() {
    let frame = txt2df("--headers --keepna", "a,b,c\n1,2,\n3,4,\n", None).unwrap();
    assert_eq!(frame.names(), vec!["a", "b", "c"]);
    assert_eq!(frame.column("c").unwrap(), &[Value::Null, Value::Null]);
}

#[test]
fn test_binding_into_namespace() {
    let mut ns = Namespace::new();
    let frame = txt2df("--name foo", "1,2\n", Some(&mut ns)).unwrap();
    assert_eq!(ns.get("foo"), Some(&frame));
}

#[test]
fn test_binding_overwrites_existing_name() {
    let mut ns = Namespace::new();
    txt2df("--name foo", "1,2\n", Some(&mut ns)).unwrap();
    let second = txt2df("--name foo", "3,4,5\n", Some(&mut ns)).unwrap();
    assert_eq!(ns.get("foo"), Some(&second));
}

#[test]
fn test_no_namespace_means_no_binding_and_no_error() {
    let frame = txt2df("--name foo", "1,2\n", None).unwrap();
    assert_eq!(frame.num_rows(), 1);
}

#[test]
fn test_name_without_namespace_mapping_supplied() {
    let mut ns = Namespace::new();
    txt2df("", "1,2\n", Some(&mut ns)).unwrap();
    assert!(ns.is_empty());
}

#[test]
fn test_fallback_produces_widest_row_table() {
    // row 2 has 4 fields against 3 header fields: the strict attempt fails
    // and the lenient retry ignores the header row
    let frame = txt2df("--headers", "a,b,c\n1,2,3,4\n5,6,7\n", None).unwrap();
    assert_eq!(
        frame.names(),
        vec!["column_0", "column_1", "column_2", "column_3"]
    );
    assert_eq!(frame.num_rows(), 3);
    assert_eq!(
        frame.column("column_0").unwrap(),
        &[
            Value::Str("a".to_string()),
            Value::Int(1),
            Value::Int(5)
        ]
    );
    assert_eq!(
        frame.column("column_3").unwrap(),
        &[Value::Null, Value::Int(4), Value::Null]
    );
}

#[test]
fn test_fallback_without_headers_flag() {
    let frame = txt2df("", "1,2\n3,4,5\n", None).unwrap();
    assert_eq!(frame.names(), vec!["column_0", "column_1", "column_2"]);
    assert_eq!(frame.num_rows(), 2);
}

#[test]
fn test_invalid_flag_fails_without_binding() {
    let mut ns = Namespace::new();
    let err = txt2df("--bogus x", "1,2\n", Some(&mut ns)).unwrap_err();
    assert!(matches!(err, FrameError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid argument supplied. Use --help to see valid arguments."
    );
    assert!(ns.is_empty());
}

#[test]
fn test_empty_cell_propagates() {
    let err = txt2df("", "\n   \n", None).unwrap_err();
    assert!(matches!(err, FrameError::EmptyInput));
}

#[test]
fn test_custom_separator() {
    let frame = txt2df("-s |", "a|b\n1|2\n", None).unwrap();
    assert_eq!(frame.num_cols(), 2);
    assert_eq!(frame.column("column_1").unwrap()[1], Value::Int(2));
}

#[test]
fn test_tab_escape_separator() {
    let frame = txt2df("--sep \\t --headers", "a\tb\n1\t2\n", None).unwrap();
    assert_eq!(frame.names(), vec!["a", "b"]);
    assert_eq!(frame.column("b").unwrap(), &[Value::Int(2)]);
}

#[test]
fn test_leading_spaces_after_separator_are_trimmed() {
    let frame = txt2df("--headers", "a, b\n1, text\n", None).unwrap();
    assert_eq!(frame.names(), vec!["a", "b"]);
    assert_eq!(
        frame.column("b").unwrap(),
        &[Value::Str("text".to_string())]
    );
}

#[test]
fn test_quoted_fields_keep_separators() {
    let frame = txt2df("--headers", "name,notes\nalice,\"a, b\"\n", None).unwrap();
    assert_eq!(
        frame.column("notes").unwrap(),
        &[Value::Str("a, b".to_string())]
    );
}

#[test]
fn test_round_trip_through_csv() {
    let cell = "a,b\n1,x\n2,y\n";
    let frame = txt2df("--headers", cell, None).unwrap();
    let reparsed = FrameReader::from_text(&frame.to_csv(","))
        .headers(true)
        .read_frame()
        .unwrap();
    assert_eq!(frame, reparsed);
}

#[test]
fn test_file_and_text_agree() {
    use std::io::Write;

    let body = "a,b\n1,2\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();

    let from_file = FrameReader::from_path(file.path())
        .unwrap()
        .headers(true)
        .read_frame()
        .unwrap();
    let from_text = FrameReader::from_text(body)
        .headers(true)
        .read_frame()
        .unwrap();
    assert_eq!(from_file, from_text);
}
