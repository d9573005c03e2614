use alhootah::domain::suffix_for_mime;

#[test]
fn given_known_mime_types_when_mapping_then_returns_matching_suffix() {
    assert_eq!(suffix_for_mime("application/pdf"), ".pdf");
    assert_eq!(suffix_for_mime("text/plain"), ".txt");
    assert_eq!(suffix_for_mime("text/csv"), ".csv");
    assert_eq!(
        suffix_for_mime("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        ".xlsx"
    );
    assert_eq!(suffix_for_mime("application/vnd.ms-excel"), ".xls");
}

#[test]
fn given_unknown_mime_type_when_mapping_then_falls_back_to_bin() {
    assert_eq!(suffix_for_mime("application/x-unknown"), ".bin");
}
