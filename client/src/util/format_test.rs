use super::*;

#[test]
fn missing_timestamp_renders_placeholder() {
    assert_eq!(format_timestamp(None), "-");
}

#[test]
fn empty_timestamp_renders_placeholder() {
    assert_eq!(format_timestamp(Some("")), "-");
}

#[test]
fn sqlite_timestamp_renders_long_form() {
    assert_eq!(format_timestamp(Some("2024-01-15 10:30:00")), "15.01.2024, 10:30");
}

#[test]
fn iso_local_timestamp_renders_long_form() {
    assert_eq!(format_timestamp(Some("2024-01-15T10:30:45")), "15.01.2024, 10:30");
}

#[test]
fn rfc3339_timestamp_renders_long_form() {
    assert_eq!(format_timestamp(Some("2024-01-15T10:30:00Z")), "15.01.2024, 10:30");
}

#[test]
fn single_digit_fields_are_zero_padded() {
    assert_eq!(format_timestamp(Some("2024-03-05 07:08:09")), "05.03.2024, 07:08");
}

#[test]
fn unparsable_timestamp_passes_through() {
    assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
}
