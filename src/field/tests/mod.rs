mod factory;

use super::*;

#[test]
fn test_split_tokens_single_spaces() {
    assert_eq!(split_tokens("a b c", "test").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_split_tokens_rejects_stray_whitespace() {
    assert!(split_tokens("a  b", "test").is_err());
    assert!(split_tokens(" a", "test").is_err());
    assert!(split_tokens("a ", "test").is_err());
    assert!(split_tokens("", "test").is_err());
}

#[test]
fn test_parse_number_digits_only() {
    assert_eq!(parse_number::<u16>("49170", "media", "port").unwrap(), 49170);
    assert!(parse_number::<u16>("+5", "media", "port").is_err());
    assert!(parse_number::<u16>("70000", "media", "port").is_err());
    assert!(parse_number::<u16>("", "media", "port").is_err());
    assert!(parse_number::<u16>("049170", "media", "port").is_err());
    assert_eq!(parse_number::<u16>("0", "media", "port").unwrap(), 0);
}

#[test]
fn test_to_line_matches_display() {
    let field = BandwidthField::new("CT", 1000);
    assert_eq!(field.to_line(), "b=CT:1000");
    assert_eq!(field.to_string(), field.to_line());
}

#[test]
fn test_field_enum_tag_and_display() {
    let field: Field = "a=recvonly".parse().unwrap();
    assert_eq!(field.tag(), 'a');
    assert_eq!(field.value(), "recvonly");
    assert_eq!(field.to_string(), "a=recvonly");
}
