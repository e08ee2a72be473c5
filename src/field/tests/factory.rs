use crate::error::{FieldError, TimeEncodingError};
use crate::field::*;

#[test]
fn test_create_dispatches_on_tag() {
    assert!(matches!(FieldFactory::create("v=0").unwrap(), Field::Version(_)));
    assert!(matches!(
        FieldFactory::create("m=audio 0 RTP/AVP 96").unwrap(),
        Field::Media(_)
    ));
    assert!(matches!(
        FieldFactory::create("z=2882844526 -1h").unwrap(),
        Field::TimeZone(_)
    ));
}

#[test]
fn test_every_known_tag_is_dispatched() {
    let lines = [
        "v=0",
        "o=- 0 0 IN IP4 127.0.0.1",
        "s=x",
        "i=x",
        "u=x",
        "e=x",
        "p=x",
        "c=IN IP4 127.0.0.1",
        "b=AS:1",
        "t=0 0",
        "r=1 1 0",
        "z=0 0",
        "k=prompt",
        "a=x",
        "m=audio 0 RTP/AVP 0",
    ];
    for (line, tag) in lines.iter().zip(FieldFactory::TAGS) {
        let field = FieldFactory::create(line).unwrap();
        assert_eq!(field.tag(), tag);
        assert_eq!(field.to_string(), *line);
    }
}

#[test]
fn test_unknown_tag() {
    assert_eq!(
        FieldFactory::create("x=foo").unwrap_err(),
        FieldError::NoSuchField('x')
    );
    assert!(!FieldFactory::is_known('x'));
    assert!(FieldFactory::is_known('k'));
}

#[test]
fn test_malformed_lines() {
    assert!(matches!(
        FieldFactory::create("").unwrap_err(),
        FieldError::Malformed(_)
    ));
    assert!(matches!(
        FieldFactory::create("v0").unwrap_err(),
        FieldError::Malformed(_)
    ));
    assert!(matches!(
        FieldFactory::create("v").unwrap_err(),
        FieldError::Malformed(_)
    ));
}

#[test]
fn test_field_errors_propagate() {
    assert!(matches!(
        FieldFactory::create("t=now 0").unwrap_err(),
        FieldError::Time(TimeEncodingError::InvalidTime(_))
    ));
    assert!(matches!(
        FieldFactory::create("b=AS").unwrap_err(),
        FieldError::Syntax { field: "bandwidth", .. }
    ));
}

#[test]
fn test_peek_tag() {
    assert_eq!(FieldFactory::peek_tag("m=audio"), Some('m'));
    assert_eq!(FieldFactory::peek_tag(""), None);
}
