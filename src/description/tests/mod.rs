
use super::*;
use crate::field::{OriginField, SessionNameField, TimeField};

/// Minimal valid session used across description tests
pub(super) fn minimal_session() -> SessionDescription {
    SessionDescription::new(
        OriginField::new("jdoe", "2890844526", "2890842807", "IN", "IP4", "10.47.16.5"),
        SessionNameField::new("SDP Seminar"),
        vec![TimeDescription::new(TimeField::permanent())],
    )
    .unwrap()
}

#[test]
fn test_minimal_session_renders_mandatory_lines() {
    assert_eq!(
        minimal_session().render(),
        "v=0\r\no=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\ns=SDP Seminar\r\nt=0 0\r\n"
    );
}
