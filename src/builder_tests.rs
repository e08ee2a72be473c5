use std::time::Duration;

use crate::error::{FieldError, SdpError};
use crate::ntp::NtpTime;
use crate::{SdpBuilder, SdpParser};

#[test]
fn test_builder() {
    let sdp = SdpBuilder::new()
        .origin("iTunes", "1234567890", "1", "192.168.1.100")
        .session_name("iTunes")
        .connection("192.168.1.50")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &["96"])
        .media_attribute("rtpmap", Some("96 AppleLossless"))
        .build()
        .unwrap();

    assert_eq!(sdp.origin().addr_type(), "IP4");
    assert_eq!(sdp.name().name(), "iTunes");
    assert_eq!(sdp.media_count(), 1);
    assert_eq!(
        sdp.media()[0].get_attribute("rtpmap"),
        Some("96 AppleLossless")
    );
}

#[test]
fn test_builder_encode() {
    let encoded = SdpBuilder::new()
        .origin("jdoe", "2890844526", "2890842807", "10.47.16.5")
        .session_name("SDP Seminar")
        .info("A Seminar on the session description protocol")
        .uri("http://www.example.com/seminars/sdp.pdf")
        .email("j.doe@example.com (Jane Doe)")
        .phone("+1 617 555-6011")
        .connection("224.2.17.12/127")
        .bandwidth("AS", 128)
        .timing(
            NtpTime::from_seconds(2_873_397_496).unwrap(),
            NtpTime::from_seconds(2_873_404_696).unwrap(),
        )
        .repeat(
            Duration::from_secs(604_800),
            Duration::from_secs(3600),
            &[Duration::ZERO, Duration::from_secs(90_000)],
        )
        .time_zone(&[(NtpTime::from_seconds(2_882_844_526).unwrap(), -3600)])
        .key("prompt", None)
        .attribute("recvonly", None)
        .media("audio", 49170, "RTP/AVP", &["0"])
        .media("video", 51372, "RTP/AVP", &["99"])
        .media_bandwidth("AS", 256)
        .media_attribute("rtpmap", Some("99 h263-1998/90000"))
        .encode()
        .unwrap();

    let expected = "v=0\r\n\
o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
s=SDP Seminar\r\n\
i=A Seminar on the session description protocol\r\n\
u=http://www.example.com/seminars/sdp.pdf\r\n\
e=j.doe@example.com (Jane Doe)\r\n\
p=+1 617 555-6011\r\n\
c=IN IP4 224.2.17.12/127\r\n\
b=AS:128\r\n\
t=2873397496 2873404696\r\n\
r=604800 3600 0 90000\r\n\
z=2882844526 -3600\r\n\
k=prompt\r\n\
a=recvonly\r\n\
m=audio 49170 RTP/AVP 0\r\n\
m=video 51372 RTP/AVP 99\r\n\
b=AS:256\r\n\
a=rtpmap:99 h263-1998/90000\r\n";
    assert_eq!(encoded, expected);

    let parsed = SdpParser::new().parse(&encoded).unwrap();
    assert_eq!(parsed.render(), encoded);
}

#[test]
fn test_builder_ipv6_origin() {
    let sdp = SdpBuilder::new()
        .origin("-", "1", "1", "fe80::1")
        .session_name("-")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &["96"])
        .media_connection("fe80::2")
        .build()
        .unwrap();

    assert_eq!(sdp.origin().addr_type(), "IP6");
    assert_eq!(
        sdp.media()[0].connection().map(|c| c.addr_type()),
        Some("IP6")
    );
}

#[test]
fn test_builder_missing_mandatory_values() {
    let err = SdpBuilder::new()
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .build()
        .unwrap_err();
    assert_eq!(err, SdpError::MandatoryValue("originator"));

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .build()
        .unwrap_err();
    assert_eq!(err, SdpError::MandatoryValue("session name"));

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .build()
        .unwrap_err();
    assert_eq!(err, SdpError::MandatoryValue("time description"));
}

#[test]
fn test_builder_records_first_invalid_step() {
    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .repeat(Duration::from_secs(1), Duration::from_secs(1), &[Duration::ZERO])
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &[])
        .build()
        .unwrap_err();
    assert_eq!(err, SdpError::MandatoryValue("time description"));

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media_attribute("rtpmap", Some("96 L16/44100/2"))
        .build()
        .unwrap_err();
    assert_eq!(err, SdpError::MandatoryValue("media description"));

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .time_zone(&[])
        .build()
        .unwrap_err();
    assert!(
        matches!(err, SdpError::InvalidValue(FieldError::Syntax { field: "time zone", .. })),
        "{err:?}"
    );
}

#[test]
fn test_builder_keeps_underlying_field_error() {
    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &[])
        .build()
        .unwrap_err();
    let SdpError::InvalidValue(source) = &err else {
        panic!("expected invalid value, got {err:?}");
    };
    assert_eq!(
        source,
        &FieldError::syntax("media", "at least one format required")
    );

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .repeat(Duration::from_secs(1), Duration::from_secs(1), &[])
        .build()
        .unwrap_err();
    assert!(
        matches!(err, SdpError::InvalidValue(FieldError::Syntax { field: "repeat", .. })),
        "{err:?}"
    );
}

#[test]
fn test_builder_rejects_values_that_would_inject_lines() {
    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x\r\nx=evil")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .encode()
        .unwrap_err();
    assert!(matches!(err, SdpError::InvalidValue(_)), "{err:?}");

    let err = SdpBuilder::new()
        .origin("jane doe", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .build()
        .unwrap_err();
    assert!(matches!(err, SdpError::InvalidValue(_)), "{err:?}");

    let err = SdpBuilder::new()
        .origin("-", "1", "1", "127.0.0.1")
        .session_name("x")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &["96"])
        .media_attribute("rtpmap", Some("96 L16\r\na=evil"))
        .encode()
        .unwrap_err();
    assert!(matches!(err, SdpError::InvalidValue(_)), "{err:?}");
}
