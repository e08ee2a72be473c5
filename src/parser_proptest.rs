use std::time::Duration;

use proptest::prelude::*;

use crate::SdpBuilder;
use crate::field::FieldFactory;
use crate::ntp::{self, NTP_UNIX_OFFSET, NtpTime};
use crate::parser::SdpParser;

proptest! {
    // Fuzz with random ASCII strings
    #[test]
    fn test_parse_no_panic_on_random_ascii(s in "[ -~\r\n]{0,512}") {
        let _ = SdpParser::new().parse(&s);
    }

    // Random lines behind a valid prefix reach the aggregator
    #[test]
    fn test_parse_no_panic_on_random_lines(
        lines in proptest::collection::vec("[a-z]=[ -~]{0,40}", 0..16)
    ) {
        let text = format!(
            "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\n{}",
            lines.join("\r\n")
        );
        let _ = SdpParser::new().parse(&text);
    }

    // Textual fields render back verbatim
    #[test]
    fn test_field_render_is_left_inverse(line in "[osiuepcak]=[!-~]{1,8}( [!-~]{1,8}){0,6}") {
        if let Ok(field) = FieldFactory::create(&line) {
            prop_assert_eq!(field.to_string(), line);
        }
    }

    // Numeric fields either reject a token or render it back verbatim
    #[test]
    fn test_numeric_field_render_is_left_inverse(line in prop_oneof![
        "v=[0-9]{1,4}",
        "t=[0-9]{1,10} [0-9]{1,10}",
        "b=[A-Z]{2}:[0-9]{1,6}",
        "m=audio [0-9]{1,5}(/[0-9]{1,2})? RTP/AVP [0-9]{1,3}",
        "r=[0-9]{1,6} [0-9]{1,6} [0-9]{1,6}",
        "z=[0-9]{1,10} -?[0-9]{1,5}",
    ]) {
        if let Ok(field) = FieldFactory::create(&line) {
            prop_assert_eq!(field.to_string(), line);
        }
    }

    #[test]
    fn test_minimal_session_roundtrip(
        username in "[a-z]{1,12}",
        session_id in 0u64..u64::MAX,
        name in "[A-Za-z0-9][ -~]{0,30}",
        start in prop_oneof![Just(0u64), NTP_UNIX_OFFSET..4_000_000_000u64],
        attribute in proptest::option::of("[a-z]{1,10}"),
    ) {
        let mut builder = SdpBuilder::new()
            .origin(&username, &session_id.to_string(), "1", "192.0.2.1")
            .session_name(&name)
            .timing(NtpTime::from_seconds(start).unwrap(), NtpTime::ZERO);
        if let Some(attribute) = &attribute {
            builder = builder.attribute(attribute, None);
        }
        let sdp = builder.build().unwrap();

        let reparsed = SdpParser::new().parse(&sdp.render()).unwrap();
        prop_assert_eq!(reparsed, sdp);
    }

    #[test]
    fn test_ntp_system_time_roundtrip(seconds in 1u64..8_000_000_000) {
        let ntp = NtpTime::from_seconds(seconds).unwrap();
        let instant = ntp.to_system_time().unwrap();
        prop_assert_eq!(NtpTime::from_system_time(instant).unwrap(), ntp);
    }

    #[test]
    fn test_duration_render_parses_back(seconds in any::<u64>()) {
        let duration = Duration::from_secs(seconds);
        prop_assert_eq!(ntp::parse_duration(&ntp::format_duration(duration)).unwrap(), duration);
    }
}
