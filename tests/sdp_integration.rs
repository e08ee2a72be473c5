//! End-to-end parse and render of complete session descriptions

mod common;

use std::time::{Duration, UNIX_EPOCH};

use sdp_session::prelude::*;
use sdp_session::{BandwidthField, TimeField, TimeFolding};

#[test]
fn test_parse_seminar() {
    common::init_logging();

    let sdp = parse(common::SEMINAR).unwrap();

    assert_eq!(sdp.origin().session_id(), "2890844526");
    assert_eq!(sdp.email().map(|e| e.text()), Some("j.doe@example.com (Jane Doe)"));
    assert_eq!(sdp.key().and_then(|k| k.key()), Some("secret"));

    let time = &sdp.times()[0];
    assert_eq!(time.time().start().as_seconds(), 2_873_397_496);
    let repeat = time.repeats().next().unwrap();
    assert_eq!(repeat.interval(), Duration::from_secs(7 * 86_400));
    assert_eq!(
        repeat.offsets(),
        &[Duration::ZERO, Duration::from_secs(25 * 3600)]
    );

    let zone = &sdp.time_zones()[0];
    assert_eq!(zone.adjustments()[0].offset(), -3600);

    assert_eq!(sdp.media_count(), 2);
    assert!(!sdp.media()[0].has_sub_fields());
    assert_eq!(
        sdp.media()[1].get_attribute("rtpmap"),
        Some("99 h263-1998/90000")
    );
}

#[test]
fn test_seminar_renders_canonically() {
    common::init_logging();

    let rendered = render(&parse(common::SEMINAR).unwrap());

    // compact durations come back as seconds
    assert!(rendered.contains("\r\nr=604800 3600 0 90000\r\n"));
    assert!(rendered.contains("\r\nz=2882844526 -3600 2898848070 0\r\n"));
    assert_eq!(parse(&rendered).unwrap(), parse(common::SEMINAR).unwrap());
}

#[test]
fn test_parse_raop_announce() {
    common::init_logging();

    let sdp: SessionDescription = common::RAOP_ANNOUNCE.parse().unwrap();
    let audio = sdp.find_media("audio").unwrap();

    assert_eq!(audio.media().protocol(), "RTP/AVP");
    assert_eq!(audio.media().formats(), &["96".to_string()]);
    assert_eq!(audio.get_attribute("rtpmap"), Some("96 AppleLossless"));
    assert_eq!(audio.get_attribute("min-latency"), Some("11025"));
    assert!(sdp.times()[0].time().is_permanent());
    assert_eq!(sdp.render(), common::RAOP_ANNOUNCE);
}

#[test]
fn test_builder_matches_parsed_announce() {
    common::init_logging();

    let built = SdpBuilder::new()
        .origin("iTunes", "3413821438", "0", "192.168.1.100")
        .session_name("iTunes")
        .connection("192.168.1.50")
        .timing(NtpTime::ZERO, NtpTime::ZERO)
        .media("audio", 0, "RTP/AVP", &["96"])
        .media_attribute("rtpmap", Some("96 AppleLossless"))
        .media_attribute("fmtp", Some("96 352 0 16 40 10 14 2 255 0 0 44100"))
        .media_attribute("min-latency", Some("11025"))
        .build()
        .unwrap();

    assert_eq!(built, parse(common::RAOP_ANNOUNCE).unwrap());
}

#[test]
fn test_strict_parser_on_adjacent_times() {
    common::init_logging();

    let text = format!("{}t=0 0\r\nt=3000000000 0\r\n", common::PREFIX);
    let config = ParserConfig::builder()
        .time_folding(TimeFolding::Strict)
        .build();

    assert_eq!(parse(&text).unwrap().times().len(), 1);
    assert_eq!(
        SdpParser::with_config(config).parse(&text).unwrap().times().len(),
        2
    );
}

#[test]
fn test_edit_and_render() {
    common::init_logging();

    let mut sdp = parse(common::RAOP_ANNOUNCE).unwrap();
    sdp.set_bandwidth(Some(BandwidthField::new("AS", 128)))
        .unwrap();
    let mut times = sdp.times().to_vec();
    times.push(TimeDescription::new(
        TimeField::from_system_times(Some(UNIX_EPOCH), None).unwrap(),
    ));
    sdp.set_times(times).unwrap();

    let rendered = sdp.render();
    assert!(rendered.contains("\r\nb=AS:128\r\nt=0 0\r\nt=2208988800 0\r\nm=audio"));

    // the default parser folds the adjacent t= lines back into one block
    let reparsed = parse(&rendered).unwrap();
    assert_eq!(reparsed.times().len(), 1);
    assert_eq!(reparsed.render(), rendered);
}

#[test]
fn test_copies_are_independent() {
    let original = parse(common::SEMINAR).unwrap();
    let mut copy = original.clone();
    copy.set_media(Vec::new()).unwrap();

    assert_eq!(original.media_count(), 2);
    assert_eq!(copy.media_count(), 0);
}

#[test]
fn test_parse_on_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse(common::SEMINAR).map(|sdp| sdp.media_count())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(2));
    }
}
