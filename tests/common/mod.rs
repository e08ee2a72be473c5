//! Common test utilities and fixtures
#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialize test logging (call once per test module)
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sdp_session=debug"));

        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Mandatory prefix shared by most fixtures
pub const PREFIX: &str = "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\n";

/// RFC 4566 section 5 example, with time zones and key added
pub const SEMINAR: &str = "v=0\r\n\
o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
s=SDP Seminar\r\n\
i=A Seminar on the session description protocol\r\n\
u=http://www.example.com/seminars/sdp.pdf\r\n\
e=j.doe@example.com (Jane Doe)\r\n\
c=IN IP4 224.2.17.12/127\r\n\
t=2873397496 2873404696\r\n\
r=7d 1h 0 25h\r\n\
z=2882844526 -1h 2898848070 0\r\n\
k=clear:secret\r\n\
a=recvonly\r\n\
m=audio 49170 RTP/AVP 0\r\n\
m=video 51372 RTP/AVP 99\r\n\
a=rtpmap:99 h263-1998/90000\r\n";

/// RAOP announce body as sent by `iTunes`
pub const RAOP_ANNOUNCE: &str = "v=0\r\n\
o=iTunes 3413821438 0 IN IP4 192.168.1.100\r\n\
s=iTunes\r\n\
c=IN IP4 192.168.1.50\r\n\
t=0 0\r\n\
m=audio 0 RTP/AVP 96\r\n\
a=rtpmap:96 AppleLossless\r\n\
a=fmtp:96 352 0 16 40 10 14 2 255 0 0 44100\r\n\
a=min-latency:11025\r\n";
