//! Aggregate description types: session, time blocks and media blocks

mod media;
mod session;
mod time;

#[cfg(test)]
mod tests;

pub use media::MediaDescription;
pub use session::SessionDescription;
pub use time::{TimeDescription, TimeLine};
