//! Session description assembly.
//!
//! A single forward scan over the split lines with one line of lookahead.
//! Lines 0..3 are the fixed `v=`, `o=`, `s=` prefix. After that a `t=` line
//! opens a time block that swallows following `r=` (and, in compatible mode,
//! `t=`) lines, and an `m=` line opens a media block that swallows every line
//! up to the next `m=`.

use crate::config::{DuplicatePolicy, ParserConfig, TimeFolding};
use crate::description::{MediaDescription, SessionDescription, TimeDescription};
use crate::error::{Result, SdpError};
use crate::field::{
    Field, FieldFactory, MediaField, OriginField, SdpField, SessionNameField, TimeField,
    VersionField,
};
use crate::lines::split_lines;

/// Index-based cursor over the lines of a body
struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [&'a str], pos: usize) -> Self {
        Self { lines, pos }
    }

    /// Tag of the next line without consuming it
    fn peek_tag(&self) -> Option<char> {
        self.lines
            .get(self.pos)
            .and_then(|line| FieldFactory::peek_tag(line))
    }

    /// Consume the next line, returning its index
    fn advance(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.pos)?;
        let index = self.pos;
        self.pos += 1;
        Some((index, *line))
    }

    fn remaining(&self) -> Option<usize> {
        (self.pos < self.lines.len()).then_some(self.pos)
    }
}

fn create_field(index: usize, line: &str) -> Result<Field> {
    FieldFactory::create(line).map_err(|e| SdpError::at_line(index, e))
}

/// SDP parser
#[derive(Debug, Clone, Default)]
pub struct SdpParser {
    config: ParserConfig,
}

impl SdpParser {
    /// Parser with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with a custom configuration
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a complete session description.
    ///
    /// # Errors
    ///
    /// Returns the first [`SdpError`] encountered; no partial result is
    /// produced.
    pub fn parse(&self, text: &str) -> Result<SessionDescription> {
        let lines = split_lines(text);
        self.parse_lines(&lines)
    }

    /// Parse already split lines.
    ///
    /// # Errors
    ///
    /// See [`SdpParser::parse`].
    pub fn parse_lines(&self, lines: &[&str]) -> Result<SessionDescription> {
        if let Some(max) = self.config.max_lines {
            if lines.len() > max {
                return Err(SdpError::structural(
                    max,
                    format!("description has {} lines, limit is {max}", lines.len()),
                ));
            }
        }
        if lines.len() < 3 {
            return Err(SdpError::structural(
                lines.len(),
                format!("expected at least 3 lines, found {}", lines.len()),
            ));
        }

        let version = mandatory::<VersionField>(lines, 0)?;
        let origin = mandatory::<OriginField>(lines, 1)?;
        let name = mandatory::<SessionNameField>(lines, 2)?;
        let mut session = SessionDescription::assemble(version, origin, name, Vec::new());

        let mut cursor = LineCursor::new(lines, 3);
        while let Some((index, line)) = cursor.advance() {
            let field = create_field(index, line)?;
            tracing::trace!(line = index, tag = %field.tag(), "dispatching field");

            match field {
                Field::Time(time) => {
                    let block = self.time_block(&mut cursor, index, time)?;
                    session.times.push(block);
                }
                Field::Media(media) => {
                    let block = self.media_block(&mut cursor, index, media)?;
                    session.media.push(block);
                }
                Field::Info(info) => self.assign(&mut session.info, info, index)?,
                Field::Uri(uri) => self.assign(&mut session.uri, uri, index)?,
                Field::Email(email) => self.assign(&mut session.email, email, index)?,
                Field::Phone(phone) => self.assign(&mut session.phone, phone, index)?,
                Field::Connection(connection) => {
                    self.assign(&mut session.connection, connection, index)?;
                }
                Field::Bandwidth(bandwidth) => {
                    self.assign(&mut session.bandwidth, bandwidth, index)?;
                }
                Field::Key(key) => self.assign(&mut session.key, key, index)?,
                Field::TimeZone(zone) => session.time_zones.push(zone),
                Field::Attribute(attribute) => session.attributes.push(attribute),
                Field::Repeat(_) => {
                    return Err(SdpError::structural(
                        index,
                        "r= line does not follow a time block",
                    ));
                }
                Field::Version(_) | Field::Origin(_) | Field::SessionName(_) => {
                    return Err(SdpError::structural(
                        index,
                        format!("{}= line only allowed in the session prefix", field.tag()),
                    ));
                }
            }
        }

        if session.times.is_empty() {
            return Err(SdpError::structural(
                lines.len(),
                "at least one t= line is required",
            ));
        }

        tracing::debug!(
            lines = lines.len(),
            times = session.times.len(),
            media = session.media.len(),
            "parsed session description"
        );
        Ok(session)
    }

    /// Parse a standalone time block (`t=` followed by `r=`/`t=` lines).
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::Structural`] if the block does not start with
    /// `t=` or contains lines that do not fold into it.
    pub fn parse_time_description(&self, text: &str) -> Result<TimeDescription> {
        let lines = split_lines(text);
        let mut cursor = LineCursor::new(&lines, 0);
        let (index, line) = cursor
            .advance()
            .ok_or_else(|| SdpError::structural(0, "empty time block"))?;
        let Field::Time(time) = create_field(index, line)? else {
            return Err(SdpError::structural(index, "time block must start with t="));
        };

        let block = self.time_block(&mut cursor, index, time)?;
        expect_end(&cursor, "time block")?;
        Ok(block)
    }

    /// Parse a standalone media block (`m=` followed by media-level lines).
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::Structural`] if the block does not start with
    /// `m=` or contains a second `m=` line.
    pub fn parse_media_description(&self, text: &str) -> Result<MediaDescription> {
        let lines = split_lines(text);
        let mut cursor = LineCursor::new(&lines, 0);
        let (index, line) = cursor
            .advance()
            .ok_or_else(|| SdpError::structural(0, "empty media block"))?;
        let Field::Media(media) = create_field(index, line)? else {
            return Err(SdpError::structural(index, "media block must start with m="));
        };

        let block = self.media_block(&mut cursor, index, media)?;
        expect_end(&cursor, "media block")?;
        Ok(block)
    }

    fn folds_into_time_block(&self, tag: char) -> bool {
        match tag {
            'r' => true,
            't' => self.config.time_folding == TimeFolding::Compatible,
            _ => false,
        }
    }

    fn time_block(
        &self,
        cursor: &mut LineCursor<'_>,
        start: usize,
        time: TimeField,
    ) -> Result<TimeDescription> {
        let mut block = TimeDescription::new(time);

        while cursor.peek_tag().is_some_and(|tag| self.folds_into_time_block(tag)) {
            let Some((index, line)) = cursor.advance() else {
                break;
            };
            match create_field(index, line)? {
                Field::Repeat(repeat) => block.push_repeat(repeat),
                Field::Time(time) => {
                    tracing::debug!(
                        line = index,
                        block_start = start,
                        "folding adjacent t= line into the preceding time block"
                    );
                    block.push_folded_time(time);
                }
                other => {
                    return Err(SdpError::structural(
                        index,
                        format!("{}= line inside a time block", other.tag()),
                    ));
                }
            }
        }

        tracing::debug!(line = start, lines = block.line_count(), "time block");
        Ok(block)
    }

    fn media_block(
        &self,
        cursor: &mut LineCursor<'_>,
        start: usize,
        media: MediaField,
    ) -> Result<MediaDescription> {
        let mut block = MediaDescription::new(media);

        while cursor
            .peek_tag()
            .is_some_and(|tag| tag != MediaField::TAG)
        {
            let Some((index, line)) = cursor.advance() else {
                break;
            };
            match create_field(index, line)? {
                Field::Info(info) => self.assign(&mut block.info, info, index)?,
                Field::Connection(connection) => {
                    self.assign(&mut block.connection, connection, index)?;
                }
                Field::Bandwidth(bandwidth) => {
                    self.assign(&mut block.bandwidth, bandwidth, index)?;
                }
                Field::Key(key) => self.assign(&mut block.key, key, index)?,
                Field::Attribute(attribute) => block.attributes.push(attribute),
                other => {
                    return Err(SdpError::structural(
                        index,
                        format!("{}= line not permitted inside a media block", other.tag()),
                    ));
                }
            }
        }

        tracing::debug!(
            line = start,
            media = block.media().media(),
            attributes = block.attributes().len(),
            "media block"
        );
        Ok(block)
    }

    /// Store a singleton field, applying the duplicate policy
    fn assign<F: SdpField>(&self, slot: &mut Option<F>, field: F, index: usize) -> Result<()> {
        if slot.is_some() {
            match self.config.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(SdpError::structural(
                        index,
                        format!("duplicate {}= line", F::TAG),
                    ));
                }
                DuplicatePolicy::LastWins => {
                    tracing::warn!(
                        line = index,
                        tag = %F::TAG,
                        "duplicate field replaces earlier value"
                    );
                }
            }
        }
        *slot = Some(field);
        Ok(())
    }
}

/// Parse the field required at a fixed prefix position
fn mandatory<F: SdpField>(lines: &[&str], index: usize) -> Result<F> {
    let line = lines
        .get(index)
        .ok_or_else(|| SdpError::structural(index, format!("missing {} line", F::NAME)))?;

    let (tag, value) = FieldFactory::split(line).map_err(|e| {
        SdpError::structural(index, format!("expected {} line: {e}", F::NAME))
    })?;
    if tag != F::TAG {
        return Err(SdpError::structural(
            index,
            format!("expected {} line, found {tag}=", F::NAME),
        ));
    }

    F::parse_value(value)
        .map_err(|e| SdpError::structural(index, format!("invalid {} line: {e}", F::NAME)))
}

fn expect_end(cursor: &LineCursor<'_>, what: &str) -> Result<()> {
    match cursor.remaining() {
        Some(index) => Err(SdpError::structural(
            index,
            format!("line does not belong to the {what}"),
        )),
        None => Ok(()),
    }
}
