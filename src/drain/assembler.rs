use super::allow_list::DrainAllowList;
use super::metadata::DrainMetadata;
use crate::config::Settings;
use crate::domain::{DrainError, Record};
use crate::parser::{Lines, ParseError, ParsedLine, SyslogHttpParser, pri};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Format of timestamps filled in for messages that carry none.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Turns a Logplex request body into records: PRI decoding, metadata merge
/// and drain filtering on top of [`SyslogHttpParser`].
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    parser: SyslogHttpParser,
    allow_list: DrainAllowList,
}

impl RecordAssembler {
    pub fn new(parser: SyslogHttpParser, allow_list: DrainAllowList) -> Self {
        Self { parser, allow_list }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, DrainError> {
        let parser = match settings.expression.as_deref() {
            Some(pattern) => SyslogHttpParser::with_expression(pattern)?,
            None => SyslogHttpParser::new()?,
        };
        let allow_list = DrainAllowList::new(settings.drain_ids.iter().cloned());
        Ok(Self::new(parser, allow_list))
    }

    pub fn parser(&self) -> &SyslogHttpParser {
        &self.parser
    }

    pub fn allow_list(&self) -> &DrainAllowList {
        &self.allow_list
    }

    /// Lazy stage: one item per surviving line, in request order.
    ///
    /// Fails up front when there is no content. Lines from other drains are
    /// skipped with a warning; a line that does not parse yields
    /// [`DrainError::LineParse`].
    pub fn records<'a>(
        &'a self,
        content: Option<&'a str>,
        metadata: &'a DrainMetadata,
    ) -> Result<Records<'a>, DrainError> {
        let content = content
            .filter(|c| !c.is_empty())
            .ok_or(DrainError::MissingContent)?;

        debug!(
            drain_token = metadata.drain_token.as_deref(),
            frame_id = metadata.frame_id.as_deref(),
            bytes = content.len(),
            "Decoding logplex batch"
        );

        Ok(Records {
            assembler: self,
            lines: self.parser.parse(content),
            content,
            metadata,
        })
    }

    /// Decode a whole batch. Any unparsable line rejects the batch.
    pub fn assemble(
        &self,
        content: Option<&str>,
        metadata: &DrainMetadata,
    ) -> Result<Vec<Record>, DrainError> {
        let records = self
            .records(content, metadata)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Assembled {} records", records.len());
        Ok(records)
    }

    fn build_record(&self, parsed: ParsedLine, metadata: &DrainMetadata) -> Record {
        let ParsedLine {
            event_time, fields, ..
        } = parsed;
        let decoded = pri::decode_field(fields.pri.as_deref());

        let time = match fields.time {
            Some(time) if !time.is_empty() => time,
            _ => DateTime::<Utc>::from_timestamp(event_time, 0)
                .unwrap_or_else(|| self.parser.now())
                .format(DEFAULT_TIME_FORMAT)
                .to_string(),
        };

        Record {
            pri: fields.pri,
            time,
            drain_id: metadata.drain_token.clone(),
            ident: fields.ident,
            pid: fields.pid,
            message: fields.message,
            facility: decoded.facility,
            priority: decoded.priority,
            extra: fields.extra,
        }
    }
}

/// Iterator returned by [`RecordAssembler::records`].
pub struct Records<'a> {
    assembler: &'a RecordAssembler,
    lines: Lines<'a>,
    content: &'a str,
    metadata: &'a DrainMetadata,
}

impl Iterator for Records<'_> {
    type Item = Result<Record, DrainError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let parsed = match self.lines.next()? {
                Ok(parsed) => parsed,
                Err(ParseError::NoMatch { line }) => {
                    return Some(Err(DrainError::LineParse {
                        line,
                        content: self.content.to_string(),
                    }));
                }
            };

            let raw = parsed.raw.clone();
            let record = self.assembler.build_record(parsed, self.metadata);

            if !self.assembler.allow_list.permits(record.drain_id.as_deref()) {
                warn!(
                    drain_id = record.drain_id.as_deref(),
                    "drain_id not match: {raw:?}"
                );
                continue;
            }

            return Some(Ok(record));
        }
    }
}
