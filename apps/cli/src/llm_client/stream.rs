//! Incremental consumption of the Anthropic SSE stream.
//!
//! The Messages API emits server-sent events, one JSON payload per `data:`
//! line. Only three shapes matter here: `content_block_delta` carrying a
//! `text_delta`, `message_stop`, and `error`. Everything else
//! (`message_start`, `content_block_start`, `ping`, ...) is ignored.
//!
//! `SseBuffer` owns the reassembly problem: network chunks split lines at
//! arbitrary byte boundaries, so bytes are buffered until a full line is
//! available.

use bytes::{Buf, BytesMut};
use serde::Deserialize;

/// A decoded event relevant to stream consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A chunk of generated text to append.
    TextDelta(String),
    /// The model finished the message.
    MessageStop,
    /// The API reported an in-stream error.
    Error(String),
}

#[derive(Debug, Deserialize)]
struct SsePayload {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    delta: Option<SseDelta>,
    #[serde(default)]
    error: Option<SseErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SseDelta {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SseErrorBody {
    message: String,
}

/// Reassembles SSE lines from raw byte chunks and decodes the payloads.
#[derive(Debug, Default)]
pub struct SseBuffer {
    buf: BytesMut,
}

impl SseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one network chunk and returns every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line = self.buf.split_to(pos + 1);
            let line = String::from_utf8_lossy(line.chunk());
            if let Some(event) = decode_line(line.trim_end()) {
                events.push(event);
            }
        }
        events
    }
}

/// Decodes a single complete SSE line. Non-`data:` lines, keepalives, and
/// payload kinds the consumer doesn't care about all decode to `None`.
fn decode_line(line: &str) -> Option<StreamEvent> {
    let data = line.strip_prefix("data:")?.trim_start();
    if data.is_empty() {
        return None;
    }

    let payload: SsePayload = serde_json::from_str(data).ok()?;
    match payload.kind.as_str() {
        "content_block_delta" => payload
            .delta
            .and_then(|d| d.text)
            .filter(|t| !t.is_empty())
            .map(StreamEvent::TextDelta),
        "message_stop" => Some(StreamEvent::MessageStop),
        "error" => Some(StreamEvent::Error(
            payload
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "unknown stream error".to_string()),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: &str = "data: {\"type\":\"content_block_delta\",\"index\":0,\
        \"delta\":{\"type\":\"text_delta\",\"text\":\"Dear Hiring Manager\"}}\n";

    #[test]
    fn test_text_delta_decodes() {
        let mut buffer = SseBuffer::new();
        let events = buffer.push(DELTA.as_bytes());
        assert_eq!(
            events,
            vec![StreamEvent::TextDelta("Dear Hiring Manager".to_string())]
        );
    }

    #[test]
    fn test_line_split_across_chunks_is_reassembled() {
        let mut buffer = SseBuffer::new();
        let (head, tail) = DELTA.split_at(25);

        assert!(buffer.push(head.as_bytes()).is_empty());
        let events = buffer.push(tail.as_bytes());
        assert_eq!(
            events,
            vec![StreamEvent::TextDelta("Dear Hiring Manager".to_string())]
        );
    }

    #[test]
    fn test_multiple_events_in_one_chunk() {
        let chunk = format!("{DELTA}data: {{\"type\":\"message_stop\"}}\n");
        let mut buffer = SseBuffer::new();
        let events = buffer.push(chunk.as_bytes());
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], StreamEvent::MessageStop);
    }

    #[test]
    fn test_event_and_ping_lines_are_ignored() {
        let mut buffer = SseBuffer::new();
        let events = buffer.push(
            b"event: content_block_delta\ndata: {\"type\":\"ping\"}\n\n",
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        let mut buffer = SseBuffer::new();
        let crlf = DELTA.replace('\n', "\r\n");
        let events = buffer.push(crlf.as_bytes());
        assert_eq!(
            events,
            vec![StreamEvent::TextDelta("Dear Hiring Manager".to_string())]
        );
    }

    #[test]
    fn test_error_payload_surfaces_message() {
        let mut buffer = SseBuffer::new();
        let events = buffer.push(
            b"data: {\"type\":\"error\",\"error\":{\"type\":\"overloaded_error\",\
              \"message\":\"Overloaded\"}}\n",
        );
        assert_eq!(events, vec![StreamEvent::Error("Overloaded".to_string())]);
    }

    #[test]
    fn test_malformed_data_line_is_skipped() {
        let mut buffer = SseBuffer::new();
        assert!(buffer.push(b"data: {not json}\n").is_empty());
        // The buffer keeps working afterwards.
        let events = buffer.push(DELTA.as_bytes());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_empty_text_delta_is_dropped() {
        let mut buffer = SseBuffer::new();
        let events = buffer.push(
            b"data: {\"type\":\"content_block_delta\",\
              \"delta\":{\"type\":\"text_delta\",\"text\":\"\"}}\n",
        );
        assert!(events.is_empty());
    }
}
