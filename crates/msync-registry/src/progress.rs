//! Decoding of pull progress output.
//!
//! The local server streams newline-delimited JSON status events. Chunk
//! boundaries fall anywhere, so [`ProgressDecoder`] buffers partial lines
//! until their newline arrives. Lines that are not JSON events are passed
//! through as text.

use serde::Deserialize;

/// One status event from a pull stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullEvent {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub completed: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PullEvent {
    /// Whether the server reported the pull finished successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status == "success"
    }
}

/// A complete line of pull output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressLine {
    Event(PullEvent),
    Text(String),
}

/// Re-assembles progress lines across chunk boundaries.
#[derive(Debug, Default)]
pub struct ProgressDecoder {
    pending: Vec<u8>,
}

impl ProgressDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every line it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<ProgressLine> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Some(parsed) = parse_line(&line) {
                lines.push(parsed);
            }
        }
        lines
    }

    /// Flush a trailing line that had no newline.
    #[must_use]
    pub fn finish(mut self) -> Option<ProgressLine> {
        let rest = std::mem::take(&mut self.pending);
        parse_line(&rest)
    }
}

fn parse_line(raw: &[u8]) -> Option<ProgressLine> {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{')
        && let Ok(event) = serde_json::from_str::<PullEvent>(trimmed)
    {
        return Some(ProgressLine::Event(event));
    }
    Some(ProgressLine::Text(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(status: &str) -> ProgressLine {
        ProgressLine::Event(PullEvent {
            status: status.to_string(),
            ..PullEvent::default()
        })
    }

    #[test]
    fn splits_complete_lines() {
        let mut decoder = ProgressDecoder::new();
        let lines = decoder.push(b"{\"status\":\"pulling manifest\"}\n{\"status\":\"success\"}\n");
        assert_eq!(lines, vec![event("pulling manifest"), event("success")]);
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn joins_lines_split_across_chunks() {
        let mut decoder = ProgressDecoder::new();
        assert!(decoder.push(b"{\"status\":\"downloading\",\"total\":10,").is_empty());
        let lines = decoder.push(b"\"completed\":4,\"digest\":\"sha256:ab\"}\r\n");
        assert_eq!(
            lines,
            vec![ProgressLine::Event(PullEvent {
                status: "downloading".into(),
                digest: Some("sha256:ab".into()),
                total: Some(10),
                completed: Some(4),
                error: None,
            })]
        );
    }

    #[test]
    fn error_events_are_recognized() {
        let mut decoder = ProgressDecoder::new();
        let lines = decoder.push(b"{\"error\":\"pull model manifest: file does not exist\"}\n");
        let [ProgressLine::Event(event)] = lines.as_slice() else {
            panic!("expected one event, got {lines:?}");
        };
        assert!(!event.is_success());
        assert_eq!(
            event.error.as_deref(),
            Some("pull model manifest: file does not exist")
        );
    }

    #[test]
    fn plain_text_passes_through() {
        let mut decoder = ProgressDecoder::new();
        let lines = decoder.push(b"\nplain progress\n");
        assert_eq!(lines, vec![ProgressLine::Text("plain progress".into())]);
    }

    #[test]
    fn finish_flushes_unterminated_line() {
        let mut decoder = ProgressDecoder::new();
        assert!(decoder.push(b"{\"status\":\"success\"}").is_empty());
        assert_eq!(decoder.finish(), Some(event("success")));
    }
}
