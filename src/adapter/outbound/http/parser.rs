//! Body parsing for JSON, plain-text and RSS/Atom candidates.
//!
//! Each branch returns a normalized [`UpdateRecord`] or a parse failure for
//! that candidate.

use feed_rs::parser;
use serde_json::Value;

use super::settings::{CandidateConfig, SourceFormat, TextScan};
use crate::domain::{UpdateRecord, UNKNOWN_MARKER};
use crate::error::FetchError;

/// Concrete body format after resolving [`SourceFormat::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Text,
    Feed,
}

impl BodyFormat {
    /// Resolve the declared format, consulting `Content-Type` for `Auto`.
    #[must_use]
    pub fn resolve(declared: SourceFormat, content_type: Option<&str>) -> Self {
        match declared {
            SourceFormat::Json => Self::Json,
            SourceFormat::Text => Self::Text,
            SourceFormat::Feed => Self::Feed,
            SourceFormat::Auto => {
                let ct = content_type.unwrap_or_default().to_ascii_lowercase();
                if ct.contains("json") {
                    Self::Json
                } else if ct.contains("xml") || ct.contains("rss") || ct.contains("atom") {
                    Self::Feed
                } else {
                    Self::Text
                }
            }
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Feed => "feed",
        }
    }
}

/// Parse a successful response body into a record.
///
/// # Errors
///
/// Returns [`FetchError::Empty`] for blank bodies and [`FetchError::Parse`]
/// when the body does not match `format`.
pub fn parse_body(
    body: &str,
    format: BodyFormat,
    candidate: &CandidateConfig,
) -> Result<UpdateRecord, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::Empty);
    }

    match format {
        BodyFormat::Json => parse_json(body, candidate),
        BodyFormat::Text => parse_text(body, candidate),
        BodyFormat::Feed => parse_feed(body, candidate),
    }
}

fn parse_error(format: BodyFormat, reason: impl Into<String>) -> FetchError {
    FetchError::Parse {
        format: format.label(),
        reason: reason.into(),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Walk `pointer` through nested objects.
///
/// A key missing at any level yields `Ok(None)`. Anything else that is not
/// an object on the way down, or a leaf that is not a scalar, is an error.
fn lookup(value: &Value, pointer: &str) -> Result<Option<String>, FetchError> {
    let mut current = value;
    for segment in pointer.split('/').skip(1) {
        let Value::Object(map) = current else {
            return Err(parse_error(
                BodyFormat::Json,
                format!("expected an object along {pointer}"),
            ));
        };
        let key = segment.replace("~1", "/").replace("~0", "~");
        match map.get(&key) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }

    scalar(current)
        .map(Some)
        .ok_or_else(|| parse_error(BodyFormat::Json, format!("no scalar value at {pointer}")))
}

fn parse_json(body: &str, candidate: &CandidateConfig) -> Result<UpdateRecord, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| parse_error(BodyFormat::Json, e.to_string()))?;

    // A missing key falls back to the sentinel; an empty value is a failure.
    let marker = lookup(&value, &candidate.marker_pointer)?
        .unwrap_or_else(|| UNKNOWN_MARKER.to_string());
    if marker.trim().is_empty() {
        return Err(parse_error(
            BodyFormat::Json,
            format!("empty value at {}", candidate.marker_pointer),
        ));
    }

    match &candidate.indicator_pointer {
        Some(pointer) => {
            let indicator = lookup(&value, pointer)
                .ok()
                .flatten()
                .unwrap_or_else(|| "unknown".to_string());
            Ok(UpdateRecord::status(marker, indicator, &candidate.url))
        }
        None => Ok(UpdateRecord::version(marker, &candidate.url)),
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Extract the first token in `line` that starts with `prefix` and has a
/// non-empty suffix.
fn token_in_line<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.match_indices(prefix).find_map(|(start, _)| {
        let rest = &line[start..];
        let suffix_len = rest[prefix.len()..]
            .char_indices()
            .find(|(_, c)| !is_token_char(*c))
            .map_or(rest.len() - prefix.len(), |(i, _)| i);
        (suffix_len > 0).then(|| &rest[..prefix.len() + suffix_len])
    })
}

fn parse_text(body: &str, candidate: &CandidateConfig) -> Result<UpdateRecord, FetchError> {
    let prefix = candidate.version_prefix.as_str();
    let mut tokens = body.lines().filter_map(|line| token_in_line(line, prefix));

    let token = match candidate.text_scan {
        TextScan::First => tokens.next(),
        TextScan::Last => tokens.last(),
    };

    token
        .map(|version| UpdateRecord::version(version, &candidate.url))
        .ok_or_else(|| parse_error(BodyFormat::Text, format!("no `{prefix}` token found")))
}

fn parse_feed(body: &str, candidate: &CandidateConfig) -> Result<UpdateRecord, FetchError> {
    let feed = parser::parse(body.as_bytes())
        .map_err(|e| parse_error(BodyFormat::Feed, e.to_string()))?;

    let entry = feed
        .entries
        .into_iter()
        .next()
        .ok_or_else(|| parse_error(BodyFormat::Feed, "feed has no entries"))?;

    let link = entry.links.first().map(|l| l.href.clone());
    let marker = if entry.id.trim().is_empty() {
        link.clone()
            .ok_or_else(|| parse_error(BodyFormat::Feed, "entry has neither id nor link"))?
    } else {
        entry.id.clone()
    };
    let title = entry
        .title
        .map(|t| t.content)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_MARKER.to_string());

    Ok(UpdateRecord::entry(
        marker,
        title,
        link,
        entry.published.or(entry.updated),
        &candidate.url,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UpdateDetail;

    const STATUS_JSON: &str = r#"{
        "page": {"id": "abc", "name": "Roblox"},
        "status": {"indicator": "minor", "description": "Minor Service Outage"}
    }"#;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Updates</title>
    <link>https://example.com</link>
    <description>Release feed</description>
    <item>
      <guid>release-42</guid>
      <title>Release 42</title>
      <link>https://example.com/releases/42</link>
      <pubDate>Wed, 01 May 2024 12:30:00 GMT</pubDate>
    </item>
    <item>
      <guid>release-41</guid>
      <title>Release 41</title>
      <link>https://example.com/releases/41</link>
    </item>
  </channel>
</rss>"#;

    fn status_candidate() -> CandidateConfig {
        CandidateConfig::status_page("https://status.example.com/api/v2/status.json")
    }

    #[test]
    fn resolve_auto_uses_content_type() {
        assert_eq!(
            BodyFormat::resolve(SourceFormat::Auto, Some("application/json; charset=utf-8")),
            BodyFormat::Json
        );
        assert_eq!(
            BodyFormat::resolve(SourceFormat::Auto, Some("application/rss+xml")),
            BodyFormat::Feed
        );
        assert_eq!(
            BodyFormat::resolve(SourceFormat::Auto, Some("text/plain")),
            BodyFormat::Text
        );
        assert_eq!(BodyFormat::resolve(SourceFormat::Auto, None), BodyFormat::Text);
    }

    #[test]
    fn declared_format_wins_over_content_type() {
        assert_eq!(
            BodyFormat::resolve(SourceFormat::Feed, Some("text/plain")),
            BodyFormat::Feed
        );
    }

    #[test]
    fn json_status_extracts_description_and_indicator() {
        let record = parse_body(STATUS_JSON, BodyFormat::Json, &status_candidate()).unwrap();
        assert_eq!(record.marker, "Minor Service Outage");
        assert_eq!(record.indicator(), Some("minor"));
    }

    #[test]
    fn json_missing_fields_fall_back_to_sentinels() {
        let record = parse_body(r#"{"page": {}}"#, BodyFormat::Json, &status_candidate()).unwrap();
        assert_eq!(record.marker, UNKNOWN_MARKER);
        assert_eq!(record.indicator(), Some("unknown"));
    }

    #[test]
    fn json_empty_marker_is_failure() {
        let body = r#"{"status": {"description": "", "indicator": "none"}}"#;
        let err = parse_body(body, BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn json_without_indicator_pointer_is_version() {
        let mut candidate = CandidateConfig::with_format("https://x", SourceFormat::Json);
        candidate.marker_pointer = "/clientVersionUpload".into();
        let body = r#"{"version": "0.620.1", "clientVersionUpload": "version-1a2b3c4d"}"#;

        let record = parse_body(body, BodyFormat::Json, &candidate).unwrap();
        assert_eq!(record.marker, "version-1a2b3c4d");
        assert!(matches!(record.detail, UpdateDetail::Version { .. }));
    }

    #[test]
    fn null_status_object_is_failure() {
        let err = parse_body(r#"{"status": null}"#, BodyFormat::Json, &status_candidate())
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn top_level_array_is_failure() {
        let err = parse_body("[]", BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn null_marker_is_failure() {
        let body = r#"{"status": {"description": null, "indicator": "none"}}"#;
        let err = parse_body(body, BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn string_where_object_expected_is_failure() {
        let body = r#"{"status": "maintenance"}"#;
        let err = parse_body(body, BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn malformed_json_is_failure() {
        let err = parse_body("{not json", BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "json", .. }));
    }

    #[test]
    fn empty_body_is_failure() {
        let err = parse_body("  \n", BodyFormat::Json, &status_candidate()).unwrap_err();
        assert!(matches!(err, FetchError::Empty));
    }

    #[test]
    fn text_finds_first_version_token() {
        let candidate = CandidateConfig::with_format("https://x", SourceFormat::Text);
        let body = "New WindowsPlayer version-aaa111 at 5/1/2024 1:00:00 PM\n\
                    New WindowsPlayer version-bbb222 at 5/2/2024 1:00:00 PM\n";

        let record = parse_body(body, BodyFormat::Text, &candidate).unwrap();
        assert_eq!(record.marker, "version-aaa111");
    }

    #[test]
    fn text_last_scan_picks_latest_line() {
        let mut candidate = CandidateConfig::with_format("https://x", SourceFormat::Text);
        candidate.text_scan = TextScan::Last;
        let body = "version-aaa111, file version: 0, 1, 0\nversion-bbb222, file version: 0, 2, 0";

        let record = parse_body(body, BodyFormat::Text, &candidate).unwrap();
        assert_eq!(record.marker, "version-bbb222");
    }

    #[test]
    fn text_without_token_is_failure() {
        let candidate = CandidateConfig::with_format("https://x", SourceFormat::Text);
        let err = parse_body("hello\nversion-\n", BodyFormat::Text, &candidate).unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "text", .. }));
    }

    #[test]
    fn feed_uses_first_entry() {
        let candidate = CandidateConfig::with_format("https://example.com/feed", SourceFormat::Feed);
        let record = parse_body(RSS, BodyFormat::Feed, &candidate).unwrap();

        assert_eq!(record.marker, "release-42");
        assert_eq!(record.display_title, "Release 42");
        match record.detail {
            UpdateDetail::Entry { link, published } => {
                assert_eq!(link.as_deref(), Some("https://example.com/releases/42"));
                assert!(published.is_some());
            }
            other => panic!("expected entry detail, got {other:?}"),
        }
    }

    #[test]
    fn malformed_feed_is_failure() {
        let candidate = CandidateConfig::with_format("https://x", SourceFormat::Feed);
        let err = parse_body("<html><body>maintenance</body></html>", BodyFormat::Feed, &candidate)
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse { format: "feed", .. }));
    }

    #[test]
    fn feed_without_entries_is_failure() {
        let candidate = CandidateConfig::with_format("https://x", SourceFormat::Feed);
        let body = r#"<rss version="2.0"><channel><title>t</title><link>https://x</link><description>d</description></channel></rss>"#;
        let err = parse_body(body, BodyFormat::Feed, &candidate).unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn token_extraction_stops_at_separators() {
        assert_eq!(
            token_in_line("deployed version-abc123, ok", "version-"),
            Some("version-abc123")
        );
        assert_eq!(token_in_line("no token here", "version-"), None);
    }

    #[test]
    fn token_extraction_skips_bare_prefix() {
        assert_eq!(
            token_in_line("file version-: version-abc", "version-"),
            Some("version-abc")
        );
        assert_eq!(token_in_line("version- version-", "version-"), None);
    }
}
