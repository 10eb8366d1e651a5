//! Token redaction for logs and error messages.
//!
//! Pipedrive authenticates with a long-lived API token that, by default,
//! travels in the query string. Anything that renders a URL or echoes a
//! response body (tracing fields, error messages, `Debug` output) must go
//! through this module first.

use std::borrow::Cow;

use url::Url;

use crate::request::AUTH_QUERY_PARAM;

/// Placeholder written in place of secrets.
pub const REDACTED: &str = "[REDACTED]";

const MAX_MESSAGE_LENGTH: usize = 500;

/// Render a URL with the `api_token` query value replaced.
#[must_use]
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == AUTH_QUERY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == AUTH_QUERY_PARAM {
                (k.into_owned(), REDACTED.to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    // Keep the brackets readable in logs.
    redacted.to_string().replace("%5BREDACTED%5D", REDACTED)
}

/// Redact a URL given as text. Unparseable input is scrubbed as a message.
#[must_use]
pub fn redact_url_str(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => redact_url(&parsed),
        Err(_) => sanitize_message(url),
    }
}

/// Remove `api_token=...` and `x-api-token: ...` fragments from a message.
///
/// The rest of the text is kept as is, so remote error messages stay intact.
#[must_use]
pub fn scrub_tokens(message: &str) -> String {
    let mut scrubbed = message.to_string();

    if let Ok(pattern) = regex_lite::Regex::new(r"api_token=[^&\s\x22']+") {
        scrubbed = pattern
            .replace_all(&scrubbed, format!("api_token={REDACTED}").as_str())
            .into_owned();
    }

    if let Ok(pattern) = regex_lite::Regex::new(r"(?i)x-api-token:\s*[^\s\x22']+") {
        scrubbed = pattern
            .replace_all(&scrubbed, format!("x-api-token: {REDACTED}").as_str())
            .into_owned();
    }

    scrubbed
}

/// Shorten a message to 500 characters for display and logs.
#[must_use]
pub fn truncate_message(message: &str) -> Cow<'_, str> {
    if message.chars().count() <= MAX_MESSAGE_LENGTH {
        return Cow::Borrowed(message);
    }
    let mut short: String = message.chars().take(MAX_MESSAGE_LENGTH).collect();
    short.push_str("...[truncated]");
    Cow::Owned(short)
}

/// Scrub and truncate a message before it is logged.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    truncate_message(&scrub_tokens(message)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url_replaces_token() {
        let url =
            Url::parse("https://api.pipedrive.com/v1/deals?start=0&api_token=abc123").unwrap();
        let redacted = redact_url(&url);

        assert!(!redacted.contains("abc123"));
        assert_eq!(
            redacted,
            "https://api.pipedrive.com/v1/deals?start=0&api_token=[REDACTED]"
        );
    }

    #[test]
    fn test_redact_url_without_token_is_unchanged() {
        let url = Url::parse("https://api.pipedrive.com/v1/deals?start=0").unwrap();
        assert_eq!(redact_url(&url), "https://api.pipedrive.com/v1/deals?start=0");
    }

    #[test]
    fn test_redact_url_str_handles_garbage() {
        let redacted = redact_url_str("not a url api_token=abc123");
        assert!(!redacted.contains("abc123"));
    }

    #[test]
    fn test_sanitize_message_scrubs_tokens() {
        let msg = "failed GET /v1/deals?api_token=abc123&start=0 with x-api-token: abc123";
        let sanitized = sanitize_message(msg);

        assert!(!sanitized.contains("abc123"));
        assert!(sanitized.contains("api_token=[REDACTED]"));
        assert!(sanitized.contains("x-api-token: [REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_truncates() {
        let long = "é".repeat(600);
        let sanitized = sanitize_message(&long);

        assert!(sanitized.ends_with("...[truncated]"));
        assert_eq!(sanitized.chars().count(), 500 + "...[truncated]".len());
    }

    #[test]
    fn test_scrub_tokens_keeps_long_messages() {
        let long = format!("{} api_token=abc123", "x".repeat(600));
        let scrubbed = scrub_tokens(&long);

        assert!(!scrubbed.contains("abc123"));
        assert!(scrubbed.starts_with(&"x".repeat(600)));
        assert!(!scrubbed.ends_with("...[truncated]"));
    }

    #[test]
    fn test_truncate_message_borrows_short_text() {
        assert!(matches!(truncate_message("Deal not found"), Cow::Borrowed("Deal not found")));
    }

    #[test]
    fn test_sanitize_message_keeps_short_plain_text() {
        assert_eq!(sanitize_message("Note not found"), "Note not found");
    }
}
