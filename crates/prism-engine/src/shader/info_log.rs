use std::fmt;

/// Maximum number of characters kept from a device diagnostic.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Bounded, never-empty diagnostic text for a failed compile or link.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InfoLog(String);

impl InfoLog {
    /// Keeps at most [`INFO_LOG_CAPACITY`] characters of `text`.
    ///
    /// Blank input becomes a placeholder so a failure is never reported
    /// silently.
    pub fn new(text: &str) -> Self {
        let text = text.trim_end();
        if text.trim().is_empty() {
            return Self("no diagnostic reported by the device".to_string());
        }

        let end = text
            .char_indices()
            .nth(INFO_LOG_CAPACITY)
            .map_or(text.len(), |(i, _)| i);

        Self(text[..end].to_string())
    }

    pub fn from_error(err: &wgpu::Error) -> Self {
        Self::new(&err.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept() {
        assert_eq!(InfoLog::new("expected `;`\n").as_str(), "expected `;`");
    }

    #[test]
    fn long_text_is_bounded() {
        let text = "x".repeat(INFO_LOG_CAPACITY * 2);
        assert_eq!(InfoLog::new(&text).as_str().chars().count(), INFO_LOG_CAPACITY);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(INFO_LOG_CAPACITY + 3);
        let log = InfoLog::new(&text);
        assert_eq!(log.as_str().chars().count(), INFO_LOG_CAPACITY);
        assert!(log.as_str().chars().all(|c| c == 'é'));
    }

    #[test]
    fn blank_text_gets_placeholder() {
        assert!(!InfoLog::new("").as_str().is_empty());
        assert!(!InfoLog::new(" \n\t").as_str().is_empty());
    }
}
