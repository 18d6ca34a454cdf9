use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// `SEVERITY:CODE`, case-insensitive and unanchored. Non-unicode mode keeps `\w` and the case folding ASCII-only.
    static ref TOKEN_REGEX: Regex = Regex::new(r"(?i-u)(ERROR|WARN):(\w+)").unwrap();
}

/// Severity tag in front of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warn,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
        }
    }

    fn from_match(text: &str) -> Self {
        if text.eq_ignore_ascii_case("WARN") {
            Severity::Warn
        } else {
            Severity::Error
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity and code pulled out of a single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub code: String,
}

impl LogEntry {
    /// Find the first `ERROR:` or `WARN:` token in the line, returning `None` if there isn't one.
    /// The code is upper-cased regardless of how it was written.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = TOKEN_REGEX.captures(line)?;
        Some(Self {
            severity: Severity::from_match(&captures[1]),
            code: captures[2].to_ascii_uppercase(),
        })
    }
}

pub fn extract(line: &str) -> Option<LogEntry> {
    LogEntry::parse(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(severity: Severity, code: &str) -> Option<LogEntry> {
        Some(LogEntry {
            severity,
            code: code.to_owned(),
        })
    }

    #[test]
    fn test_no_token() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("all systems nominal"), None);
        assert_eq!(extract("ERROR without a colon"), None);
        assert_eq!(extract("ERROR: space before code"), None);
        assert_eq!(extract("INFO:STARTED"), None);
        assert_eq!(extract("WARNING:DISK"), None);
    }

    #[test]
    fn test_case_insensitive() {
        for line in ["error:abc123", "ERROR:ABC123", "Error:AbC123"] {
            assert_eq!(extract(line), entry(Severity::Error, "ABC123"), "line: {}", line);
        }
        assert_eq!(extract("wArN:low_disk"), entry(Severity::Warn, "LOW_DISK"));
    }

    #[test]
    fn test_unanchored() {
        assert_eq!(extract("MYERROR:X"), entry(Severity::Error, "X"));
        assert_eq!(extract("[db]WARN:conn_reset;"), entry(Severity::Warn, "CONN_RESET"));
    }

    #[test]
    fn test_greedy_code() {
        assert_eq!(extract("ERROR:E_42abc-rest"), entry(Severity::Error, "E_42ABC"));
        assert_eq!(extract("ERROR:TIMEOUT."), entry(Severity::Error, "TIMEOUT"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract("ERROR:A then WARN:B"), entry(Severity::Error, "A"));
        assert_eq!(extract("WARN:B then ERROR:A"), entry(Severity::Warn, "B"));
    }

    #[test]
    fn test_skips_false_start() {
        // `WARNING:` is not a token, but a later one on the same line still is
        assert_eq!(extract("WARNING:DISK ERROR:FULL"), entry(Severity::Error, "FULL"));
    }

    #[test]
    fn test_ascii_word_characters_only() {
        assert_eq!(extract("ERROR:caf\u{e9}"), entry(Severity::Error, "CAF"));
        assert_eq!(extract("ERROR:\u{e9}t\u{e9}"), None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warn.to_string(), "WARN");
    }
}
