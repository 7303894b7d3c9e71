use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("sid not passed!")]
pub struct MissingSearchId;

/// Identifier of a search job on the search platform.
///
/// Opaque to this service; the only rule is that it is never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SearchId(String);

impl SearchId {
    /// Accept a caller-supplied sid, rejecting absent or empty values.
    pub fn parse(raw: Option<&str>) -> Result<Self, MissingSearchId> {
        match raw {
            Some(sid) if !sid.is_empty() => Ok(Self(sid.to_string())),
            _ => Err(MissingSearchId),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_non_empty_sid_when_parsed_should_keep_value_verbatim() {
        let sid = SearchId::parse(Some("scheduler__admin__search_RMD5_at_1357016400_42")).unwrap();
        assert_eq!(sid.as_str(), "scheduler__admin__search_RMD5_at_1357016400_42");
    }

    #[test]
    fn given_empty_sid_when_parsed_should_fail() {
        assert_eq!(SearchId::parse(Some("")), Err(MissingSearchId));
    }

    #[test]
    fn given_absent_sid_when_parsed_should_fail() {
        assert_eq!(SearchId::parse(None), Err(MissingSearchId));
    }

    #[test]
    fn given_whitespace_sid_when_parsed_should_be_accepted() {
        // Only emptiness is rejected; the platform decides whether " " exists.
        assert!(SearchId::parse(Some(" ")).is_ok());
    }
}
