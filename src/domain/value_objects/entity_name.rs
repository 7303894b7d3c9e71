use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("search job has no result set named {0:?}")]
pub struct UnknownEntity(pub String);

/// Named, ordered result collections exposed by a search job.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntityName {
    Results,
    Events,
    ResultsPreview,
}

impl EntityName {
    pub const ALL: [EntityName; 3] = [
        EntityName::Results,
        EntityName::Events,
        EntityName::ResultsPreview,
    ];

    /// Name used both in requests and in the platform's REST paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityName::Results => "results",
            EntityName::Events => "events",
            EntityName::ResultsPreview => "results_preview",
        }
    }
}

impl FromStr for EntityName {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| UnknownEntity(s.to_string()))
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_names_when_parsed_should_round_trip() {
        for entity in EntityName::ALL {
            assert_eq!(entity.as_str().parse::<EntityName>().unwrap(), entity);
        }
    }

    #[test]
    fn given_unknown_name_when_parsed_should_report_it() {
        let err = "timeline".parse::<EntityName>().unwrap_err();
        assert_eq!(err, UnknownEntity("timeline".to_string()));
    }

    #[test]
    fn given_wrong_case_when_parsed_should_fail() {
        assert!("Results".parse::<EntityName>().is_err());
    }
}
