//! Report trait - common interface for all report types

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::{ReportId, ReportKind};

/// Common trait for all FRT report documents
pub trait Report: Serialize + DeserializeOwned + 'static {
    /// The report kind this type represents
    const KIND: ReportKind;

    /// Get the report's unique ID
    fn id(&self) -> &ReportId;

    /// Get the equipment designation (report title)
    fn title(&self) -> &str;

    /// Get the report's status
    fn status(&self) -> Status;

    /// Get the creation timestamp
    fn created(&self) -> DateTime<Utc>;

    /// Get the author
    fn author(&self) -> &str;

    /// Recompute all derived fields from the raw readings
    fn recalculate(&mut self);
}

/// Status values common across report types
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Status {
    #[default]
    Draft,
    Review,
    Final,
    Obsolete,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Review => write!(f, "review"),
            Status::Final => write!(f, "final"),
            Status::Obsolete => write!(f, "obsolete"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Status::Draft),
            "review" => Ok(Status::Review),
            "final" => Ok(Status::Final),
            "obsolete" => Ok(Status::Obsolete),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_roundtrip() {
        for status in [Status::Draft, Status::Review, Status::Final, Status::Obsolete] {
            let parsed: Status = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_parse_unknown() {
        assert!("approved".parse::<Status>().is_err());
    }
}
