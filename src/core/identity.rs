//! Report identity system using type-prefixed ULIDs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Report type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportKind {
    /// Transformer inspection and test report
    Xfmr,
    /// Switchgear inspection and test report
    Swgr,
    /// Panelboard inspection and test report
    Pnl,
    /// Motor starter inspection and test report
    Mtrs,
}

impl ReportKind {
    /// Get the string representation of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Xfmr => "XFMR",
            ReportKind::Swgr => "SWGR",
            ReportKind::Pnl => "PNL",
            ReportKind::Mtrs => "MTRS",
        }
    }

    /// Human-readable equipment name
    pub fn equipment_name(&self) -> &'static str {
        match self {
            ReportKind::Xfmr => "Transformer",
            ReportKind::Swgr => "Switchgear",
            ReportKind::Pnl => "Panelboard",
            ReportKind::Mtrs => "Motor Starter",
        }
    }

    /// Get all report kinds
    pub fn all() -> &'static [ReportKind] {
        &[
            ReportKind::Xfmr,
            ReportKind::Swgr,
            ReportKind::Pnl,
            ReportKind::Mtrs,
        ]
    }

    /// Try to determine the report kind from a filename like "XFMR-xxx.frt.yaml"
    pub fn from_filename(filename: &str) -> Option<Self> {
        let upper = filename.to_uppercase();
        Self::all()
            .iter()
            .find(|kind| upper.starts_with(&format!("{}-", kind.as_str())))
            .copied()
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "XFMR" => Ok(ReportKind::Xfmr),
            "SWGR" => Ok(ReportKind::Swgr),
            "PNL" => Ok(ReportKind::Pnl),
            "MTRS" => Ok(ReportKind::Mtrs),
            _ => Err(IdParseError::InvalidPrefix(s.to_string())),
        }
    }
}

/// A unique report identifier combining a type prefix and ULID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportId {
    kind: ReportKind,
    ulid: Ulid,
}

impl ReportId {
    /// Create a new ReportId with the given kind
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            ulid: Ulid::new(),
        }
    }

    /// Create a ReportId from a kind and existing ULID
    pub fn from_parts(kind: ReportKind, ulid: Ulid) -> Self {
        Self { kind, ulid }
    }

    /// Get the report kind
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.ulid
    }

    /// Parse a ReportId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.ulid)
    }
}

impl FromStr for ReportId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind_str, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        let kind = kind_str.parse()?;
        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self { kind, ulid })
    }
}

impl Serialize for ReportId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing report IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid report prefix: '{0}' (valid: XFMR, SWGR, PNL, MTRS)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in report ID: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}
