//! FRT: Field Report Toolkit
//!
//! A Unix-style toolkit for managing electrical acceptance test reports
//! (transformers, switchgear, panelboards, motor starters) as plain text
//! YAML files, with automatic recalculation of derived engineering values.

pub mod calc;
pub mod cli;
pub mod core;
pub mod render;
pub mod reports;
pub mod yaml;
