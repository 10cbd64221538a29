//! Panelboard inspection and test report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::identity::{ReportId, ReportKind};
use crate::core::report::{Report, Status};
use crate::reports::common::{
    Ambient, ChecklistItem, InsulationSection, Nameplate, Signoff, TestEquipment,
};

/// Acceptance-test report for a panelboard
///
/// The simplest of the report types: bus insulation resistance plus the
/// visual/mechanical checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelboardReport {
    /// Unique identifier (PNL- prefix)
    pub id: ReportId,

    /// Equipment designation, e.g. "LP-2 Lighting Panel"
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub nameplate: Nameplate,

    #[serde(default)]
    pub ambient: Ambient,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_equipment: Vec<TestEquipment>,

    #[serde(default)]
    pub bus_insulation: InsulationSection,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    #[serde(default)]
    pub signoff: Signoff,

    #[serde(default)]
    pub status: Status,

    pub created: DateTime<Utc>,

    pub author: String,

    #[serde(default = "default_revision")]
    pub revision: u32,
}

fn default_revision() -> u32 {
    1
}

impl PanelboardReport {
    /// Create a new report seeded with the standard form rows
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ReportId::new(ReportKind::Pnl),
            title: title.into(),
            description: None,
            nameplate: Nameplate::default(),
            ambient: Ambient::default(),
            test_equipment: Vec::new(),
            bus_insulation: InsulationSection::with_circuits(
                &[
                    "Phase A to Ground",
                    "Phase B to Ground",
                    "Phase C to Ground",
                    "Neutral to Ground",
                ],
                Some("500V"),
            ),
            checklist: default_checklist(),
            remarks: None,
            signoff: Signoff::default(),
            status: Status::default(),
            created: Utc::now(),
            author: author.into(),
            revision: 1,
        }
    }
}

fn default_checklist() -> Vec<ChecklistItem> {
    [
        "Inspect physical and mechanical condition",
        "Verify nameplate matches drawings",
        "Verify breaker sizes match panel schedule",
        "Inspect anchorage, alignment, and grounding",
        "Inspect bolted electrical connections",
        "Verify circuit directory is complete",
    ]
    .iter()
    .map(|item| ChecklistItem::new(*item))
    .collect()
}

impl Report for PanelboardReport {
    const KIND: ReportKind = ReportKind::Pnl;

    fn id(&self) -> &ReportId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> Status {
        self.status
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn recalculate(&mut self) {
        self.ambient.recalculate();
        self.bus_insulation
            .recalculate(self.ambient.correction_factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_has_standard_rows() {
        let report = PanelboardReport::new("LP-2", "inspector");
        assert_eq!(report.bus_insulation.rows.len(), 4);
        assert!(report.id.to_string().starts_with("PNL-"));
    }

    #[test]
    fn test_cold_day_correction() {
        let mut report = PanelboardReport::new("LP-2", "inspector");
        report.ambient.fahrenheit = 32.0; // 0C -> TCF 0.40
        report.bus_insulation.rows[0].half_minute = "100".to_string();
        report.bus_insulation.rows[0].one_minute = "200".to_string();
        report.recalculate();

        assert_eq!(report.ambient.correction_factor, 0.40);
        assert_eq!(report.bus_insulation.rows[0].corrected_half_minute, "40.00");
        assert_eq!(report.bus_insulation.rows[0].corrected_one_minute, "80.00");
        assert_eq!(report.bus_insulation.rows[0].dielectric_absorption, "2.00");
        assert_eq!(report.bus_insulation.absorption_acceptable, "Yes");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let report = PanelboardReport::new("LP-2 Lighting", "inspector");
        let yaml = serde_yml::to_string(&report).unwrap();
        let parsed: PanelboardReport = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, report.id);
        assert_eq!(parsed.title, "LP-2 Lighting");
    }
}
