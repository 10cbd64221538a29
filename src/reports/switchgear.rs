//! Switchgear inspection and test report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calc::CONTACT_RESISTANCE_LIMIT;
use crate::core::identity::{ReportId, ReportKind};
use crate::core::report::{Report, Status};
use crate::reports::common::{
    Ambient, ChecklistItem, DeviationReference, InsulationSection, Nameplate, ResistanceSection,
    Signoff, TestEquipment,
};

/// Acceptance-test report for switchgear or a switchboard assembly
///
/// Covers bus insulation resistance and breaker contact resistance, where
/// each pole is compared against the lowest pole of its device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchgearReport {
    /// Unique identifier (SWGR- prefix)
    pub id: ReportId,

    /// Equipment designation, e.g. "SWGR-1 Main Lineup"
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub nameplate: Nameplate,

    #[serde(default)]
    pub ambient: Ambient,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_equipment: Vec<TestEquipment>,

    /// Bus insulation, phase-to-phase and phase-to-ground
    #[serde(default)]
    pub bus_insulation: InsulationSection,

    /// Breaker contact resistance in microhms, one row per device
    #[serde(default)]
    pub contact_resistance: ResistanceSection,

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

impl SwitchgearReport {
    /// Create a new report seeded with the standard form rows
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ReportId::new(ReportKind::Swgr),
            title: title.into(),
            description: None,
            nameplate: Nameplate::default(),
            ambient: Ambient::default(),
            test_equipment: Vec::new(),
            bus_insulation: InsulationSection::with_circuits(
                &[
                    "Phase A to B",
                    "Phase B to C",
                    "Phase C to A",
                    "Phase A to Ground",
                    "Phase B to Ground",
                    "Phase C to Ground",
                ],
                Some("1000V"),
            ),
            contact_resistance: ResistanceSection::with_rows(&["Main Breaker"]),
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
        "Inspect anchorage, alignment, and grounding",
        "Verify appropriate barrier and shutter installation",
        "Exercise all active components and interlocks",
        "Inspect bolted electrical connections",
        "Verify breaker alignment and racking operation",
    ]
    .iter()
    .map(|item| ChecklistItem::new(*item))
    .collect()
}

impl Report for SwitchgearReport {
    const KIND: ReportKind = ReportKind::Swgr;

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
        let factor = self.ambient.correction_factor;
        self.bus_insulation.recalculate(factor);
        self.contact_resistance
            .recalculate(DeviationReference::Lowest, CONTACT_RESISTANCE_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_has_standard_rows() {
        let report = SwitchgearReport::new("SWGR-1", "inspector");
        assert_eq!(report.bus_insulation.rows.len(), 6);
        assert_eq!(report.contact_resistance.rows.len(), 1);
        assert!(report.id.to_string().starts_with("SWGR-"));
    }

    #[test]
    fn test_contact_resistance_against_lowest_pole() {
        let mut report = SwitchgearReport::new("SWGR-1", "inspector");
        report.contact_resistance.rows[0].phase_a = "45".to_string();
        report.contact_resistance.rows[0].phase_b = "50".to_string();
        report.contact_resistance.rows[0].phase_c = "48".to_string();
        report.recalculate();

        let row = &report.contact_resistance.rows[0];
        assert_eq!(row.deviation_a, "0.00");
        assert_eq!(row.deviation_b, "11.11");
        assert_eq!(row.deviation_c, "6.67");
        assert_eq!(report.contact_resistance.assessment, "Pass");
    }

    #[test]
    fn test_contact_resistance_fail() {
        let mut report = SwitchgearReport::new("SWGR-1", "inspector");
        report.contact_resistance.rows[0].phase_a = "40".to_string();
        report.contact_resistance.rows[0].phase_b = "70".to_string(); // 75% over
        report.contact_resistance.rows[0].phase_c = "42".to_string();
        report.recalculate();

        assert_eq!(report.contact_resistance.assessment, "Fail");
    }

    #[test]
    fn test_sentinel_readings_leave_flag_blank() {
        let mut report = SwitchgearReport::new("SWGR-1", "inspector");
        report.bus_insulation.rows[0].half_minute = ">5000".to_string();
        report.bus_insulation.rows[0].one_minute = ">5000".to_string();
        report.recalculate();

        assert_eq!(report.bus_insulation.rows[0].corrected_half_minute, ">5000");
        assert_eq!(report.bus_insulation.absorption_acceptable, "");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let report = SwitchgearReport::new("SWGR-1 Main", "inspector");
        let yaml = serde_yml::to_string(&report).unwrap();
        let parsed: SwitchgearReport = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, report.id);
        assert_eq!(parsed.bus_insulation.rows.len(), 6);
    }
}
