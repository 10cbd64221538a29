//! Transformer inspection and test report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calc::{RESISTANCE_BALANCE_LIMIT, TURNS_RATIO_LIMIT};
use crate::core::identity::{ReportId, ReportKind};
use crate::core::report::{Report, Status};
use crate::reports::common::{
    Ambient, ChecklistItem, DeviationReference, InsulationSection, Nameplate, ResistanceSection,
    Signoff, TestEquipment, TurnsRatioSection,
};

/// Acceptance-test report for a power or distribution transformer
///
/// Covers insulation resistance with DA/PI, turns ratio against the
/// nameplate-calculated value, and winding-resistance balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerReport {
    /// Unique identifier (XFMR- prefix)
    pub id: ReportId,

    /// Equipment designation, e.g. "T-1 Main Transformer"
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
    pub insulation: InsulationSection,

    #[serde(default)]
    pub turns_ratio: TurnsRatioSection,

    #[serde(default)]
    pub winding_resistance: ResistanceSection,

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

impl TransformerReport {
    /// Create a new report seeded with the standard form rows
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ReportId::new(ReportKind::Xfmr),
            title: title.into(),
            description: None,
            nameplate: Nameplate::default(),
            ambient: Ambient::default(),
            test_equipment: Vec::new(),
            insulation: InsulationSection::with_circuits(
                &[
                    "Primary to Ground",
                    "Secondary to Ground",
                    "Primary to Secondary",
                ],
                Some("1000V"),
            ),
            turns_ratio: TurnsRatioSection::with_taps(&["1", "2", "3", "4", "5"]),
            winding_resistance: ResistanceSection::with_rows(&[
                "Primary H1-H2 / H2-H3 / H3-H1",
                "Secondary X1-X2 / X2-X3 / X3-X1",
            ]),
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
        "Verify liquid level / winding temperature indicators",
        "Verify tap changer position matches design",
        "Inspect bolted electrical connections",
    ]
    .iter()
    .map(|item| ChecklistItem::new(*item))
    .collect()
}

impl Report for TransformerReport {
    const KIND: ReportKind = ReportKind::Xfmr;

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
        self.insulation.recalculate(factor);
        self.turns_ratio.recalculate(TURNS_RATIO_LIMIT);
        self.winding_resistance
            .recalculate(DeviationReference::PhaseA, RESISTANCE_BALANCE_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_has_standard_rows() {
        let report = TransformerReport::new("T-1", "inspector");
        assert_eq!(report.insulation.rows.len(), 3);
        assert_eq!(report.turns_ratio.rows.len(), 5);
        assert_eq!(report.winding_resistance.rows.len(), 2);
        assert!(!report.checklist.is_empty());
        assert_eq!(report.status, Status::Draft);
        assert!(report.id.to_string().starts_with("XFMR-"));
    }

    #[test]
    fn test_recalculate_full_report() {
        let mut report = TransformerReport::new("T-1", "inspector");
        report.ambient.fahrenheit = 86.0; // 30C -> TCF 1.58
        report.insulation.rows[0].half_minute = "1000".to_string();
        report.insulation.rows[0].one_minute = "1500".to_string();
        report.insulation.rows[0].ten_minute = "2000".to_string();
        report.turns_ratio.rows[0].calculated_ratio = "2.000".to_string();
        report.turns_ratio.rows[0].phase_a = "2.010".to_string();

        report.recalculate();

        assert_eq!(report.ambient.celsius, 30);
        assert_eq!(report.ambient.correction_factor, 1.58);
        assert_eq!(report.insulation.rows[0].corrected_one_minute, "2370.00");
        assert_eq!(report.insulation.rows[0].dielectric_absorption, "1.50");
        assert_eq!(report.insulation.rows[0].polarization_index, "1.33");
        assert_eq!(report.insulation.absorption_acceptable, "Yes");
        assert_eq!(report.turns_ratio.rows[0].deviation_a, "-0.50");
        assert_eq!(report.turns_ratio.assessment, "Pass");
        // no winding readings entered, so no verdict
        assert_eq!(report.winding_resistance.assessment, "");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut report = TransformerReport::new("T-1 Main", "inspector");
        report.insulation.rows[0].one_minute = "1500".to_string();
        report.recalculate();

        let yaml = serde_yml::to_string(&report).unwrap();
        let parsed: TransformerReport = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(parsed.id, report.id);
        assert_eq!(parsed.title, "T-1 Main");
        assert_eq!(parsed.insulation.rows[0].corrected_one_minute, "1500.00");
    }
}
