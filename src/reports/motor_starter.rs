//! Motor starter inspection and test report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calc::RESISTANCE_BALANCE_LIMIT;
use crate::core::identity::{ReportId, ReportKind};
use crate::core::report::{Report, Status};
use crate::reports::common::{
    Ambient, ChecklistItem, DeviationReference, InsulationSection, Nameplate, ResistanceSection,
    Signoff, TestEquipment,
};

/// Acceptance-test report for a motor starter / MCC bucket
///
/// Insulation rows here typically stop at the 1-minute reading, so PI stays
/// blank and the absorption flag rides on DA alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorStarterReport {
    /// Unique identifier (MTRS- prefix)
    pub id: ReportId,

    /// Equipment designation, e.g. "MCC-1 Bucket 3A Cooling Pump"
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

    /// Contactor/overload circuit resistance, phase balance against phase A
    #[serde(default)]
    pub circuit_resistance: ResistanceSection,

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

impl MotorStarterReport {
    /// Create a new report seeded with the standard form rows
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ReportId::new(ReportKind::Mtrs),
            title: title.into(),
            description: None,
            nameplate: Nameplate::default(),
            ambient: Ambient::default(),
            test_equipment: Vec::new(),
            insulation: InsulationSection::with_circuits(
                &["Line to Ground", "Load to Ground", "Line to Load"],
                Some("500V"),
            ),
            circuit_resistance: ResistanceSection::with_rows(&["Contactor Line to Load"]),
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
        "Verify overload element size against motor FLA",
        "Inspect contactor condition",
        "Exercise starter and verify interlocks",
        "Inspect bolted electrical connections",
    ]
    .iter()
    .map(|item| ChecklistItem::new(*item))
    .collect()
}

impl Report for MotorStarterReport {
    const KIND: ReportKind = ReportKind::Mtrs;

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
        self.insulation.recalculate(self.ambient.correction_factor);
        self.circuit_resistance
            .recalculate(DeviationReference::PhaseA, RESISTANCE_BALANCE_LIMIT);
    }
}
