//! `frt mtrs` command - Motor starter report management

use miette::Result;

use crate::cli::commands::common::{run_report_cmd, ReportCommands};
use crate::cli::GlobalOpts;
use crate::reports::MotorStarterReport;

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    run_report_cmd::<MotorStarterReport>(cmd, global, |title, author| {
        MotorStarterReport::new(title, author)
    })
}
