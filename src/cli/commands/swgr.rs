//! `frt swgr` command - Switchgear report management

use miette::Result;

use crate::cli::commands::common::{run_report_cmd, ReportCommands};
use crate::cli::GlobalOpts;
use crate::reports::SwitchgearReport;

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    run_report_cmd::<SwitchgearReport>(cmd, global, |title, author| {
        SwitchgearReport::new(title, author)
    })
}
