//! `frt pnl` command - Panelboard report management

use miette::Result;

use crate::cli::commands::common::{run_report_cmd, ReportCommands};
use crate::cli::GlobalOpts;
use crate::reports::PanelboardReport;

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    run_report_cmd::<PanelboardReport>(cmd, global, |title, author| {
        PanelboardReport::new(title, author)
    })
}
