//! `frt xfmr` command - Transformer report management

use miette::Result;

use crate::cli::commands::common::{run_report_cmd, ReportCommands};
use crate::cli::GlobalOpts;
use crate::reports::TransformerReport;

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    run_report_cmd::<TransformerReport>(cmd, global, |title, author| {
        TransformerReport::new(title, author)
    })
}
