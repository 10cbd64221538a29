//! `frt validate` command - Check report files and derived values
//!
//! Walks every report file in the project, reports YAML/schema problems,
//! and flags files whose stored derived values no longer match what the
//! raw readings produce (stale after a hand edit).

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::commands::common::open_project;
use crate::cli::GlobalOpts;
use crate::core::identity::ReportKind;
use crate::core::report::Report;
use crate::reports::{MotorStarterReport, PanelboardReport, SwitchgearReport, TransformerReport};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Rewrite files whose derived values are stale
    #[arg(long)]
    pub fix: bool,
}

enum FileStatus {
    Ok,
    Stale,
    Fixed,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;

    let mut checked = 0usize;
    let mut stale = 0usize;
    let mut fixed = 0usize;
    let mut errors = 0usize;

    for (kind, path) in project.iter_all_report_files() {
        checked += 1;

        let result = match kind {
            ReportKind::Xfmr => check_file::<TransformerReport>(&path, args.fix),
            ReportKind::Swgr => check_file::<SwitchgearReport>(&path, args.fix),
            ReportKind::Pnl => check_file::<PanelboardReport>(&path, args.fix),
            ReportKind::Mtrs => check_file::<MotorStarterReport>(&path, args.fix),
        };

        match result {
            Ok(FileStatus::Ok) => {
                if global.verbose {
                    println!("{} {}", style("✓").green(), path.display());
                }
            }
            Ok(FileStatus::Stale) => {
                stale += 1;
                println!(
                    "{} {}: derived values are stale (run with --fix or use 'calc')",
                    style("!").yellow(),
                    path.display()
                );
            }
            Ok(FileStatus::Fixed) => {
                fixed += 1;
                println!(
                    "{} {}: derived values refreshed",
                    style("✓").green(),
                    path.display()
                );
            }
            Err(e) => {
                errors += 1;
                eprintln!("{} {}:", style("✗").red(), path.display());
                eprintln!("{:?}", e);
            }
        }
    }

    println!();
    println!(
        "{} file(s) checked: {} ok, {} stale, {} fixed, {} error(s)",
        checked,
        checked - stale - fixed - errors,
        stale,
        fixed,
        errors
    );

    if errors > 0 {
        Err(miette::miette!("{} file(s) failed validation", errors))
    } else {
        Ok(())
    }
}

fn check_file<R: Report>(path: &Path, fix: bool) -> Result<FileStatus> {
    let mut report: R = crate::yaml::parse_yaml_file(path)?;
    let before = serde_yml::to_string(&report).into_diagnostic()?;

    report.recalculate();
    let after = serde_yml::to_string(&report).into_diagnostic()?;

    if before == after {
        return Ok(FileStatus::Ok);
    }

    if fix {
        std::fs::write(path, after).into_diagnostic()?;
        Ok(FileStatus::Fixed)
    } else {
        Ok(FileStatus::Stale)
    }
}
