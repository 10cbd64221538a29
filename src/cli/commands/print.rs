//! `frt print` command - Render a report to printable Markdown

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

use crate::cli::commands::common::open_project;
use crate::cli::GlobalOpts;
use crate::core::identity::ReportKind;
use crate::core::project::Project;
use crate::render::ReportRenderer;
use crate::reports::{MotorStarterReport, PanelboardReport, SwitchgearReport, TransformerReport};

#[derive(clap::Args, Debug)]
pub struct PrintArgs {
    /// Report ID or ID prefix (any kind)
    pub id: String,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: PrintArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;

    let mut matches: Vec<(ReportKind, PathBuf)> = Vec::new();
    for kind in ReportKind::all() {
        let dir = project.root().join(Project::report_directory(*kind));
        if let Some(path) = crate::core::loader::find_report_file(&dir, &args.id) {
            matches.push((*kind, path));
        }
    }

    let (kind, path) = match matches.len() {
        0 => return Err(miette::miette!("No report found matching '{}'", args.id)),
        1 => matches.remove(0),
        _ => {
            println!("{} Multiple matches found:", style("!").yellow());
            for (_, path) in &matches {
                println!("  {}", path.display());
            }
            return Err(miette::miette!(
                "Ambiguous query '{}'. Please be more specific.",
                args.id
            ));
        }
    };

    let renderer = ReportRenderer::new().map_err(|e| miette::miette!("{}", e))?;
    let markdown = render_file(kind, &path, &renderer)?;

    match args.output {
        Some(output) => {
            std::fs::write(&output, markdown).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Wrote {}",
                    style("✓").green(),
                    style(output.display()).cyan()
                );
            }
        }
        None => print!("{}", markdown),
    }

    Ok(())
}

fn render_file(kind: ReportKind, path: &Path, renderer: &ReportRenderer) -> Result<String> {
    let rendered = match kind {
        ReportKind::Xfmr => {
            let report: TransformerReport = crate::yaml::parse_yaml_file(path)?;
            renderer.render(kind, &report)
        }
        ReportKind::Swgr => {
            let report: SwitchgearReport = crate::yaml::parse_yaml_file(path)?;
            renderer.render(kind, &report)
        }
        ReportKind::Pnl => {
            let report: PanelboardReport = crate::yaml::parse_yaml_file(path)?;
            renderer.render(kind, &report)
        }
        ReportKind::Mtrs => {
            let report: MotorStarterReport = crate::yaml::parse_yaml_file(path)?;
            renderer.render(kind, &report)
        }
    };
    rendered.map_err(|e| miette::miette!("{}", e))
}
