//! Shared subcommand machinery for the four report kinds
//!
//! Each equipment command (`frt xfmr`, `frt swgr`, ...) exposes the same
//! list/new/show/edit/calc surface, so the real work lives here, generic
//! over the `Report` type.

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::report::{Report, Status};
use crate::core::Config;

#[derive(clap::Subcommand, Debug)]
pub enum ReportCommands {
    /// List reports with filtering
    List(ListArgs),

    /// Create a new report from the standard form
    New(NewArgs),

    /// Show a report's details
    Show(ShowArgs),

    /// Edit a report in your editor (derived values refresh on save)
    Edit(EditArgs),

    /// Recompute derived values and write the file back
    Calc(CalcArgs),
}

/// Status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Draft,
    Review,
    Final,
    Obsolete,
    /// All active (not obsolete)
    Active,
    /// All statuses
    All,
}

/// Sort key for list output
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    Status,
    Author,
    Created,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Filter by author (substring match)
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Search in title (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by field
    #[arg(long, default_value = "created")]
    pub sort: SortKey,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Equipment designation, e.g. "T-1 Main Transformer"
    pub title: Option<String>,

    /// Author (default: from config)
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Prompt for fields interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Don't open in editor after creation
    #[arg(long)]
    pub no_edit: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Report ID or fuzzy search term
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Report ID or fuzzy search term
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Report ID or fuzzy search term
    pub id: String,
}

/// Dispatch a report subcommand for a concrete report type
pub fn run_report_cmd<R: Report>(
    cmd: ReportCommands,
    global: &GlobalOpts,
    make: fn(String, String) -> R,
) -> Result<()> {
    match cmd {
        ReportCommands::List(args) => run_list::<R>(args, global),
        ReportCommands::New(args) => run_new::<R>(args, global, make),
        ReportCommands::Show(args) => run_show::<R>(args, global),
        ReportCommands::Edit(args) => run_edit::<R>(args, global),
        ReportCommands::Calc(args) => run_calc::<R>(args, global),
    }
}

/// Open the project, honoring --project
pub fn open_project(global: &GlobalOpts) -> Result<Project> {
    let result = match &global.project {
        Some(path) => Project::discover_from(path),
        None => Project::discover(),
    };
    result.map_err(|e| miette::miette!("{}", e))
}

/// Resolve the effective output format
///
/// An explicit --format wins; otherwise the config's `default_format` is
/// consulted, falling back to Auto when unset or unrecognized.
fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    config
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
        .unwrap_or(OutputFormat::Auto)
}

fn load_reports<R: Report>(project: &Project, verbose: bool) -> Vec<R> {
    let mut reports = Vec::new();
    for path in project.iter_report_files(R::KIND) {
        match crate::yaml::parse_yaml_file::<R>(&path) {
            Ok(report) => reports.push(report),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Failed to parse {}: {}",
                        style("!").yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }
    reports
}

fn run_list<R: Report>(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let format = resolve_format(global, &Config::load());
    let mut reports: Vec<R> = load_reports(&project, global.verbose);

    reports.retain(|r| {
        let status_match = match args.status {
            StatusFilter::Draft => r.status() == Status::Draft,
            StatusFilter::Review => r.status() == Status::Review,
            StatusFilter::Final => r.status() == Status::Final,
            StatusFilter::Obsolete => r.status() == Status::Obsolete,
            StatusFilter::Active => r.status() != Status::Obsolete,
            StatusFilter::All => true,
        };

        let author_match = args.author.as_ref().map_or(true, |author| {
            r.author().to_lowercase().contains(&author.to_lowercase())
        });

        let search_match = args.search.as_ref().map_or(true, |search| {
            r.title().to_lowercase().contains(&search.to_lowercase())
        });

        status_match && author_match && search_match
    });

    if reports.is_empty() {
        match format {
            OutputFormat::Json | OutputFormat::Yaml => println!("[]"),
            _ => {
                if !global.quiet {
                    println!("No {} reports found.", R::KIND.equipment_name().to_lowercase());
                    println!();
                    println!(
                        "Create one with: {}",
                        style(format!("frt {} new <TITLE>", R::KIND.as_str().to_lowercase()))
                            .yellow()
                    );
                }
            }
        }
        return Ok(());
    }

    match args.sort {
        SortKey::Id => reports.sort_by_key(|r| r.id().to_string()),
        SortKey::Title => reports.sort_by(|a, b| a.title().cmp(b.title())),
        SortKey::Status => reports.sort_by_key(|r| r.status()),
        SortKey::Author => reports.sort_by(|a, b| a.author().cmp(b.author())),
        SortKey::Created => reports.sort_by_key(|r| r.created()),
    }

    if args.reverse {
        reports.reverse();
    }

    if let Some(limit) = args.limit {
        reports.truncate(limit);
    }

    if args.count {
        println!("{}", reports.len());
        return Ok(());
    }

    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&reports).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("id,title,status,author,created");
            for report in &reports {
                println!(
                    "{},{},{},{},{}",
                    report.id(),
                    escape_csv(report.title()),
                    report.status(),
                    escape_csv(report.author()),
                    report.created().format("%Y-%m-%d")
                );
            }
        }
        OutputFormat::Tsv => {
            let widths = [17, 30, 10, 15, 12];
            let headers = ["ID", "TITLE", "STATUS", "AUTHOR", "CREATED"];
            let header_line = headers
                .iter()
                .zip(&widths)
                .map(|(h, w)| format!("{:<width$}", style(h).bold(), width = w))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", header_line);

            let total_width: usize = widths.iter().sum::<usize>() + (widths.len() - 1);
            println!("{}", "-".repeat(total_width));

            for report in &reports {
                let row = [
                    format_short_id(report.id()),
                    truncate_str(report.title(), 28),
                    report.status().to_string(),
                    truncate_str(report.author(), 13),
                    report.created().format("%Y-%m-%d").to_string(),
                ];
                let row_line = row
                    .iter()
                    .zip(&widths)
                    .map(|(p, w)| format!("{:<width$}", p, width = w))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}", row_line);
            }

            if !global.quiet {
                println!();
                println!("{} report(s) found.", style(reports.len()).cyan());
            }
        }
        OutputFormat::Id => {
            for report in &reports {
                println!("{}", report.id());
            }
        }
        OutputFormat::Md => {
            println!("| ID | Title | Status | Author | Created |");
            println!("|---|---|---|---|---|");
            for report in &reports {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    format_short_id(report.id()),
                    report.title(),
                    report.status(),
                    report.author(),
                    report.created().format("%Y-%m-%d")
                );
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}

fn run_new<R: Report>(
    args: NewArgs,
    global: &GlobalOpts,
    make: fn(String, String) -> R,
) -> Result<()> {
    let project = open_project(global)?;
    let config = Config::load();

    let (title, author) = if args.interactive {
        let title: String = dialoguer::Input::new()
            .with_prompt("Equipment designation")
            .interact_text()
            .into_diagnostic()?;
        let author: String = dialoguer::Input::new()
            .with_prompt("Author")
            .default(config.author())
            .interact_text()
            .into_diagnostic()?;
        (title, author)
    } else {
        let title = args.title.ok_or_else(|| {
            miette::miette!(
                "Equipment designation is required. Use: frt {} new <TITLE>",
                R::KIND.as_str().to_lowercase()
            )
        })?;
        let author = args.author.unwrap_or_else(|| config.author());
        (title, author)
    };

    let mut report = make(title, author);
    report.recalculate();

    let file_path = project.report_path(report.id());
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }

    let yaml = serde_yml::to_string(&report).into_diagnostic()?;
    fs::write(&file_path, yaml).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Created {} report {}",
            style("✓").green(),
            R::KIND.equipment_name().to_lowercase(),
            style(format_short_id(report.id())).cyan()
        );
        println!("   {}", style(file_path.display()).dim());
    }

    if !args.no_edit && !args.interactive {
        if !global.quiet {
            println!();
            println!("Opening in {}...", style(config.editor()).yellow());
        }
        config.run_editor(&file_path).into_diagnostic()?;
        refresh_derived::<R>(&file_path)?;
    }

    Ok(())
}

fn run_show<R: Report>(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let (_path, report) = find_report::<R>(&project, &args.id, global.verbose)?;

    match resolve_format(global, &Config::load()) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", report.id());
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&report).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            if !global.quiet {
                println!("{}", style("─".repeat(60)).dim());
                println!(
                    "{}: {}",
                    style("ID").bold(),
                    style(report.id().to_string()).cyan()
                );
                println!("{}: {}", style("Equipment").bold(), report.title());
                println!("{}: {}", style("Status").bold(), report.status());
                println!(
                    "{}: {} ({})",
                    style("Author").bold(),
                    report.author(),
                    report.created().format("%Y-%m-%d %H:%M")
                );
                println!("{}", style("─".repeat(60)).dim());
            }
            let yaml = serde_yml::to_string(&report).into_diagnostic()?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

fn run_edit<R: Report>(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let config = Config::load();
    let (file_path, report) = find_report::<R>(&project, &args.id, global.verbose)?;

    if !global.quiet {
        println!(
            "Opening {} in {}...",
            style(format_short_id(report.id())).cyan(),
            style(config.editor()).yellow()
        );
    }

    config.run_editor(&file_path).into_diagnostic()?;
    refresh_derived::<R>(&file_path)?;

    if !global.quiet {
        println!("{} Derived values refreshed", style("✓").green());
    }

    Ok(())
}

fn run_calc<R: Report>(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let (file_path, report) = find_report::<R>(&project, &args.id, global.verbose)?;

    refresh_derived::<R>(&file_path)?;

    if !global.quiet {
        println!(
            "{} Recalculated {}",
            style("✓").green(),
            style(format_short_id(report.id())).cyan()
        );
        println!("   {}", style(file_path.display()).dim());
    }

    Ok(())
}

/// Reparse a report file, recompute derived fields, and write it back
fn refresh_derived<R: Report>(file_path: &std::path::Path) -> Result<()> {
    let mut report: R = crate::yaml::parse_yaml_file(file_path)?;
    report.recalculate();
    let yaml = serde_yml::to_string(&report).into_diagnostic()?;
    fs::write(file_path, yaml).into_diagnostic()?;
    Ok(())
}

/// Find a report by ID prefix match or title fuzzy match
pub fn find_report<R: Report>(
    project: &Project,
    id_query: &str,
    verbose: bool,
) -> Result<(PathBuf, R)> {
    let mut matches: Vec<(PathBuf, R)> = Vec::new();

    for path in project.iter_report_files(R::KIND) {
        match crate::yaml::parse_yaml_file::<R>(&path) {
            Ok(report) => {
                let id_str = report.id().to_string();
                if id_str.starts_with(id_query) || id_str == id_query {
                    matches.push((path, report));
                } else if report
                    .title()
                    .to_lowercase()
                    .contains(&id_query.to_lowercase())
                {
                    matches.push((path, report));
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Failed to parse {}: {}",
                        style("!").yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    match matches.len() {
        0 => Err(miette::miette!("No report found matching '{}'", id_query)),
        1 => Ok(matches.remove(0)),
        _ => {
            println!("{} Multiple matches found:", style("!").yellow());
            for (_path, report) in &matches {
                println!("  {} - {}", format_short_id(report.id()), report.title());
            }
            Err(miette::miette!(
                "Ambiguous query '{}'. Please be more specific.",
                id_query
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(format: OutputFormat) -> GlobalOpts {
        GlobalOpts {
            format,
            quiet: false,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn test_resolve_format_explicit_flag_wins() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(&opts(OutputFormat::Csv), &config),
            OutputFormat::Csv
        );
    }

    #[test]
    fn test_resolve_format_uses_config_when_auto() {
        let config = Config {
            default_format: Some("id".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(&opts(OutputFormat::Auto), &config),
            OutputFormat::Id
        );
    }

    #[test]
    fn test_resolve_format_falls_back_to_auto() {
        assert_eq!(
            resolve_format(&opts(OutputFormat::Auto), &Config::default()),
            OutputFormat::Auto
        );

        let unrecognized = Config {
            default_format: Some("tables".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(&opts(OutputFormat::Auto), &unrecognized),
            OutputFormat::Auto
        );
    }
}
