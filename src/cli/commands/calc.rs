//! `frt calc` command - Standalone derived-value calculations
//!
//! Quick field-side arithmetic without touching any report file. The same
//! routines back the report recalculation, so results always agree.

use clap::Subcommand;
use console::style;
use miette::Result;
use tabled::{Table, Tabled};

use crate::calc;
use crate::calc::tcf::TemperatureReading;
use crate::calc::{CONTACT_RESISTANCE_LIMIT, RESISTANCE_BALANCE_LIMIT};
use crate::reports::common::{DeviationReference, ResistanceRow};

#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Temperature correction factor for an ambient temperature
    Tcf(TcfArgs),

    /// Dielectric absorption ratio (1 min / 0.5 min)
    Da(DaArgs),

    /// Polarization index (10 min / 1 min)
    Pi(PiArgs),

    /// Turns ratio deviation from the calculated ratio, in percent
    TtrDev(TtrDevArgs),

    /// Per-phase resistance deviations with a Pass/Fail verdict
    Balance(BalanceArgs),

    /// Print the full temperature correction factor table
    Table,
}

#[derive(clap::Args, Debug)]
pub struct TcfArgs {
    /// Ambient temperature
    pub temperature: f64,

    /// Interpret the temperature as Celsius instead of Fahrenheit
    #[arg(long, short = 'c')]
    pub celsius: bool,
}

#[derive(clap::Args, Debug)]
pub struct DaArgs {
    /// 0.5-minute reading
    pub half_minute: String,

    /// 1-minute reading
    pub one_minute: String,
}

#[derive(clap::Args, Debug)]
pub struct PiArgs {
    /// 1-minute reading
    pub one_minute: String,

    /// 10-minute reading
    pub ten_minute: String,
}

#[derive(clap::Args, Debug)]
pub struct TtrDevArgs {
    /// Calculated (nameplate) ratio
    pub calculated: String,

    /// Measured ratio
    pub measured: String,
}

#[derive(clap::Args, Debug)]
pub struct BalanceArgs {
    pub phase_a: String,
    pub phase_b: String,
    pub phase_c: String,

    /// Compare against the lowest phase instead of phase A
    #[arg(long)]
    pub lowest: bool,

    /// Acceptance band in percent (default: 3.0, or 50.0 with --lowest)
    #[arg(long)]
    pub limit: Option<f64>,
}

pub fn run(cmd: CalcCommands) -> Result<()> {
    match cmd {
        CalcCommands::Tcf(args) => run_tcf(args),
        CalcCommands::Da(args) => run_da(args),
        CalcCommands::Pi(args) => run_pi(args),
        CalcCommands::TtrDev(args) => run_ttr_dev(args),
        CalcCommands::Balance(args) => run_balance(args),
        CalcCommands::Table => run_table(),
    }
}

fn run_tcf(args: TcfArgs) -> Result<()> {
    let reading = if args.celsius {
        TemperatureReading::from_celsius(args.temperature)
    } else {
        TemperatureReading::from_fahrenheit(args.temperature)
    };

    println!(
        "{} F = {} C -> correction factor {}",
        reading.fahrenheit,
        reading.celsius,
        style(reading.correction_factor).cyan()
    );
    Ok(())
}

fn run_da(args: DaArgs) -> Result<()> {
    let ratio = calc::ratio(&args.one_minute, &args.half_minute);
    print_ratio("DA", &ratio);
    Ok(())
}

fn run_pi(args: PiArgs) -> Result<()> {
    let ratio = calc::ratio(&args.ten_minute, &args.one_minute);
    print_ratio("PI", &ratio);
    Ok(())
}

fn print_ratio(name: &str, ratio: &str) {
    if ratio.is_empty() {
        println!("{}: {} (readings not numeric)", name, style("-").dim());
        return;
    }
    let flag = calc::absorption_flag([ratio]);
    println!(
        "{}: {} (> 1.0: {})",
        name,
        style(ratio).cyan(),
        match flag {
            calc::Acceptability::Yes => style("Yes").green(),
            calc::Acceptability::No => style("No").red(),
            calc::Acceptability::Indeterminate => style("-").dim(),
        }
    );
}

fn run_ttr_dev(args: TtrDevArgs) -> Result<()> {
    let deviation = calc::turns_ratio_deviation(&args.calculated, &args.measured);
    if deviation.is_empty() {
        println!("deviation: {} (inputs not numeric)", style("-").dim());
        return Ok(());
    }

    let assessment = calc::within_limit([deviation.as_str()], calc::TURNS_RATIO_LIMIT);
    println!(
        "deviation: {}% (within {}%: {})",
        style(&deviation).cyan(),
        calc::TURNS_RATIO_LIMIT,
        style_assessment(assessment)
    );
    Ok(())
}

fn run_balance(args: BalanceArgs) -> Result<()> {
    let reference = if args.lowest {
        DeviationReference::Lowest
    } else {
        DeviationReference::PhaseA
    };
    let limit = args.limit.unwrap_or(if args.lowest {
        CONTACT_RESISTANCE_LIMIT
    } else {
        RESISTANCE_BALANCE_LIMIT
    });

    let mut row = ResistanceRow::new("");
    row.phase_a = args.phase_a;
    row.phase_b = args.phase_b;
    row.phase_c = args.phase_c;
    row.recalculate(reference);

    if !row.deviation_a.is_empty() {
        println!("phase A: {}%", row.deviation_a);
    }
    println!("phase B: {}%", or_dash(&row.deviation_b));
    println!("phase C: {}%", or_dash(&row.deviation_c));

    let deviations: Vec<&str> = [&row.deviation_a, &row.deviation_b, &row.deviation_c]
        .into_iter()
        .filter(|d| !d.is_empty())
        .map(|d| d.as_str())
        .collect();
    let assessment = calc::within_limit(deviations, limit);
    println!(
        "within {}%: {}",
        limit,
        style_assessment(assessment)
    );
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn style_assessment(assessment: calc::Assessment) -> console::StyledObject<&'static str> {
    match assessment {
        calc::Assessment::Pass => style("Pass").green(),
        calc::Assessment::Fail => style("Fail").red(),
        calc::Assessment::Indeterminate => style("-").dim(),
    }
}

#[derive(Tabled)]
struct TcfRow {
    #[tabled(rename = "C")]
    celsius: i32,
    #[tabled(rename = "F")]
    fahrenheit: i32,
    #[tabled(rename = "Factor")]
    factor: f64,
}

fn run_table() -> Result<()> {
    let rows: Vec<TcfRow> = calc::tcf::table()
        .iter()
        .map(|(celsius, factor)| TcfRow {
            celsius: *celsius,
            fahrenheit: (*celsius as f64 * 9.0 / 5.0 + 32.0).round() as i32,
            factor: *factor,
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
