use clap::Parser;
use frt::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => frt::cli::commands::init::run(args),
        Commands::Xfmr(cmd) => frt::cli::commands::xfmr::run(cmd, &global),
        Commands::Swgr(cmd) => frt::cli::commands::swgr::run(cmd, &global),
        Commands::Pnl(cmd) => frt::cli::commands::pnl::run(cmd, &global),
        Commands::Mtrs(cmd) => frt::cli::commands::mtrs::run(cmd, &global),
        Commands::Calc(cmd) => frt::cli::commands::calc::run(cmd),
        Commands::Print(args) => frt::cli::commands::print::run(args, &global),
        Commands::Validate(args) => frt::cli::commands::validate::run(args, &global),
        Commands::Completions(args) => frt::cli::commands::completions::run(args),
    }
}
