use backend_ip_scan::{logging, render, scan};
use clap::Parser;
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "backend-ip-scan")]
#[command(about = "Extract encode and preempted backend IPs from a serving log", long_about = None)]
struct Cli {
    /// Log file to scan.
    log: PathBuf,

    /// Also print the recompute and decoder tallies.
    #[arg(long)]
    counters: bool,

    /// Print the full report as JSON instead of the line-per-value form.
    #[arg(long, conflicts_with = "counters")]
    json: bool,

    /// Debug-level diagnostics on stderr (RUST_LOG overrides).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let report = scan::scan(&cli.log).map_err(|err| {
        let context = format!("scan {}", err.path().display());
        anyhow::Error::new(err).context(context)
    })?;

    let out = if cli.json {
        let mut json = render::json::render_report(&report)?;
        json.push('\n');
        json
    } else {
        render::text::render_report(&report, cli.counters)
    };
    print!("{}", out);

    Ok(())
}
