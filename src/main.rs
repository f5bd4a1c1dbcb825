use anyhow::Context;
use clap::Parser;
use portscout::cli::Cli;
use portscout::config::AppSettings;
use portscout::output::{self, ReportWriter};
use portscout::scanner::{self, ConnectTimeouts, Scanner, TcpConnectScanner};
use portscout::services::ServiceDb;
use portscout::types::ScanTarget;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AppSettings::default(),
    };

    let target = ScanTarget::resolve(&cli.target)?;
    let mode = cli.mode();
    let services = ServiceDb::load_or_builtin(&settings.services_file);
    let tcp = TcpConnectScanner::new(target.ip, ConnectTimeouts::from(&settings));
    info!(address = %tcp.target(), %mode, "target resolved");

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format);
    writer.begin(&target)?;

    let progress = (cli.progress && !mode.reports_closed()).then(|| scanner::progress_bar(mode));
    let outcome = scanner::run_scan(
        &tcp,
        &target,
        &services,
        mode,
        progress.as_ref(),
        |result| writer.port(result),
    );
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let report = outcome.inspect_err(|e| {
        if let Some(port) = e.port() {
            info!(%port, "scan aborted, remaining ports skipped");
        }
    })?;
    writer.finish(&report)?;
    info!(
        open = report.open_ports,
        scanned = report.ports_scanned,
        duration_ms = report.duration_ms,
        "scan finished"
    );
    Ok(())
}
