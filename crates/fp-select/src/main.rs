use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use fp_registry::{DEFAULT_TIMEOUT, RegistryClient, registry_url};
use fp_select::{
    LinePrompter, Prompter, Session, SessionOutcome, TerminalPrompter, write_details, write_table,
};
use fp_ui::{Colorize, Style, StyledText};
use log::debug;

#[derive(Parser)]
#[command(name = "fp-select")]
#[command(about = "Browse, search and select Babylon finality providers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", hide = true)]
    debug: bool,

    /// Registry endpoint serving the finality provider listing
    /// (defaults to $FP_REGISTRY_URL, then the public Babylon registry)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Seconds to wait for the registry before giving up
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".with_style(Style::Error));
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    // Raw-mode prompts see Ctrl+C as a key press; this covers the fetch and
    // line-mode input.
    ctrlc::set_handler(|| std::process::exit(0)).context("Failed to set Ctrl+C handler")?;

    let rule = "=".repeat(80);
    println!("{rule}");
    println!("{}", "Babylon Finality Provider Selector".bold());
    println!("{rule}");

    let url = cli.url.unwrap_or_else(registry_url);
    debug!("Using registry {url}");
    let client = RegistryClient::new(url, Duration::from_secs(cli.timeout))?;

    println!("Fetching finality providers from Babylon API...");
    let providers = client
        .fetch_finality_providers()
        .context("Failed to fetch finality providers")?;

    let mut out = io::stdout().lock();
    write_table(&mut out, providers.as_slice(), None)?;

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let prompter: Box<dyn Prompter> = if interactive {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    let outcome = Session::new(&providers, prompter, &mut out).run()?;
    match outcome {
        SessionOutcome::Selected { provider, .. } => write_details(&mut out, provider)?,
        SessionOutcome::Quit => {}
    }

    Ok(())
}
