use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use persistent_variables::{PersistentVariablesPlugin, PluginSettings};
use persistent_variables_api::{ActionDialog, DialogRow};
use persistent_variables_host::{ReplayOutput, ScriptHost, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let plugin = load_plugin(cli.settings.as_ref())?;
    let mut host = ScriptHost::new();
    plugin.enable(&mut host);

    match cli.command {
        Commands::Replay(args) => execute_replay(&host, args),
        Commands::Functions => {
            list_functions(&host);
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Album and session variables for tagging scripts")]
struct Cli {
    /// Plugin settings (JSON). Missing fields keep their defaults.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `persistent_variables=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded host session against the plugin.
    Replay(ReplayArgs),
    /// List the script functions the plugin registers.
    Functions,
}

#[derive(Args)]
struct ReplayArgs {
    /// Path to the session file (JSON).
    session: PathBuf,
    /// Print the replay outputs as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn load_plugin(settings: Option<&PathBuf>) -> Result<PersistentVariablesPlugin> {
    let settings = match settings {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            serde_json::from_str::<PluginSettings>(&raw)
                .with_context(|| format!("{} is not a valid settings file", path.display()))?
        }
        None => PluginSettings::default(),
    };
    Ok(PersistentVariablesPlugin::with_settings(settings))
}

fn execute_replay(host: &ScriptHost, args: ReplayArgs) -> Result<()> {
    let session = Session::from_path(&args.session)
        .with_context(|| format!("failed to load session {}", args.session.display()))?;
    info!(
        session = %args.session.display(),
        events = session.events.len(),
        "replaying session"
    );
    let outputs = session
        .replay(host)
        .with_context(|| format!("replay of {} failed", args.session.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in outputs {
        match output {
            ReplayOutput::Call { function, result } => println!("${function} => {result:?}"),
            ReplayOutput::Dialog(dialog) => print_dialog(&dialog),
        }
    }
    Ok(())
}

fn print_dialog(dialog: &ActionDialog) {
    println!("{}", dialog.title);
    let width = dialog
        .rows
        .iter()
        .map(|row| match row {
            DialogRow::Section { title, .. } => title.len(),
            DialogRow::Item { key, .. } => key.len() + 2,
        })
        .max()
        .unwrap_or(0);
    for row in &dialog.rows {
        match row {
            DialogRow::Section { title, summary } => println!("{title:<width$}  [{summary}]"),
            DialogRow::Item { key, value } => {
                println!("  {key:<inner$}  {value}", inner = width.saturating_sub(2))
            }
        }
    }
    if let Some(url) = &dialog.help_url {
        println!("Help: {url}");
    }
}

fn list_functions(host: &ScriptHost) {
    for name in host.function_names() {
        if let Some(doc) = host.documentation(name) {
            println!("{}", doc.replace("\n\n", "\n    "));
        }
    }
}
