use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use asesmen_cli::config::{self, AppConfig};
use asesmen_cli::flow::Flow;
use asesmen_cli::{render, terminal};
use asesmen_core::{ResultRoute, generate_catalog};

#[derive(Parser)]
#[command(
    name = "asesmen",
    version,
    about = "Kuesioner skrining perkembangan anak: autisme, ADHD, intellectual disability"
)]
struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively (default)
    Run,

    /// Print the question catalog
    Catalog {
        /// Print as JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },

    /// Render the result view for a route such as `result/5/9/18`
    Score { route: String },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(config: &AppConfig, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    // A broken config must not block `config init --force` from repairing it,
    // so load failures fall back to defaults instead of aborting.
    let loaded = config::load_or_default(&config_path);
    let app_config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&app_config, cli.log_json);
    match &loaded {
        Ok(_) => tracing::debug!(path = %config_path.display(), "config loaded"),
        Err(e) => tracing::warn!(
            path = %config_path.display(),
            error = %e,
            "ignoring unreadable config, using defaults"
        ),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut flow = Flow::new();
            let outcome = terminal::run(&mut input, &mut out, &mut flow, &app_config)?;
            tracing::debug!(?outcome, "assessment finished");
        }
        Commands::Catalog { json } => {
            let catalog = generate_catalog();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&catalog)?)?;
            } else {
                write!(out, "{}", render::catalog_listing(&catalog))?;
            }
        }
        Commands::Score { route } => {
            let scores = ResultRoute::parse(&route)?.scores()?;
            write!(out, "{}", render::result_view(&scores, app_config.bar_width))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => writeln!(out, "{}", config_path.display())?,
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &AppConfig::default())?;
                writeln!(out, "wrote {}", config_path.display())?;
            }
        },
    }

    Ok(())
}
