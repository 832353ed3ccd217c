use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assembly_line::config::{Config, Paths};
use assembly_line::error::AssemblyError;
use assembly_line::output::format_schedule;
use assembly_line::{build_schedule, read_activities, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_directive());

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize tracing on stderr so stdout only carries the schedule.
fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_directive.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<(), AssemblyError> {
    if cli.init_config {
        return init_config(cli.config.as_deref());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();

    let input = cli.input.as_ref().unwrap_or(&config.input.path);
    let format = cli.output.unwrap_or(config.general.default_output);

    let activities = read_activities(input)?;
    let schedule = build_schedule(&activities)?;
    let output = format_schedule(&schedule, format, &config.labels)?;

    println!("{output}");
    Ok(())
}

fn init_config(path: Option<&std::path::Path>) -> Result<(), AssemblyError> {
    let config = Config::default();
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                Paths::with_root(parent.to_path_buf()).ensure_dirs()?;
            }
            config.save_to_path(path)?;
            println!("Wrote {}", path.display());
        }
        None => {
            config.save()?;
            println!("Wrote {}", Paths::new()?.config_file.display());
        }
    }
    Ok(())
}
