use std::path::PathBuf;

use clap::Parser;

use tvw::app::App;
use tvw::config::Config;
use tvw::error::AppResult;
use tvw::logging;

/// Terminal tour of a city, one page at a time.
#[derive(Parser, Debug)]
#[command(name = "tvw")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address or fragment to open, e.g. `#food` or `tvw://zhengzhou#nature`
    location: Option<String>,

    /// Config file to read instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keymap preset (`default` or `vim`)
    #[arg(short, long)]
    keymap: Option<String>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(preset) = cli.keymap {
        config.keymap.preset = preset;
    }

    logging::init(&config.log, cli.log_file.as_deref())?;

    let mut app = App::new(config, cli.location.as_deref());
    app.run().await
}
