use anyhow::{Context, Result};
use clap::Parser;
use restaurant_list::cli::Cli;
use restaurant_list::config::Config;
use restaurant_list::logging::init_tracing;
use restaurant_list::source::Fetcher;
use restaurant_list::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    if let Some(source) = &cli.source {
        config.source.location = source.clone();
        config.validate().context("invalid --source")?;
    }

    let fetcher = Fetcher::from_config(&config.source).context("creating fetcher")?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    tracing::info!(source = %fetcher.source().describe(), print = cli.print, "starting");

    if cli.print {
        let restaurants = rt
            .block_on(fetcher.fetch())
            .context("fetching restaurants")?;
        print!("{}", cli.render_plain(config.ui.min_rating, restaurants));
        return Ok(());
    }

    runtime::run(&config, fetcher, rt.handle()).context("running terminal UI")?;
    Ok(())
}
