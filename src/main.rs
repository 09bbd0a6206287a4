use anyhow::Context;
use clap::Parser;

use herolist::cli::Cli;
use herolist::config::Config;
use herolist::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("herolist-worker")
        .build()
        .context("failed to start async runtime")?;
    let _enter = runtime.enter();

    herolist::ui::runtime::run(&config)
}
