mod cli;
mod config;
mod layout;
mod logging;
mod provision;
mod runner;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
