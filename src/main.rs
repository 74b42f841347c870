use clap::Parser;
use dvr_orphans::args::{Args, Config};
use dvr_orphans::driver;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        println!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());

    let stdout = std::io::stdout();
    driver::run(&config, &mut stdout.lock())?;

    Ok(())
}
