#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod artifact;
mod assembly;
mod cli;
mod config;
mod output;
mod params;
mod pipeline;
mod tool;
mod utils;

fn main() -> anyhow::Result<()> {
    // Set up configuration from CLI
    let cfg = config::handle_cli()?;
    debug!("{:?}", cfg);

    // Write failures are reported but never change the exit status
    tool::run(&cfg).map(|_| ())
}
