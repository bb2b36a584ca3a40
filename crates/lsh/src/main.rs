use anyhow::Context;

use lsh::logging::{self, LogConfig};
use lsh::Shell;

fn main() -> anyhow::Result<()> {
    let config = LogConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("lsh: log file: {err}");
    }
    Shell::stdio().run().context("lsh")
}
