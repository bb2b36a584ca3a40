use std::path::PathBuf;
use std::process;

use clap::Parser;

use kilo::config::EnvConfig;
use kilo::{
    clear_screen, load_first_line, logging, window_size, EditorState, Error, ProcessTerminal,
    ShutdownSignals, TerminalMode,
};

#[derive(Debug, Parser)]
#[command(name = "kilo", version, about = "Minimal raw-mode terminal text editor")]
struct Args {
    /// Text file whose first line is shown on start.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let config = EnvConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("kilo: log file: {err}");
    }

    let code = match run(&args, &config) {
        Ok(()) => 0,
        Err(err) => die(&err, config.write_log.clone()),
    };
    process::exit(code);
}

fn run(args: &Args, config: &EnvConfig) -> kilo::Result<()> {
    let signals = ShutdownSignals::register().map_err(Error::Signal)?;
    let mut terminal = ProcessTerminal::new()
        .with_write_log(config.write_log.clone())
        .with_shutdown_flag(signals.flag());

    let mode = TerminalMode::enable(terminal.stdin_fd())?;
    let size = window_size(&mut terminal)?;
    let row = match args.file.as_deref() {
        Some(path) => load_first_line(path)?,
        None => None,
    };

    let mut state = EditorState::new(size).with_row(row);
    kilo::run(&mut terminal, &mut state)?;
    mode.disable()
}

/// Reset the screen, report `err` perror-style and return the exit status.
///
/// By the time this runs the raw-mode guard has been dropped, so the terminal
/// is already back in its original mode. The reset goes through the same
/// write log as the frames.
fn die(err: &Error, write_log: Option<PathBuf>) -> i32 {
    tracing::error!(%err, "fatal");
    let _ = clear_screen(&mut ProcessTerminal::new().with_write_log(write_log));
    eprintln!("kilo: {err}");
    1
}
