//! External program execution.

use std::io::Write;
use std::process::{Command, ExitStatus};

use crate::Flow;

/// Run `args[0]` with the remaining arguments and wait for it to exit or be
/// killed. The child inherits stdin, stdout and stderr.
///
/// Spawn failures are reported on `err`; the shell keeps running either way.
pub fn launch(args: &[String], err: &mut dyn Write) -> std::io::Result<Flow> {
    let Some((program, rest)) = args.split_first() else {
        return Ok(Flow::Continue);
    };

    match Command::new(program).args(rest).status() {
        Ok(status) => {
            tracing::debug!(%program, status = %format_exit_status(status), "child finished");
        }
        Err(e) => writeln!(err, "lsh: {e}")?,
    }
    Ok(Flow::Continue)
}

pub fn format_exit_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit_code={code}"),
        None => "exit_code=terminated_by_signal".to_string(),
    }
}
