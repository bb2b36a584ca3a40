//! Read-eval loop.

use std::io::{self, BufRead, StdinLock, Stderr, Stdout, Write};

use crate::builtins::find_builtin;
use crate::error::ShellError;
use crate::launch::launch;
use crate::line::{read_line, split_line};
use crate::Flow;

pub const PROMPT: &str = "> ";

pub struct Shell<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Shell<StdinLock<'static>, Stdout, Stderr> {
    /// Shell on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Prompt and execute lines until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.out
                .write_all(PROMPT.as_bytes())
                .and_then(|()| self.out.flush())
                .map_err(ShellError::Write)?;

            let Some(line) = read_line(&mut self.input).map_err(ShellError::Read)? else {
                tracing::debug!("end of input");
                return Ok(());
            };

            let args = split_line(&line);
            if self.execute(&args)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Run one tokenized command line.
    pub fn execute(&mut self, args: &[String]) -> Result<Flow, ShellError> {
        let Some(name) = args.first() else {
            return Ok(Flow::Continue);
        };

        let flow = match find_builtin(name) {
            Some(builtin) => builtin(args, &mut self.out, &mut self.err),
            None => {
                // Child output goes straight to the inherited stdout.
                self.out.flush().map_err(ShellError::Write)?;
                launch(args, &mut self.err)
            }
        };
        flow.map_err(ShellError::Write)
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}
