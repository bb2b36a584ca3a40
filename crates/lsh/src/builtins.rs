//! Commands handled inside the shell process.

use std::io::Write;

use crate::Flow;

pub type BuiltinFn = fn(&[String], &mut dyn Write, &mut dyn Write) -> std::io::Result<Flow>;

/// Builtins in dispatch order; `help` lists them in this order too.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[("cd", cd), ("help", help), ("exit", exit)];

pub fn find_builtin(name: &str) -> Option<BuiltinFn> {
    BUILTINS
        .iter()
        .find_map(|&(candidate, builtin)| (candidate == name).then_some(builtin))
}

/// `cd DIR`: change the shell's working directory.
fn cd(args: &[String], _out: &mut dyn Write, err: &mut dyn Write) -> std::io::Result<Flow> {
    match args.get(1) {
        None => writeln!(err, "lsh: expected argument to \"cd\"")?,
        Some(dir) => {
            if let Err(e) = std::env::set_current_dir(dir) {
                writeln!(err, "lsh: {e}")?;
            }
        }
    }
    Ok(Flow::Continue)
}

fn help(_args: &[String], out: &mut dyn Write, _err: &mut dyn Write) -> std::io::Result<Flow> {
    writeln!(out, "LSH")?;
    writeln!(out, "Type program names and arguments, and hit enter.")?;
    writeln!(out, "The following are built in:")?;
    writeln!(out)?;
    for (name, _) in BUILTINS {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;
    writeln!(out, "Use the man command for information on other programs.")?;
    Ok(Flow::Continue)
}

fn exit(_args: &[String], _out: &mut dyn Write, _err: &mut dyn Write) -> std::io::Result<Flow> {
    Ok(Flow::Stop)
}
