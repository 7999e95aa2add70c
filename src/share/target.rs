use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{PlannerError, Result};

/// Somewhere a share message can be handed off to.
///
/// Implementations fail with [`PlannerError::ShareUnavailable`] when no
/// handler exists or the handler rejects the message.
pub trait ShareTarget {
    fn share(&self, message: &str) -> Result<()>;

    /// Short human-readable name for logs and prompts.
    fn describe(&self) -> String;
}

/// Prints the message to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn share(&self, message: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", message)?;
        out.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

/// Saves the message as a text file.
#[derive(Debug, Clone)]
pub struct FileShare {
    path: PathBuf,
}

impl FileShare {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShareTarget for FileShare {
    fn share(&self, message: &str) -> Result<()> {
        fs::write(&self.path, message).map_err(|e| {
            PlannerError::ShareUnavailable(format!("cannot write {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Clipboard helpers checked by [`CommandShare::detect`], in preference order.
const CLIPBOARD_HELPERS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Pipes the message into an external program's stdin.
#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `xclip -selection clipboard`.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| PlannerError::InvalidInput("empty share command".to_string()))?;
        Ok(Self::new(program, parts.map(str::to_string).collect()))
    }

    /// Find the first clipboard helper available on `PATH`.
    pub fn detect() -> Result<Self> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        let dirs: Vec<PathBuf> = env::split_paths(&path_var).collect();

        for (program, args) in CLIPBOARD_HELPERS {
            if find_program(&dirs, program).is_some() {
                debug!(program, "detected clipboard helper");
                return Ok(Self::new(
                    *program,
                    args.iter().map(|a| a.to_string()).collect(),
                ));
            }
        }

        Err(PlannerError::ShareUnavailable(
            "no clipboard helper found on PATH".to_string(),
        ))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

fn find_program(dirs: &[PathBuf], program: &str) -> Option<PathBuf> {
    dirs.iter().find_map(|dir| {
        let plain = dir.join(program);
        if plain.is_file() {
            return Some(plain);
        }
        let exe = dir.join(format!("{}.exe", program));
        exe.is_file().then_some(exe)
    })
}

impl ShareTarget for CommandShare {
    fn share(&self, message: &str) -> Result<()> {
        let unavailable = |reason: String| {
            PlannerError::ShareUnavailable(format!("{}: {}", self.program, reason))
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| unavailable(e.to_string()))?;

        // Dropping stdin closes the pipe before waiting
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(message.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when the write failed
        let status = child.wait().map_err(|e| unavailable(e.to_string()))?;
        written.map_err(|e| unavailable(e.to_string()))?;

        if !status.success() {
            return Err(unavailable(format!("exited with {}", status)));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
