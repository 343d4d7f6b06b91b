use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::error::{Result, SubmitGuardError};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A subprocess invocation described as a structured argument vector.
///
/// No shell is involved; the program and arguments are passed verbatim.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

/// Captured outcome of a finished (or killed) subprocess.
#[derive(Debug)]
pub struct ExecOutcome {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl ExecOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Run the command, waiting at most `timeout` before killing it.
///
/// Stdout and stderr are captured even when the caller only consumes the
/// exit status. A process that outlives the timeout is killed and reported
/// with `timed_out` set; this is not an `Err`.
///
/// # Errors
/// Returns an error if the binary cannot be spawned at all.
pub fn run(spec: &CommandSpec, timeout: Duration) -> Result<ExecOutcome> {
    let mut command = Command::new(&spec.program);
    command
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &spec.cwd {
        command.current_dir(dir);
    }

    let mut child = command.spawn().map_err(|source| SubmitGuardError::Spawn {
        program: spec.program.display().to_string(),
        source,
    })?;

    // Drain the pipes on their own threads so a chatty child cannot fill the
    // pipe buffer and deadlock against our wait loop.
    let stdout = drain_pipe(child.stdout.take());
    let stderr = drain_pipe(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let (exit_code, timed_out) = loop {
        if let Some(status) = child.try_wait()? {
            break (status.code(), false);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let code = child.wait().ok().and_then(|status| status.code());
            break (code, true);
        }
        std::thread::sleep(POLL_INTERVAL);
    };

    Ok(ExecOutcome {
        exit_code,
        stdout: join_reader(stdout),
        stderr: join_reader(stderr),
        timed_out,
    })
}

fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut reader| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
