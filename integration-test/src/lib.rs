//! Test driver for the demo binaries.
//!
//! Spawns a binary with the given arguments and environment, drains its
//! stdout and stderr on background threads, and checks the exit code.

use std::io::Read;
use std::process::{Child, ChildStderr, ChildStdout, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

/// A running demo process.
pub struct TestSession {
    child: Child,
    /// Captured stdout, populated by background thread.
    stdout_capture: Arc<Mutex<Vec<u8>>>,
    /// Captured stderr, populated by background thread.
    stderr_capture: Arc<Mutex<Vec<u8>>>,
    stdout_thread: thread::JoinHandle<()>,
    stderr_thread: thread::JoinHandle<()>,
}

impl TestSession {
    /// Spawn `binary` with the given arguments.
    ///
    /// `env` are additional environment variables to set. `RUST_LOG` is
    /// cleared unless `env` sets it, so log lines never leak into stderr
    /// assertions.
    pub fn spawn(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> std::io::Result<TestSession> {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        cmd.env_remove("RUST_LOG");
        for (k, v) in env {
            cmd.env(k, v);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn()?;
        let stdout_pipe = child.stdout.take().ok_or_else(|| missing_pipe("stdout"))?;
        let stderr_pipe = child.stderr.take().ok_or_else(|| missing_pipe("stderr"))?;

        let stdout_capture = Arc::new(Mutex::new(Vec::new()));
        let stdout_thread = drain(Pipe::Stdout(stdout_pipe), Arc::clone(&stdout_capture));

        let stderr_capture = Arc::new(Mutex::new(Vec::new()));
        let stderr_thread = drain(Pipe::Stderr(stderr_pipe), Arc::clone(&stderr_capture));

        Ok(TestSession {
            child,
            stdout_capture,
            stderr_capture,
            stdout_thread,
            stderr_thread,
        })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(mut self, expected_code: i32) -> SessionOutput {
        let status = self.child.wait().expect("failed to wait for child");
        let code = status.code().unwrap_or(-1);

        // The capture threads finish once the child's pipes close.
        let _ = self.stdout_thread.join();
        let _ = self.stderr_thread.join();

        let stdout = String::from_utf8_lossy(&self.stdout_capture.lock().unwrap()).to_string();
        let stderr = String::from_utf8_lossy(&self.stderr_capture.lock().unwrap()).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

/// Spawn `binary`, wait for it, and assert its exit code.
pub fn run(binary: &str, args: &[&str], expected_code: i32) -> SessionOutput {
    TestSession::spawn(binary, args, &[])
        .unwrap_or_else(|e| panic!("failed to spawn {binary}: {e}"))
        .wait_exit(expected_code)
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SessionOutput {
    /// Stdout split into lines, without trailing whitespace.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().map(str::trim_end).collect()
    }
}

enum Pipe {
    Stdout(ChildStdout),
    Stderr(ChildStderr),
}

impl Read for Pipe {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Pipe::Stdout(p) => p.read(buf),
            Pipe::Stderr(p) => p.read(buf),
        }
    }
}

fn drain(mut pipe: Pipe, capture: Arc<Mutex<Vec<u8>>>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    capture.lock().unwrap().extend_from_slice(&buf[..n]);
                }
                Err(e) => {
                    eprintln!("pipe drain error: {e}");
                    break;
                }
            }
        }
    })
}

fn missing_pipe(name: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("child {name} was not piped"))
}
