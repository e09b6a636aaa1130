//! Process-level tests for the compiled binary.
//!
//! These cover the startup paths that only show up as exit status: invalid
//! configuration and bind failures must terminate the process non-zero, and
//! a valid PORT must produce a reachable server.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::net::TcpStream;

const BINARY: &str = env!("CARGO_BIN_EXE_doks-hello");

fn command() -> Command {
    let mut cmd = Command::new(BINARY);
    cmd.env_remove("APP_VERSION")
        .env_remove("PORT")
        .env("RUST_LOG", "doks_hello=warn")
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Kills the server process when the test ends.
struct ServerProcess {
    process: Child,
}

impl ServerProcess {
    /// Poll until the port accepts connections, without blocking the test runtime.
    async fn wait_for_ready(&mut self, port: u16) {
        let max_attempts = 100;
        let delay = Duration::from_millis(50);

        for _ in 0..max_attempts {
            if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                return;
            }
            if let Some(status) = self.process.try_wait().unwrap() {
                panic!("server exited early with {status}");
            }
            tokio::time::sleep(delay).await;
        }

        panic!(
            "server did not start within {} seconds",
            max_attempts as f64 * delay.as_secs_f64()
        );
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn non_numeric_port_exits_non_zero() {
    let status = command().env("PORT", "abc").status().unwrap();
    assert!(!status.success());
}

#[test]
fn empty_port_exits_non_zero() {
    let status = command().env("PORT", "").status().unwrap();
    assert!(!status.success());
}

#[test]
fn occupied_port_exits_non_zero() {
    let occupied = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let status = command().env("PORT", port.to_string()).status().unwrap();
    assert!(!status.success());
}

#[tokio::test]
async fn serves_on_configured_port() {
    let port = free_port();
    let process = command()
        .env("PORT", port.to_string())
        .env("APP_VERSION", "from-env")
        .spawn()
        .unwrap();
    let mut server = ServerProcess { process };
    server.wait_for_ready(port).await;

    let body = reqwest::get(format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Hello from Flask on DOKS from-env!\n");

    let health = reqwest::get(format!("http://127.0.0.1:{port}/healthz"))
        .await
        .unwrap();
    assert_eq!(health.status(), 200);
}

#[tokio::test]
async fn unset_version_uses_default() {
    let port = free_port();
    let process = command().env("PORT", port.to_string()).spawn().unwrap();
    let mut server = ServerProcess { process };
    server.wait_for_ready(port).await;

    let body = reqwest::get(format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Hello from Flask on DOKS Final Version-Final-v3!\n");
}
