use anyhow::Result;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// A `web` server process in local mode, killed on drop.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;
        let url = format!("http://localhost:{}", port);

        // Local mode delivers contact messages to the console mailer.
        let process = server_command()
            .env("APP_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env("SITE_URL", &url)
            .env_remove("EMAILJS_SERVICE_ID")
            .env_remove("SMTP_HOST")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let server = Self {
            url,
            process: Some(process),
        };

        // Killed by Drop if startup times out.
        wait_for_server(&server.url).await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn at(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}

/// `E2E_WEB_BIN` points at a bundled fullstack server (the output of
/// `dx build --fullstack`), which also serves the wasm client. Without it the
/// server is built with cargo and pages are server-rendered only.
fn server_command() -> Command {
    match std::env::var_os("E2E_WEB_BIN") {
        Some(bin) => {
            let bin = PathBuf::from(bin);
            let mut command = Command::new(&bin);
            if let Some(dir) = bin.parent() {
                command.current_dir(dir);
            }
            command
        }
        None => {
            let mut command = Command::new("cargo");
            command.args(["run", "--package", "web", "--features", "server"]);
            command
        }
    }
}

/// Interactive tests need the hydrated client.
pub fn client_bundle_available() -> bool {
    std::env::var_os("E2E_WEB_BIN").is_some()
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 60 seconds for server to start (compilation + startup)
    for i in 0..600 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}
