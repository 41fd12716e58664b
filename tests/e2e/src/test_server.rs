use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// A served web build. `E2E_BASE_URL` points the tests at an already running
/// site; otherwise `dx serve` is started on a free port and killed on drop.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        if let Ok(url) = std::env::var("E2E_BASE_URL") {
            let url = url.trim_end_matches('/').to_string();
            wait_for_server(&url).await?;
            return Ok(Self { url, process: None });
        }

        let port = get_random_port()?;
        let process = Command::new("dx")
            .args(["serve", "--package", "glowizon-web", "--platform", "web"])
            .args(["--addr", "127.0.0.1", "--port", &port.to_string()])
            .env("SITE_NEWSLETTER_DELAY_MS", "100")
            .env("SITE_LOG_LEVEL", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let url = format!("http://127.0.0.1:{port}");
        let server = Self {
            url,
            process: Some(process),
        };

        wait_for_server(&server.url).await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // first builds compile the whole workspace to wasm
    for i in 0..1800 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 100 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 180s)")
}
