//! Serve the HTTP binding

use swiftguard::config::ServiceConfig;
use swiftguard::service::ValidationService;

/// Start the HTTP server and block
#[cfg(feature = "server")]
pub fn serve(config: &ServiceConfig, host: Option<&str>, port: Option<u16>) -> anyhow::Result<()> {
    let service = ValidationService::from_config(config)?;
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);
    crate::server::tiny_http::run(&service, &format!("{host}:{port}"))
}

/// Start the HTTP server and block
#[cfg(not(feature = "server"))]
pub fn serve(config: &ServiceConfig, _host: Option<&str>, _port: Option<u16>) -> anyhow::Result<()> {
    let _ = ValidationService::from_config(config)?;
    anyhow::bail!("swiftguard was built without the `server` feature")
}
