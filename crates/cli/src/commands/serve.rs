//! `guidepost serve` — Start the HTTP API server.

use guidepost_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    // Refuse to serve without an upstream credential.
    config.validate()?;

    println!("🧭 Guidepost Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Model:     {}", config.model);

    guidepost_gateway::start(config).await?;

    Ok(())
}
