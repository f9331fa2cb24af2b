//! `guidepost doctor` — Diagnose configuration health.

use guidepost_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Guidepost Doctor — Configuration Diagnostics");
    println!("==============================================\n");

    let mut issues = 0;

    match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration loaded");

            if config.has_api_key() {
                println!("  ✅ API key configured");
            } else {
                println!("  ❌ No API key — set GEMINI_API_KEY or api_key in config.toml");
                issues += 1;
            }

            if config.model.trim().is_empty() {
                println!("  ❌ Model name is empty");
                issues += 1;
            } else {
                println!("  ✅ Model: {}", config.model);
            }

            println!(
                "  ✅ Gateway bind: {}:{}",
                config.gateway.host, config.gateway.port
            );
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
