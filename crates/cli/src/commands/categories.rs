//! `guidepost categories` — List registered guidance categories.

use guidepost_policy::registry::{self, GuidanceType};

pub fn run(
    guidance_type: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let types: Vec<GuidanceType> = match guidance_type.as_deref() {
        Some(raw) => match GuidanceType::parse(raw) {
            Some(t) => vec![t],
            None => return Err(format!("Unknown guidance type: {raw}").into()),
        },
        None => vec![GuidanceType::Mental, GuidanceType::Technical],
    };

    if json {
        let mut listing = serde_json::Map::new();
        for t in &types {
            let ids = registry::categories_for(t.as_str()).unwrap_or_default();
            listing.insert(t.as_str().into(), serde_json::json!(ids));
        }
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for t in &types {
        let ids = registry::categories_for(t.as_str()).unwrap_or_default();
        println!("{} ({} categories):", t.as_str(), ids.len());
        for id in ids {
            println!("  - {id}");
        }
        println!();
    }

    Ok(())
}
