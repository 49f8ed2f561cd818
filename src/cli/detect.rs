//! Detect command: print the environment for a URL as JSON.

use anyhow::Result;

use crate::config::Config;
use crate::env::{self, Location, MarkerSet};

/// Classify a URL and print the resulting context.
///
/// Detection here sees no document, so marker-based classification
/// (platform meta tags) does not participate; hostname and path decide.
pub fn run_detect(config: &Config, url: &str, pretty: bool) -> Result<()> {
    let location = Location::parse(url)?;
    let ctx = env::detect(&location, &MarkerSet::default(), &config.detect);

    let json = if pretty {
        serde_json::to_string_pretty(&ctx)?
    } else {
        serde_json::to_string(&ctx)?
    };
    println!("{json}");
    Ok(())
}
