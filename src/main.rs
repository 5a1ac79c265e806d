//! Prints the coverflow layout for the built-in catalog as JSON, one line
//! per cursor position. Useful for checking geometry settings without a
//! browser.
//!
//! Usage: `showcase [catalog.json]`

use anyhow::{Context, Result};
use serde::Serialize;
use showcase::carousel::{Coverflow, RenderParams};
use showcase::settings::Settings;
use showcase::types::{default_catalog, parse_catalog};
use showcase::logging;
use std::fs;

#[derive(Serialize)]
struct LayoutLine<'a> {
    cursor: usize,
    title: &'a str,
    cards: &'a [RenderParams],
}

fn main() -> Result<()> {
    logging::init();

    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
            parse_catalog(&json).with_context(|| format!("failed to parse {path}"))?
        }
        None => default_catalog(),
    };

    let settings = Settings::load();
    let mut coverflow = Coverflow::from_settings(catalog, &settings, false)?;

    let mut update = coverflow.carousel().initial_layout();
    for _ in 0..coverflow.carousel().len() {
        let line = LayoutLine {
            cursor: update.cursor,
            title: &coverflow.carousel().select_current().title,
            cards: &update.params,
        };
        println!("{}", serde_json::to_string(&line)?);
        update = coverflow.next();
    }
    Ok(())
}
