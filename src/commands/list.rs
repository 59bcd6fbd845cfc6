use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use tracing::info;

use skipquote::{
    catalog::{CatalogState, SkipBrowser},
    config, pricing,
};

/// Execute the list command
///
/// Fetches the catalog for the configured location and renders it as a table
pub async fn execute() -> Result<()> {
    let cfg = config::load_config()?;

    println!(
        "Loading skip options for {} ({})...",
        cfg.location.postcode, cfg.location.area
    );
    info!(postcode = %cfg.location.postcode, area = %cfg.location.area, "listing skips");

    let client = reqwest::Client::new();
    let mut browser = SkipBrowser::new();
    browser.activate(&client, &cfg).await;

    let skips = match browser.state() {
        CatalogState::Ready { skips } => skips,
        CatalogState::Failed { message } => {
            eprintln!("{} {}", "✗".red(), message.red());
            eprintln!("Run the command again to retry.");
            anyhow::bail!("skip catalog unavailable");
        }
        CatalogState::Loading => anyhow::bail!("catalog was not activated"),
    };

    if skips.is_empty() {
        println!("No skips available at this location.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    // Add header
    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("NAME").fg(Color::Cyan),
        Cell::new("HIRE PERIOD").fg(Color::Cyan),
        Cell::new("DIMENSIONS").fg(Color::Cyan),
        Cell::new("PRICE INC. VAT").fg(Color::Cyan),
        Cell::new("ON ROAD").fg(Color::Cyan),
        Cell::new("HEAVY WASTE").fg(Color::Cyan),
        Cell::new("NOTES").fg(Color::Cyan),
    ]);

    // Add rows
    for skip in skips {
        let mut notes = Vec::new();
        if pricing::is_popular(skip.size) {
            notes.push("Popular");
        }
        if skip.forbidden {
            notes.push("Not available here");
        }

        table.add_row(vec![
            Cell::new(skip.id),
            Cell::new(pricing::display_name(skip)),
            Cell::new(pricing::description(skip)),
            Cell::new(pricing::approx_dimensions(skip.size)),
            Cell::new(pricing::format_price(pricing::final_price(skip))),
            Cell::new(if skip.allowed_on_road { "yes" } else { "no" }),
            Cell::new(if skip.allows_heavy_waste { "yes" } else { "no" }),
            Cell::new(notes.join(", ")),
        ]);
    }

    println!("{table}");
    println!(
        "{} skips available. Quote one with: skipquote quote --size <yards>",
        skips.len()
    );

    Ok(())
}
