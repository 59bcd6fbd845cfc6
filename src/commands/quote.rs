use anyhow::Result;
use colored::Colorize;
use tracing::info;

use skipquote::{
    catalog::{CatalogState, SkipBrowser},
    config,
    models::Skip,
    pricing,
};

/// Execute the quote command
///
/// Fetches the catalog, selects the requested skip, and prints the
/// selection summary
pub async fn execute(id: Option<i64>, size: Option<u32>) -> Result<()> {
    if id.is_none() && size.is_none() {
        anyhow::bail!("Pass --id or --size to choose a skip");
    }

    let cfg = config::load_config()?;
    let client = reqwest::Client::new();
    let mut browser = SkipBrowser::new();
    browser.activate(&client, &cfg).await;

    match browser.state() {
        CatalogState::Failed { message } => {
            eprintln!("{} {}", "✗".red(), message.red());
            eprintln!("Run the command again to retry.");
            anyhow::bail!("skip catalog unavailable");
        }
        CatalogState::Loading => anyhow::bail!("catalog was not activated"),
        CatalogState::Ready { .. } => {}
    }

    let chosen = match (id, size) {
        (Some(id), _) => browser.find_by_id(id),
        (None, Some(size)) => browser.find_by_size(size),
        (None, None) => unreachable!(),
    };

    let chosen = match chosen {
        Some(skip) => skip.clone(),
        None => {
            let sizes: Vec<String> = browser
                .skips()
                .iter()
                .map(|s| s.size.to_string())
                .collect();
            anyhow::bail!(
                "No matching skip at this location. Available sizes: {}",
                sizes.join(", ")
            );
        }
    };

    browser.select(chosen);
    let selected = browser.selected().expect("selection was just made");
    info!(id = selected.id, size = selected.size, "skip selected");

    print_summary(selected);

    Ok(())
}

fn print_summary(skip: &Skip) {
    let final_price = pricing::final_price(skip);

    println!();
    println!(
        "{} Selected: {}",
        "✓".green(),
        pricing::display_name(skip).bold()
    );
    println!("  {}", pricing::description(skip));
    println!("  {}", pricing::capacity_summary(skip.size));
    println!("  Approx. {}", pricing::approx_dimensions(skip.size));

    let mut flags = Vec::new();
    if skip.allowed_on_road {
        flags.push("Road placement OK");
    }
    if skip.allows_heavy_waste {
        flags.push("Heavy waste OK");
    }
    if !flags.is_empty() {
        println!("  {}", flags.join(" / "));
    }
    if skip.forbidden {
        println!("  {}", "Not available at this location".yellow());
    }

    println!(
        "  {} inc. VAT (£{} + {}% VAT)",
        pricing::format_price(final_price).bold(),
        skip.price_before_vat,
        skip.vat
    );
}
