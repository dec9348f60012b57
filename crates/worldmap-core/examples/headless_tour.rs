//! Headless tour of worldmap-core
//!
//! Builds the widget on an in-memory canvas, loads a boundary dataset from a
//! local file (or the default URL with `--remote`), and walks through a
//! search-and-select the way a user would in the browser.
//!
//! ```text
//! cargo run -p worldmap-core --example headless_tour -- path/to/countries.geo.json fra
//! cargo run -p worldmap-core --example headless_tour -- --remote ger
//! ```

use worldmap_core::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .unwrap_or_else(|| "crates/worldmap-core/tests/fixtures/countries.sample.geo.json".to_string());
    let query = args.next().unwrap_or_else(|| "fra".to_string());

    println!("=== WorldMap headless tour ===\n");

    let catalog = DataCatalog::embedded()?;
    let mut map = WorldMap::new(HeadlessMap::default(), MapConfig::default(), catalog);
    println!("✓ {} landmarks placed", map.canvas().markers().len());

    let loaded = if input == "--remote" {
        println!("Fetching {} ...", map.config().dataset_url);
        map.load_overlay(&HttpSource::new()).await
    } else {
        let body = std::fs::read_to_string(&input)
            .map_err(|e| MapError::InvalidData(format!("cannot read {input}: {e}")))?;
        map.load_overlay(&StaticSource::new(body)).await
    };

    match loaded {
        Ok(n) => println!("✓ {n} countries on the overlay"),
        Err(e) => {
            eprintln!("✗ Error fetching GeoJSON data: {e}");
            return Err(e);
        }
    }

    let mut view = HeadlessSearchView::with_input(query.clone());
    map.on_search_input(&query, &mut view);
    println!("\n--- Search '{query}' ---");
    for row in view.rows() {
        println!("  {} ({})", row.name, row.flag_url);
    }

    if let Some(first) = view.rows().first().cloned() {
        if let Some(country) = map.canvas().country(&first.name) {
            println!("\n--- Popup for {} ---\n{}", first.name, country.popup);
        }
        map.on_search_select(first.feature_index, &mut view);
        let vp = map.canvas().viewport();
        println!(
            "\n✓ Zoomed to {}: center {:.4}, {:.4} at zoom {}",
            first.name, vp.center.lat, vp.center.lng, vp.zoom
        );
    } else {
        println!("  (no matches)");
    }

    Ok(())
}
