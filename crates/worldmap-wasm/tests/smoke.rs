use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use worldmap_wasm::{get_stats, search_countries};

#[wasm_bindgen_test]
fn stats_report_embedded_tables_before_mount() {
    #[cfg(target_arch = "wasm32")]
    worldmap_wasm::start();

    let stats: serde_json::Value = serde_wasm_bindgen::from_value(get_stats()).unwrap();
    assert!(stats["landmarks"].as_f64().unwrap() > 0.0, "{stats}");
    assert!(stats["statistics"].as_f64().unwrap() > 0.0, "{stats}");
    assert!(stats["flags"].as_f64().unwrap() > 0.0, "{stats}");
    assert_eq!(stats["features"].as_f64(), Some(0.0));
    assert_eq!(stats["datasetLoaded"], false);
}

#[wasm_bindgen_test]
fn search_matches_nothing_before_mount() {
    #[cfg(target_arch = "wasm32")]
    worldmap_wasm::start();

    let rows: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(search_countries("fra")).unwrap();
    assert!(rows.is_empty());
}
