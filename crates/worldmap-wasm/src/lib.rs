//! worldmap-wasm: WebAssembly bindings for worldmap-core
//!
//! Mounts the world map widget on a page that has Leaflet loaded: landmark
//! markers, the country overlay with statistics popups, and the country
//! search box that zooms to the picked country.
//!
//! What it provides
//! ----------------
//! - Panic hook + log line on module load (via `#[wasm_bindgen(start)]`)
//! - `mount_world_map(config?)`: builds the widget and starts the one
//!   boundary fetch
//! - `search_countries("fra")`: the rows the search box would show
//! - `get_stats()`: counts of landmarks, statistics, flags and loaded
//!   countries
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { mount_world_map, get_stats } from 'worldmap-wasm';
//!
//! async function main() {
//!   await init();
//!   // needs <div id="map">, <input id="search-input">, <ul id="search-results">
//!   mount_world_map({ zoom: 3, legend: { position: 'bottomright' } });
//!   console.log(get_stats());
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Landmarks, statistics and flags are embedded in the binary; only the
//!   boundary GeoJSON is fetched, once, from `datasetUrl`.
//! - Until that fetch succeeds the overlay is absent and searches match
//!   nothing. A failed fetch is logged to the console and never retried.

use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use std::result::Result;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event};
use worldmap_core::prelude::*;

pub mod dom;
pub mod leaflet;

use dom::DomSearchView;
use leaflet::LeafletMap;

/// The mounted widget: map state plus the DOM search box driving it.
struct Widget {
    map: WorldMap<LeafletMap>,
    view: DomSearchView,
}

thread_local! {
    static WIDGET: RefCell<Option<Rc<RefCell<Widget>>>> = const { RefCell::new(None) };
}

fn mounted() -> Option<Rc<RefCell<Widget>>> {
    WIDGET.with(|w| w.borrow().clone())
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::log_1(&"Initializing WorldMap WASM module...".into());
}

/* --------------------------------------------------------------------------
   Mounting
-------------------------------------------------------------------------- */

/// Build the widget in the page and kick off the boundary fetch.
///
/// `config` is a partial `MapConfig` object (camelCase keys); `undefined`
/// or `null` keeps every default. Mounting twice is an error.
#[wasm_bindgen]
pub fn mount_world_map(config: JsValue) -> Result<(), JsValue> {
    if mounted().is_some() {
        return Err(JsValue::from_str("world map is already mounted"));
    }

    let config: MapConfig = if config.is_undefined() || config.is_null() {
        MapConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let catalog = DataCatalog::embedded().map_err(js_error)?;

    // Row clicks call back into the widget, which owns the rows.
    let handle: Rc<RefCell<Weak<RefCell<Widget>>>> = Rc::default();
    let on_select: Rc<dyn Fn(usize)> = {
        let handle = Rc::clone(&handle);
        Rc::new(move |index| {
            let Some(widget) = handle.borrow().upgrade() else {
                return;
            };
            let mut w = widget.borrow_mut();
            let Widget { map, view } = &mut *w;
            map.on_search_select(index, view);
        })
    };
    let view = DomSearchView::attach(
        &document,
        &config.search_input_id,
        &config.search_results_id,
        on_select,
    )?;
    let canvas = LeafletMap::mount(&config.container_id)?;

    let widget = Rc::new(RefCell::new(Widget {
        map: WorldMap::new(canvas, config, catalog),
        view,
    }));
    *handle.borrow_mut() = Rc::downgrade(&widget);

    listen_for_input(&widget)?;
    WIDGET.with(|w| *w.borrow_mut() = Some(Rc::clone(&widget)));
    wasm_bindgen_futures::spawn_local(load_overlay(widget));

    console::log_1(&format!("✓ Placed {} landmarks", catalog.landmarks.len()).into());
    Ok(())
}

fn listen_for_input(widget: &Rc<RefCell<Widget>>) -> Result<(), JsValue> {
    let handle = Rc::clone(widget);
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let mut w = handle.borrow_mut();
        let Widget { map, view } = &mut *w;
        let query = view.query();
        map.on_search_input(&query, view);
    });
    widget
        .borrow()
        .view
        .input()
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    // The search box lives as long as the page.
    on_input.forget();
    Ok(())
}

async fn load_overlay(widget: Rc<RefCell<Widget>>) {
    // Fetch through a clone so the widget is not borrowed across the await.
    let loader = widget.borrow().map.loader().clone();
    let fetched = loader.fetch(&HttpSource::new()).await;

    let installed = widget.borrow_mut().map.install_overlay(fetched);
    match installed {
        Ok(countries) => console::log_1(&format!("✓ Loaded {countries} countries").into()),
        Err(e) => console::error_1(&format!("Error fetching GeoJSON data: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

/// Rows the search box shows for `query`: `[{ featureIndex, name, flagUrl }]`.
///
/// Empty until the widget is mounted and the boundaries have loaded.
#[wasm_bindgen]
pub fn search_countries(query: &str) -> JsValue {
    let rows = match mounted() {
        Some(widget) => {
            let w = widget.borrow();
            w.map.search().search(query)
        }
        None => Vec::new(),
    };
    to_value(&rows).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = match mounted() {
        Some(widget) => {
            let w = widget.borrow();
            w.map.stats()
        }
        None => match DataCatalog::embedded() {
            Ok(catalog) => MapStats {
                landmarks: catalog.landmarks.len(),
                statistics: catalog.statistics.len(),
                flags: catalog.flags.len(),
                ..MapStats::default()
            },
            Err(e) => {
                console::error_1(&js_error(e));
                MapStats::default()
            }
        },
    };
    let stats = json!({
        "landmarks": stats.landmarks,
        "statistics": stats.statistics,
        "flags": stats.flags,
        "features": stats.features,
        "datasetLoaded": stats.dataset_loaded
    });

    stats
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}
