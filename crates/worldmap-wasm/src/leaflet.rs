// crates/worldmap-wasm/src/leaflet.rs
//! Leaflet bindings and the [`MapCanvas`] built on them.
//!
//! Expects the Leaflet script to be loaded on the page (global `L`).

use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use worldmap_core::canvas::{CountryOverlay, Legend, Marker, TileLayer};
use worldmap_core::common::{LatLng, LatLngBounds};
use worldmap_core::traits::MapCanvas;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &JsValue) -> Map;

    /// Any `L.Layer`: tiles, markers, the GeoJSON group.
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    /// `L.Control`
    pub type Control;

    #[wasm_bindgen(js_namespace = L, js_name = control)]
    fn control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, setter, js_name = onAdd)]
    fn set_on_add(this: &Control, on_add: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_control_to(this: &Control, map: &Map) -> Control;
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

fn lat_lng(p: LatLng) -> JsValue {
    to_js(&p.to_array())
}

/// A Leaflet map mounted in a container element.
///
/// Holds the callbacks Leaflet keeps calling (overlay binding, legend
/// `onAdd`) so they live as long as the map.
pub struct LeafletMap {
    map: Map,
    callbacks: Vec<Closure<dyn FnMut(JsValue, JsValue) -> JsValue>>,
}

impl LeafletMap {
    /// `L.map(container_id)`. Fails if Leaflet is not on the page.
    pub fn mount(container_id: &str) -> Result<Self, JsValue> {
        let has_leaflet = Reflect::has(&js_sys::global(), &JsValue::from_str("L"))?;
        if !has_leaflet {
            return Err(JsValue::from_str("Leaflet (global `L`) is not loaded"));
        }
        Ok(Self {
            map: new_map(container_id),
            callbacks: Vec::new(),
        })
    }
}

impl MapCanvas for LeafletMap {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &"attribution".into(),
            &JsValue::from_str(&layer.attribution),
        );
        tile_layer(&layer.url_template, &options).add_layer_to(&self.map);
    }

    fn add_marker(&mut self, m: &Marker<'_>) {
        let options = Object::new();
        let _ = Reflect::set(&options, &"icon".into(), &div_icon(&to_js(m.icon)));
        marker(&lat_lng(m.position), &options)
            .add_layer_to(&self.map)
            .bind_popup(&m.popup);
    }

    fn add_overlay(&mut self, overlay: &CountryOverlay<'_>) {
        let (collection, popups) = overlay.drawable();
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let data = match collection.serialize(&serializer) {
            Ok(data) => data,
            Err(e) => {
                web_sys::console::error_1(&format!("cannot hand overlay to Leaflet: {e}").into());
                return;
            }
        };

        // Leaflet calls onEachFeature once per drawn layer, in collection
        // order; `drawable` only lists features that draw one.
        let popups: Vec<String> = popups.into_iter().map(str::to_owned).collect();
        let mut next = 0usize;
        let on_each_feature = Closure::<dyn FnMut(JsValue, JsValue) -> JsValue>::new(
            move |_feature: JsValue, layer: JsValue| {
                if let Some(popup) = popups.get(next) {
                    layer.unchecked_ref::<Layer>().bind_popup(popup);
                }
                next += 1;
                JsValue::UNDEFINED
            },
        );

        let options = Object::new();
        let _ = Reflect::set(&options, &"style".into(), &to_js(overlay.style));
        let _ = Reflect::set(&options, &"onEachFeature".into(), on_each_feature.as_ref());
        geo_json(&data, &options).add_layer_to(&self.map);
        self.callbacks.push(on_each_feature);
    }

    fn add_legend(&mut self, legend: &Legend) {
        let options = Object::new();
        let _ = Reflect::set(&options, &"position".into(), &to_js(&legend.position));
        let legend_control = control(&options);

        let class_name = legend.class_name.clone();
        let html = legend.html.clone();
        let on_add = Closure::<dyn FnMut(JsValue, JsValue) -> JsValue>::new(
            move |_map: JsValue, _: JsValue| {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return JsValue::NULL;
                };
                match document.create_element("div") {
                    Ok(div) => {
                        div.set_class_name(&class_name);
                        div.set_inner_html(&html);
                        div.into()
                    }
                    Err(e) => e,
                }
            },
        );
        legend_control.set_on_add(on_add.as_ref().unchecked_ref());
        legend_control.add_control_to(&self.map);
        self.callbacks.push(on_add);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.map.fit_bounds(&to_js(&bounds.to_corner_array()));
    }
}
