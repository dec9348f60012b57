use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use worldmap_core::search::SearchRow;
use worldmap_core::traits::SearchView;
use worldmap_wasm::dom::DomSearchView;

wasm_bindgen_test_configure!(run_in_browser);

fn page(input_id: &str, list_id: &str) -> (web_sys::Document, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let input = document.create_element("input").unwrap();
    input.set_id(input_id);
    body.append_child(&input).unwrap();

    let list = document
        .create_element("ul")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    list.set_id(list_id);
    list.style().set_property("max-height", "200px").unwrap();
    body.append_child(&list).unwrap();

    (document, list)
}

fn rows() -> Vec<SearchRow> {
    vec![
        SearchRow {
            feature_index: 0,
            name: "France".into(),
            flag_url: "fr.png".into(),
        },
        SearchRow {
            feature_index: 2,
            name: "Spain".into(),
            flag_url: "es.png".into(),
        },
    ]
}

#[wasm_bindgen_test]
fn toggling_the_list_keeps_other_inline_styles() {
    let (document, list) = page("q-style", "r-style");
    let mut view = DomSearchView::attach(&document, "q-style", "r-style", Rc::new(|_: usize| {})).unwrap();

    view.show_results(&rows());
    assert_eq!(list.style().get_property_value("display").unwrap(), "block");
    assert_eq!(list.style().get_property_value("max-height").unwrap(), "200px");
    assert_eq!(list.child_element_count(), 2);

    view.hide_results();
    assert_eq!(list.style().get_property_value("display").unwrap(), "none");
    assert_eq!(list.style().get_property_value("max-height").unwrap(), "200px");
}

#[wasm_bindgen_test]
fn hiding_outside_a_click_releases_row_listeners() {
    let (document, _list) = page("q-release", "r-release");
    let mut view =
        DomSearchView::attach(&document, "q-release", "r-release", Rc::new(|_: usize| {})).unwrap();

    view.show_results(&rows());
    assert_eq!(view.live_listeners(), 2);
    view.hide_results();
    assert_eq!(view.live_listeners(), 0);
}
