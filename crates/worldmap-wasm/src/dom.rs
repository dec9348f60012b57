// crates/worldmap-wasm/src/dom.rs
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};
use worldmap_core::search::SearchRow;
use worldmap_core::traits::SearchView;

/// Click listeners of the rows currently in the list.
///
/// A listener must outlive its own invocation, so while one is running
/// (`dispatching`) releasing is deferred to the next render.
struct RowListeners<L> {
    live: Vec<L>,
    dispatching: Rc<Cell<bool>>,
}

impl<L> RowListeners<L> {
    fn new() -> Self {
        Self {
            live: Vec::new(),
            dispatching: Rc::new(Cell::new(false)),
        }
    }

    /// Shared flag a listener raises for the duration of its call.
    fn dispatch_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.dispatching)
    }

    fn push(&mut self, listener: L) {
        self.live.push(listener);
    }

    /// Drop every listener, unless one of them is running right now.
    fn release(&mut self) {
        if !self.dispatching.get() {
            self.live.clear();
        }
    }

    /// Drop the previous render's listeners before a new one.
    fn reset(&mut self) {
        self.live.clear();
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}

/// The page's search box and result list.
///
/// Each row gets a click listener calling `on_select` with the row's
/// feature index.
pub struct DomSearchView {
    document: Document,
    input: HtmlInputElement,
    list: HtmlElement,
    on_select: Rc<dyn Fn(usize)>,
    row_listeners: RowListeners<Closure<dyn FnMut(Event)>>,
}

impl DomSearchView {
    pub fn attach(
        document: &Document,
        input_id: &str,
        list_id: &str,
        on_select: Rc<dyn Fn(usize)>,
    ) -> Result<Self, JsValue> {
        let input = document
            .get_element_by_id(input_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{input_id}")))?
            .dyn_into::<HtmlInputElement>()?;
        let list = document
            .get_element_by_id(list_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{list_id}")))?
            .dyn_into::<HtmlElement>()?;

        Ok(Self {
            document: document.clone(),
            input,
            list,
            on_select,
            row_listeners: RowListeners::new(),
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn query(&self) -> String {
        self.input.value()
    }

    /// Number of row click listeners currently held.
    pub fn live_listeners(&self) -> usize {
        self.row_listeners.len()
    }

    // Only `display` is touched; the page's other inline styles stay.
    fn set_display(&self, value: &str) {
        if let Err(e) = self.list.style().set_property("display", value) {
            web_sys::console::error_1(&e);
        }
    }

    fn append_row(&mut self, row: &SearchRow) -> Result<(), JsValue> {
        let li = self.document.create_element("li")?;
        li.set_class_name("search-item");
        li.set_inner_html(&row.to_html());

        let on_select = Rc::clone(&self.on_select);
        let dispatching = self.row_listeners.dispatch_flag();
        let index = row.feature_index;
        let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            dispatching.set(true);
            on_select(index);
            dispatching.set(false);
        });
        li.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        self.list.append_child(&li)?;
        self.row_listeners.push(listener);
        Ok(())
    }
}

impl SearchView for DomSearchView {
    fn show_results(&mut self, rows: &[SearchRow]) {
        self.list.set_inner_html("");
        self.row_listeners.reset();
        for row in rows {
            if let Err(e) = self.append_row(row) {
                web_sys::console::error_1(&e);
            }
        }
        self.set_display("block");
    }

    fn hide_results(&mut self) {
        self.list.set_inner_html("");
        self.row_listeners.release();
        self.set_display("none");
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_drops_listeners_outside_a_click() {
        let mut listeners = RowListeners::new();
        listeners.push("france");
        listeners.push("germany");
        listeners.release();
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn release_during_a_click_waits_for_next_render() {
        let mut listeners = RowListeners::new();
        listeners.push("france");
        let flag = listeners.dispatch_flag();

        flag.set(true);
        listeners.release();
        assert_eq!(listeners.len(), 1);
        flag.set(false);

        listeners.reset();
        listeners.push("spain");
        assert_eq!(listeners.len(), 1);
        listeners.release();
        assert_eq!(listeners.len(), 0);
    }
}
