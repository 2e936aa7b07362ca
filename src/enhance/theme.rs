//! Theme toggle binding.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event};

use crate::config::PageConfig;
use crate::util::dark_mode;

/// Apply the persisted theme and bind the toggle control.
///
/// The persisted theme is applied even when the toggle control is missing.
pub fn bind_theme_toggle(document: &Document, config: &Rc<PageConfig>) {
    let controller = Rc::new(RefCell::new(dark_mode::load_controller(config)));
    dark_mode::apply(controller.borrow().theme(), config);

    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        log::debug!("no #{} element; theme toggle not bound", config.toggle_id);
        return;
    };

    let config = Rc::clone(config);
    let on_click = Closure::wrap(Box::new(move |_: Event| {
        let theme = controller.borrow_mut().toggle();
        dark_mode::apply(theme, &config);
    }) as Box<dyn FnMut(Event)>);

    if toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        // The listener lives as long as the page.
        on_click.forget();
    }
}
