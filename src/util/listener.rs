//! Event listener registration.
//!
//! Handlers return `Result`; a failure is logged to the console and the
//! listener stays installed for the next event.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::SiteError;

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns an error if the browser rejects the registration.
pub fn listen<F>(target: &EventTarget, event: &str, passive: bool, mut handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) -> Result<(), SiteError> + 'static,
{
    let name = event.to_owned();
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Err(e) = handler(ev) {
            log::error!("{name} handler failed: {e}");
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
