//! Client-only entry: mounts the page into an existing container element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::App;
use crate::error::MountError;

/// Id of the container element the host document must provide.
pub const ROOT_ID: &str = "root";

pub fn find_container(id: &str) -> Result<HtmlElement, MountError> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingContainer(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}

pub fn mount_app(id: &str) -> Result<(), MountError> {
    let container = find_container(id)?;
    log::debug!("mounting portfolio into #{id}");
    leptos::mount::mount_to(container, App).forget();
    Ok(())
}

/// A missing container is a deployment error, not something to recover from.
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    if let Err(e) = mount_app(ROOT_ID) {
        panic!("{e}");
    }
}

