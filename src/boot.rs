//! One-shot application startup.
//!
//! DESIGN
//! ======
//! Startup is an explicit contract rather than a pile of module-load side
//! effects. [`STYLESHEETS`] is the ordered stylesheet manifest; [`boot`]
//! installs every entry into the document head and only then mounts the root
//! component onto the `#app` anchor. Manifest order is load-bearing: each
//! sheet may assume the cascade state left by the sheets before it (`reset`
//! assumes `normalize` has already neutralized browser defaults).
//!
//! The sequence is fail-fast and runs once per process. There is no retry,
//! no partial mount, and no unmount path; a second call to [`boot`] returns
//! [`BootError::AlreadyBooted`].

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::mount::mount_to;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::app::App;

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// Id of the element the application mounts onto.
pub const ANCHOR_ID: &str = "app";

/// A global stylesheet embedded at build time.
///
/// `path` identifies the source file and becomes the id of the installed
/// `<style>` element, so the cascade order stays inspectable in the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub path: &'static str,
    pub css: &'static str,
}

/// Global stylesheets in cascade order.
///
/// Order is part of the contract, not a detail of how the entries happen to
/// be listed: later sheets override earlier ones.
pub const STYLESHEETS: [StyleSheet; 4] = [
    StyleSheet {
        path: "assets/css/normalize.css",
        css: include_str!("../assets/css/normalize.css"),
    },
    StyleSheet {
        path: "assets/css/reset.css",
        css: include_str!("../assets/css/reset.css"),
    },
    StyleSheet {
        path: "assets/css/global.css",
        css: include_str!("../assets/css/global.css"),
    },
    StyleSheet {
        path: "assets/css/index.css",
        css: include_str!("../assets/css/index.css"),
    },
];

/// Fatal startup failures. None of these are recoverable; the caller is
/// expected to abort the process.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("boot already ran in this process")]
    AlreadyBooted,
    #[error("no browser document in this environment")]
    NoDocument,
    #[error("document has no <head> to install stylesheets into")]
    NoHead,
    #[error("failed to install stylesheet `{path}`")]
    StyleInstall { path: &'static str },
    #[error("mount anchor `#app` not found in document")]
    MissingAnchor,
}

/// Process-wide sentinel; set when the boot sequence is claimed.
static BOOTED: AtomicBool = AtomicBool::new(false);

/// Run the one-shot startup sequence.
///
/// Claims the boot sentinel, installs the stylesheet manifest into the
/// document head in order, then mounts exactly one [`App`] instance onto the
/// `#app` anchor. After a successful return the anchor subtree is owned by
/// the mounted application for the rest of the page lifetime.
///
/// # Errors
///
/// Fails fast on re-entry, a missing document or `<head>`, a stylesheet that
/// cannot be installed, or a missing mount anchor. Nothing is rolled back on
/// failure; the process should be treated as failed to start.
pub fn boot() -> Result<(), BootError> {
    claim(&BOOTED)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::NoDocument)?;

    install_styles(&document)?;
    mount(&document)
}

/// Claim the one-shot sentinel. Exactly one caller per flag ever succeeds.
fn claim(flag: &AtomicBool) -> Result<(), BootError> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(BootError::AlreadyBooted);
    }
    Ok(())
}

/// Install every manifest entry into `<head>`, preserving manifest order.
fn install_styles(document: &Document) -> Result<(), BootError> {
    let head = document.head().ok_or(BootError::NoHead)?;
    for sheet in STYLESHEETS {
        let element = document
            .create_element("style")
            .map_err(|_| BootError::StyleInstall { path: sheet.path })?;
        element.set_id(sheet.path);
        element.set_text_content(Some(sheet.css));
        head.append_child(&element)
            .map_err(|_| BootError::StyleInstall { path: sheet.path })?;
    }
    log::info!("installed {} stylesheets", STYLESHEETS.len());
    Ok(())
}

/// Mount the root component onto the anchor element.
fn mount(document: &Document) -> Result<(), BootError> {
    let anchor = document
        .get_element_by_id(ANCHOR_ID)
        .ok_or(BootError::MissingAnchor)?
        .unchecked_into::<web_sys::HtmlElement>();

    // The handle is leaked on purpose: the application is never unmounted.
    mount_to(anchor, App).forget();
    log::info!("mounted application on #{ANCHOR_ID}");
    Ok(())
}
