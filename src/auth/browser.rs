//! Browser origin — reads `window.location.origin` through `web-sys`.
//!
//! Only available with the `wasm` feature on `wasm32`.

use super::OriginProvider;

/// Origin of the page the SDK is running in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOrigin;

impl OriginProvider for BrowserOrigin {
    fn origin(&self) -> Option<String> {
        let window = web_sys::window()?;
        match window.location().origin() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!("window.location.origin unavailable: {:?}", e);
                None
            }
        }
    }
}
