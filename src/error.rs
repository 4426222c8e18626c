use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("browser window is unavailable")]
    NoWindow,

    #[error("document is unavailable")]
    NoDocument,

    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),

    #[error("canvas 2d context is unavailable")]
    NoCanvasContext,

    #[error("DOM call failed: {message}")]
    Dom { message: String },
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom { message }
    }
}
