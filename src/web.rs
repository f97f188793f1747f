//! Browser facade: a `requestAnimationFrame` loop drives a [`WebScene`] and
//! draws from its JSON snapshot or flat instance buffer.
//!
//! ```js
//! const scene = new WebScene(null);
//! function frame(ms) {
//!   scene.setScrollProgress(window.scrollY / maxScroll);
//!   scene.tick(ms / 1000);
//!   renderer.upload(scene.instanceData());
//!   requestAnimationFrame(frame);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::engine::{init_scene, SceneHandle};
use crate::options::SceneConfig;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// A scene owned by JavaScript.
#[wasm_bindgen]
pub struct WebScene {
    handle: SceneHandle,
}

#[wasm_bindgen]
impl WebScene {
    /// Build a scene from a JSON config, or the landing page when `null`.
    ///
    /// # Errors
    ///
    /// Throws on malformed JSON or an invalid configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebScene, JsError> {
        let config = match config_json {
            Some(json) => SceneConfig::from_json_str(&json)?,
            None => SceneConfig::default(),
        };
        Ok(Self {
            handle: init_scene(&config)?,
        })
    }

    /// Advance to absolute scene time in seconds.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    pub fn tick(&mut self, elapsed: f32) -> Result<(), JsError> {
        Ok(self.handle.tick(elapsed)?)
    }

    /// Page scroll progress in [0, 1].
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = setScrollProgress)]
    pub fn set_scroll_progress(
        &mut self,
        progress: f32,
    ) -> Result<(), JsError> {
        Ok(self.handle.set_scroll_progress(progress)?)
    }

    /// Canvas resized.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        Ok(self.handle.resize(width, height)?)
    }

    /// Current frame as a JSON string.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = renderState)]
    pub fn render_state(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.handle.render_state()?)?)
    }

    /// Strand colors, tube radius and tube detail as a JSON string.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = helixStyle)]
    pub fn helix_style(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.handle.helix_style()?)?)
    }

    /// Body instances flattened to 20 floats each (4×4 column-major world
    /// matrix, then RGBA).
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = instanceData)]
    pub fn instance_data(&self) -> Result<js_sys::Float32Array, JsError> {
        let instances = self.handle.instances()?;
        let floats: &[f32] = bytemuck::cast_slice(&instances);
        Ok(js_sys::Float32Array::from(floats))
    }

    /// Camera uniform flattened to floats.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = cameraData)]
    pub fn camera_data(&self) -> Result<js_sys::Float32Array, JsError> {
        let uniform = [self.handle.camera_uniform()?];
        let floats: &[f32] = bytemuck::cast_slice(&uniform);
        Ok(js_sys::Float32Array::from(floats))
    }

    /// Call `callback(json)` with the render state after every tick.
    ///
    /// # Errors
    ///
    /// Throws after [`dispose`](Self::dispose).
    #[wasm_bindgen(js_name = onFrame)]
    pub fn on_frame(
        &mut self,
        callback: js_sys::Function,
    ) -> Result<(), JsError> {
        Ok(self.handle.set_frame_listener(move |state| {
            let json = match serde_json::to_string(state) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("render state serialization failed: {e}");
                    return;
                }
            };
            if let Err(e) =
                callback.call1(&JsValue::NULL, &JsValue::from_str(&json))
            {
                log::error!("frame callback threw: {e:?}");
            }
        })?)
    }

    /// Release the scene; later calls throw.
    ///
    /// # Errors
    ///
    /// Throws if already disposed.
    pub fn dispose(&mut self) -> Result<(), JsError> {
        Ok(self.handle.dispose()?)
    }
}
