use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use identicon::Identicon;

// ── Tsify types for TypeScript interface generation ──

/// A painted rectangle, corners in canvas pixels.
#[derive(Tsify, Serialize, Deserialize, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct WasmRect {
    /// Top-left corner [x, y].
    pub top_left: [u32; 2],
    /// Bottom-right corner [x, y], inclusive.
    pub bottom_right: [u32; 2],
}

/// Intermediate results for one input, returned to JavaScript.
#[derive(Tsify, Serialize, Deserialize, Debug, PartialEq)]
#[tsify(into_wasm_abi)]
pub struct WasmIdenticon {
    /// MD5 digest as lowercase hex.
    pub digest: String,
    /// Fill color [r, g, b].
    pub color: [u8; 3],
    /// Row-major indices of the painted cells.
    pub cells: Vec<usize>,
    pub rects: Vec<WasmRect>,
    /// Canvas width and height in pixels.
    pub size: u32,
}

impl From<&Identicon> for WasmIdenticon {
    fn from(icon: &Identicon) -> Self {
        Self {
            digest: icon.digest.to_hex(),
            color: [icon.color.r, icon.color.g, icon.color.b],
            cells: icon.grid.iter().map(|c| c.index).collect(),
            rects: icon
                .pixel_map
                .iter()
                .map(|r| WasmRect {
                    top_left: [r.top_left.x, r.top_left.y],
                    bottom_right: [r.bottom_right.x, r.bottom_right.y],
                })
                .collect(),
            size: identicon::CANVAS_SIZE,
        }
    }
}

/// Generate the PNG identicon for `input` (UTF-8 bytes of the string).
#[wasm_bindgen]
pub fn generate(input: &str) -> Result<Vec<u8>, JsError> {
    identicon::generate(input.as_bytes()).map_err(|e| JsError::new(&e.to_string()))
}

/// Raw RGBA pixels (250 * 250 * 4 bytes), ready for `ImageData`.
#[wasm_bindgen(js_name = generateRgba)]
pub fn generate_rgba(input: &str) -> Vec<u8> {
    Identicon::new(input.as_bytes()).render().to_rgba()
}

/// Digest, color and rectangles for `input` without rasterizing.
#[wasm_bindgen]
pub fn inspect(input: &str) -> WasmIdenticon {
    WasmIdenticon::from(&Identicon::new(input.as_bytes()))
}
