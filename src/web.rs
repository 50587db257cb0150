//! wasm-bindgen exports for page scripts.
//!
//! Names and return shapes match what the page expects: plain objects with
//! `width`/`height` and `cols`/`rows`.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::metrics::web::DomLayout;
use crate::{add_signature_to_output, get_char_dimensions, recalculate_dimensions};

/// Stamp `name` onto the last row of `output`.
#[wasm_bindgen(js_name = addSignatureToOutput)]
pub fn add_signature_to_output_js(output: Vec<String>, name: &str) -> Vec<String> {
    add_signature_to_output(&output, name)
}

/// Measure a glyph element, returning `{ width, height }`.
#[wasm_bindgen(js_name = getCharDimensions)]
pub fn get_char_dimensions_js(ch: &web_sys::Element) -> Result<JsValue, JsValue> {
    let fp = get_char_dimensions(&DomLayout, ch);
    object(&[("width", fp.width), ("height", fp.height)])
}

/// Size the animation grid for `container`, returning `{ cols, rows }`.
#[wasm_bindgen(js_name = recalculateDimensions)]
pub fn recalculate_dimensions_js(container: &web_sys::Element, ch: &web_sys::Element) -> Result<JsValue, JsValue> {
    let grid = recalculate_dimensions(&DomLayout, container, ch);
    object(&[("cols", grid.cols as f64), ("rows", grid.rows as f64)])
}

fn object(fields: &[(&str, f64)]) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    for (key, value) in fields {
        Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(*value))?;
    }
    Ok(obj.into())
}
