//! JavaScript view of the editor status.

use shape_editor::EditorStatus;
use wasm_bindgen::prelude::*;

/// Snapshot of the editor a UI can render (button enablement, counters).
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const status = editor.status();
/// // completeButton.disabled = status.draft_len < 3;
/// // console.log(status.state, status.live_meshes);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    state: String,
    draft_len: usize,
    placed_count: usize,
    has_polygon: bool,
    live_meshes: usize,
}

#[wasm_bindgen]
impl EditorSnapshot {
    /// `"drafting"`, `"completed"` or `"dragging"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.state.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn draft_len(&self) -> usize {
        self.draft_len
    }

    #[wasm_bindgen(getter)]
    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    #[wasm_bindgen(getter)]
    pub fn has_polygon(&self) -> bool {
        self.has_polygon
    }

    /// Scene objects currently alive, backdrop included.
    #[wasm_bindgen(getter)]
    pub fn live_meshes(&self) -> usize {
        self.live_meshes
    }

    /// Converts the snapshot to a plain JavaScript object.
    ///
    /// Plain objects can be posted between a worker and the main thread,
    /// wasm-bindgen wrappers cannot.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &"state".into(), &JsValue::from_str(&self.state))?;
        Reflect::set(&obj, &"draftLen".into(), &JsValue::from(self.draft_len as f64))?;
        Reflect::set(&obj, &"placedCount".into(), &JsValue::from(self.placed_count as f64))?;
        Reflect::set(&obj, &"hasPolygon".into(), &JsValue::from_bool(self.has_polygon))?;
        Reflect::set(&obj, &"liveMeshes".into(), &JsValue::from(self.live_meshes as f64))?;
        Ok(obj.into())
    }
}

impl EditorSnapshot {
    pub fn new(status: EditorStatus, live_meshes: usize) -> Self {
        Self {
            state: status.state.to_string(),
            draft_len: status.draft_len,
            placed_count: status.placed_count,
            has_polygon: status.has_polygon,
            live_meshes,
        }
    }
}
