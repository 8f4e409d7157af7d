//! # Command Batch
//!
//! The scene mutations queued since the last animation frame, in the order
//! the host must apply them.

use scene_types::SceneCommand;
use wasm_bindgen::prelude::*;

/// Scene commands handed to JavaScript once per frame.
///
/// # Example (JavaScript)
///
/// ```javascript
/// function frame() {
///   for (const cmd of editor.take_commands().to_js()) {
///     switch (cmd.op) {
///       case "create_mesh": {
///         const geometry = new THREE.BufferGeometry();
///         geometry.setAttribute("position",
///           new THREE.BufferAttribute(new Float32Array(cmd.vertices), 3));
///         geometry.setIndex(cmd.indices);
///         objects.set(cmd.id, new THREE.Mesh(geometry,
///           new THREE.MeshBasicMaterial({ color: cmd.color, side: THREE.DoubleSide })));
///         break;
///       }
///       case "remove":
///         scene.remove(objects.get(cmd.id));
///         objects.get(cmd.id).geometry.dispose();
///         objects.get(cmd.id).material.dispose();
///         objects.delete(cmd.id);
///         break;
///       // ...
///     }
///   }
///   renderer.render(scene, camera);
///   requestAnimationFrame(frame);
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    commands: Vec<SceneCommand>,
}

#[wasm_bindgen]
impl CommandBatch {
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the commands as an array of plain objects tagged by `op`.
    pub fn to_js(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.commands).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the commands as a JSON string, handy for logging and replay.
    pub fn to_json(&self) -> Result<String, JsError> {
        self.to_json_internal().map_err(|e| JsError::new(&e.to_string()))
    }
}

impl CommandBatch {
    pub fn new(commands: Vec<SceneCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn to_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}
