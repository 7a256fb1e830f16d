//! Editing session: owns the scene, selection, history and gesture state, and
//! turns host events into scene mutations.
//!
//! DESIGN
//! ======
//! Every handler runs to completion and returns the [`Action`]s the host should
//! act on (redraw, schedule a timer, mirror a change). Handlers never fail:
//! malformed input and no-op requests leave the session untouched.
//!
//! Snapshots are taken only at action boundaries (one move, one placement,
//! one delete, one rotate), never per intermediate pointer frame, so one undo
//! reverts one user-visible action.
//!
//! Anything that resets the gesture (tool change, Escape, undo, delete, a new
//! pointer-down) first settles the gesture in flight: a drag that moved its
//! element keeps its move as an undoable step, and a draft is dropped. A
//! confirmed clear drops the gesture outright.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::geom::Point;
use crate::history::{History, UndoOutcome};
use crate::hit::hit_test;
use crate::input::{InputState, Key, Tool, UiState};
use crate::paint::Painter;
use crate::palette::PalettePayload;
use crate::render::{self, Frame};
use crate::scene::{Element, ElementId, ElementKind, Scene};
use crate::viewport::{ResizeOutcome, Viewport};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An element was placed (palette drop or committed arrow).
    ElementCreated(Element),
    /// A drag finished with the element at a new pivot.
    ElementMoved { id: ElementId, x: f64, y: f64 },
    /// An element was rotated.
    ElementRotated { id: ElementId, rotation: f64 },
    /// An element was deleted.
    ElementDeleted { id: ElementId },
    /// Undo replaced the scene with an earlier snapshot.
    SceneRestored,
    /// The scene was emptied (clear, or undo past the first snapshot).
    SceneCleared,
    /// Measure the surface again after `delay_ms` and report it through
    /// [`EngineCore::on_surface_measured`].
    ScheduleResize { delay_ms: u64 },
    /// State visible on the surface changed; redraw.
    RenderNeeded,
}

/// Core session state: all logic that doesn't depend on a browser canvas.
pub struct EngineCore {
    pub scene: Scene,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub config: EditorConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session: empty scene, select tool, history seeded with the
    /// empty-scene snapshot.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(config.history_depth),
            ui: UiState::default(),
            input: InputState::Idle,
            viewport: Viewport::default(),
            config,
        }
    }

    // --- Tool ---

    /// Switch tools. Always drops back to idle, clears the selection and
    /// discards any draft, even when `tool` is already active.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = self.settle_gesture();
        self.ui.tool = tool;
        self.ui.selected_id = None;
        debug!(%tool, "tool changed");
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Switch tools by selector name, e.g. `("arrow", Some("dashed"))`.
    /// Unknown names are ignored.
    pub fn set_tool_named(&mut self, name: &str, param: Option<&str>) -> Vec<Action> {
        match Tool::from_parts(name, param) {
            Ok(tool) => self.set_tool(tool),
            Err(e) => {
                warn!(error = %e, name, "tool change ignored");
                Vec::new()
            }
        }
    }

    // --- Pointer ---

    /// Pointer pressed at `pt` (mouse button or first touch contact).
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = self.settle_gesture();
        match self.ui.tool {
            Tool::Select => {
                let hit = hit_test(&self.scene, pt, &self.config, self.viewport.width)
                    .and_then(|id| self.scene.get(&id));
                if let Some(el) = hit {
                    let origin = el.pivot();
                    self.ui.selected_id = Some(el.id);
                    self.input = InputState::Dragging { id: el.id, offset: pt - origin, origin };
                } else {
                    self.ui.selected_id = None;
                }
            }
            Tool::Arrow(style) => {
                self.input = InputState::DraftingArrow { anchor: pt, draft: Element::arrow(pt.x, pt.y, 0.0, style, 0.0) };
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Pointer moved to `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if self.track_pointer(pt) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Pointer released or cancelled anywhere, including outside the surface.
    /// `pt` is the release position when the host knows it.
    pub fn on_pointer_up(&mut self, pt: Option<Point>) -> Vec<Action> {
        if let Some(pt) = pt {
            self.track_pointer(pt);
        }
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, origin, .. } => self.finish_drag(id, origin),
            InputState::DraftingArrow { draft, .. } => self.commit_draft(draft),
        }
    }

    /// Pointer gesture aborted by the platform; finalizes like a release.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.on_pointer_up(None)
    }

    // --- Keyboard ---

    /// `Delete` / `Backspace` delete the selection; `Escape` abandons a draft
    /// and returns to the select tool.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() {
            self.delete_selected()
        } else if key.is_escape() {
            self.set_tool(Tool::Select)
        } else {
            Vec::new()
        }
    }

    // --- Actions ---

    /// Delete the selected element. Only the select tool deletes.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if !self.ui.tool.is_select() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let mut actions = self.settle_gesture();
        self.ui.selected_id = None;
        if self.scene.remove(&id).is_none() {
            return actions;
        }
        self.history.push(&self.scene);
        info!(%id, "element deleted");
        actions.extend([Action::ElementDeleted { id }, Action::RenderNeeded]);
        actions
    }

    /// Rotate the selected element by one step. Works under any tool.
    pub fn rotate_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let Some(el) = self.scene.get_mut(&id) else {
            return Vec::new();
        };
        el.rotation += self.config.rotate_step;
        let rotation = el.rotation;
        self.history.push(&self.scene);
        debug!(%id, rotation, "element rotated");
        vec![Action::ElementRotated { id, rotation }, Action::RenderNeeded]
    }

    /// Step back one action. Undo past the first snapshot clears the scene.
    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = self.settle_gesture();
        self.ui.selected_id = None;
        match self.history.undo(&mut self.scene) {
            UndoOutcome::Restored => actions.extend([Action::SceneRestored, Action::RenderNeeded]),
            UndoOutcome::Cleared => actions.extend([Action::SceneCleared, Action::RenderNeeded]),
            UndoOutcome::Unchanged => {}
        }
        actions
    }

    /// Empty the scene and restart history, if `confirm` agrees.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> Vec<Action> {
        if !confirm() {
            debug!("clear declined");
            return Vec::new();
        }
        if !self.input.is_idle() {
            debug!("gesture dropped by clear");
            self.input = InputState::Idle;
        }
        self.ui.selected_id = None;
        self.scene.clear();
        self.history.reset();
        info!("scene cleared");
        vec![Action::SceneCleared, Action::RenderNeeded]
    }

    // --- Palette ---

    /// Place the element described by `payload` at `(x, y)`, select it, and
    /// snapshot. Invalid payloads are dropped.
    pub fn create_element(&mut self, payload: PalettePayload, x: f64, y: f64) -> Vec<Action> {
        match payload.into_element(Point::new(x, y), self.dropped_arrow_length()) {
            Ok(el) => self.place(el),
            Err(e) => {
                warn!(error = %e, "palette drop ignored");
                Vec::new()
            }
        }
    }

    /// Parse a palette drop payload and place it. Malformed JSON is dropped.
    pub fn drop_payload(&mut self, json: &str, x: f64, y: f64) -> Vec<Action> {
        match PalettePayload::parse(json) {
            Ok(payload) => self.create_element(payload, x, y),
            Err(e) => {
                warn!(error = %e, "palette drop ignored");
                Vec::new()
            }
        }
    }

    // --- Surface ---

    /// A layout-affecting UI change happened; re-measure once it settles.
    #[must_use]
    pub fn layout_changed(&self) -> Vec<Action> {
        vec![Action::ScheduleResize { delay_ms: self.config.resize_delay_ms }]
    }

    /// The host measured the surface. A zero size asks for another measurement
    /// on the next frame. Element coordinates are never rescaled.
    pub fn on_surface_measured(&mut self, width: f64, height: f64) -> Vec<Action> {
        match self.viewport.measure(width, height) {
            ResizeOutcome::Redraw => vec![Action::RenderNeeded],
            ResizeOutcome::Retry { delay_ms } => vec![Action::ScheduleResize { delay_ms }],
        }
    }

    // --- Render ---

    /// Read-only view of everything the draw pass needs.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            scene: &self.scene,
            selection: self.ui.selected_id,
            tool: self.ui.tool,
            draft: self.input.draft(),
            viewport: self.viewport,
        }
    }

    /// Draw the current state into `painter`.
    ///
    /// # Errors
    ///
    /// Returns the painter's error if any drawing call fails.
    pub fn render<P: Painter>(&self, painter: &mut P) -> Result<(), P::Error> {
        render::draw(painter, &self.frame(), &self.config)
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Look up an element by ID.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.scene.get(id)
    }

    /// The live arrow draft, if one is being drawn.
    #[must_use]
    pub fn draft(&self) -> Option<&Element> {
        self.input.draft()
    }

    /// The committed scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Last accepted surface size.
    #[must_use]
    pub fn surface(&self) -> Viewport {
        self.viewport
    }

    /// Number of snapshots in the undo history.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    // --- Internals ---

    /// Apply a pointer position to the gesture in flight. Returns whether
    /// anything visible changed.
    fn track_pointer(&mut self, pt: Point) -> bool {
        match &mut self.input {
            InputState::Idle => false,
            InputState::Dragging { id, offset, .. } => match self.scene.get_mut(id) {
                Some(el) => {
                    el.set_pivot(pt - *offset);
                    true
                }
                None => false,
            },
            InputState::DraftingArrow { anchor, draft } => {
                let anchor = *anchor;
                draft.set_pivot(anchor.midpoint(pt));
                draft.rotation = anchor.angle_to(pt);
                if let ElementKind::Arrow { length, .. } = &mut draft.kind {
                    *length = anchor.distance(pt);
                }
                true
            }
        }
    }

    /// End the gesture in flight as if the pointer had been released where it
    /// last was; drafts are dropped instead of committed.
    fn settle_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, origin, .. } => self.finish_drag(id, origin),
            InputState::DraftingArrow { .. } => {
                debug!("arrow draft abandoned");
                vec![Action::RenderNeeded]
            }
        }
    }

    fn finish_drag(&mut self, id: ElementId, origin: Point) -> Vec<Action> {
        let Some(el) = self.scene.get(&id) else {
            return Vec::new();
        };
        let pivot = el.pivot();
        if pivot == origin {
            return Vec::new();
        }
        self.history.push(&self.scene);
        debug!(%id, x = pivot.x, y = pivot.y, "element moved");
        vec![Action::ElementMoved { id, x: pivot.x, y: pivot.y }]
    }

    fn commit_draft(&mut self, draft: Element) -> Vec<Action> {
        let length = draft.arrow_length().unwrap_or_default();
        if length <= self.config.commit_threshold() {
            debug!(length, threshold = self.config.commit_threshold(), "arrow draft discarded");
            return vec![Action::RenderNeeded];
        }
        self.place(draft)
    }

    fn place(&mut self, el: Element) -> Vec<Action> {
        self.ui.selected_id = Some(el.id);
        self.scene.add(el.clone());
        self.history.push(&self.scene);
        info!(id = %el.id, x = el.x, y = el.y, "element created");
        vec![Action::ElementCreated(el), Action::RenderNeeded]
    }

    /// Length for arrows dropped from the palette: the surface's reference
    /// arrow length, never below the commit threshold.
    fn dropped_arrow_length(&self) -> f64 {
        self.config
            .arrow_reference_length(self.viewport.width)
            .max(self.config.commit_threshold())
    }
}

/// The browser engine. Wraps `EngineCore` and owns the canvas element.
#[cfg(feature = "web")]
pub struct Engine {
    canvas: web_sys::HtmlCanvasElement,
    pub core: EngineCore,
}

#[cfg(feature = "web")]
impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: web_sys::HtmlCanvasElement, config: EditorConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated input ---

    pub fn set_tool_named(&mut self, name: &str, param: Option<&str>) -> Vec<Action> {
        self.core.set_tool_named(name, param)
    }

    pub fn on_pointer_down(&mut self, input: &crate::input::PointerInput) -> Vec<Action> {
        input.position().map_or_else(Vec::new, |pt| self.core.on_pointer_down(pt))
    }

    pub fn on_pointer_move(&mut self, input: &crate::input::PointerInput) -> Vec<Action> {
        input.position().map_or_else(Vec::new, |pt| self.core.on_pointer_move(pt))
    }

    pub fn on_pointer_up(&mut self, input: &crate::input::PointerInput) -> Vec<Action> {
        self.core.on_pointer_up(input.position())
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn drop_payload(&mut self, json: &str, x: f64, y: f64) -> Vec<Action> {
        self.core.drop_payload(json, x, y)
    }

    // --- Viewport ---

    /// Resize the canvas backing store to the measured surface.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn on_surface_measured(&mut self, width: f64, height: f64) -> Vec<Action> {
        let actions = self.core.on_surface_measured(width, height);
        if self.core.viewport.is_ready() {
            self.canvas.set_width(self.core.viewport.width as u32);
            self.canvas.set_height(self.core.viewport.height as u32);
        }
        actions
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast;

        let mut ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(wasm_bindgen::JsValue::from)?;
        self.core.render(&mut ctx)
    }
}
