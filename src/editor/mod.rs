//! Recolor session: one document, its selection, color and undo history.
//!
//! # Module Structure
//!
//! ```text
//! editor/
//! ├── selection      # PaintChannel, SelectionState transitions
//! ├── history        # EditHistory (undo stack + original upload)
//! ├── export         # SvgExport download payload
//! ├── error          # EditorError
//! └── mod.rs         # Session, EditorEvent (this file)
//! ```
//!
//! Every external event has one entry point on [`Session`], and
//! [`Session::dispatch`] routes an [`EditorEvent`] to it. Each call runs to
//! completion before the next; a snapshot and the edit it guards happen in
//! the same call.

mod error;
pub mod export;
mod history;
mod selection;


pub use error::EditorError;
pub use export::SvgExport;
pub use history::EditHistory;
pub use selection::{ChannelAvailability, PaintChannel, Selection, SelectionState};

use serde::{Deserialize, Serialize};

use crate::color::{is_paint_value, is_renderable, to_hex};
use crate::config::{ConfigError, DEFAULT_COLOR, EditorConfig};
use crate::svg::{
    BoundsProvider, Document, Normalized, Normalizer, ShapeIndex, UsvgBounds, serialize,
};
use crate::upload::is_svg_upload;
use crate::{debug, debug_do};

/// Typed UI events accepted by [`Session::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum EditorEvent {
    ShapeClicked(String),
    BackgroundClicked,
    ColorChosen(String),
    UndoRequested,
    ResetRequested,
    ClearRequested,
    NewDocumentLoaded(String),
}

/// The document on screen together with its index and serialized text.
#[derive(Debug, Clone)]
struct Current {
    document: Document,
    index: ShapeIndex,
    text: String,
}

impl Current {
    fn new(Normalized { document, index }: Normalized) -> Self {
        let text = serialize(&document);
        Self {
            document,
            index,
            text,
        }
    }
}

/// Editing session state.
///
/// Owns the current document, the selection, the color shown in the picker
/// and the history. `B` measures documents that lack a `viewBox`.
pub struct Session<B = UsvgBounds> {
    config: EditorConfig,
    normalizer: Normalizer<B>,
    current: Option<Current>,
    selection: SelectionState,
    current_color: String,
    history: EditHistory,
}

impl Session {
    /// Session measuring with usvg, configured from `config.normalize`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] if `config` does not validate.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        let bounds = usvg_bounds(&config);
        Self::with_bounds(config, bounds)
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = EditorConfig::default();
        let bounds = usvg_bounds(&config);
        Self::assemble(config, bounds)
    }
}

fn usvg_bounds(config: &EditorConfig) -> UsvgBounds {
    UsvgBounds {
        dpi: config.normalize.dpi,
        include_stroke: config.normalize.stroke_bounds,
    }
}

impl<B: BoundsProvider> Session<B> {
    /// Session measuring with a caller-supplied bounds provider.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] if `config` does not validate.
    pub fn with_bounds(config: EditorConfig, bounds: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, bounds))
    }

    fn assemble(config: EditorConfig, bounds: B) -> Self {
        let normalizer = Normalizer::new(config.normalize.clone(), bounds);
        let current_color = config.palette.default_color.clone();
        Self {
            config,
            normalizer,
            current: None,
            selection: SelectionState::Idle,
            current_color,
            history: EditHistory::new(),
        }
    }

    // ------------------------------------------------------------------------
    // events
    // ------------------------------------------------------------------------

    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<(), EditorError> {
        match event {
            EditorEvent::ShapeClicked(id) => self.click_shape(&id),
            EditorEvent::BackgroundClicked => self.click_background(),
            EditorEvent::ColorChosen(value) => self.choose_color(&value)?,
            EditorEvent::UndoRequested => {
                self.undo();
            }
            EditorEvent::ResetRequested => {
                self.reset();
            }
            EditorEvent::ClearRequested => self.clear(),
            EditorEvent::NewDocumentLoaded(text) => self.load(&text)?,
        }
        Ok(())
    }

    /// Normalize `text` and start a new session with it.
    ///
    /// On success the selection is cleared, the history emptied, the color
    /// reset and the result remembered as the original upload. On failure
    /// nothing changes.
    pub fn load(&mut self, text: &str) -> Result<(), EditorError> {
        let normalized = self.normalizer.normalize(text)?;

        self.history.start(normalized.document.clone());
        self.current = Some(Current::new(normalized));
        self.selection = SelectionState::Idle;
        self.reset_color();

        debug!("load"; "loaded document with {} shapes", self.shape_count());
        debug_do! {
            if let Some(index) = self.shape_index() {
                let mut ids: Vec<_> = index.ids().collect();
                ids.sort_unstable();
                debug!("load"; "shape ids: {}", ids.join(", "));
            }
        }
        Ok(())
    }

    /// [`Session::load`] guarded by the upload file-type check.
    pub fn load_upload(
        &mut self,
        file_name: &str,
        mime_type: Option<&str>,
        text: &str,
    ) -> Result<(), EditorError> {
        if !is_svg_upload(file_name, mime_type) {
            return Err(EditorError::UnsupportedUpload(file_name.to_string()));
        }
        self.load(text)
    }

    /// Select a shape, or toggle its channel if it is already selected.
    ///
    /// Identifiers not in the current index are ignored.
    pub fn click_shape(&mut self, id: &str) {
        let Some(current) = &self.current else {
            debug!("edit"; "click on `{}` without a document, ignoring", id);
            return;
        };
        let Some(path) = current.index.get(id) else {
            debug!("edit"; "stale shape reference `{}`, ignoring", id);
            return;
        };

        let paint = |channel: PaintChannel| {
            current
                .document
                .resolved_paint(path, channel.property())
                .filter(|value| is_renderable(value))
        };
        let fill = paint(PaintChannel::Fill);
        let stroke = paint(PaintChannel::Stroke);
        let available = ChannelAvailability {
            fill: fill.is_some(),
            stroke: stroke.is_some(),
        };

        let next = self.selection.on_shape_clicked(id, available);
        let channel = next.selection().map_or(PaintChannel::Fill, |s| s.channel);
        let channel_paint = match channel {
            PaintChannel::Fill => fill,
            PaintChannel::Stroke => stroke,
        };
        self.current_color =
            channel_paint.unwrap_or_else(|| self.config.palette.default_color.clone());
        self.selection = next;

        debug!("edit"; "selected `{}` ({}), color {}", id, channel, self.current_color);
    }

    pub fn click_background(&mut self) {
        self.selection = SelectionState::Idle;
    }

    /// Apply a color to the selected shape's active channel.
    ///
    /// Without a selection only the current color changes. With one, the
    /// document before the edit is recorded on the history, the value is
    /// written to both the presentation attribute and the inline style, and
    /// the result is normalized again. The selection is kept.
    ///
    /// # Errors
    ///
    /// [`EditorError::InvalidColor`] if `value` is not a paint value; the
    /// session is left untouched.
    pub fn choose_color(&mut self, value: &str) -> Result<(), EditorError> {
        let value = value.trim();
        if !is_paint_value(value) {
            return Err(EditorError::InvalidColor(value.to_string()));
        }

        let edited = match (&self.current, self.selection.selection()) {
            (Some(current), Some(selection)) => {
                self.paint(current, selection, value).transpose()?
            }
            _ => None,
        };

        self.current_color = value.to_string();

        if let Some(next) = edited
            && let Some(previous) = self.current.replace(Current::new(next))
        {
            self.history.record_before_edit(previous.document);
            debug!("history"; "recorded snapshot, {} on stack", self.history.len());
        }
        Ok(())
    }

    /// The document after painting `value` onto the selected channel, or
    /// `None` if the selected shape is no longer indexed.
    fn paint(
        &self,
        current: &Current,
        selection: &Selection,
        value: &str,
    ) -> Option<Result<Normalized, EditorError>> {
        let Some(path) = current.index.get(&selection.shape_id) else {
            debug!("edit"; "stale selection `{}`, not painting", selection.shape_id);
            return None;
        };

        let mut document = current.document.clone();
        if !document.set_paint(path, selection.channel.property(), value) {
            return None;
        }
        debug!("edit"; "painted `{}` {} = {}", selection.shape_id, selection.channel, value);

        Some(
            self.normalizer
                .normalize(&serialize(&document))
                .map_err(EditorError::from),
        )
    }

    /// Restore the most recent snapshot. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(document) = self.history.undo() else {
            debug!("history"; "nothing to undo");
            return false;
        };

        self.install(document);
        self.selection = SelectionState::Idle;
        debug!("history"; "undone, {} left on stack", self.history.len());
        true
    }

    /// Go back to the original upload, recording the current document first.
    /// Returns false if nothing was ever uploaded.
    pub fn reset(&mut self) -> bool {
        let current = self.current.as_ref().map(|c| c.document.clone());
        let Some(original) = self.history.reset_to_original(current) else {
            debug!("history"; "no original document to reset to");
            return false;
        };

        self.install(original);
        self.selection = SelectionState::Idle;
        self.reset_color();
        debug!("history"; "reset to original, {} on stack", self.history.len());
        true
    }

    /// Drop the document. Its content is recorded so undo can bring it back.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.history.record_before_edit(previous.document);
            debug!("history"; "cleared document, {} on stack", self.history.len());
        }
        self.selection = SelectionState::Idle;
        self.reset_color();
    }

    fn install(&mut self, document: Document) {
        let index = ShapeIndex::build(&document, self.normalizer.config());
        self.current = Some(Current::new(Normalized { document, index }));
    }

    fn reset_color(&mut self) {
        self.current_color.clone_from(&self.config.palette.default_color);
    }

    fn shape_count(&self) -> usize {
        self.current.as_ref().map_or(0, |c| c.index.len())
    }

    // ------------------------------------------------------------------------
    // outputs
    // ------------------------------------------------------------------------

    /// Canonical SVG text of the current document.
    pub fn canonical_text(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.text.as_str())
    }

    pub fn document(&self) -> Option<&Document> {
        self.current.as_ref().map(|c| &c.document)
    }

    pub fn shape_index(&self) -> Option<&ShapeIndex> {
        self.current.as_ref().map(|c| &c.index)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selection()
    }

    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    /// Color value as last chosen or read from the selected shape.
    pub fn current_color(&self) -> &str {
        &self.current_color
    }

    /// [`Session::current_color`] as `#rrggbb` for a color input. Values
    /// with no hex form (`url(...)`, `currentColor`) show the default color.
    pub fn display_color(&self) -> String {
        to_hex(&self.current_color)
            .or_else(|| to_hex(&self.config.palette.default_color))
            .unwrap_or_else(|| DEFAULT_COLOR.to_ascii_lowercase())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn has_content(&self) -> bool {
        self.current.is_some()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current document packaged for download, if there is one.
    pub fn export_svg(&self) -> Option<SvgExport> {
        let current = self.current.as_ref()?;
        Some(SvgExport::new(
            self.config.export.file_name("svg"),
            current.text.clone(),
        ))
    }
}
