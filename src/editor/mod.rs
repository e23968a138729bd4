//! Mutation API
//!
//! The [`Editor`] owns the current document and is its single writer. Every
//! operation validates its input first and then applies the change
//! atomically. After each successful change the document is written through
//! to the durable store and every subscriber is notified.

pub mod attributes;

pub use attributes::{FieldAttribute, GlobalAttribute};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

use crate::collaborators::{CodeEditorSession, EditTarget, Notification, Rasterizer};
use crate::config::EditorConfig;
use crate::drag::{DragController, DragState, ElementSize, PositionUpdate};
use crate::error::{EditorError, Result};
use crate::html_layout::{render_html, DisplayList, LayoutEngine};
use crate::models::registry::{default_content, default_style};
use crate::models::{defaults_for, Document, Field, FieldContent, FieldKind, Position};
use crate::persistence::{self, KeyValueStore};

/// Direction for reordering a field in the list
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0
    Up,
    /// Towards the end of the list
    Down,
}

impl FromStr for Direction {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(EditorError::invalid_value(
                "direction",
                format!("expected 'up' or 'down', got '{}'", other),
            )),
        }
    }
}

/// Handle returned by [`Editor::subscribe`]
pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(&Document) + Send>;

/// Single owner of the current document
pub struct Editor<S: KeyValueStore> {
    document: Document,
    store: S,
    config: EditorConfig,
    layout: LayoutEngine,
    drag: DragController,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<S: KeyValueStore> Editor<S> {
    /// Editor holding the default document; the store is not read
    pub fn new(store: S, config: EditorConfig) -> Self {
        Self::with_document(Document::default(), store, config)
    }

    /// Editor seeded from the store, or the default document when the store
    /// is empty
    pub fn open(store: S, config: EditorConfig) -> Result<Self> {
        let document = persistence::read_document(&store, &config)?.unwrap_or_default();
        log::info!("editor opened with {} field(s)", document.len());
        Ok(Self::with_document(document, store, config))
    }

    /// Like [`Editor::open`], but an unreadable store yields the default
    /// document instead of an error
    pub fn open_or_default(store: S, config: EditorConfig) -> Self {
        let document = match persistence::read_document(&store, &config) {
            Ok(document) => document.unwrap_or_default(),
            Err(e) => {
                log::warn!("ignoring persisted document: {}", e);
                Document::default()
            }
        };
        Self::with_document(document, store, config)
    }

    fn with_document(document: Document, store: S, config: EditorConfig) -> Self {
        Self {
            document,
            store,
            config,
            layout: LayoutEngine::new(),
            drag: DragController::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Rendering projection of the current document
    pub fn display_list(&self) -> DisplayList {
        self.layout.compute_layout(&self.document)
    }

    // ========================================================================
    // Change notification
    // ========================================================================

    /// Register a listener called with the document after every change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Document) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Write-through and notify after a successful change
    fn commit(&mut self, action: &str) {
        if let Err(e) = persistence::write_document(&mut self.store, &self.document, &self.config) {
            log::warn!("write-through after {} failed: {}", action, e);
        }
        log::debug!("{} applied, {} field(s)", action, self.document.len());
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.document);
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.document.len() {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange { index, len: self.document.len() })
        }
    }

    /// Structural changes shift or replace fields under an in-flight drag
    fn end_drag(&mut self) {
        if self.drag.is_dragging() {
            self.drag.pointer_cancel();
        }
    }

    // ========================================================================
    // Field list
    // ========================================================================

    /// Append the registry default for `kind`; returns the new field's index
    pub fn add_field(&mut self, kind: FieldKind) -> usize {
        self.document.fields_mut().push(defaults_for(kind));
        self.commit("add_field");
        self.document.len() - 1
    }

    /// [`Editor::add_field`] from a type tag
    pub fn add_field_tag(&mut self, tag: &str) -> Result<usize> {
        let kind: FieldKind = tag.parse()?;
        Ok(self.add_field(kind))
    }

    /// Remove the field at `index`, shifting later fields down by one
    pub fn remove_field(&mut self, index: usize) -> Result<Field> {
        self.check_index(index)?;
        self.end_drag();
        let removed = self.document.fields_mut().remove(index);
        self.commit("remove_field");
        Ok(removed)
    }

    /// Swap the field with its neighbour
    ///
    /// Moving the first field up or the last field down changes nothing and
    /// returns `Ok(false)`.
    pub fn move_field(&mut self, index: usize, direction: Direction) -> Result<bool> {
        self.check_index(index)?;
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|i| *i < self.document.len()),
        };
        let Some(target) = target else {
            return Ok(false);
        };

        self.end_drag();
        self.document.fields_mut().swap(index, target);
        self.commit("move_field");
        Ok(true)
    }

    /// Change a field's type
    ///
    /// `value`, `style` and the list-only attributes take the registry
    /// defaults of the new type; everything else is preserved.
    pub fn retype(&mut self, index: usize, kind: FieldKind) -> Result<()> {
        self.check_index(index)?;
        self.end_drag();
        let field = &mut self.document.fields_mut()[index];
        field.content = default_content(kind);
        field.style = default_style(kind).to_string();
        self.commit("retype");
        Ok(())
    }

    /// [`Editor::retype`] from a type tag
    pub fn retype_tag(&mut self, index: usize, tag: &str) -> Result<()> {
        self.check_index(index)?;
        let kind: FieldKind = tag.parse()?;
        self.retype(index, kind)
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Set one attribute of the field at `index`
    pub fn set_field_attribute(&mut self, index: usize, attribute: FieldAttribute, value: &Value) -> Result<()> {
        self.check_index(index)?;
        let mut updated = self.document.fields()[index].clone();
        attributes::apply_field_attribute(&mut updated, attribute, value)?;
        self.document.fields_mut()[index] = updated;
        self.commit(attribute.name());
        Ok(())
    }

    /// [`Editor::set_field_attribute`] with the attribute given by name
    pub fn set_field_attribute_by_name(&mut self, index: usize, name: &str, value: &Value) -> Result<()> {
        let attribute: FieldAttribute = name.parse()?;
        self.set_field_attribute(index, attribute, value)
    }

    /// Typed position setter; the drag engine writes through here
    pub fn set_field_position(&mut self, index: usize, pos: Position) -> Result<()> {
        self.check_index(index)?;
        self.document.fields_mut()[index].pos = pos;
        self.commit("set_field_position");
        Ok(())
    }

    /// Set one global setting
    ///
    /// Resizing the canvas does not move fields back inside it.
    pub fn set_global_attribute(&mut self, attribute: GlobalAttribute, value: &Value) -> Result<()> {
        let mut updated = self.document.global_settings().clone();
        attributes::apply_global_attribute(&mut updated, attribute, value)?;
        *self.document.global_settings_mut() = updated;
        self.commit(attribute.name());
        Ok(())
    }

    /// [`Editor::set_global_attribute`] with the attribute given by name
    pub fn set_global_attribute_by_name(&mut self, name: &str, value: &Value) -> Result<()> {
        let attribute: GlobalAttribute = name.parse()?;
        self.set_global_attribute(attribute, value)
    }

    // ========================================================================
    // Whole-document operations
    // ========================================================================

    /// Clear the durable store and restore the default document
    pub fn reset_document(&mut self) {
        self.end_drag();
        if let Err(e) = persistence::clear(&mut self.store) {
            log::warn!("failed to clear store on reset: {}", e);
        }
        self.document = Document::default();
        self.commit("reset_document");
    }

    /// Persist the current document explicitly
    pub fn save(&mut self) -> Result<()> {
        persistence::write_document(&mut self.store, &self.document, &self.config)?;
        log::info!("document saved ({} field(s))", self.document.len());
        Ok(())
    }

    /// Serialize the document for file export
    pub fn export_document(&self) -> Result<String> {
        persistence::serialize(&self.document)
    }

    /// Filename suggested for [`Editor::export_document`]
    pub fn export_file_name(&self) -> &str {
        &self.config.export_file_name
    }

    /// Replace the whole document with the parsed `text`
    ///
    /// On error the current document is kept unchanged.
    pub fn import_document(&mut self, text: &str) -> Result<()> {
        let document = persistence::deserialize(text)?;
        self.end_drag();
        self.document = document;
        self.commit("import_document");
        Ok(())
    }

    /// Export the document to a file
    pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        persistence::export_to_path(&self.document, path)
    }

    /// Import the document from a file, atomically
    pub fn import_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let document = persistence::import_from_path(path)?;
        self.end_drag();
        self.document = document;
        self.commit("import_from_path");
        Ok(())
    }

    /// Static HTML of the canvas as handed to the rasterizer
    pub fn export_markup(&self) -> String {
        render_html(&self.display_list())
    }

    /// Rasterize the canvas; a failure is a notification, never an error
    pub fn export_image(&self, rasterizer: &dyn Rasterizer) -> std::result::Result<Vec<u8>, Notification> {
        rasterizer.rasterize(&self.export_markup()).map_err(|e| {
            log::warn!("image export failed: {}", e);
            Notification::error(format!("Image export failed: {}", e))
        })
    }

    // ========================================================================
    // Drag
    // ========================================================================

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Start dragging the field at `index`; false if it is missing or fixed
    pub fn pointer_down(&mut self, index: usize) -> bool {
        self.drag.pointer_down(&self.document, index)
    }

    /// Apply one pointer-move sample; returns the applied update, if any
    pub fn pointer_move(&mut self, dx: f64, dy: f64, element: ElementSize) -> Option<PositionUpdate> {
        let update = self.drag.pointer_move(&self.document, dx, dy, element)?;
        match self.set_field_position(update.index, update.pos) {
            Ok(()) => Some(update),
            Err(e) => {
                log::warn!("drag update rejected: {}", e);
                self.drag.pointer_cancel();
                None
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        self.drag.pointer_cancel();
    }

    // ========================================================================
    // Code editor
    // ========================================================================

    /// Open a code editor session seeded with the target's current text
    pub fn open_code_editor(&self, target: EditTarget) -> Result<CodeEditorSession> {
        let initial_text = match target {
            EditTarget::GlobalStyle => self.document.global_settings().style.clone(),
            EditTarget::FieldStyle { index } => {
                self.check_index(index)?;
                self.document.fields()[index].style.clone()
            }
            EditTarget::FieldMarkup { index } => {
                self.check_index(index)?;
                match &self.document.fields()[index].content {
                    FieldContent::Custom { value } => value.clone(),
                    other => return Err(markup_target_error(other.kind())),
                }
            }
        };
        Ok(CodeEditorSession {
            initial_text,
            language: target.language(),
            target,
        })
    }

    /// Apply the confirmed text of a session to its target
    pub fn confirm_code_edit(&mut self, session: &CodeEditorSession, final_text: &str) -> Result<()> {
        let text = Value::String(final_text.to_string());
        match session.target {
            EditTarget::GlobalStyle => self.set_global_attribute(GlobalAttribute::Style, &text),
            EditTarget::FieldStyle { index } => self.set_field_attribute(index, FieldAttribute::Style, &text),
            EditTarget::FieldMarkup { index } => {
                self.check_index(index)?;
                let kind = self.document.fields()[index].kind();
                if kind != FieldKind::Custom {
                    return Err(markup_target_error(kind));
                }
                self.set_field_attribute(index, FieldAttribute::Value, &text)
            }
        }
    }
}

fn markup_target_error(kind: FieldKind) -> EditorError {
    EditorError::invalid_value("value", format!("markup editing needs a custom field, found {}", kind))
}
