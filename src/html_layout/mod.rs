//! HTML Layout Engine
//!
//! This module projects a document onto a DisplayList holding every
//! position, class and content string needed for JavaScript to render the
//! banner, and can render that list as a static HTML fragment for export.

pub mod display_list;
pub mod document;
pub mod field;
pub mod markup;

pub use display_list::{DisplayList, RenderCanvas, RenderField, RenderItem, RenderLabel, RenderListItem};
pub use document::LayoutEngine;
pub use markup::render_html;
