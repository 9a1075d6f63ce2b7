//! # Token Highlighting
//!
//! Presentation helpers for hosts which display token boundaries.
//!
//! * [`ColorTable`] - the optional `{ T -> color }` table.
//! * [`TokenHighlighter`] - HTML span rendering.

mod color_table;
mod html;

#[doc(inline)]
pub use color_table::*;
#[doc(inline)]
pub use html::*;
