//! Render Battlesnake-style board states into layered vector scenes.
//!
//! The renderer is a pure transformation: it takes a validated [`BoardState`]
//! and a [`StyleConfig`] and produces a [`Scene`] tree of drawing primitives
//! (grid layer, entity layer, optional coordinate labels) which the embedding
//! side serializes to SVG markup.

pub mod error;
pub mod models;
pub mod render;
pub mod scene;
pub mod style;

pub use error::{BoardError, RenderError};
pub use models::{BoardState, Cell, Entity, GameDoc, Hazard, Item};
pub use render::{BoardRenderer, DEFAULT_SQUARE_SIZE, cell_origin};
pub use scene::{Node, Scene, to_svg_document};
pub use style::{StyleConfig, body_color};
