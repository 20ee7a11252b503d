//! Terminal presentation of the branch menu.

pub mod render;
pub mod terminal;
pub mod theme;

pub use render::MenuRenderer;
pub use terminal::{detect_render_options, RenderOptions};
pub use theme::{Palette, Role};
