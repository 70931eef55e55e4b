//! Conversion of the canvas document into what the host application consumes: a clamped
//! appearance fragment for its configuration store, and CSS custom properties for its root
//! style surface.

pub mod appearance;
pub mod css;
pub mod port;
pub mod ranges;

pub use appearance::{AppearanceFragment, to_appearance_config};
pub use css::{CssProperties, CssSync, CssValue, apply_css, to_css_properties};
pub use port::{MemoryStylePort, StylePort};
pub use ranges::FieldRange;
