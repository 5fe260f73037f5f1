//! Visualization: resolve node positions and render the graph as SVG.

pub mod layout;
pub mod svg;

pub use layout::{PlotPoint, PlotScene};
pub use svg::{render_svg, write_svg};
