//! SVG rendering of a [`PlotScene`].

use std::path::Path;

use crate::types::GraphResult;

use super::PlotScene;

const CANVAS: f64 = 800.0;
const MARGIN: f64 = 40.0;
const RADIUS: f64 = 6.0;

/// Render a scatter of nodes with arrows for edges.
pub fn render_svg(scene: &PlotScene) -> String {
    let (min_x, min_y, span) = bounds(scene);
    let scale = (CANVAS - 2.0 * MARGIN) / span;
    // SVG y grows downwards.
    let project = |x: f64, y: f64| {
        (
            MARGIN + (x - min_x) * scale,
            CANVAS - MARGIN - (y - min_y) * scale,
        )
    };

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS}\" height=\"{CANVAS}\" viewBox=\"0 0 {CANVAS} {CANVAS}\">\n"
    );
    out.push_str(
        r#"<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="black"/></marker></defs>"#,
    );
    out.push('\n');
    out.push_str(&format!(
        "<text x=\"{}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\">Directed_Weighted_Graph</text>\n",
        CANVAS / 2.0
    ));

    for &(src, dest) in &scene.arrows {
        let (Some(a), Some(b)) = (scene.point(src), scene.point(dest)) else {
            continue;
        };
        let (x1, y1) = project(a.x, a.y);
        let (x2, y2) = project(b.x, b.y);
        let (x2, y2) = shorten(x1, y1, x2, y2, RADIUS + 2.0);
        out.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"black\" stroke-opacity=\"0.6\" marker-end=\"url(#arrow)\"/>\n"
        ));
    }

    for point in &scene.points {
        let (x, y) = project(point.x, point.y);
        out.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{RADIUS}\" fill=\"darkcyan\"/><text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\">{}</text>\n",
            x + RADIUS,
            y - RADIUS,
            point.id
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// Render and write to `path`.
pub fn write_svg(scene: &PlotScene, path: &Path) -> GraphResult<()> {
    std::fs::write(path, render_svg(scene))?;
    log::debug!(
        "plotted {} nodes and {} arrows to {}",
        scene.points.len(),
        scene.arrows.len(),
        path.display()
    );
    Ok(())
}

fn bounds(scene: &PlotScene) -> (f64, f64, f64) {
    if scene.points.is_empty() {
        return (0.0, 0.0, 1.0);
    }
    let min_x = scene.points.iter().map(|p| p.x).fold(f64::MAX, f64::min);
    let min_y = scene.points.iter().map(|p| p.y).fold(f64::MAX, f64::min);
    let max_x = scene.points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    let max_y = scene.points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
    let span = (max_x - min_x).max(max_y - min_y);
    (min_x, min_y, if span > 0.0 { span } else { 1.0 })
}

// Pull the arrow tip back so it stops at the node's rim.
fn shorten(x1: f64, y1: f64, x2: f64, y2: f64, by: f64) -> (f64, f64) {
    let len = (x2 - x1).hypot(y2 - y1);
    if len <= by {
        return (x2, y2);
    }
    let t = (len - by) / len;
    (x1 + (x2 - x1) * t, y1 + (y2 - y1) * t)
}
