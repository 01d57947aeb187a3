//! Scatter marker symbols.
//!
//! Experiments carry matplotlib-convention marker codes in the data files;
//! this module maps them onto drawable elements. Unknown codes fall back to
//! a circle rather than failing the render.

use plotters::element::{Circle, Cross, DynElement, EmptyElement, IntoDynElement, PathElement, Polygon, Rectangle};
use plotters::prelude::DrawingBackend;
use plotters::style::{Color, RGBAColor, ShapeStyle, BLACK};

/// Half-extent of a marker in pixels.
const MARKER_RADIUS: i32 = 5;

/// Scatter marker shape, decoded from the experiment's symbol code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Cross,
    Plus,
}

/// Decode a marker symbol code (`"o"`, `"s"`, `"^"`, ...).
pub fn parse_marker(code: &str) -> MarkerShape {
    match code {
        "s" => MarkerShape::Square,
        "D" | "d" => MarkerShape::Diamond,
        "^" => MarkerShape::TriangleUp,
        "v" => MarkerShape::TriangleDown,
        "x" => MarkerShape::Cross,
        "+" => MarkerShape::Plus,
        _ => MarkerShape::Circle,
    }
}

/// Whether a fill-style hint renders hollow markers.
pub fn is_hollow(fillstyle: Option<&str>) -> bool {
    matches!(fillstyle, Some("none"))
}

/// Uniform scatter color: semi-transparent black.
pub fn scatter_color() -> RGBAColor {
    BLACK.mix(0.5)
}

/// Build the drawable element for one scatter point.
pub fn marker_element<DB: DrawingBackend + 'static>(
    shape: MarkerShape,
    pos: (f64, f64),
    hollow: bool,
) -> DynElement<'static, DB, (f64, f64)> {
    let color = scatter_color();
    let style: ShapeStyle = if hollow {
        color.stroke_width(1)
    } else {
        color.filled()
    };
    let r = MARKER_RADIUS;

    match shape {
        MarkerShape::Circle => Circle::new(pos, r, style).into_dyn(),
        MarkerShape::Square => {
            (EmptyElement::at(pos) + Rectangle::new([(-r, -r), (r, r)], style)).into_dyn()
        }
        MarkerShape::Diamond => {
            let ring = [(0, -r - 1), (r + 1, 0), (0, r + 1), (-r - 1, 0)];
            polygon_marker(pos, &ring, style, hollow)
        }
        MarkerShape::TriangleUp => {
            let ring = [(0, -r - 1), (-r, r - 1), (r, r - 1)];
            polygon_marker(pos, &ring, style, hollow)
        }
        MarkerShape::TriangleDown => {
            let ring = [(0, r + 1), (-r, -r + 1), (r, -r + 1)];
            polygon_marker(pos, &ring, style, hollow)
        }
        MarkerShape::Cross => Cross::new(pos, r, style).into_dyn(),
        MarkerShape::Plus => (EmptyElement::at(pos)
            + PathElement::new(vec![(-r, 0), (r, 0)], style)
            + PathElement::new(vec![(0, -r), (0, r)], style))
        .into_dyn(),
    }
}

/// Filled markers use a polygon; hollow ones trace the closed outline.
fn polygon_marker<DB: DrawingBackend + 'static>(
    pos: (f64, f64),
    ring: &[(i32, i32)],
    style: ShapeStyle,
    hollow: bool,
) -> DynElement<'static, DB, (f64, f64)> {
    if hollow {
        let mut outline: Vec<(i32, i32)> = ring.to_vec();
        outline.push(ring[0]);
        (EmptyElement::at(pos) + PathElement::new(outline, style)).into_dyn()
    } else {
        (EmptyElement::at(pos) + Polygon::new(ring.to_vec(), style)).into_dyn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_marker_codes() {
        assert_eq!(parse_marker("o"), MarkerShape::Circle);
        assert_eq!(parse_marker("s"), MarkerShape::Square);
        assert_eq!(parse_marker("D"), MarkerShape::Diamond);
        assert_eq!(parse_marker("d"), MarkerShape::Diamond);
        assert_eq!(parse_marker("^"), MarkerShape::TriangleUp);
        assert_eq!(parse_marker("v"), MarkerShape::TriangleDown);
        assert_eq!(parse_marker("x"), MarkerShape::Cross);
        assert_eq!(parse_marker("+"), MarkerShape::Plus);
    }

    #[test]
    fn unknown_codes_fall_back_to_circle() {
        assert_eq!(parse_marker("*"), MarkerShape::Circle);
        assert_eq!(parse_marker(""), MarkerShape::Circle);
    }

    #[test]
    fn only_fillstyle_none_is_hollow() {
        assert!(is_hollow(Some("none")));
        assert!(!is_hollow(Some("full")));
        assert!(!is_hollow(None));
    }
}
