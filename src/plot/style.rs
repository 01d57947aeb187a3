//! Line-style shortcodes and text sizing.
//!
//! Fit curves carry a compact shortcode (`"b--"`, `"g-"`, `"r-."`) — an
//! optional color letter followed by a dash pattern. The vocabulary follows
//! the conventions the data files and fit tables were written with.

use plotters::style::RGBColor;

/// Font sizes applied per render call.
///
/// This replaces process-global styling state: every render receives its own
/// `PlotStyle`, so repeated renders in one process cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    /// Axis-description font size.
    pub label_size: f64,
    /// Tick-label font size.
    pub tick_size: f64,
    /// Legend font size.
    pub legend_size: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            label_size: 24.0,
            tick_size: 14.0,
            legend_size: 14.0,
        }
    }
}

/// Dash pattern of a fit curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
    Dotted,
    /// Rendered as short dashes; the backend has no dash-dot primitive.
    DashDot,
}

/// Parsed line style: color + dash pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: RGBColor,
    pub pattern: LinePattern,
}

/// Parse a shortcode such as `"b--"` or `"g-"`.
///
/// Unknown color letters fall back to black; an unknown (or absent) dash
/// pattern falls back to solid.
pub fn parse_shortcode(code: &str) -> LineStyle {
    let code = code.trim();
    let (color, rest) = match code.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => (color_for(c), &code[1..]),
        _ => (RGBColor(0, 0, 0), code),
    };
    let pattern = match rest {
        "--" => LinePattern::Dashed,
        ":" => LinePattern::Dotted,
        "-." | ".-" => LinePattern::DashDot,
        _ => LinePattern::Solid,
    };
    LineStyle { color, pattern }
}

fn color_for(letter: char) -> RGBColor {
    match letter {
        'b' => RGBColor(0, 0, 255),
        'g' => RGBColor(0, 128, 0),
        'r' => RGBColor(255, 0, 0),
        'c' => RGBColor(0, 191, 191),
        'm' => RGBColor(191, 0, 191),
        'y' => RGBColor(191, 191, 0),
        'k' => RGBColor(0, 0, 0),
        'w' => RGBColor(255, 255, 255),
        _ => RGBColor(0, 0, 0),
    }
}

/// Strip TeX-style math markup from an axis label.
///
/// The renderer has no math-text support, so `(R-R_{min})/(R+1)` is drawn as
/// `(R-R_min)/(R+1)`.
pub fn strip_math_markup(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '$' | '{' | '}' | '\\'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builtin_shortcodes() {
        assert_eq!(
            parse_shortcode("b--"),
            LineStyle {
                color: RGBColor(0, 0, 255),
                pattern: LinePattern::Dashed
            }
        );
        assert_eq!(parse_shortcode("b:").pattern, LinePattern::Dotted);
        assert_eq!(parse_shortcode("g-").pattern, LinePattern::Solid);
        assert_eq!(parse_shortcode("r-.").pattern, LinePattern::DashDot);
    }

    #[test]
    fn unknown_input_falls_back_to_solid_black() {
        let style = parse_shortcode("?");
        assert_eq!(style.color, RGBColor(0, 0, 0));
        assert_eq!(style.pattern, LinePattern::Solid);

        let bare = parse_shortcode("--");
        assert_eq!(bare.color, RGBColor(0, 0, 0));
        assert_eq!(bare.pattern, LinePattern::Dashed);
    }

    #[test]
    fn strips_math_markup() {
        assert_eq!(
            strip_math_markup("(R-R_{min})/(R+1)"),
            "(R-R_min)/(R+1)"
        );
        assert_eq!(strip_math_markup("N"), "N");
    }
}
