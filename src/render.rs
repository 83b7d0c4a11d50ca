//! Text and SVG rendering (6). Both wrap a 4-module quiet zone around the
//! symbol, as required for reliable scanning.

use crate::builder::QrCode;
use crate::common::metadata::Color;

const QUIET_ZONE: i32 = 4;

/// Renders the symbol as half-block glyphs, two module rows per text row.
pub fn to_printable(qr: &QrCode) -> String {
    let n = qr.matrix().size() as i32;
    let total = n + 2 * QUIET_ZONE;

    let is_dark = |r: i32, c: i32| -> bool {
        let (mr, mc) = (r - QUIET_ZONE, c - QUIET_ZONE);
        if mr < 0 || mc < 0 || mr >= n || mc >= n {
            false
        } else {
            qr.matrix().get(mr, mc) == Color::Dark
        }
    };

    let mut out = String::with_capacity((total as usize + 1) * (total as usize / 2 + 1));
    let mut r = 0;
    while r < total {
        for c in 0..total {
            let top = is_dark(r, c);
            let bottom = r + 1 < total && is_dark(r + 1, c);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        r += 2;
    }
    out
}

/// Renders the symbol as a minimal SVG document: a white background rect
/// plus one black rect per dark module, offset by the quiet zone.
pub fn to_svg(qr: &QrCode) -> String {
    let n = qr.matrix().size() as i32;
    let t = n + 2 * QUIET_ZONE;

    let mut svg = format!("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {t} {t}\">");
    svg.push_str(&format!("<rect width=\"{t}\" height=\"{t}\" fill=\"white\"/>"));
    svg.push_str("<g fill=\"black\" shape-rendering=\"crispEdges\">");
    for r in 0..n {
        for c in 0..n {
            if qr.matrix().get(r, c) == Color::Dark {
                svg.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\"/>",
                    c + QUIET_ZONE,
                    r + QUIET_ZONE
                ));
            }
        }
    }
    svg.push_str("</g></svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QrCodeBuilder;

    #[test]
    fn test_to_printable_has_quiet_zone_border() {
        let qr = QrCodeBuilder::new("HELLO").build().unwrap();
        let text = to_printable(&qr);
        let first_line = text.lines().next().unwrap();
        assert!(first_line.chars().take(4).all(|c| c == ' '));
    }

    #[test]
    fn test_to_svg_contains_viewbox_and_rects() {
        let qr = QrCodeBuilder::new("HELLO").build().unwrap();
        let svg = to_svg(&qr);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox"));
        assert!(svg.contains("fill=\"black\""));
        assert!(svg.ends_with("</svg>"));
    }
}
