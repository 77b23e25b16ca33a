use super::theme::Palette;
use crate::render::BoxLayout;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const CHAR_WIDTH: f64 = 8.4;
const LINE_HEIGHT: f64 = 18.0;
const FONT_SIZE: f64 = 14.0;
const PADDING: f64 = 16.0;
const FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace";

/// Escape text for use inside SVG elements and attributes.
///
/// Characters XML 1.0 cannot carry (C0 controls other than tab, newline and
/// carriage return, and U+FFFE/U+FFFF) become U+FFFD.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(ch),
        }
    }
    out
}

fn open_document(out: &mut String, width: f64, height: f64, palette: &Palette) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.1}" height="{h:.1}" viewBox="0 0 {w:.1} {h:.1}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="100%" height="100%" fill="{}"/>"#,
        palette.background
    );
}

/// Serialize monospace text lines (indent or ASCII view)
pub fn text_document(lines: &[&str], palette: &Palette) -> String {
    let columns = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(*l))
        .max()
        .unwrap_or(0);
    let width = PADDING * 2.0 + columns as f64 * CHAR_WIDTH;
    let height = PADDING * 2.0 + lines.len() as f64 * LINE_HEIGHT;

    let mut out = String::new();
    open_document(&mut out, width, height, palette);
    let _ = writeln!(
        out,
        r#"  <g font-family="{}" font-size="{}" fill="{}">"#,
        FONT_FAMILY, FONT_SIZE, palette.text
    );
    for (i, line) in lines.iter().enumerate() {
        let baseline = PADDING + (i as f64 + 0.8) * LINE_HEIGHT;
        let _ = writeln!(
            out,
            r#"    <text x="{:.1}" y="{:.1}" xml:space="preserve">{}</text>"#,
            PADDING,
            baseline,
            escape_xml(line)
        );
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

fn col_x(col: f64) -> f64 {
    PADDING + col * CHAR_WIDTH
}

fn row_y(row: f64) -> f64 {
    PADDING + row * LINE_HEIGHT
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    let _ = writeln!(
        out,
        r#"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
        x1, y1, x2, y2
    );
}

/// Serialize a box diagram: a bordered box per node and a line per connector
pub fn box_document(layout: &BoxLayout, palette: &Palette) -> String {
    let width = PADDING * 2.0 + layout.width as f64 * CHAR_WIDTH;
    let height = PADDING * 2.0 + layout.height as f64 * LINE_HEIGHT;

    let mut out = String::new();
    open_document(&mut out, width, height, palette);

    let _ = writeln!(
        out,
        r#"  <g stroke="{}" stroke-width="1" fill="none">"#,
        palette.line
    );
    for stem in &layout.stems {
        let x = col_x(stem.col as f64 + 0.5);
        line(&mut out, x, row_y(stem.row as f64), x, row_y(stem.row as f64 + 1.0));
    }
    for branch in &layout.branches {
        let mid = row_y(branch.row as f64 + 0.5);
        line(
            &mut out,
            col_x(branch.from as f64 + 0.5),
            mid,
            col_x(branch.to as f64 + 0.5),
            mid,
        );
        let px = col_x(branch.parent as f64 + 0.5);
        line(&mut out, px, row_y(branch.row as f64), px, mid);
        for drop in &branch.drops {
            let dx = col_x(*drop as f64 + 0.5);
            line(&mut out, dx, mid, dx, row_y(branch.row as f64 + 1.0));
        }
    }
    out.push_str("  </g>\n");

    let _ = writeln!(
        out,
        r#"  <g font-family="{}" font-size="{}">"#,
        FONT_FAMILY, FONT_SIZE
    );
    for placed in &layout.boxes {
        let x = col_x(placed.col as f64);
        let y = row_y(placed.row as f64);
        let _ = writeln!(
            out,
            r#"    <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="3" fill="{}" stroke="{}"/>"#,
            x - 2.0,
            y,
            placed.width as f64 * CHAR_WIDTH + 4.0,
            LINE_HEIGHT,
            palette.box_fill,
            palette.line
        );
        let _ = writeln!(
            out,
            r#"    <text x="{:.1}" y="{:.1}" fill="{}" xml:space="preserve">{}</text>"#,
            x,
            y + LINE_HEIGHT * 0.8,
            palette.text,
            escape_xml(&placed.label)
        );
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

/// True if the serialized output is an SVG document
pub fn looks_like_svg(document: &str) -> bool {
    document.trim_start().starts_with("<svg")
}
