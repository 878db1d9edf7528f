//! Open-Graph social card, rendered as a 1200×630 SVG document.
//!
//! Layout (top to bottom): author banner, title (wrapped, at most three
//! lines), up to four tag pills, tagline. Rasterizing to PNG is left to
//! whatever sits in front of this endpoint.

use crate::config::SiteConfig;

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;
pub const MAX_TAGS: usize = 4;

const TITLE_LINE_CHARS: usize = 30;
const TITLE_MAX_LINES: usize = 3;
const TITLE_LINE_HEIGHT: u32 = 58;
const PILL_HEIGHT: u32 = 36;
const PILL_GAP: u32 = 12;

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Greedy word wrap. Words longer than a line are kept whole; overflow
/// past `max_lines` is folded into the last line with an ellipsis.
fn wrap_title(title: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in title.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

fn pill_width(tag: &str) -> u32 {
    // ~9px per uppercase glyph at 14px plus 16px padding each side
    tag.chars().count() as u32 * 9 + 32
}

/// Normalises the raw `tags` query value: comma-separated, trimmed,
/// blanks dropped, capped at `MAX_TAGS`.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

pub fn render_og_card(site: &SiteConfig, title: Option<&str>, tags: &[String]) -> String {
    let fallback = format!("{} - Projects", site.author);
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(fallback.as_str());
    let lines = wrap_title(title, TITLE_LINE_CHARS, TITLE_MAX_LINES);
    let tags: Vec<&String> = tags.iter().take(MAX_TAGS).collect();

    let center = OG_WIDTH / 2;
    let mut y = 200;
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{OG_WIDTH}" height="{OG_HEIGHT}" viewBox="0 0 {OG_WIDTH} {OG_HEIGHT}">"#
    ));
    svg.push_str(concat!(
        r#"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">"#,
        r##"<stop offset="0%" stop-color="#0f172a"/><stop offset="100%" stop-color="#1e293b"/>"##,
        r#"</linearGradient></defs>"#,
    ));
    svg.push_str(r#"<rect width="100%" height="100%" fill="url(#bg)"/>"#);

    svg.push_str(&format!(
        r##"<text x="{center}" y="{y}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="24" letter-spacing="1.2" fill="#94a3b8">{}</text>"##,
        xml_escape(&site.author.to_uppercase())
    ));

    y += 80;
    for line in &lines {
        svg.push_str(&format!(
            r##"<text x="{center}" y="{y}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="48" font-weight="700" fill="#f8fafc">{}</text>"##,
            xml_escape(line)
        ));
        y += TITLE_LINE_HEIGHT;
    }

    if !tags.is_empty() {
        y += 10;
        let widths: Vec<u32> = tags.iter().map(|t| pill_width(t)).collect();
        let row_width = widths.iter().sum::<u32>() + PILL_GAP * (widths.len() as u32 - 1);
        let mut x = center.saturating_sub(row_width / 2);
        for (tag, width) in tags.iter().zip(&widths) {
            svg.push_str(&format!(
                r##"<rect x="{x}" y="{y}" width="{width}" height="{PILL_HEIGHT}" rx="18" fill="#3b82f6"/>"##
            ));
            svg.push_str(&format!(
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="14" font-weight="500" fill="#ffffff">{}</text>"##,
                x + width / 2,
                y + 23,
                xml_escape(&tag.to_uppercase())
            ));
            x += width + PILL_GAP;
        }
    }

    svg.push_str(&format!(
        r##"<text x="{center}" y="{}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="18" fill="#cbd5e1">{}</text>"##,
        OG_HEIGHT - 60,
        xml_escape(&site.tagline)
    ));
    svg.push_str("</svg>");
    svg
}
