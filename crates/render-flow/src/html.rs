//! HTML rendition of the flow nodes.

use crate::FlowNode;
use folio_style::{FontFamily, FontStyle, FontWeight};

/// Renders flow nodes as a self-contained HTML fragment.
///
/// The fragment flows naturally in the DOM; nothing is absolutely
/// positioned. Font sizes and colours come straight from the layout pass
/// so the preview reads like the exported page.
pub fn to_html(nodes: &[FlowNode], family: FontFamily) -> String {
    let font_family = match family {
        FontFamily::Helvetica => "Helvetica, Arial, sans-serif",
        FontFamily::Times => "'Times New Roman', Times, serif",
        FontFamily::Courier => "'Courier New', Courier, monospace",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<article style=\"font-family:{}\">\n",
        font_family
    ));
    for node in nodes {
        match node {
            FlowNode::Paragraph { text, size, font, color } => {
                let weight = match font.weight {
                    FontWeight::Bold => "bold",
                    FontWeight::Regular => "normal",
                };
                let style = match font.style {
                    FontStyle::Italic => "italic",
                    FontStyle::Normal => "normal",
                };
                out.push_str(&format!(
                    "<p style=\"font-size:{}pt;font-weight:{};font-style:{};color:{}\">{}</p>\n",
                    size,
                    weight,
                    style,
                    color.to_hex(),
                    escape(text)
                ));
            }
            FlowNode::Divider { color } => {
                out.push_str(&format!(
                    "<hr style=\"border-color:{}\"/>\n",
                    color.to_hex()
                ));
            }
        }
    }
    out.push_str("</article>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
