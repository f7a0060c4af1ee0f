//! # Code Generation
//!
//! Converts IR programs to HTML markup.

use super::ops::{Op, Program};

impl Program {
    /// Compile the IR program to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        for op in &self.ops {
            match op {
                // ===== Structure =====
                Op::Open { tag, id, class } => {
                    out.push('<');
                    out.push_str(tag.name());
                    if let Some(id) = id {
                        push_attr(&mut out, "id", id);
                    }
                    if let Some(class) = class {
                        push_attr(&mut out, "class", class);
                    }
                    out.push('>');
                }
                Op::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag.name());
                    out.push('>');
                }

                // ===== Content =====
                Op::Text(text) => {
                    escape_into(&mut out, text);
                }
                Op::Image { src, alt, class } => {
                    out.push_str("<img");
                    push_attr(&mut out, "src", src);
                    push_attr(&mut out, "alt", alt);
                    if let Some(class) = class {
                        push_attr(&mut out, "class", class);
                    }
                    out.push('>');
                }
            }
        }

        out
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Tag;

    #[test]
    fn test_element_with_id_and_class() {
        let program: Program = vec![
            Op::Open {
                tag: Tag::Div,
                id: Some("receipt-container".into()),
                class: Some("receipt label".into()),
            },
            Op::Text("hi".into()),
            Op::Close(Tag::Div),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            program.to_html(),
            r#"<div id="receipt-container" class="receipt label">hi</div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let program: Program = vec![Op::Text("<script>alert('x') & \"y\"</script>".into())]
            .into_iter()
            .collect();
        assert_eq!(
            program.to_html(),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_image_attributes_escaped() {
        let program: Program = vec![Op::Image {
            src: "https://example.com/logo.jpeg?a=1&b=\"2\"".into(),
            alt: "Logo".into(),
            class: Some("logo".into()),
        }]
        .into_iter()
        .collect();
        assert_eq!(
            program.to_html(),
            r#"<img src="https://example.com/logo.jpeg?a=1&amp;b=&quot;2&quot;" alt="Logo" class="logo">"#
        );
    }

    #[test]
    fn test_telugu_passthrough() {
        let program: Program = vec![Op::Text("ఆకు మచ్చ".into())].into_iter().collect();
        assert_eq!(program.to_html(), "ఆకు మచ్చ");
    }

    #[test]
    fn test_escape_helper() {
        assert_eq!(escape("a<b"), "a&lt;b");
        assert_eq!(escape("plain"), "plain");
    }
}
