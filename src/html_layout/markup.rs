//! Static HTML rendering of a display list
//!
//! Produces the self-contained canvas subtree handed to the rasterizer at
//! export time. Text and attribute values are escaped; `custom` markup and
//! stylesheet text are inserted verbatim.

use std::fmt::Write;

use quick_xml::escape::escape;

use super::display_list::*;

fn class_attr(classes: &[String]) -> String {
    escape(&classes.join(" ")).into_owned()
}

/// Render the whole canvas as an HTML fragment
pub fn render_html(list: &DisplayList) -> String {
    let mut out = String::new();
    let canvas = &list.canvas;

    let mut canvas_style = format!(
        "position: relative; width: {}px; height: {}px;",
        canvas.width, canvas.height
    );
    if let Some(src) = &canvas.background_image {
        let _ = write!(canvas_style, " background-image: url({}); background-size: cover;", src);
    }

    let _ = writeln!(out, "<style data-scope=\"canvas\">{}</style>", canvas.style);
    let _ = writeln!(
        out,
        "<div class=\"{}\" style=\"{}\">",
        class_attr(&canvas.classes),
        escape(&canvas_style)
    );
    for field in &list.fields {
        render_field(&mut out, field);
    }
    out.push_str("</div>\n");
    out
}

fn render_field(out: &mut String, field: &RenderField) {
    let _ = writeln!(out, "  <div data-scope=\"{}\">", field.scope);
    let _ = writeln!(out, "    <style data-scope=\"{}\">{}</style>", field.scope, field.style);

    let data_attrs: String = field
        .dataset
        .iter()
        .map(|(k, v)| format!(" data-{}=\"{}\"", to_kebab(k), escape(v)))
        .collect();
    let _ = writeln!(
        out,
        "    <div class=\"{}\" style=\"position: absolute; left: {}px; top: {}px;\"{}>",
        class_attr(&field.classes),
        field.left,
        field.top,
        data_attrs
    );

    if let Some(label) = &field.label {
        let _ = writeln!(
            out,
            "      <div class=\"{}\">{}</div>",
            class_attr(&label.classes),
            escape(&label.text)
        );
    }
    render_item(out, &field.item);

    out.push_str("    </div>\n  </div>\n");
}

fn render_item(out: &mut String, item: &RenderItem) {
    match item {
        RenderItem::Input { value, placeholder, classes } => {
            let _ = writeln!(
                out,
                "      <input class=\"{}\" value=\"{}\" placeholder=\"{}\">",
                class_attr(classes),
                escape(value),
                escape(placeholder)
            );
        }
        RenderItem::TextArea { value, placeholder, classes } => {
            let _ = writeln!(
                out,
                "      <textarea class=\"{}\" placeholder=\"{}\">{}</textarea>",
                class_attr(classes),
                escape(placeholder),
                escape(value)
            );
        }
        RenderItem::Image { src, classes } => {
            let _ = writeln!(
                out,
                "      <img class=\"{}\" src=\"{}\" alt=\"\">",
                class_attr(classes),
                escape(src)
            );
        }
        RenderItem::Markup { html, classes } => {
            let _ = writeln!(out, "      <div class=\"{}\">{}</div>", class_attr(classes), html);
        }
        RenderItem::List { ordered, classes, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let _ = writeln!(out, "      <{} class=\"{}\">", tag, class_attr(classes));
            for item in items {
                let _ = writeln!(
                    out,
                    "        <li class=\"{}\">{}</li>",
                    class_attr(&item.classes),
                    escape(&item.text)
                );
            }
            let _ = writeln!(out, "      </{}>", tag);
        }
    }
}

/// `fieldIndex` -> `field-index`
fn to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
