//! Drawing a [`RenderPlan`] into a text field.
//!
//! A text field's look is defined twice: by its default appearance string
//! (`/DA`, e.g. `/Helv 12 Tf 0 g`), which viewers use when they regenerate the
//! field, and by its appearance stream (`/AP /N`), a Form XObject holding the
//! actual drawing operators. This module produces both from a plan.

use crate::colour::Colour;
use crate::field::FieldBox;
use crate::font::Font;
use crate::layout::RenderPlan;
use crate::rect::Rect;
use crate::standard_fonts::winansi_code;
use crate::units::Pt;
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

/// How the characters of each line are turned into string bytes
#[derive(Copy, Clone)]
pub enum TextEncoding<'a> {
    /// One byte per character, for the standard fonts. Characters outside of
    /// WinAnsiEncoding are drawn as `?`.
    WinAnsi,
    /// Two-byte glyph ids, for a composite (Type0, `Identity-H`) font embedding
    /// this font
    Identity(&'a Font),
}

/// The font resource an appearance stream draws with
#[derive(Debug, Copy, Clone)]
pub struct FontResource<'a> {
    /// Resource name, without the leading slash (e.g. `Helv`)
    pub name: &'a str,
    /// The font dictionary the name refers to
    pub font: Ref,
}

/// Build a default appearance string such as `/Helv 12 Tf 0 g`
pub fn default_appearance(resource: &str, size: Pt, colour: Colour) -> String {
    format!("/{resource} {size} Tf {colour}")
}

/// Extract the font resource name and size from a default appearance string.
/// A size of zero means the viewer is asked to auto-size the text.
pub fn parse_default_appearance(da: &str) -> Option<(&str, Pt)> {
    let tokens: Vec<&str> = da.split_whitespace().collect();
    tokens.windows(3).find_map(|w| match w {
        &[name, size, "Tf"] => {
            let name = name.strip_prefix('/')?;
            let size: f32 = size.parse().ok()?;
            Some((name, Pt(size)))
        }
        _ => None,
    })
}

/// Replace the font size of the first `Tf` operator in a default appearance
/// string, keeping the font resource and everything else. Passing a size of zero
/// turns on viewer-side auto-sizing.
///
/// Returns `None` if the string doesn't set a font.
pub fn set_da_font_size(da: &str, size: Pt) -> Option<String> {
    let mut tokens: Vec<String> = da.split_whitespace().map(str::to_string).collect();
    let index = tokens
        .windows(2)
        .position(|w| w[1] == "Tf" && w[0].parse::<f32>().is_ok())?;
    tokens[index] = size.to_string();
    Some(tokens.join(" "))
}

/// Renders a plan into the operators of a text field's appearance stream. The
/// text is clipped to the field's content area and wrapped in the `/Tx` marked
/// content sequence that viewers expect.
#[allow(clippy::write_with_newline)]
pub fn appearance_content(
    field: &FieldBox,
    plan: &RenderPlan,
    resource: &str,
    colour: Colour,
    encoding: TextEncoding,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    write!(content, "/Tx BMC\n")?;
    write!(content, "q\n")?;
    write!(
        content,
        "{} {} {} {} re W n\n",
        field.padding.left,
        field.padding.bottom,
        field.width - field.padding.horizontal(),
        field.height - field.padding.vertical()
    )?;

    if !plan.lines.is_empty() {
        write!(content, "BT\n")?;
        write!(content, "/{} {} Tf\n", resource, plan.size)?;
        write!(content, "{colour}\n")?;
        for ((x, y), line) in plan.origins().zip(plan.lines.iter()) {
            if line.text.is_empty() {
                continue;
            }
            write!(content, "1 0 0 1 {x} {y} Tm\n")?;
            write!(content, "<")?;
            write_encoded(&mut content, &line.text, encoding)?;
            write!(content, "> Tj\n")?;
        }
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    write!(content, "EMC\n")?;
    Ok(content)
}

fn write_encoded(
    content: &mut Vec<u8>,
    text: &str,
    encoding: TextEncoding,
) -> Result<(), std::io::Error> {
    for ch in text.chars() {
        match encoding {
            TextEncoding::WinAnsi => {
                write!(content, "{:02x}", winansi_code(ch).unwrap_or(b'?'))?;
            }
            TextEncoding::Identity(font) => {
                write!(content, "{:04x}", font.drawn_glyph_id(ch))?;
            }
        }
    }
    Ok(())
}

/// Write a plan as a field's normal appearance: a compressed Form XObject the
/// size of the field box, with `font` available as a resource. The caller is
/// responsible for pointing the widget's `/AP /N` entry at `id`.
pub fn write_appearance(
    writer: &mut Pdf,
    id: Ref,
    field: &FieldBox,
    plan: &RenderPlan,
    font: FontResource,
    colour: Colour,
    encoding: TextEncoding,
) -> Result<(), std::io::Error> {
    let rendered = appearance_content(field, plan, font.name, colour, encoding)?;
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        &rendered,
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    );

    let mut xobj = writer.form_xobject(id, &compressed);
    xobj.filter(pdf_writer::Filter::FlateDecode);
    xobj.bbox(
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: field.width,
            y2: field.height,
        }
        .into(),
    );

    let mut resources = xobj.resources();
    let mut resource_fonts = resources.fonts();
    resource_fonts.pair(Name(font.name.as_bytes()), font.font);
    resource_fonts.finish();
    resources.finish();

    Ok(())
}
