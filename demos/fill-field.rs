use form_fit::appearance::{self, FontResource, TextEncoding};
use form_fit::colours;
use form_fit::layout::{FitOptions, Fitter, Overflow, Padding};
use form_fit::pdf_writer::types::FieldType;
use form_fit::pdf_writer::{Finish, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};
use form_fit::{FieldBox, FontLibrary, Pt, Rect, TextSpec};

fn main() {
    // the standard fonts are always available, no need to load anything
    let library = FontLibrary::new();

    // fit text the way a viewer would, but mark cut-off text with an ellipsis
    let fitter = Fitter::with_options(
        &library,
        FitOptions::default().with_overflow(Overflow::Ellipsis),
    );

    // a 3 x 0.5 inch text field near the top of a US Letter page, with the usual
    // 2pt gap between the border and the text
    let rect = Rect::from_corners([72.0, 680.0, 288.0, 716.0]);
    let field = FieldBox::from_rect(rect).with_padding(Padding::all(Pt(2.0)));

    // the value to put into the field, allowed to wrap over multiple lines
    let value = "Ada Lovelace, 12 St James's Square, London";
    let spec = TextSpec::new(value, "Helv")
        .wrapped(true)
        .with_size_range(Pt(6.0), Pt(18.0))
        .expect("valid size range");

    // pick the font size and lines
    let plan = fitter.resolve(&field, &spec).expect("field has room");
    println!(
        "fitted at {}pt on {} line(s){}",
        plan.size,
        plan.lines.len(),
        if plan.truncated { " (truncated)" } else { "" }
    );

    // now write a one-page PDF holding the filled field
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let field_id = Ref::new(5);
    let appearance_id = Ref::new(6);

    let mut pdf = Pdf::new();
    let da = appearance::default_appearance("Helv", plan.size, colours::BLACK);

    let mut catalog = pdf.catalog(catalog_id);
    catalog.pages(pages_id);
    let mut form = catalog.form();
    form.fields([field_id]);
    form.default_appearance(Str(da.as_bytes()));
    form.default_resources().fonts().pair(Name(b"Helv"), font_id);
    form.finish();
    catalog.finish();

    pdf.pages(pages_id).kids([page_id]).count(1);
    pdf.page(page_id)
        .parent(pages_id)
        .media_box(PdfRect::new(0.0, 0.0, 612.0, 792.0))
        .annotations([field_id]);

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut text_field = pdf.form_field(field_id);
    text_field
        .field_type(FieldType::Text)
        .partial_name(TextStr("address"))
        .text_value(TextStr(value))
        .vartext_default_appearance(Str(da.as_bytes()));
    let mut widget = text_field.into_annotation();
    widget.rect(rect.into()).page(page_id);
    widget.appearance().normal().stream(appearance_id);
    widget.finish();

    // draw the fitted text into the field's appearance stream
    appearance::write_appearance(
        &mut pdf,
        appearance_id,
        &field,
        &plan,
        FontResource {
            name: "Helv",
            font: font_id,
        },
        colours::BLACK,
        TextEncoding::WinAnsi,
    )
    .expect("can write the appearance stream");

    // we're going to save the contents to a file on disk
    std::fs::write("fill-field.pdf", pdf.finish()).expect("can write fill-field.pdf");
}
