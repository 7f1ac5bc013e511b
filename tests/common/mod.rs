//! Synthetic PDFs for integration tests, built with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// One page: its text lines (each drawn in its own text object) and
/// whether it draws an image.
pub struct PageSpec<'a> {
    pub lines: &'a [&'a str],
    pub image: bool,
}

impl<'a> PageSpec<'a> {
    pub fn text(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            image: false,
        }
    }

    pub fn with_image(lines: &'a [&'a str]) -> Self {
        Self { lines, image: true }
    }
}

/// Build a PDF with the given pages and optional title/author.
pub fn build_pdf(pages: &[PageSpec], info: Option<(&str, &str)>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 1,
            "Height" => 1,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
        },
        vec![0u8],
    ));

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let mut operations = Vec::new();
        for (i, line) in page.lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (720 - 14 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let mut xobjects = Dictionary::new();
        if page.image {
            operations.push(Operation::new("q", vec![]));
            operations.push(Operation::new(
                "cm",
                vec![
                    100.into(),
                    0.into(),
                    0.into(),
                    100.into(),
                    72.into(),
                    300.into(),
                ],
            ));
            operations.push(Operation::new("Do", vec!["Im1".into()]));
            operations.push(Operation::new("Q", vec![]));
            xobjects.set("Im1", image_id);
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => xobjects,
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some((title, author)) = info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal(author),
            "Producer" => Object::string_literal("pdfdigest tests"),
            "CreationDate" => Object::string_literal("D:20240115103045"),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A two-page report: headings on page one, an image on page two.
pub fn sample_report() -> Vec<u8> {
    build_pdf(
        &[
            PageSpec::text(&[
                "INTRODUCTION",
                "Pipeline throughput improved across every pipeline stage.",
                "1. Background",
                "The pipeline handles ingestion and indexing.",
            ]),
            PageSpec::with_image(&["2. Results", "Throughput doubled after tuning."]),
        ],
        Some(("Quarterly Pipeline Review", "Data Platform Team")),
    )
}
