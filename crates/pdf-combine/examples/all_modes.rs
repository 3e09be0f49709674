//! Generates combined PDFs for all three layout modes.
//!
//! Usage: cargo run --example all_modes -p pdf-combine
//!
//! Three numbered source documents (5 portrait pages, 3 portrait pages and
//! 8 landscape "slides") are written to the current directory, then
//! combined once per mode:
//! - `all_modes_single.pdf`: one page per sheet, centered
//! - `all_modes_double.pdf`: two pages per landscape sheet
//! - `all_modes_slides.pdf`: six slides per sheet
//!
//! ## How to verify:
//! Print double-sided. Every document must begin on the front of a sheet,
//! and the outline panel lists one entry per source file.

use lopdf::{Dictionary, Document, Object, Stream};
use pdf_combine::*;

/// Creates a PDF with a border and a large page number on every page
fn create_numbered_pdf(
    label: &str,
    num_pages: usize,
    page_width: i64,
    page_height: i64,
) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    // Shared font
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica-Bold".to_vec()));
    let font_id = doc.add_object(font_dict);

    for page_num in 1..=num_pages {
        let content = format!(
            r#"
            q
            2 w
            5 5 {} {} re S
            BT /F1 24 Tf 20 {} Td ({}) Tj ET
            BT /F1 120 Tf {} {} Td ({}) Tj ET
            Q
            "#,
            page_width - 10,
            page_height - 10,
            page_height - 40, // label y position
            label,
            (page_width / 2) - 40,  // number x position
            (page_height / 2) - 40, // number y position
            page_num
        );
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut font_resources = Dictionary::new();
        font_resources.set("F1", Object::Reference(font_id));

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_resources));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(page_width),
                    Object::Integer(page_height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // Create pages dict
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
    doc
}

async fn create_test_output(
    documents: &[SourceDocument],
    mode: LayoutMode,
    name: &str,
) -> Result<()> {
    let options = CombineOptions {
        layout_mode: mode,
        fit_policy: FitPolicy::Contain,
        paper_size: PaperSize::A4,
        ..Default::default()
    };

    let stats = calculate_statistics(documents, &options)?;
    let combined = combine(documents, &options).await?;

    let output_name = format!("{}.pdf", name);
    save_pdf(combined, &output_name).await?;

    println!(
        "Created {}: {} pages, {} blank",
        output_name, stats.output_pages, stats.blank_pages_added
    );
    for (title, page) in &stats.bookmarks {
        println!("  {} -> bookmark {}", title, page);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== PDF Combine Test - All Modes (A4 Paper) ===\n");

    let sources = [
        ("chapter_a.pdf", create_numbered_pdf("A", 5, 420, 595)),
        ("chapter_b.pdf", create_numbered_pdf("B", 3, 420, 595)),
        ("slides_c.pdf", create_numbered_pdf("C", 8, 720, 405)),
    ];

    let mut documents = Vec::new();
    for (name, doc) in sources {
        save_pdf(doc, name).await?;
        documents.push(load_pdf(name).await?);
    }

    create_test_output(&documents, LayoutMode::Single, "all_modes_single").await?;
    create_test_output(&documents, LayoutMode::Double, "all_modes_double").await?;
    create_test_output(&documents, LayoutMode::Slides, "all_modes_slides").await?;

    Ok(())
}
