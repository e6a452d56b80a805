use chrono::{Local, TimeZone};
use export::{
    ExportFormat, ExportOptions, ExportOrchestrator, ExportRequest, FormatGenerator,
    GeneratorRegistry, PdfGenerator,
};
use proptest::prelude::*;
use std::sync::Arc;
use store::{ExportSettings, MemorySink};

fn request(content: &str) -> ExportRequest {
    let at = Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
    ExportRequest::new(
        content,
        ExportFormat::Pdf,
        &ExportOptions::new("CV Review").with_service_name("Resume Analysis"),
        "CV Export",
        at,
    )
}

fn uncompressed() -> PdfGenerator {
    PdfGenerator::new(&ExportSettings::default()).with_compression(false)
}

fn numbered_lines(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Achievement {}: delivered measurable results", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn three_page_export_stamps_every_footer() {
    let generator = uncompressed();
    let request = request(&numbered_lines(110));

    let document = generator.layout(&request).unwrap();
    assert_eq!(document.page_count(), 3);

    let bytes = generator.generate(&request).unwrap();
    for k in 1..=3 {
        assert!(
            contains(&bytes, &format!("(Page {} of 3) Tj", k)),
            "missing footer for page {}",
            k
        );
    }
    assert!(!contains(&bytes, "(Page 4 of"));
    assert!(contains(&bytes, "/Count 3"));
}

#[test]
fn footer_links_become_annotations() {
    let bytes = uncompressed().generate(&request("One line")).unwrap();
    assert!(contains(&bytes, "(Website | Guides) Tj"));
    assert!(contains(&bytes, "/URI (https://example.com)"));
    assert!(contains(&bytes, "/URI (https://example.com/guides)"));
}

#[test]
fn non_latin_content_still_renders() {
    let bytes = uncompressed()
        .generate(&request("Curriculum — “Zoë” … 日本語 ✓ done"))
        .unwrap();
    assert!(contains(&bytes, "(Curriculum - \"Zoe\" ... v done) Tj"));
}

#[test]
fn info_title_is_transliterated() {
    let at = Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
    let request = ExportRequest::new(
        "Body",
        ExportFormat::Pdf,
        &ExportOptions::new("Résumé – Zoë").with_service_name("Revisión"),
        "CV Export",
        at,
    );
    let bytes = uncompressed().generate(&request).unwrap();
    assert!(contains(&bytes, "/Title (Resume - Zoe)"));
    assert!(contains(&bytes, "/Author (Revision)"));
    assert!(!contains(&bytes, "\\303"));
}

#[tokio::test]
async fn orchestrated_pdf_is_offered_once() {
    let mut registry = GeneratorRegistry::new();
    registry.register(Arc::new(uncompressed()));
    let sink = Arc::new(MemorySink::new());
    let orchestrator = ExportOrchestrator::with_registry(registry, sink.clone(), "CV Export");

    let options = ExportOptions::new("CV").with_file_name("cv");
    assert!(orchestrator.to_pdf(&numbered_lines(10), &options).await.unwrap());

    let artifacts = sink.artifacts();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].file_name, "cv.pdf");
    assert!(artifacts[0].bytes.starts_with(b"%PDF-"));
    assert!(contains(&artifacts[0].bytes, "(Page 1 of 1) Tj"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_text_lays_out_with_consistent_footers(content in "\\PC{1,400}(\n\\PC{0,200}){0,20}") {
        let generator = PdfGenerator::new(&ExportSettings::default());
        let document = generator.layout(&request(&content)).unwrap();
        let total = document.page_count();
        prop_assert!(total >= 1);
        for (k, footer) in document.footers().iter().enumerate() {
            prop_assert_eq!(footer.page_number, k + 1);
            prop_assert_eq!(footer.total_pages, total);
            prop_assert_eq!(&footer.label, &format!("Page {} of {}", k + 1, total));
        }
    }
}
