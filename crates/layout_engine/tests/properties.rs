use layout_engine::{
    FontFace, FooterLink, HeaderBlock, HelveticaMetrics, LayoutEngine, LineBreaker, PageGeometry,
    Rgb, TextMeasure, TextStyle, Typography,
};
use proptest::prelude::*;

fn body_style() -> TextStyle {
    TextStyle::new(FontFace::Regular, 12.0, 16.0, Rgb::BLACK)
}

fn header() -> HeaderBlock {
    HeaderBlock {
        title: "Interview Preparation".to_string(),
        service_name: "Mock Interview".to_string(),
        generated_line: "Generated: 2024-01-15 09:00".to_string(),
        score_line: None,
        improvement_line: None,
    }
}

fn engine() -> LayoutEngine {
    LayoutEngine::helvetica(PageGeometry::default(), Typography::default()).with_footer_links(vec![
        FooterLink::new("Website", "https://example.com"),
        FooterLink::new("Support", "https://example.com/support"),
    ])
}

#[test]
fn lorem_paragraph_wraps_within_usable_width() {
    let text: String = "lorem ".repeat(84).chars().take(500).collect();
    let width = PageGeometry::default().usable_width();
    let breaker = LineBreaker::new(HelveticaMetrics::new());
    let lines = breaker.wrap(&text, &body_style(), width).unwrap();

    // 14 words of "lorem" fit in 495pt at 12pt
    assert_eq!(lines.len(), 6);
    for line in &lines {
        assert!(line.measured_width <= width);
    }
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.text.split(' ')).collect();
    let original: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(rejoined, original);
}

#[test]
fn three_page_document_stamps_every_footer() {
    let engine = engine();
    let lines_for = |n: usize| -> Vec<String> {
        (0..n).map(|i| format!("Answer {} covered the question well.", i)).collect()
    };

    let n = (1..2000)
        .find(|&n| engine.run(&header(), &lines_for(n)).unwrap().page_count() == 3)
        .expect("some line count yields three pages");
    let doc = engine.run(&header(), &lines_for(n)).unwrap();

    let labels: Vec<&str> = doc.footers().iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Page 1 of 3", "Page 2 of 3", "Page 3 of 3"]);
    for footer in doc.footers() {
        assert_eq!(footer.total_pages, 3);
        assert_eq!(footer.links_text, "Website | Support");
    }

    // one more line than needed for two pages lands on page three
    let two = engine.run(&header(), &lines_for(n - 1)).unwrap();
    assert_eq!(two.page_count(), 2);
    assert!(two.footers().iter().all(|f| f.label.ends_with(" of 2")));
}

#[test]
fn page_two_starts_at_top_margin() {
    let engine = engine();
    let lines: Vec<String> = (0..80).map(|i| format!("row {}", i)).collect();
    let doc = engine.run(&header(), &lines).unwrap();
    let second = &doc.pages().pages()[1];
    let first_line = second.lines().next().unwrap();
    let typography = Typography::default();
    assert_eq!(first_line.baseline, 56.0 + typography.body.size);
    assert!(!doc.pages().lines().skip(4).any(|l| l.line.text == "Mock Interview"));
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.,;:!?()'-]{1,12}"
}

fn long_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/.:_-]{1,80}"
}

proptest! {
    #[test]
    fn wrapped_lines_fit_and_keep_words(
        words in prop::collection::vec(word(), 0..200),
        width in 150.0f32..600.0,
    ) {
        let text = words.join(" ");
        let breaker = LineBreaker::new(HelveticaMetrics::new());
        let style = body_style();
        let lines = breaker.wrap(&text, &style, width).unwrap();

        for line in &lines {
            prop_assert!(line.measured_width <= width);
            let measured = HelveticaMetrics::new().measure(&line.text, style.font, style.size).unwrap();
            prop_assert_eq!(measured, line.measured_width);
        }
        let rejoined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.text.split(' ').map(str::to_string))
            .collect();
        prop_assert_eq!(rejoined, words);
    }

    #[test]
    fn overlong_words_are_split_without_loss(
        words in prop::collection::vec(long_word(), 1..20),
        width in 40.0f32..200.0,
    ) {
        let text = words.join(" ");
        let breaker = LineBreaker::new(HelveticaMetrics::new());
        let lines = breaker.wrap(&text, &body_style(), width).unwrap();

        prop_assert!(lines.iter().all(|l| l.measured_width <= width));
        let kept: String = lines.iter().flat_map(|l| l.text.chars()).filter(|c| *c != ' ').collect();
        let original: String = words.concat();
        prop_assert_eq!(kept, original);
    }

    #[test]
    fn pagination_respects_margins_and_totals(
        lines in prop::collection::vec(prop_oneof![Just(String::new()), "[a-z ]{1,300}"], 0..150),
    ) {
        let engine = engine();
        let doc = engine.run(&header(), &lines).unwrap();
        let geometry = doc.geometry();

        prop_assert!(doc.page_count() >= 1);
        prop_assert_eq!(doc.footers().len(), doc.page_count());
        for (i, (page, footer)) in doc.iter().enumerate() {
            prop_assert_eq!(page.number(), i + 1);
            prop_assert_eq!(&footer.label, &format!("Page {} of {}", i + 1, doc.page_count()));
            for line in page.lines() {
                let top = line.baseline - line.style.size;
                prop_assert!(top + line.style.line_height <= geometry.content_bottom() + 1e-3);
                prop_assert!(line.x + line.line.measured_width <= geometry.content_right() + 1e-3);
            }
        }
    }
}
