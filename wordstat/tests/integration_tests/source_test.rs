// tests/integration_tests/source_test.rs
use super::common::{
    HELVETICA, SAMPLE_TEXT, build_pdf, create_pdf_file, setup_test_directory,
};
use anyhow::Result;
use std::path::Path;
use wordstat::{SourceError, SourceKind, analyze, extract_text};

#[test]
fn test_extension_dispatch() -> Result<()> {
    for (name, expected) in [
        ("a.txt", SourceKind::PlainText),
        ("a.md", SourceKind::PlainText),
        ("A.TXT", SourceKind::PlainText),
        ("a.pdf", SourceKind::Pdf),
    ] {
        assert_eq!(SourceKind::from_path(Path::new(name))?, expected, "{name}");
    }
    Ok(())
}

#[test]
fn test_unsupported_extension() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let err = extract_text(&temp_dir.path().join("data.csv")).unwrap_err();
    assert!(matches!(err, SourceError::UnsupportedExtension(_)));
    assert_eq!(err.to_string(), "Unsupported file type: .csv.");
    Ok(())
}

#[test]
fn test_reads_documents() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    assert_eq!(extract_text(&temp_dir.path().join("sample.txt"))?, SAMPLE_TEXT);

    let upper = extract_text(&temp_dir.path().join("UPPER.TXT"))?;
    let (stats, word_count) = analyze(&upper);
    assert_eq!(stats.total_words, 4);
    assert_eq!(word_count.get("loud"), 2);

    let readme = extract_text(&temp_dir.path().join("notes/README.md"))?;
    let (stats, word_count) = analyze(&readme);
    assert_eq!(word_count.get("fox"), 3);
    assert_eq!(word_count.get("the"), 4);
    assert_eq!(stats.most_common_words[0], (String::from("the"), 4));
    Ok(())
}

#[test]
fn test_unreadable_documents_yield_zero_stats() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    for name in ["missing.txt", "empty.md", "missing.pdf"] {
        let text = extract_text(&temp_dir.path().join(name))?;
        assert!(text.is_empty(), "{name} should produce empty text");

        let (stats, word_count) = analyze(&text);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.average_sentence_length, 0.0);
        assert!(word_count.is_empty());
    }
    Ok(())
}

#[test]
fn test_reads_pdf_text() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_pdf_file(
        temp_dir.path(),
        "hello.pdf",
        &build_pdf(&["Hello PDF world. Hello again"], Some(HELVETICA)),
    )?;

    let text = extract_text(&path)?;
    assert!(text.contains("Hello PDF world. Hello again"), "Got {text:?}");

    let (stats, word_count) = analyze(&text);
    assert_eq!(stats.total_words, 5);
    assert_eq!(word_count.get("hello"), 2);
    assert_eq!(stats.average_sentence_length, 2.5);
    Ok(())
}

#[test]
fn test_pdf_pages_are_concatenated_in_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_pdf_file(
        temp_dir.path(),
        "two_pages.pdf",
        &build_pdf(&["First page.", "Second page."], Some(HELVETICA)),
    )?;

    let text = SourceKind::Pdf.read(&path)?;
    let first = text.find("First page").expect("first page text");
    let second = text.find("Second page").expect("second page text");
    assert!(first < second, "Pages keep their order: {text:?}");

    let (stats, word_count) = analyze(&text);
    assert_eq!(stats.total_words, 4);
    assert_eq!(word_count.get("page"), 2);
    Ok(())
}

#[test]
fn test_malformed_pdfs_degrade_to_empty_text() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let fixtures = [
        ("font_without_subtype.pdf", build_pdf(&["Some text"], Some("<< /Type /Font >>"))),
        ("page_without_resources.pdf", build_pdf(&["Some text"], None)),
        ("garbage.pdf", b"%PDF-1.3 (mock PDF content)".to_vec()),
    ];

    for (name, bytes) in fixtures {
        let path = create_pdf_file(temp_dir.path(), name, &bytes)?;

        assert!(
            matches!(SourceKind::Pdf.read(&path), Err(SourceError::Pdf { .. })),
            "{name} should be a PDF error"
        );
        assert_eq!(extract_text(&path)?, "", "{name} should degrade to empty text");
    }
    Ok(())
}
