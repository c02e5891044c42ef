//! Basic tests for runeseg-api

use runeseg_api::*;
use std::io::Write;

#[test]
fn test_input_bytes_reading() {
    let input = Input::from_bytes(b"Hello world.".to_vec());
    assert_eq!(input.read_bytes().unwrap(), b"Hello world.");

    let input = Input::from_reader(std::io::Cursor::new(vec![0xFF, 0x41]));
    assert_eq!(input.read_bytes().unwrap(), vec![0xFF, 0x41]);
}

#[test]
fn test_process_text_graphemes() {
    let output = process_text("A\u{301}B").unwrap();

    let texts: Vec<&str> = output.texts().collect();
    assert_eq!(texts, vec!["A\u{301}", "B"]);
    assert_eq!((output.segments[0].start, output.segments[0].end), (0, 3));
    assert_eq!((output.segments[1].start, output.segments[1].end), (3, 4));
    assert_eq!(output.metadata.code_units, 4);
    assert_eq!(output.metadata.code_points, 3);
    assert_eq!(output.metadata.replacements, 0);
    assert_eq!(output.metadata.mode, "grapheme");
}

#[test]
fn test_words_only() {
    let processor = TextProcessor::new(Config::words());
    let output = processor.process(Input::from_text("Hello, world!")).unwrap();

    let texts: Vec<&str> = output.texts().collect();
    assert_eq!(texts, vec!["Hello", "world"]);
    assert!(output.segments.iter().all(|s| s.word_like == Some(true)));
    assert_eq!(output.metadata.word_count, 2);
}

#[test]
fn test_all_word_segments() {
    let config = Config::builder().mode(SegmentMode::Word).build().unwrap();
    let output = TextProcessor::new(config)
        .process(Input::from_text("can't stop"))
        .unwrap();

    let texts: Vec<&str> = output.texts().collect();
    assert_eq!(texts, vec!["can't", " ", "stop"]);
    assert_eq!(output.segments[1].word_like, Some(false));
}

#[test]
fn test_code_point_mode_offsets() {
    let config = Config::builder().mode(SegmentMode::CodePoint).build().unwrap();
    let output = TextProcessor::new(config)
        .process(Input::from_bytes(b"a\xC3\xA9\xFF".to_vec()))
        .unwrap();

    let ranges: Vec<(usize, usize)> = output.segments.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(ranges, vec![(0, 1), (1, 3), (3, 4)]);
    assert_eq!(output.segments[2].text, "\u{FFFD}");
    assert_eq!(output.metadata.replacements, 1);
}

#[test]
fn test_utf16_input_with_lone_surrogate() {
    let bytes = vec![0x41, 0x00, 0x00, 0xD8, 0x42, 0x00];

    let config = Config::builder().encoding(Encoding::Utf16Le).build().unwrap();
    let text = TextProcessor::new(config).decode_text(Input::from_bytes(bytes.clone())).unwrap();
    assert_eq!(text, "A\u{FFFD}B");

    let strict = Config::builder()
        .encoding(Encoding::Utf16Le)
        .strict()
        .build()
        .unwrap();
    let err = TextProcessor::new(strict)
        .validate(Input::from_bytes(bytes))
        .unwrap_err();
    assert_eq!(err.position(), Some(1));
}

#[test]
fn test_truncated_utf8_is_one_replacement() {
    let processor = TextProcessor::default();
    let text = processor.decode_text(Input::from_bytes(b"\xE0\xA0".to_vec())).unwrap();
    assert_eq!(text, "\u{FFFD}");

    let err = TextProcessor::new(Config::strict())
        .process(Input::from_bytes(b"\xE0\xA0".to_vec()))
        .unwrap_err();
    assert!(matches!(err, ApiError::Conversion(_)));
    assert_eq!(err.position(), Some(0));
}

#[test]
fn test_trailing_partial_unit() {
    let bytes = vec![0x41, 0x00, 0x42];
    let config = Config::builder().encoding(Encoding::Utf16Le).build().unwrap();
    let processor = TextProcessor::new(config);

    let output = processor.process(Input::from_bytes(bytes.clone())).unwrap();
    let texts: Vec<&str> = output.texts().collect();
    assert_eq!(texts, vec!["A", "\u{FFFD}"]);
    assert_eq!(output.metadata.code_units, 2);
    assert_eq!(output.metadata.replacements, 1);

    let strict = Config::builder()
        .encoding(Encoding::Utf16Le)
        .strict()
        .build()
        .unwrap();
    let err = TextProcessor::new(strict)
        .validate(Input::from_bytes(bytes))
        .unwrap_err();
    assert_eq!(err.position(), Some(1));
}

#[test]
fn test_transcode() {
    let processor = TextProcessor::default();
    let utf16be = processor
        .transcode(Input::from_text("hi"), Encoding::Utf16Be)
        .unwrap();
    assert_eq!(utf16be, vec![0x00, 0x68, 0x00, 0x69]);

    let back = transcode_bytes(&utf16be, Encoding::Utf16Be, Encoding::Utf8).unwrap();
    assert_eq!(back, b"hi");

    let replaced = transcode_bytes(b"a\x80", Encoding::Utf8, Encoding::Utf32Le).unwrap();
    assert_eq!(replaced, vec![0x61, 0, 0, 0, 0xFD, 0xFF, 0, 0]);
}

#[test]
fn test_strict_transcode_fails() {
    let err = TextProcessor::new(Config::strict())
        .transcode(Input::from_bytes(b"ok\xC0".to_vec()), Encoding::Utf16Le)
        .unwrap_err();
    assert_eq!(err.position(), Some(2));
}

#[test]
fn test_counts() {
    let counts = TextProcessor::default()
        .count(Input::from_text("e\u{301} fox"))
        .unwrap();
    assert_eq!(counts.code_points, 6);
    assert_eq!(counts.graphemes, 5);
    assert_eq!(counts.words, 2);
    assert_eq!(counts.replacements, 0);
}

#[test]
fn test_process_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("\u{1F1EF}\u{1F1F5}\u{1F1EB}".as_bytes()).unwrap();

    let output = process_file(file.path(), Config::graphemes()).unwrap();
    let texts: Vec<&str> = output.texts().collect();
    assert_eq!(texts, vec!["\u{1F1EF}\u{1F1F5}", "\u{1F1EB}"]);
}

#[test]
fn test_missing_file() {
    let err = process_file("/nonexistent/input.txt", Config::default()).unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = process_text("ab").unwrap();
    let json = output.to_json(false).unwrap();
    assert!(json.contains("\"text\":\"a\""));
    assert!(!json.contains("word_like"));

    let deserialized: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.segments, output.segments);
}

#[test]
#[cfg(feature = "serde")]
fn test_config_enum_serialization() {
    assert_eq!(serde_json::to_string(&Encoding::Utf16Le).unwrap(), "\"utf-16le\"");
    assert_eq!(serde_json::to_string(&SegmentMode::CodePoint).unwrap(), "\"code-point\"");
    assert_eq!(serde_json::to_string(&ErrorPolicy::Strict).unwrap(), "\"strict\"");
}
