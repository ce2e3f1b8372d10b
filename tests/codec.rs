use std::path::PathBuf;

use pnmkit::{
    decode, read_file, AnyRaster, Bitmap, Colour, Encoding, Format, Graymap, PixelKind, Pixmap,
    PnmError, TagStyle,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn duck_text_and_binary_agree() {
    let text = Bitmap::load(&fixture("duck.pbm")).unwrap();
    let binary = Bitmap::load(&fixture("duck_binary.pbm")).unwrap();

    assert_eq!(text.size(), (15, 15));
    assert_eq!(text.rows(), binary.rows());
    assert_eq!(text.format(), Format::BitmapText);
    assert_eq!(binary.format(), Format::BitmapBinary);

    // first row: 0 0 0 0 0 0 0 1 1 1 1 0 0 0 0
    assert_eq!(text.get(6, 0), Some(false));
    assert_eq!(text.get(7, 0), Some(true));
    assert_eq!(text.get(10, 0), Some(true));
    assert_eq!(text.get(11, 0), Some(false));
}

#[test]
fn duck_reencodes_byte_for_byte() {
    for name in ["duck.pbm", "duck_binary.pbm"] {
        let bytes = std::fs::read(fixture(name)).unwrap();
        let image = decode(&bytes).unwrap();
        assert_eq!(image.encode(), bytes, "{}", name);
    }
}

#[test]
fn duck_switches_encoding() {
    let mut duck = Bitmap::load(&fixture("duck.pbm")).unwrap();
    duck.set_encoding(Encoding::Binary);
    assert_eq!(duck.encode(), std::fs::read(fixture("duck_binary.pbm")).unwrap());
}

#[test]
fn duck_invert_flip_flop_are_involutions() {
    let original = Bitmap::load(&fixture("duck.pbm")).unwrap();

    let mut inverted = original.clone();
    inverted.invert();
    assert_eq!(inverted.get(7, 0), Some(false));
    assert_eq!(inverted.get(0, 0), Some(true));
    inverted.invert();
    assert_eq!(inverted, original);

    let mut flipped = original.clone();
    flipped.flip();
    assert_eq!(flipped.get(14 - 7, 0), Some(true));
    assert_eq!(flipped.get(0, 3), Some(true));
    flipped.flip();
    assert_eq!(flipped, original);

    let mut flopped = original.clone();
    flopped.flop();
    assert_eq!(flopped.rows()[0], original.rows()[14]);
    flopped.flop();
    assert_eq!(flopped, original);
}

#[test]
fn every_format_round_trips() {
    let gray_rows = vec![vec![0u8, 7, 15], vec![15, 3, 1]];
    let colour_rows = vec![
        vec![Colour::rgb(0, 1, 2), Colour::rgb(15, 15, 15)],
        vec![Colour::rgb(9, 0, 4), Colour::rgb(3, 3, 3)],
    ];
    let bitmap_rows = vec![vec![true; 9], vec![false; 9], vec![true, false, true, false, true, false, true, false, true]];

    for encoding in [Encoding::Text, Encoding::Binary] {
        for style in [TagStyle::Magic, TagStyle::Named] {
            let mut bitmap = Bitmap::from_rows(bitmap_rows.clone(), encoding, 1).unwrap();
            bitmap.set_tag_style(style);
            assert_eq!(Bitmap::decode(&bitmap.encode()).unwrap(), bitmap);

            let mut gray = Graymap::from_rows(gray_rows.clone(), encoding, 15).unwrap();
            gray.set_tag_style(style);
            assert_eq!(Graymap::decode(&gray.encode()).unwrap(), gray);

            let mut pixmap = Pixmap::from_rows(colour_rows.clone(), encoding, 15).unwrap();
            pixmap.set_tag_style(style);
            assert_eq!(Pixmap::decode(&pixmap.encode()).unwrap(), pixmap);
        }
    }
}

#[test]
fn gray_text_end_to_end() {
    let mut gray = Graymap::decode(b"gray-text\n2 2\n255\n0 255\n255 0\n").unwrap();
    assert_eq!(gray.rows(), &[vec![0u8, 255], vec![255, 0]]);

    gray.invert();
    assert_eq!(gray.rows(), &[vec![255u8, 0], vec![0, 255]]);

    assert_eq!(
        String::from_utf8(gray.encode()).unwrap(),
        "gray-text\n2 2\n255\n255 0\n0 255\n"
    );
}

#[test]
fn file_round_trip_through_any_raster() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradient.pgm");

    let rows: Vec<Vec<u8>> = (0..4u8).map(|y| (0..4u8).map(|x| x * 16 + y).collect()).collect();
    let gray = Graymap::from_rows(rows, Encoding::Binary, 255).unwrap();
    gray.save(&path).unwrap();

    match read_file(&path).unwrap() {
        AnyRaster::Graymap(loaded) => assert_eq!(loaded, gray),
        other => panic!("expected a graymap, got {:?}", other.kind()),
    }
}

#[test]
fn short_binary_bitmap_row() {
    let err = decode(b"P4\n16 1\n\xFF").unwrap_err();
    assert!(matches!(err, PnmError::TruncatedRow { .. }));
    insta::assert_snapshot!(err.to_string(), @"Truncated row 0: expected 2 bytes, found 1");
}

#[test]
fn text_row_with_too_few_tokens() {
    let err = decode(b"P2\n3 1\n255\n1 2\n").unwrap_err();
    assert!(matches!(err, PnmError::MalformedRow { .. }));
    insta::assert_snapshot!(err.to_string(), @"Malformed row 0: expected 3 tokens, found 2");
}

#[test]
fn header_errors() {
    let err = decode(b"P7\n1 1\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Invalid header: unrecognized format tag 'P7'");

    assert!(matches!(
        decode(b"P1\n1\n1\n"),
        Err(PnmError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        decode(b"P2\n1 1\n0\n0\n"),
        Err(PnmError::InvalidMaxValue { .. })
    ));
    assert!(matches!(
        decode(b"P2\n1 1\n256\n0\n"),
        Err(PnmError::InvalidMaxValue { .. })
    ));
}

#[test]
fn sample_errors() {
    let err = decode(b"P3\n1 1\n100\n1 2 101\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Sample 101 in row 0 exceeds max value 100");

    let err = decode(b"P2\n2 1\n255\n1 x\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Invalid sample 'x' in row 0");
}

#[test]
fn missing_rows() {
    assert!(matches!(
        decode(b"P6\n1 2\n255\n\x01\x02\x03"),
        Err(PnmError::TruncatedData { expected: 2, found: 1 })
    ));
}

#[test]
fn oversized_headers_fail_cleanly() {
    assert!(matches!(
        decode(b"P1\n1 99999999999999999\n1\n"),
        Err(PnmError::TruncatedData { expected: 99999999999999999, found: 1 })
    ));
    assert!(matches!(
        decode(b"P4\n8 99999999999999999\n\xFF"),
        Err(PnmError::TruncatedData { found: 1, .. })
    ));

    let wide = format!("P6\n{} 1\n255\n\x01", usize::MAX);
    assert!(matches!(
        decode(wide.as_bytes()),
        Err(PnmError::InvalidDimensions { .. })
    ));

    let wide = format!("P3\n{} 1\n255\n1 2 3\n", usize::MAX / 3);
    assert!(matches!(
        decode(wide.as_bytes()),
        Err(PnmError::MalformedRow { row: 0, found: 3, .. })
    ));
}

#[test]
fn decode_as_rejects_other_kinds() {
    let err = Pixmap::decode(b"P1\n1 1\n1\n").unwrap_err();
    assert!(matches!(
        err,
        PnmError::KindMismatch {
            expected: PixelKind::Color,
            found: PixelKind::Bitmap
        }
    ));
    insta::assert_snapshot!(err.to_string(), @"Expected a color image, found bitmap");
}
