//! Header parsing and writing.
//!
//! The header is line oriented:
//!
//! ```text
//! P2          <- format tag (P1-P6 or bitmap-text, gray-binary, ...)
//! 4 3         <- width and height
//! 255         <- max value (gray and colour only)
//! ```

use crate::error::{PnmError, Result};
use crate::types::{Format, TagStyle};

use super::cursor::Cursor;

/// A parsed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    pub format: Format,
    pub tag_style: TagStyle,
    pub width: usize,
    pub height: usize,
    /// Declared max value; 1 for bitmaps.
    pub max: u8,
}

/// Read the header lines, leaving the cursor at the first pixel byte.
pub(crate) fn read_header(cursor: &mut Cursor<'_>) -> Result<Header> {
    let tag_line = cursor.next_line().unwrap_or_default();
    let tag = lossy(tag_line);
    let (format, tag_style) = Format::parse_tag(tag.trim())
        .ok_or_else(|| PnmError::InvalidHeader {
            found: tag.trim().to_string(),
        })?;

    let dims_line = lossy(cursor.next_line().unwrap_or_default());
    let (width, height) = parse_dimensions(&dims_line, format.kind().channels())?;

    let max = if format.kind().has_max() {
        let max_line = lossy(cursor.next_line().unwrap_or_default());
        parse_max(&max_line)?
    } else {
        1
    };

    Ok(Header {
        format,
        tag_style,
        width,
        height,
        max,
    })
}

/// Append the header for the given image to `out`.
pub(crate) fn write_header(
    out: &mut Vec<u8>,
    format: Format,
    tag_style: TagStyle,
    width: usize,
    height: usize,
    max: Option<u8>,
) {
    let mut header = format!("{}\n{} {}\n", format.tag(tag_style), width, height);
    if let Some(max) = max {
        header.push_str(&format!("{}\n", max));
    }
    out.extend_from_slice(header.as_bytes());
}

/// Width and height. A width whose row of samples would not fit in
/// `usize` is rejected here, before any pixel data is read.
fn parse_dimensions(line: &str, channels: usize) -> Result<(usize, usize)> {
    let invalid = || PnmError::InvalidDimensions {
        found: line.trim().to_string(),
    };

    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
    if tokens.len() != 2 {
        return Err(invalid());
    }

    let width = tokens[0].parse::<usize>().map_err(|_| invalid())?;
    let height = tokens[1].parse::<usize>().map_err(|_| invalid())?;
    width.checked_mul(channels).ok_or_else(invalid)?;

    Ok((width, height))
}

fn parse_max(line: &str) -> Result<u8> {
    let trimmed = line.trim();
    match trimmed.parse::<u16>() {
        Ok(max @ 1..=255) => Ok(max as u8),
        _ => Err(PnmError::InvalidMaxValue {
            found: trimmed.to_string(),
        }),
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &[u8]) -> Result<Header> {
        read_header(&mut Cursor::new(source))
    }

    #[test]
    fn test_bitmap_header_has_no_max() {
        let header = read(b"P1\n3 2\n1 0 1\n").unwrap();
        assert_eq!(header.format, Format::BitmapText);
        assert_eq!(header.tag_style, TagStyle::Magic);
        assert_eq!((header.width, header.height), (3, 2));
        assert_eq!(header.max, 1);
    }

    #[test]
    fn test_named_gray_header() {
        let header = read(b"gray-binary\n 4   5 \n15\n").unwrap();
        assert_eq!(header.format, Format::GrayBinary);
        assert_eq!(header.tag_style, TagStyle::Named);
        assert_eq!((header.width, header.height), (4, 5));
        assert_eq!(header.max, 15);
    }

    #[test]
    fn test_invalid_tag() {
        assert!(matches!(read(b"P7\n1 1\n"), Err(PnmError::InvalidHeader { .. })));
        assert!(matches!(read(b""), Err(PnmError::InvalidHeader { .. })));
        assert!(matches!(
            read(b"# comment\nP1\n1 1\n"),
            Err(PnmError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_invalid_dimensions() {
        let cases: [&[u8]; 6] = [
            b"P1\n",
            b"P1\n3\n",
            b"P1\n3 x\n",
            b"P1\n-3 2\n",
            b"P1\n3 2 1\n",
            b"P1\n# 3 2\n",
        ];
        for source in cases {
            assert!(
                matches!(read(source), Err(PnmError::InvalidDimensions { .. })),
                "{:?}",
                String::from_utf8_lossy(source)
            );
        }
    }

    #[test]
    fn test_row_length_overflow() {
        let source = format!("P6\n{} 1\n255\n", usize::MAX);
        assert!(matches!(
            read(source.as_bytes()),
            Err(PnmError::InvalidDimensions { .. })
        ));

        // One sample per pixel still fits.
        let source = format!("P5\n{} 1\n255\n", usize::MAX);
        assert_eq!(read(source.as_bytes()).unwrap().width, usize::MAX);
    }

    #[test]
    fn test_invalid_max() {
        let cases: [&[u8]; 5] = [
            b"P2\n1 1\n",
            b"P2\n1 1\nabc\n",
            b"P3\n1 1\n0\n",
            b"P3\n1 1\n256\n",
            b"P5\n1 1\n65535\n",
        ];
        for source in cases {
            assert!(
                matches!(read(source), Err(PnmError::InvalidMaxValue { .. })),
                "{:?}",
                String::from_utf8_lossy(source)
            );
        }
    }

    #[test]
    fn test_write_header() {
        let mut out = Vec::new();
        write_header(&mut out, Format::ColorBinary, TagStyle::Magic, 7, 3, Some(255));
        assert_eq!(out, b"P6\n7 3\n255\n");

        let mut out = Vec::new();
        write_header(&mut out, Format::BitmapText, TagStyle::Named, 2, 9, None);
        assert_eq!(out, b"bitmap-text\n2 9\n");
    }
}
