//! Textual pixel data: one line per row, decimal tokens separated by
//! whitespace.

use crate::error::{PnmError, Result};
use crate::types::Pixel;

use super::cursor::Cursor;
use super::header::Header;

pub(crate) fn decode_rows<P: Pixel>(cursor: &mut Cursor<'_>, header: &Header) -> Result<Vec<Vec<P>>> {
    // The header has already checked that this fits.
    let expected = header.width * P::CHANNELS;
    // Every row needs at least a line terminator, so the input bounds the
    // row count no matter what the header claims.
    let mut rows = Vec::with_capacity(header.height.min(cursor.remaining() + 1));
    let mut samples = Vec::new();

    for y in 0..header.height {
        let line = cursor.next_line().ok_or(PnmError::TruncatedData {
            expected: header.height,
            found: y,
        })?;
        let line = String::from_utf8_lossy(line);

        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        if tokens.len() != expected {
            return Err(PnmError::MalformedRow {
                row: y,
                expected,
                found: tokens.len(),
            });
        }

        samples.clear();
        for token in tokens {
            samples.push(parse_sample(token, y, header.max)?);
        }

        rows.push(
            samples
                .chunks_exact(P::CHANNELS)
                .map(P::from_samples)
                .collect(),
        );
    }

    Ok(rows)
}

pub(crate) fn encode_rows<P: Pixel>(rows: &[Vec<P>], out: &mut Vec<u8>) {
    let mut samples = Vec::new();
    for row in rows {
        samples.clear();
        for &pixel in row {
            pixel.push_samples(&mut samples);
        }

        let line = samples
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
}

fn parse_sample(token: &str, row: usize, max: u8) -> Result<u8> {
    let value: u32 = token.parse().map_err(|_| PnmError::InvalidSample {
        row,
        token: token.to_string(),
    })?;

    if value > max as u32 {
        return Err(PnmError::SampleOutOfRange { row, value, max });
    }

    Ok(value as u8)
}
