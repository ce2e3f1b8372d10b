//! Binary pixel data: packed bits for bitmaps, one raw byte per channel
//! otherwise. Rows follow each other with no separators.

use crate::error::{PnmError, Result};
use crate::types::Pixel;

use super::cursor::Cursor;
use super::header::Header;

pub(crate) fn decode_rows<P: Pixel>(cursor: &mut Cursor<'_>, header: &Header) -> Result<Vec<Vec<P>>> {
    let row_len = P::binary_row_len(header.width);
    let mut rows = Vec::with_capacity(header.height.min(cursor.remaining()));

    for y in 0..header.height {
        let remaining = cursor.remaining();
        if row_len > 0 && remaining == 0 {
            return Err(PnmError::TruncatedData {
                expected: header.height,
                found: y,
            });
        }
        if remaining < row_len {
            return Err(PnmError::TruncatedRow {
                row: y,
                expected: row_len,
                found: remaining,
            });
        }

        let bytes = cursor.take(row_len);
        if P::KIND.has_max() {
            if let Some(&value) = bytes.iter().find(|&&b| b > header.max) {
                return Err(PnmError::SampleOutOfRange {
                    row: y,
                    value: value as u32,
                    max: header.max,
                });
            }
        }

        rows.push(P::decode_binary_row(bytes, header.width));
    }

    Ok(rows)
}

pub(crate) fn encode_rows<P: Pixel>(rows: &[Vec<P>], out: &mut Vec<u8>) {
    for row in rows {
        P::encode_binary_row(row, out);
    }
}
