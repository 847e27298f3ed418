//! Derived export formats for an animation.
//!
//! The packed form concatenates every cell bit frame by frame, row by row,
//! column by column, and reads the resulting string as one base-2 integer.
//! Consumers on the LED side unpack it in exactly that order.

use super::error::ExportError;
use super::model::{Animation, Dimensions};
use num_bigint::BigUint;
use std::fmt;

/// Bit-packed export of a monochrome animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedExport {
    pub frame_count: usize,
    pub dimensions: Dimensions,
    pub value: BigUint,
}

impl fmt::Display for PackedExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.frame_count, self.dimensions.height, self.dimensions.width, self.value
        )
    }
}

/// Pack every cell of `animation` into one integer. All cells must be 0 or 1.
pub fn pack_bits(animation: &Animation) -> Result<PackedExport, ExportError> {
    let dims = animation.dimensions();
    let mut bits = Vec::with_capacity(animation.frame_count() * dims.cell_count());

    for (frame_index, frame) in animation.frames().iter().enumerate() {
        for (row, cells) in frame.rows().iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                match value {
                    0 => bits.push(b'0'),
                    1 => bits.push(b'1'),
                    _ => {
                        return Err(ExportError::NonBinaryCell {
                            frame: frame_index,
                            row,
                            col,
                            value,
                        })
                    }
                }
            }
        }
    }

    // bits is never empty and only holds ASCII 0/1, so parsing cannot fail.
    let value = BigUint::parse_bytes(&bits, 2).unwrap_or_default();

    Ok(PackedExport {
        frame_count: animation.frame_count(),
        dimensions: dims,
        value,
    })
}

/// Nested array dump with braces, ready to paste as a C initializer.
pub fn text_dump(animation: &Animation) -> String {
    let frames: Vec<String> = animation
        .frames()
        .iter()
        .map(|frame| {
            let rows: Vec<String> = frame
                .rows()
                .iter()
                .map(|row| {
                    let cells: Vec<String> = row.iter().map(u8::to_string).collect();
                    format!("{{{}}}", cells.join(", "))
                })
                .collect();
            format!("{{{}}}", rows.join(", "))
        })
        .collect();
    format!("{{{}}}", frames.join(", "))
}
