//! Tagged-block decode loop: reads a 2-bit tag and dispatches to one of
//! four fill procedures that advance a linear pixel cursor. The four
//! kinds are a closed set, so dispatch is a plain `match` rather than the
//! function-pointer table a C-style decoder would use.

use std::io::Read;

use crate::bitreader::BitReader;
use crate::error::Error;
use crate::huffman::HuffmanTree;
use crate::pixel::{read_pixel_literal, Pixel};
use crate::session::DecodeSession;

/// Runs the tagged-block loop until `pixels` is completely filled.
/// `pixels` must already be sized to `width * height`.
pub fn decode_blocks<R: Read>(
    reader: &mut BitReader<R>,
    tree: &HuffmanTree,
    session: &DecodeSession,
    pixels: &mut [Pixel],
) -> Result<(), Error> {
    let total = pixels.len();
    let mut cursor = 0usize;

    while cursor < total {
        match reader.read_bits(2)? {
            0b00 => {
                let value = read_pixel_literal(reader, session.color_depth)?;
                write_run(pixels, &mut cursor, value, 1)?;
            }
            0b01 => {
                let value = read_pixel_literal(reader, session.color_depth)?;
                let run = read_run_length(reader)?;
                write_run(pixels, &mut cursor, value, run)?;
            }
            0b10 => {
                let value = tree.read_symbol(reader)?;
                write_run(pixels, &mut cursor, value, 1)?;
            }
            0b11 => {
                let value = tree.read_symbol(reader)?;
                let run = read_run_length(reader)?;
                write_run(pixels, &mut cursor, value, run)?;
            }
            _ => unreachable!("a 2-bit read is always in 0..4"),
        }
    }

    Ok(())
}

/// Reads the variable-width run length: a 3-bit field `L` selects the bit
/// width `L+1` of `R`, and the run itself is `R+1` pixels. Both stages are
/// biased by one, so the minimum run is 1 pixel and the maximum is 256.
fn read_run_length<R: Read>(reader: &mut BitReader<R>) -> Result<usize, Error> {
    let width = reader.read_bits(3)? + 1;
    let run = reader.read_bits(width)? + 1;
    Ok(run as usize)
}

/// Writes `value` `count` times starting at `*cursor`, rejecting any run
/// that would overrun the buffer.
fn write_run(pixels: &mut [Pixel], cursor: &mut usize, value: Pixel, count: usize) -> Result<(), Error> {
    let end = cursor.checked_add(count).ok_or(Error::Overrun)?;
    if end > pixels.len() {
        return Err(Error::Overrun);
    }
    pixels[*cursor..end].fill(value);
    *cursor = end;
    Ok(())
}
