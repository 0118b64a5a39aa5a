//! Decoder façade: orchestrates the header, Huffman, block, and filter
//! stages for one file and owns every allocation until the image is
//! returned.
//!
//! The `.nya` extension check is cosmetic per the format's external
//! interface, so it lives only on the path-based convenience entry point;
//! `decode_reader`/`decode_slice` skip it and accept any byte source, which
//! is how a host application is meant to "relax" the rule.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use crate::blocks::decode_blocks;
use crate::error::Error;
use crate::header::parse_header;
use crate::huffman::HuffmanTree;
use crate::pixel::Pixel;
use crate::session::DecodeSession;
use crate::{filter, Image};

/// Decodes a `.nya` file at `path`. Fails with `NotNyaExtension` before
/// opening anything if the extension doesn't match, and with `OpenFailed`
/// if the file cannot be opened.
pub fn decode(path: impl AsRef<Path>) -> Result<Image, Error> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some("nya") {
        return Err(Error::NotNyaExtension);
    }
    let file = File::open(path).map_err(Error::OpenFailed)?;
    decode_reader(BufReader::new(file))
}

/// Decodes a complete `.nya` byte buffer, skipping the path/extension
/// check entirely.
pub fn decode_slice(bytes: &[u8]) -> Result<Image, Error> {
    decode_reader(Cursor::new(bytes))
}

/// Decodes from any byte source, skipping the path/extension check
/// entirely. This is the core of the decoder; `decode` and `decode_slice`
/// are convenience wrappers around it.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Image, Error> {
    let header = parse_header(&mut reader)?;
    log::debug!(
        "nya header: {}x{}, depth={}, filter={:?}",
        header.width,
        header.height,
        header.color_depth,
        header.filter
    );

    let mut session = DecodeSession::new(&header);
    let mut bits = crate::bitreader::BitReader::new(reader);

    // The tree's bitstream position is fixed immediately after the header
    // regardless of image geometry, so it is always built, even when the
    // image is empty and the tree will go unused.
    let tree = HuffmanTree::build(&mut bits, session.color_depth)?;
    log::debug!("huffman tree reconstructed");

    let pixel_count = session.pixel_count();
    let mut pixels = allocate_pixel_buffer(pixel_count)?;

    if pixel_count > 0 {
        decode_blocks(&mut bits, &tree, &session, &mut pixels)?;
        log::debug!("decoded {pixel_count} pixels");
        filter::apply_filter(&mut pixels, &mut session);
        log::debug!("post-filter applied: {:?}", session.filter);
    }

    Ok(Image {
        width: header.width,
        height: header.height,
        color_depth: header.color_depth,
        filter: header.filter,
        pixels: pixels.into_iter().map(Pixel::to_u32).collect(),
    })
}

/// Allocates the pixel buffer, surfacing a typed `AllocationFailed` error
/// rather than aborting the process on an allocation the host cannot
/// satisfy.
fn allocate_pixel_buffer(pixel_count: usize) -> Result<Vec<Pixel>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(pixel_count).map_err(|_| Error::AllocationFailed)?;
    buf.resize(pixel_count, Pixel::default());
    Ok(buf)
}
