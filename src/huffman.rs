//! Self-describing Huffman tree: reconstruction by a pre-order bitstream
//! traversal with no explicit length or symbol-count header, plus the
//! bit-by-bit walk that resolves one symbol.
//!
//! The tree is stored as a flattened index arena (`left`/`right`/`value`
//! parallel vectors with a sentinel for "no child") rather than as boxed
//! nodes with parent pointers. Parent links are only needed transiently,
//! during construction, to backtrack to the nearest unfinished right slot;
//! they live in a local vector that is dropped once the tree is built, and
//! construction is iterative so no tree depth can exhaust the call stack.

use std::io::Read;

use crate::bitreader::BitReader;
use crate::error::Error;
use crate::pixel::{read_pixel_literal, Pixel};

const NONE: u32 = u32::MAX;

/// A reconstructed Huffman tree, ready to resolve symbols.
pub struct HuffmanTree {
    left: Vec<u32>,
    right: Vec<u32>,
    value: Vec<Pixel>,
    root: u32,
}

impl HuffmanTree {
    /// Reconstructs the tree from its pre-order bit encoding. Each `0` bit
    /// descends to a fresh left child; each `1` bit turns the current node
    /// into a leaf holding one pixel literal, then backtracks to the
    /// nearest ancestor whose right child is still empty. The walk ends
    /// when no such ancestor exists.
    pub fn build<R: Read>(reader: &mut BitReader<R>, color_depth: u32) -> Result<Self, Error> {
        let mut left = vec![NONE];
        let mut right = vec![NONE];
        let mut value = vec![Pixel::default()];
        let mut parent = vec![NONE];
        let root: u32 = 0;
        let mut cur: u32 = root;

        loop {
            if reader.read_bit()? {
                value[cur as usize] = read_pixel_literal(reader, color_depth)?;

                // Backtrack to the nearest ancestor with an empty right slot.
                let mut ancestor = parent[cur as usize];
                while ancestor != NONE && right[ancestor as usize] != NONE {
                    ancestor = parent[ancestor as usize];
                }
                if ancestor == NONE {
                    break;
                }

                let new_node = left.len() as u32;
                left.push(NONE);
                right.push(NONE);
                value.push(Pixel::default());
                parent.push(ancestor);
                right[ancestor as usize] = new_node;
                cur = new_node;
            } else {
                let new_node = left.len() as u32;
                left.push(NONE);
                right.push(NONE);
                value.push(Pixel::default());
                parent.push(cur);
                left[cur as usize] = new_node;
                cur = new_node;
            }
        }

        Ok(Self { left, right, value, root })
    }

    /// Walks the tree bit by bit (`0` left, `1` right) and returns the
    /// leaf's value.
    pub fn read_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<Pixel, Error> {
        let mut cur = self.root;
        while self.left[cur as usize] != NONE {
            cur = if reader.read_bit()? { self.right[cur as usize] } else { self.left[cur as usize] };
        }
        Ok(self.value[cur as usize])
    }
}
