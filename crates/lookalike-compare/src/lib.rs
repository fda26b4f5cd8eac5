//! Lookalike Compare - reference image comparator
//!
//! `PixelComparator` decodes both images with the `image` crate and compares
//! them pixel by pixel using CIE76 colour distance in Lab space.

pub mod color;
pub mod pixel;

pub use pixel::PixelComparator;
