//! Color representations, conversions and generation
//!
//! This module handles hex/RGB/HSL conversions and the uniform
//! random color source the quiz draws its questions from.

pub mod conversion;
pub mod random;

pub use conversion::{hex_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use random::random_rgb;
