//! Uniform random color generation
//!
//! Channel bytes are drawn independently from the thread-local RNG;
//! draws are uncorrelated and no seeding control is exposed.

use super::conversion::Rgb;

/// Draw a uniformly random color, one independent byte per channel.
pub fn random_rgb() -> Rgb {
    Rgb {
        r: rand::random::<u8>(),
        g: rand::random::<u8>(),
        b: rand::random::<u8>(),
    }
}
