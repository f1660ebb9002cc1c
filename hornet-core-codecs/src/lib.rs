//! Decoding of received frame payloads into RGBA8 images.

pub mod decoder;

#[cfg(test)]
mod tests;

pub use decoder::ImageDecoder;
