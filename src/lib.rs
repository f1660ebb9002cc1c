pub use hornet_core::*;

#[cfg(feature = "transmission")]
pub mod transmission {
    pub use hornet_core_transmission::*;
}

#[cfg(feature = "codecs")]
pub mod codecs {
    pub use hornet_core_codecs::*;
}

#[cfg(feature = "render")]
pub mod render {
    pub use hornet_core_renderers::*;
}
