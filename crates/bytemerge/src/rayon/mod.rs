//! # Rayon Batch Parallelism
//!
//! Wrappers which split batch calls across the ``rayon`` thread pool.
//! Single calls pass straight through to the inner encoder or decoder.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::*;
#[doc(inline)]
pub use rayon_encoder::*;
