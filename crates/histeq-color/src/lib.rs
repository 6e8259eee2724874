//! histeq-color - RGB to grayscale conversion
//!
//! Both reductions overwrite R, G and B of every pixel with a single
//! intensity and keep alpha:
//!
//! - [`GrayConversion::ArithmeticMean`]: `(r + g + b) / 3`, integer division
//! - [`GrayConversion::WeightedLuma`]: `0.2126 r + 0.7152 g + 0.0722 b`,
//!   truncated

pub mod error;
pub mod gray;

pub use histeq_core;

pub use error::ColorError;
pub use gray::{
    B_LUMA_WEIGHT, G_LUMA_WEIGHT, GrayConversion, R_LUMA_WEIGHT, convert_to_gray, gray_value,
};
