//! QR Code (ISO/IEC 18004 Model 2) symbol encoder.
//!
//! Builds a complete QR Code matrix from a string value: mode detection,
//! version selection, bit-stream assembly, Reed-Solomon error correction,
//! interleaving, matrix construction, data placement and mask selection.
//! Decoding is out of scope.
//!
//! ```
//! use qrweave::QrCodeBuilder;
//!
//! let qr = QrCodeBuilder::new("HELLO WORLD").build().unwrap();
//! println!("{}", qr.to_printable());
//! ```

pub mod builder;
pub(crate) mod common;
pub mod render;

pub use builder::{QrCode, QrCodeBuilder};
pub use common::error::{QrError, QrResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Version};
