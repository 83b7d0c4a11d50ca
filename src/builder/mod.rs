//! Orchestration (4.11): mode detection through masking, wired end to end.

pub mod ec;
pub mod interleave;
pub mod matrix;

use crate::common::codec::{assemble, detect, select_version};
use crate::common::error::QrResult;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{ECLevel, Version};
use crate::render;
use matrix::Matrix;

/// A fully built QR Code symbol: the module matrix plus the version, error
/// correction level and mask it was built with.
#[derive(Debug, Clone)]
pub struct QrCode {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    matrix: Matrix,
}

impl QrCode {
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn to_printable(&self) -> String {
        render::to_printable(self)
    }

    pub fn to_svg(&self) -> String {
        render::to_svg(self)
    }
}

/// Fluent builder over the encoder pipeline (6).
pub struct QrCodeBuilder<'a> {
    value: &'a str,
    ec_level: ECLevel,
    min_version: u8,
}

impl<'a> QrCodeBuilder<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value, ec_level: ECLevel::M, min_version: Version::MIN }
    }

    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn min_version(mut self, min_version: u8) -> Self {
        self.min_version = min_version;
        self
    }

    pub fn build(self) -> QrResult<QrCode> {
        println!("qrweave: encoding {} byte(s) at EC level {:?}", self.value.len(), self.ec_level);

        let (mode, char_count) = detect(self.value)?;
        println!("qrweave: detected mode {mode:?} ({char_count} characters)");

        let version = select_version(mode, char_count, self.ec_level, self.min_version)?;
        println!("qrweave: selected version {}", version.0);

        let data = assemble(self.value, mode, char_count, version, self.ec_level)?;
        let (data_blocks, ec_blocks) = ec::ecc(&data, version, self.ec_level);
        println!("qrweave: split into {} data block(s), {} EC block(s)", data_blocks.len(), ec_blocks.len());

        let stream = interleave::interleave_into_stream(&data_blocks, &ec_blocks, version);

        let mut placed = Matrix::skeleton(version);
        placed.place_data(stream.bits());

        let (matrix, mask) = placed.mask_and_select(self.ec_level);
        println!("qrweave: selected mask pattern {}", mask.0);

        Ok(QrCode { version, ec_level: self.ec_level, mask, matrix })
    }
}
