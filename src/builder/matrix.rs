//! Matrix construction (4.8), data placement (4.9) and masking (4.10).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::common::iter::zigzag_coords;
use crate::common::mask::{penalty, MaskPattern};
use crate::common::metadata::{
    format_info_coords_main, format_info_coords_side, generate_format_info, version_info_coords,
    Color, ECLevel, Version,
};

#[derive(Debug, Clone)]
pub struct Matrix {
    n: usize,
    version: Version,
    cells: Vec<Color>,
    function: Vec<bool>,
}

impl Matrix {
    fn idx(&self, r: i32, c: i32) -> usize {
        debug_assert!(r >= 0 && c >= 0 && (r as usize) < self.n && (c as usize) < self.n);
        r as usize * self.n + c as usize
    }

    pub fn get(&self, r: i32, c: i32) -> Color {
        self.cells[self.idx(r, c)]
    }

    pub fn is_function(&self, r: i32, c: i32) -> bool {
        self.function[self.idx(r, c)]
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Row-major iterator over the final module grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.n)
    }

    fn set(&mut self, r: i32, c: i32, color: Color) {
        let i = self.idx(r, c);
        self.cells[i] = color;
    }

    fn mark_function(&mut self, r: i32, c: i32, color: Color) {
        let i = self.idx(r, c);
        self.cells[i] = color;
        self.function[i] = true;
    }

    fn draw_finder_and_separator(&mut self, r0: i32, c0: i32) {
        for dr in -1..=7 {
            for dc in -1..=7 {
                let r = r0 + dr;
                let c = c0 + dc;
                if r < 0 || c < 0 || r as usize >= self.n || c as usize >= self.n {
                    continue;
                }
                if dr == -1 || dr == 7 || dc == -1 || dc == 7 {
                    self.mark_function(r, c, Color::Light);
                } else {
                    let ring = dr == 0 || dr == 6 || dc == 0 || dc == 6;
                    let center = (2..=4).contains(&dr) && (2..=4).contains(&dc);
                    self.mark_function(r, c, Color::from(ring || center));
                }
            }
        }
    }

    fn draw_timing_patterns(&mut self) {
        let n = self.n as i32;
        for i in 8..=(n - 9) {
            let dark = i % 2 == 0;
            if !self.is_function(6, i) {
                self.mark_function(6, i, Color::from(dark));
            }
            if !self.is_function(i, 6) {
                self.mark_function(i, 6, Color::from(dark));
            }
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let n = self.n as i32;
        let centers = self.version.alignment_pattern().to_vec();
        for &r in &centers {
            for &c in &centers {
                let overlaps_finder =
                    (r <= 8 && c <= 8) || (r <= 8 && c >= n - 8) || (r >= n - 8 && c <= 8);
                if overlaps_finder {
                    continue;
                }
                for dr in -2..=2 {
                    for dc in -2..=2 {
                        let dark = dr.abs() == 2 || dc.abs() == 2 || (dr == 0 && dc == 0);
                        self.mark_function(r + dr, c + dc, Color::from(dark));
                    }
                }
            }
        }
    }

    fn draw_dark_module(&mut self) {
        let r = 4 * self.version.0 as i32 + 9;
        self.mark_function(r, 8, Color::Dark);
    }

    fn reserve_format_info(&mut self) {
        let n = self.n as i32;
        for &(r, c) in format_info_coords_main().iter().chain(format_info_coords_side(n).iter()) {
            self.mark_function(r, c, Color::Light);
        }
    }

    fn reserve_version_info(&mut self) {
        if self.version.0 < 7 {
            return;
        }
        let n = self.n as i32;
        for &(bl, tr) in version_info_coords(n).iter() {
            self.mark_function(bl.0, bl.1, Color::Light);
            self.mark_function(tr.0, tr.1, Color::Light);
        }
    }

    /// Builds the `n x n` skeleton: finder/separator, timing, alignment, dark
    /// module, and format/version reservations, all function-marked.
    pub fn skeleton(version: Version) -> Self {
        let n = version.width();
        let mut matrix = Self { n, version, cells: vec![Color::Light; n * n], function: vec![false; n * n] };

        let n_i = n as i32;
        matrix.draw_finder_and_separator(0, 0);
        matrix.draw_finder_and_separator(0, n_i - 7);
        matrix.draw_finder_and_separator(n_i - 7, 0);
        matrix.draw_timing_patterns();
        matrix.draw_alignment_patterns();
        matrix.draw_dark_module();
        matrix.reserve_format_info();
        matrix.reserve_version_info();

        matrix
    }

    /// Writes the interleaved data bit stream into the non-function cells in
    /// zig-zag order. Unwritten trailing cells remain `Light`.
    pub fn place_data(&mut self, bits: &[bool]) {
        let mut bits = bits.iter();
        for (r, c) in zigzag_coords(self.n) {
            if self.is_function(r, c) {
                continue;
            }
            match bits.next() {
                Some(&bit) => self.set(r, c, Color::from(bit)),
                None => break,
            }
        }
    }

    fn apply_mask(&mut self, mask: MaskPattern) {
        let n = self.n as i32;
        for r in 0..n {
            for c in 0..n {
                if !self.is_function(r, c) && mask.invert(r, c) {
                    let i = self.idx(r, c);
                    self.cells[i] = !self.cells[i];
                }
            }
        }
    }

    fn draw_format_info(&mut self, ecl: ECLevel, mask: MaskPattern) {
        let info = generate_format_info(ecl, mask);
        let n = self.n as i32;
        let main = format_info_coords_main();
        let side = format_info_coords_side(n);
        for i in 0..15 {
            let bit = (info >> i) & 1 == 1;
            let (r, c) = main[i];
            self.mark_function(r, c, Color::from(bit));
            let (r, c) = side[i];
            self.mark_function(r, c, Color::from(bit));
        }
    }

    fn draw_version_info(&mut self) {
        if self.version.0 < 7 {
            return;
        }
        let info = self.version.info();
        let n = self.n as i32;
        for (i, &(a, b)) in version_info_coords(n).iter().enumerate() {
            let bit = (info >> i) & 1 == 1;
            self.mark_function(a.0, a.1, Color::from(bit));
            self.mark_function(b.0, b.1, Color::from(bit));
        }
    }

    fn penalty_score(&self) -> u32 {
        penalty(self.n, |r, c| self.get(r, c) == Color::Dark)
    }

    fn score_candidate(&self, mask: MaskPattern, ecl: ECLevel) -> (Matrix, u32) {
        let mut candidate = self.clone();
        candidate.apply_mask(mask);
        candidate.draw_format_info(ecl, mask);
        candidate.draw_version_info();
        let score = candidate.penalty_score();
        (candidate, score)
    }

    /// Applies all 8 masks to a copy of `self` (already data-placed), scores
    /// each, and returns the winning masked matrix and its mask index. Ties
    /// go to the lowest mask index regardless of scoring order, since the
    /// final pick breaks ties on `(score, mask index)`.
    #[cfg(not(feature = "parallel"))]
    pub fn mask_and_select(&self, ecl: ECLevel) -> (Matrix, MaskPattern) {
        let scored: Vec<(Matrix, u32)> =
            MaskPattern::ALL.into_iter().map(|m| self.score_candidate(m, ecl)).collect();
        Self::pick_best(scored)
    }

    #[cfg(feature = "parallel")]
    pub fn mask_and_select(&self, ecl: ECLevel) -> (Matrix, MaskPattern) {
        let scored: Vec<(Matrix, u32)> =
            MaskPattern::ALL.into_par_iter().map(|m| self.score_candidate(m, ecl)).collect();
        Self::pick_best(scored)
    }

    fn pick_best(scored: Vec<(Matrix, u32)>) -> (Matrix, MaskPattern) {
        let (matrix, mask, _) = scored
            .into_iter()
            .enumerate()
            .min_by_key(|(i, (_, score))| (*score, *i))
            .map(|(i, (matrix, score))| (matrix, MaskPattern::ALL[i], score))
            .expect("mask list is non-empty");
        (matrix, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_size() {
        for v in 1..=40u8 {
            let m = Matrix::skeleton(Version(v));
            assert_eq!(m.size(), 4 * v as usize + 17);
        }
    }

    #[test]
    fn test_finder_pattern_corners_dark() {
        let m = Matrix::skeleton(Version(1));
        assert_eq!(m.get(0, 0), Color::Dark);
        assert_eq!(m.get(3, 3), Color::Dark);
        assert_eq!(m.get(1, 1), Color::Light);
    }

    #[test]
    fn test_dark_module_position() {
        let m = Matrix::skeleton(Version(1));
        assert_eq!(m.get(4 * 1 + 9, 8), Color::Dark);
        assert!(m.is_function(4 * 1 + 9, 8));
    }

    #[test]
    fn test_timing_pattern_alternates() {
        let m = Matrix::skeleton(Version(1));
        assert_eq!(m.get(6, 8), Color::Dark);
        assert_eq!(m.get(6, 9), Color::Light);
        assert_eq!(m.get(8, 6), Color::Dark);
    }

    #[test]
    fn test_version_info_not_reserved_below_v7() {
        let m = Matrix::skeleton(Version(6));
        // version info coords would sit inside the finder/separator at low versions;
        // just confirm no panic and reservation is skipped.
        assert!(m.version.0 < 7);
    }

    #[test]
    fn test_data_placement_skips_function_cells() {
        let mut m = Matrix::skeleton(Version(1));
        let bits = vec![true; m.size() * m.size()];
        m.place_data(&bits);
        // finder corner must remain untouched by data placement
        assert_eq!(m.get(0, 0), Color::Dark);
    }
}
