//! Mask functions and penalty scoring (4.10).

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaskPattern(pub u8);

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern(0),
        MaskPattern(1),
        MaskPattern(2),
        MaskPattern(3),
        MaskPattern(4),
        MaskPattern(5),
        MaskPattern(6),
        MaskPattern(7),
    ];

    /// Whether the module at `(r, c)` should be flipped under this mask.
    pub fn invert(self, r: i32, c: i32) -> bool {
        match self.0 {
            0 => (r + c) % 2 == 0,
            1 => r % 2 == 0,
            2 => c % 3 == 0,
            3 => (r + c) % 3 == 0,
            4 => (r / 2 + c / 3) % 2 == 0,
            5 => (r * c) % 2 + (r * c) % 3 == 0,
            6 => ((r * c) % 2 + (r * c) % 3) % 2 == 0,
            7 => ((r + c) % 2 + (r * c) % 3) % 2 == 0,
            _ => unreachable!("mask index out of range: {}", self.0),
        }
    }
}

const FINDER_LIKE_A: [bool; 11] = [true, false, true, true, true, false, true, false, false, false, false];
const FINDER_LIKE_B: [bool; 11] = [false, false, false, false, true, false, true, true, true, false, true];

/// Computes the total penalty of an `n x n` matrix given `is_dark(r, c)`.
pub fn penalty(n: usize, is_dark: impl Fn(i32, i32) -> bool) -> u32 {
    let n_i = n as i32;
    let mut total = 0u32;

    // Rule 1: runs, rows then columns.
    for r in 0..n_i {
        total += run_penalty((0..n_i).map(|c| is_dark(r, c)));
    }
    for c in 0..n_i {
        total += run_penalty((0..n_i).map(|r| is_dark(r, c)));
    }

    // Rule 2: 2x2 blocks.
    for r in 0..n_i - 1 {
        for c in 0..n_i - 1 {
            let a = is_dark(r, c);
            if a == is_dark(r, c + 1) && a == is_dark(r + 1, c) && a == is_dark(r + 1, c + 1) {
                total += 3;
            }
        }
    }

    // Rule 3: finder-like patterns, rows then columns.
    for r in 0..n_i {
        let row: Vec<bool> = (0..n_i).map(|c| is_dark(r, c)).collect();
        total += finder_like_penalty(&row);
    }
    for c in 0..n_i {
        let col: Vec<bool> = (0..n_i).map(|r| is_dark(r, c)).collect();
        total += finder_like_penalty(&col);
    }

    // Rule 4: balance.
    let dark = (0..n_i).flat_map(|r| (0..n_i).map(move |c| (r, c))).filter(|&(r, c)| is_dark(r, c)).count();
    total += balance_penalty(dark, n * n);

    total
}

fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut total = 0u32;
    let mut run_len = 0u32;
    let mut current: Option<bool> = None;
    for v in line {
        if Some(v) == current {
            run_len += 1;
        } else {
            if run_len >= 5 {
                total += 3 + (run_len - 5);
            }
            current = Some(v);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        total += 3 + (run_len - 5);
    }
    total
}

fn finder_like_penalty(line: &[bool]) -> u32 {
    if line.len() < 11 {
        return 0;
    }
    let mut total = 0u32;
    for window in line.windows(11) {
        if window == FINDER_LIKE_A || window == FINDER_LIKE_B {
            total += 40;
        }
    }
    total
}

fn balance_penalty(dark: usize, total: usize) -> u32 {
    let p = (100 * dark) / total;
    let a = (p / 5) * 5;
    let b = a + 5;
    let dist = |x: usize| -> i32 { (x as i32 - 50).abs() };
    (10 * dist(a).min(dist(b)) as u32) / 5
}
