//! Zig-zag coordinate generator for data placement (4.9).

/// Generates, in placement order, the `(row, col)` coordinate stream for an
/// `n x n` matrix: right-to-left column pairs, alternating scan direction,
/// skipping the vertical timing column (6) by collapsing its pair to (5, 4).
pub fn zigzag_coords(n: usize) -> Vec<(i32, i32)> {
    let n = n as i32;
    let mut coords = Vec::with_capacity((n * n) as usize);

    let mut col = n - 1;
    let mut upward = true;
    while col > 0 {
        if col == 6 {
            col = 5;
        }

        let rows: Box<dyn Iterator<Item = i32>> =
            if upward { Box::new((0..n).rev()) } else { Box::new(0..n) };

        for r in rows {
            coords.push((r, col));
            coords.push((r, col - 1));
        }

        col -= 2;
        upward = !upward;
    }

    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_coords_length() {
        let n = 21;
        let coords = zigzag_coords(n);
        // every column except 6 is visited once per row
        assert_eq!(coords.len(), (n - 1) * n);
    }

    #[test]
    fn test_zigzag_coords_skips_column_6() {
        let coords = zigzag_coords(21);
        assert!(coords.iter().all(|&(_, c)| c != 6));
    }

    #[test]
    fn test_zigzag_coords_first_pair_upward() {
        let coords = zigzag_coords(21);
        assert_eq!(coords[0], (20, 20));
        assert_eq!(coords[1], (20, 19));
        assert_eq!(coords[2], (19, 20));
    }

    #[test]
    fn test_zigzag_coords_alternates_direction() {
        let coords = zigzag_coords(21);
        // first column pair (20, 19) scans upward: last row visited is 0
        let first_pair: Vec<_> = coords.iter().take(42).collect();
        assert_eq!(*first_pair[40], (0, 20));
        // second column pair (18, 17) scans downward: first row visited is 0
        assert_eq!(coords[42], (0, 18));
    }
}
