use crate::board_location::Coordinate;

/// Diagonal, any distance.
#[inline]
pub fn bishop_pattern(from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    from != to && d_file.unsigned_abs() == d_rank.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::bishop_pattern;
    use crate::board_location::Coordinate;

    #[test]
    fn bishop_moves_diagonally() {
        let c1 = Coordinate::new(2, 0);
        assert!(bishop_pattern(c1, Coordinate::new(7, 5)));
        assert!(bishop_pattern(c1, Coordinate::new(0, 2)));
        assert!(!bishop_pattern(c1, Coordinate::new(2, 3)));
        assert!(!bishop_pattern(c1, Coordinate::new(3, 2)));
    }

    #[test]
    fn bishop_reach_from_centre() {
        let e4 = Coordinate::new(4, 3);
        assert_eq!(Coordinate::all().filter(|to| bishop_pattern(e4, *to)).count(), 13);
    }
}
