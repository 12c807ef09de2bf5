use crate::board_location::Coordinate;

/// Along a file or a rank, any distance.
#[inline]
pub fn rook_pattern(from: Coordinate, to: Coordinate) -> bool {
    from != to && (from.file == to.file || from.rank == to.rank)
}

#[cfg(test)]
mod tests {
    use super::rook_pattern;
    use crate::board_location::Coordinate;

    #[test]
    fn rook_moves_straight_only() {
        let d4 = Coordinate::new(3, 3);
        assert!(rook_pattern(d4, Coordinate::new(3, 7)));
        assert!(rook_pattern(d4, Coordinate::new(0, 3)));
        assert!(!rook_pattern(d4, Coordinate::new(4, 4)));
        assert!(!rook_pattern(d4, Coordinate::new(5, 4)));
    }

    #[test]
    fn rook_reach_is_fourteen_squares() {
        let d4 = Coordinate::new(3, 3);
        assert_eq!(Coordinate::all().filter(|to| rook_pattern(d4, *to)).count(), 14);
    }
}
