use crate::board_location::Coordinate;

/// Two squares one way and one square the other.
#[inline]
pub fn knight_pattern(from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta(to);
    matches!(
        (d_file.unsigned_abs(), d_rank.unsigned_abs()),
        (2, 1) | (1, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::knight_pattern;
    use crate::board_location::Coordinate;

    #[test]
    fn knight_from_corner_has_two_targets() {
        let a1 = Coordinate::new(0, 0);
        let targets: Vec<Coordinate> = Coordinate::all().filter(|to| knight_pattern(a1, *to)).collect();
        assert_eq!(targets, vec![Coordinate::new(1, 2), Coordinate::new(2, 1)]);
    }

    #[test]
    fn knight_rejects_straight_and_diagonal_steps() {
        let e4 = Coordinate::new(4, 3);
        assert!(!knight_pattern(e4, Coordinate::new(4, 5)));
        assert!(!knight_pattern(e4, Coordinate::new(6, 5)));
        assert!(knight_pattern(e4, Coordinate::new(3, 5)));
    }
}
