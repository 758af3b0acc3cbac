use std::fmt;

pub const STAR_COUNT: u32 = 5;
pub const MAX_RATING: i32 = 10;

const FULL: char = '★';
const HALF: char = '⯪';
const EMPTY: char = '☆';

/// A 0-10 rating folded onto five star symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub rating: i32,
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

/// Pulls a backend rating onto the 0-10 scale before it is displayed.
#[must_use]
pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(0, MAX_RATING)
}

/// Maps a rating on the 0-10 scale to full, half and empty symbols.
///
/// Callers clamp with [`clamp_rating`] first. The rating itself is kept as
/// given, but the symbols never exceed five: anything above 10 yields five
/// full symbols, anything below zero yields five empty ones.
#[must_use]
pub fn rating_to_stars(rating: i32) -> StarRating {
    let full = u32::try_from(rating / 2).unwrap_or(0).min(STAR_COUNT);
    let half = u32::from(rating % 2 >= 1 && full < STAR_COUNT);
    let empty = STAR_COUNT.saturating_sub(full + half);

    StarRating {
        rating,
        full,
        half,
        empty,
    }
}

impl StarRating {
    #[must_use]
    pub fn symbols(&self) -> String {
        std::iter::repeat_n(FULL, self.full as usize)
            .chain(std::iter::repeat_n(HALF, self.half as usize))
            .chain(std::iter::repeat_n(EMPTY, self.empty as usize))
            .collect()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/10", self.symbols(), self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_count_is_always_five() {
        for r in 0..=10 {
            let stars = rating_to_stars(r);
            assert_eq!(stars.full + stars.half + stars.empty, 5, "rating {r}");
        }
    }

    #[test]
    fn test_known_ratings() {
        let zero = rating_to_stars(0);
        assert_eq!((zero.full, zero.half, zero.empty), (0, 0, 5));

        let five = rating_to_stars(5);
        assert_eq!((five.full, five.half, five.empty), (2, 1, 2));

        let ten = rating_to_stars(10);
        assert_eq!((ten.full, ten.half, ten.empty), (5, 0, 0));
    }

    #[test]
    fn test_out_of_range_stays_five_symbols() {
        let high = rating_to_stars(13);
        assert_eq!((high.full, high.half, high.empty), (5, 0, 0));

        let huge = rating_to_stars(2_000_000_000);
        assert_eq!(huge.symbols().chars().count(), 5);

        let low = rating_to_stars(-1);
        assert_eq!((low.full, low.half, low.empty), (0, 0, 5));

        let lower = rating_to_stars(i32::MIN);
        assert_eq!(lower.symbols(), "☆☆☆☆☆");
    }

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(-4), 0);
        assert_eq!(clamp_rating(7), 7);
        assert_eq!(clamp_rating(2_000_000), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(rating_to_stars(7).to_string(), "★★★⯪☆ 7/10");
        assert_eq!(rating_to_stars(0).symbols(), "☆☆☆☆☆");
    }
}
