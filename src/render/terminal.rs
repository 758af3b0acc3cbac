use super::stars::{clamp_rating, rating_to_stars};
use crate::models::Movie;

/// Plain-text card for `marquee list`.
#[must_use]
pub fn format_movie(movie: &Movie) -> String {
    let mut lines = vec![
        format!("{} ({})", movie.title, movie.year),
        format!("  {} | {}", movie.genre, movie.director_or_unknown()),
    ];

    if let Some(rating) = movie.rating {
        lines.push(format!("  {}", rating_to_stars(clamp_rating(rating))));
    }

    if let Some(description) = movie.description() {
        lines.push(format!("  {description}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_movie() {
        let movie = Movie {
            id: None,
            title: "Heat".to_string(),
            year: 1995,
            genre: "Crime".to_string(),
            director: Some("Michael Mann".to_string()),
            description: None,
            rating: Some(10),
        };

        assert_eq!(
            format_movie(&movie),
            "Heat (1995)\n  Crime | Michael Mann\n  ★★★★★ 10/10"
        );
    }

    #[test]
    fn test_format_movie_clamps_rating() {
        let movie = Movie {
            id: None,
            title: "Heat".to_string(),
            year: 1995,
            genre: "Crime".to_string(),
            director: None,
            description: None,
            rating: Some(-3),
        };

        assert!(format_movie(&movie).ends_with("☆☆☆☆☆ 0/10"));
    }
}
