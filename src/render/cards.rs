use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use super::stars::{clamp_rating, rating_to_stars};
use crate::constants::messages::EMPTY_CATALOG;
use crate::models::Movie;
use crate::services::CatalogView;

#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 movie".to_string()
    } else {
        format!("{count} movies")
    }
}

/// A single movie card.
#[must_use]
pub fn render_card(movie: &Movie) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"movie-card\">\n");

    let _ = writeln!(
        html,
        "  <h3 class=\"movie-title\">{}</h3>",
        encode_text(&movie.title)
    );
    let _ = writeln!(
        html,
        "  <div class=\"movie-meta\"><span class=\"movie-year\">{}</span> <span class=\"movie-genre\">{}</span></div>",
        movie.year,
        encode_text(&movie.genre)
    );
    let _ = writeln!(
        html,
        "  <p class=\"movie-director\">{}</p>",
        encode_text(movie.director_or_unknown())
    );

    if let Some(rating) = movie.rating.map(clamp_rating) {
        let stars = rating_to_stars(rating);
        let _ = writeln!(
            html,
            "  <div class=\"movie-rating\" title=\"{}\"><span class=\"stars\">{}</span> <span class=\"rating-value\">{}/10</span></div>",
            encode_double_quoted_attribute(&stars.to_string()),
            stars.symbols(),
            rating
        );
    }

    if let Some(description) = movie.description() {
        let _ = writeln!(
            html,
            "  <p class=\"movie-description\">{}</p>",
            encode_text(description)
        );
    }

    html.push_str("</article>\n");
    html
}

/// The grid area: loading placeholder, error, empty state, or the cards.
#[must_use]
pub fn render_grid(view: &CatalogView) -> String {
    match view {
        CatalogView::Loading => {
            "<div id=\"loading\" class=\"loading\">Loading movies...</div>\n".to_string()
        }
        CatalogView::Failed => {
            "<div id=\"load-error\" class=\"empty-state\">Could not load movies. Check the backend connection and reload.</div>\n"
                .to_string()
        }
        CatalogView::Loaded(movies) if movies.is_empty() => {
            format!("<div id=\"empty-state\" class=\"empty-state\">{EMPTY_CATALOG}</div>\n")
        }
        CatalogView::Loaded(movies) => {
            let mut html = String::from("<section id=\"movies-grid\" class=\"movies-grid\">\n");
            for movie in movies {
                html.push_str(&render_card(movie));
            }
            html.push_str("</section>\n");
            html
        }
    }
}
