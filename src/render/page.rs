use html_escape::encode_text;
use std::fmt::Write;

use super::cards::{count_label, render_grid};
use crate::constants::form::{DEFAULT_RATING, EARLIEST_YEAR};
use crate::services::{CatalogView, Notification, Reachability};
use crate::validation::latest_allowed_year;

pub struct PageContext<'a> {
    pub view: &'a CatalogView,
    pub status: Reachability,
    pub notification: Option<&'a Notification>,
    pub current_year: i32,
}

#[must_use]
pub fn render_status(status: Reachability) -> String {
    format!(
        "<span id=\"status\" class=\"status status-{}\" data-state=\"{}\">{}</span>",
        status.as_str(),
        status.as_str(),
        status.label()
    )
}

#[must_use]
pub fn render_notification(notification: Option<&Notification>) -> String {
    notification.map_or_else(
        || "<div id=\"notification\" class=\"notification hidden\"></div>".to_string(),
        |n| {
            format!(
                "<div id=\"notification\" class=\"notification notification-{}\" role=\"status\">{}</div>",
                n.severity,
                encode_text(&n.message)
            )
        },
    )
}

fn render_form(current_year: i32) -> String {
    format!(
        r#"<form id="movie-form" class="movie-form" method="post" action="/movies">
  <label>Title <input type="text" name="title" required></label>
  <label>Year <input type="number" name="year" min="{min}" max="{max}" required></label>
  <label>Genre <input type="text" name="genre" required></label>
  <label>Director <input type="text" name="director"></label>
  <label>Description <textarea name="description" rows="3"></textarea></label>
  <label>Rating <input type="number" name="rating" min="0" max="10" value="{rating}"></label>
  <button type="submit">Add Movie</button>
</form>
"#,
        min = EARLIEST_YEAR,
        max = latest_allowed_year(current_year),
        rating = DEFAULT_RATING,
    )
}

#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Movie Catalog</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/style.css\">\n\
         <script defer src=\"/assets/app.js\"></script>\n</head>\n<body>\n",
    );

    let _ = writeln!(
        html,
        "<header class=\"app-header\"><h1>Movie Catalog</h1>{}</header>",
        render_status(ctx.status)
    );
    let _ = writeln!(html, "{}", render_notification(ctx.notification));

    html.push_str("<main>\n<section class=\"add-movie\">\n<h2>Add a movie</h2>\n");
    html.push_str(&render_form(ctx.current_year));
    html.push_str("</section>\n<section class=\"catalog\">\n");

    let count = match ctx.view {
        CatalogView::Loaded(movies) => count_label(movies.len()),
        CatalogView::Loading | CatalogView::Failed => String::new(),
    };
    let _ = writeln!(
        html,
        "<div class=\"catalog-header\"><h2>Movies</h2><span id=\"movie-count\">{count}</span>\
         <form method=\"post\" action=\"/reload\"><button type=\"submit\">Reload</button></form></div>"
    );
    html.push_str(&render_grid(ctx.view));
    html.push_str("</section>\n</main>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Severity;

    #[test]
    fn test_page_with_empty_catalog() {
        let view = CatalogView::Loaded(vec![]);
        let html = render_page(&PageContext {
            view: &view,
            status: Reachability::Online,
            notification: None,
            current_year: 2026,
        });

        assert!(html.contains("<span id=\"movie-count\">0 movies</span>"));
        assert!(html.contains("id=\"empty-state\""));
        assert!(html.contains("status-online"));
        assert!(html.contains("max=\"2028\""));
        assert!(html.contains("value=\"5\""));
    }

    #[test]
    fn test_notification_banner() {
        let n = Notification {
            id: 1,
            message: "Failed to load movies".to_string(),
            severity: Severity::Error,
        };
        let html = render_notification(Some(&n));
        assert!(html.contains("notification-error"));
        assert!(html.contains("Failed to load movies"));

        assert!(render_notification(None).contains("hidden"));
    }

    #[test]
    fn test_status_checking() {
        let html = render_status(Reachability::Checking);
        assert!(html.contains("data-state=\"checking\""));
        assert!(html.contains("Checking..."));
    }
}
