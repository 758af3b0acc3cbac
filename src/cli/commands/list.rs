//! List movies command handler

use crate::config::Config;
use crate::render::count_label;
use crate::render::terminal::format_movie;
use crate::services::{CatalogView, ReloadOutcome};
use crate::web::create_app_state;

pub async fn cmd_list_movies(config: &Config) -> anyhow::Result<()> {
    let state = create_app_state(config.clone())?;

    if state.catalog.reload().await == ReloadOutcome::Failed {
        anyhow::bail!("Could not load movies from {}", config.backend.base_url);
    }

    let view = state.catalog.snapshot().await;
    let movies = match &view {
        CatalogView::Loaded(movies) => movies,
        CatalogView::Loading | CatalogView::Failed => return Ok(()),
    };

    if movies.is_empty() {
        println!("No movies yet.");
        println!();
        println!("Add one with: marquee add --title \"Heat\" --year 1995 --genre Crime");
        return Ok(());
    }

    println!("Movies ({})", count_label(movies.len()));
    println!("{:-<60}", "");

    for movie in movies {
        println!("{}", format_movie(movie));
        println!();
    }

    Ok(())
}
