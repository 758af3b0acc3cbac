//! Add movie command handler

use anyhow::Context;

use crate::config::Config;
use crate::render::count_label;
use crate::services::Severity;
use crate::validation::MovieForm;
use crate::web::create_app_state;

pub async fn cmd_add_movie(config: &Config, form: MovieForm) -> anyhow::Result<()> {
    let state = create_app_state(config.clone())?;

    let result = state.catalog.submit(&form).await;

    if let Some(notification) = state.notifier.current() {
        let marker = match notification.severity {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "!",
            Severity::Info => "•",
        };
        println!("{marker} {}", notification.message);
    }

    result.context("Movie was not added")?;

    println!(
        "  Catalog now holds {}",
        count_label(state.catalog.snapshot().await.movies().len())
    );

    Ok(())
}
