//! Backend status command handler

use crate::config::Config;
use crate::services::Reachability;
use crate::web::create_app_state;

pub async fn cmd_status(config: &Config) -> anyhow::Result<()> {
    let state = create_app_state(config.clone())?;

    println!("Checking {} ...", config.backend.base_url);
    let status = state.status.check(state.backend().as_ref()).await;

    match status {
        Reachability::Online => println!("🟢 Backend is online"),
        Reachability::Offline => println!("🔴 Backend is offline"),
        Reachability::Checking => println!("… Backend status unknown"),
    }

    Ok(())
}
