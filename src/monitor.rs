use crate::app_context::AppContext;
use nullnet_liberror::Error;

/// Runs one offline sweep: devices silent for longer than the ping timeout go offline.
pub fn check_offline(ctx: &AppContext) -> Result<Vec<String>, Error> {
    let offline = ctx.devices.mark_offline(ctx.config.ping_timeout())?;
    if !offline.is_empty() {
        log::info!(
            "{} device(s) marked offline: {}",
            offline.len(),
            offline.join(", ")
        );
    }
    Ok(offline)
}

pub async fn monitor_devices(ctx: AppContext) {
    let mut interval = tokio::time::interval(ctx.config.offline_check_interval());
    log::info!(
        "Offline monitor started (timeout {}s, every {}s)",
        ctx.config.ping_timeout_sec,
        ctx.config.offline_check_interval().as_secs()
    );

    loop {
        interval.tick().await;

        check_offline(&ctx).unwrap_or_default();

        let purged = ctx.sessions.purge_expired().await;
        if purged > 0 {
            log::debug!("Purged {purged} expired session(s)");
        }
    }
}
