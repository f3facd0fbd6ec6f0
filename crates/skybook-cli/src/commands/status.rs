//! Status command - show connectivity and optionally re-probe

use anyhow::Result;
use skybook_gateway::Gateway;

use crate::output::OutputContext;

/// Show connectivity state, re-running discovery first when `retry` is set
pub async fn status(gateway: &Gateway, retry: bool, ctx: &OutputContext) -> Result<()> {
    if retry {
        let result = gateway.retry().await;
        if result.is_success() {
            ctx.success("Backend reachable");
        } else {
            ctx.info("No backend reachable, staying in demo mode");
        }
    }

    let state = gateway.status();
    let candidates = gateway
        .candidates()
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let pairs = vec![
        ("Mode", state.mode.to_string()),
        ("Reachable", state.reachable.to_string()),
        (
            "Active URL",
            state
                .active_base_address
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Candidates", candidates),
        ("Message", state.to_string()),
    ];

    ctx.print_kv(&pairs);
    Ok(())
}
