//! Summary command - admin dashboard counts

use anyhow::Result;
use skybook_gateway::Gateway;

use crate::output::OutputContext;

/// Show total flights, total bookings and active bookings
pub async fn summary(gateway: &Gateway, ctx: &OutputContext) -> Result<()> {
    let summary = gateway.dashboard_summary().await;

    ctx.print_kv(&[
        ("Total flights", summary.total_flights.to_string()),
        ("Total bookings", summary.total_bookings.to_string()),
        ("Active bookings", summary.active_bookings.to_string()),
    ]);
    Ok(())
}
