//! Backend discovery
//!
//! Candidates are probed one at a time in declared order. A candidate is only
//! probed after the previous one failed or ran out of time, and the first one
//! that answers wins.

use std::time::Duration;

use skybook_core::{DiscoveryResult, NetworkOutcome};
use tracing::{debug, info};
use url::Url;

use crate::transport::Transport;

/// Probe `candidates` in order and return the first reachable one
///
/// Every probe is bounded by `timeout`, even if the transport itself does not
/// honor it. Failures are never returned; they only move discovery on to the
/// next candidate.
pub async fn first_reachable(
    transport: &dyn Transport,
    candidates: &[Url],
    timeout: Duration,
) -> DiscoveryResult {
    for base in candidates {
        debug!(candidate = %base, "Probing candidate");

        match tokio::time::timeout(timeout, transport.probe(base, timeout)).await {
            Ok(NetworkOutcome::Ok(())) => {
                info!(candidate = %base, "Backend reachable");
                return DiscoveryResult::Connected {
                    base_address: base.clone(),
                };
            }
            Ok(NetworkOutcome::Timeout) | Err(_) => {
                debug!(
                    candidate = %base,
                    timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    "Probe timed out"
                );
            }
            Ok(NetworkOutcome::Error(e)) => {
                debug!(candidate = %base, error = %e, "Candidate unreachable");
            }
        }
    }

    info!(candidates = candidates.len(), "No backend reachable");
    DiscoveryResult::Unavailable
}
