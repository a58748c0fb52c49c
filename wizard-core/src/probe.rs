use async_trait::async_trait;
use std::time::Duration;
use tokio::{net::TcpStream, time::timeout};
use tracing::debug;

/// Seam over the platform connectivity facility.
#[async_trait]
pub trait Connectivity: Send + Sync {
    /// Whether the network currently looks reachable. A failing probe counts
    /// as "not reachable"; this never propagates an error to the caller.
    async fn is_reachable(&self) -> bool;
}

/// Probes reachability with a short TCP dial to a well-known host.
///
/// Stateless: every call dials again, so the answer is never cached.
#[derive(Debug, Clone)]
pub struct NetworkStatusProbe {
    host: String,
    dial_timeout: Duration,
}

impl NetworkStatusProbe {
    pub const DEFAULT_HOST: &'static str = "api.openweathermap.org:443";

    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into(), dial_timeout: Duration::from_secs(3) }
    }
}

impl Default for NetworkStatusProbe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST)
    }
}

#[async_trait]
impl Connectivity for NetworkStatusProbe {
    async fn is_reachable(&self) -> bool {
        match timeout(self.dial_timeout, TcpStream::connect(&self.host)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(host = %self.host, error = %e, "connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(host = %self.host, "connectivity probe timed out");
                false
            }
        }
    }
}

/// Fixed-answer probe for tests and offline development.
#[derive(Debug, Clone, Copy)]
pub struct FixedConnectivity(pub bool);

#[async_trait]
impl Connectivity for FixedConnectivity {
    async fn is_reachable(&self) -> bool {
        self.0
    }
}
