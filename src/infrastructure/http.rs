//! HTTP Reachability Probe
//!
//! Blocking GET with a hard deadline, backed by `ureq`.

use std::time::Duration;

use crate::domain::ports::{HttpProbe, TransportError};

/// HTTP probe using a short-lived `ureq` agent per request
pub struct UreqProbe;

impl HttpProbe for UreqProbe {
    fn get(&self, url: &str, timeout: Duration) -> Result<u16, TransportError> {
        // Non-2xx statuses are data here, not errors; the caller decides.
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();

        let response = agent
            .get(url)
            .call()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
