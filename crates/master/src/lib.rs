use mprov_core::error::MprovError;
use mprov_core::{ActivationOutcome, SlaveDetails, SlaveRegistry, SlaveRequest};
use serde::{Deserialize, Serialize};

pub const SLAVE_PORT: u16 = 8081;
/// Inclusive
pub const MONGOD_PORT_RANGE_BEGIN: u16 = 18080;
/// Exclusive
pub const MONGOD_PORT_RANGE_END: u16 = 18081;

pub struct Master {
    pub base_url: String,
}

#[derive(Serialize)]
struct CreateSlaveRequest {
    configured_state: String,
    hostname: String,
    slave_port: u16,
    mongod_port_range_begin: u16,
    mongod_port_range_end: u16,
}

impl CreateSlaveRequest {
    /// New slaves always start out disabled; activation is a separate call.
    fn disabled(hostname: &str) -> CreateSlaveRequest {
        CreateSlaveRequest {
            configured_state: "disabled".to_string(),
            hostname: hostname.to_string(),
            slave_port: SLAVE_PORT,
            mongod_port_range_begin: MONGOD_PORT_RANGE_BEGIN,
            mongod_port_range_end: MONGOD_PORT_RANGE_END,
        }
    }
}

#[derive(Deserialize)]
struct CreateSlaveResponse {
    id: u64,
}

#[derive(Serialize)]
struct ActivateSlaveRequest {
    id: u64,
    hostname: String,
    slave_port: u16,
    mongod_port_range_begin: u16,
    mongod_port_range_end: u16,
    persistent_storage: bool,
    configured_state: String,
    configured_state_transitioning: bool,
    risk_group_id: Option<u64>,
}

impl ActivateSlaveRequest {
    fn active(details: &SlaveDetails) -> ActivateSlaveRequest {
        ActivateSlaveRequest {
            id: details.id,
            hostname: details.hostname.clone(),
            slave_port: SLAVE_PORT,
            mongod_port_range_begin: MONGOD_PORT_RANGE_BEGIN,
            mongod_port_range_end: MONGOD_PORT_RANGE_END,
            persistent_storage: false,
            configured_state: "active".to_string(),
            configured_state_transitioning: false,
            risk_group_id: None,
        }
    }
}

impl SlaveRegistry for Master {
    fn create_slave(&self, request: SlaveRequest) -> Result<SlaveDetails, MprovError> {
        let client = reqwest::blocking::Client::new();

        let payload = CreateSlaveRequest::disabled(&request.hostname);

        let url = self.base_url.clone() + "/slaves";

        let response = client.put(url)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MprovError::from(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(MprovError::from(format!("API Error ({}): {}", status, text)));
        }

        let response_text = response.text()
            .map_err(|e| MprovError::from(format!("Failed to read response body: {}", e)))?;

        let created: CreateSlaveResponse = serde_json::from_str(&response_text)
            .map_err(|e| MprovError::from(format!("Failed to parse response: {} - Response body: {}", e, response_text)))?;

        Ok(SlaveDetails {
            id: created.id,
            hostname: request.hostname,
        })
    }

    fn activate_slave(&self, details: &SlaveDetails) -> Result<ActivationOutcome, MprovError> {
        let client = reqwest::blocking::Client::new();

        let payload = ActivateSlaveRequest::active(details);

        let url = format!("{}/slaves/{}", self.base_url, details.id);

        let response = client.post(&url)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MprovError::from(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(MprovError::from(format!("API Error ({}): {}", status, text)));
        }

        Ok(ActivationOutcome {
            status: status.as_u16(),
            body: text,
        })
    }
}

impl Master {
    pub fn new(base_url: String) -> Master {
        Master { base_url }
    }
}
