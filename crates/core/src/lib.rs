pub mod error;

use error::MprovError;

/// A cluster master that slave nodes can be registered with and activated
/// against. Registration is a two-step exchange: create the slave record in a
/// disabled state, then activate it using the id the master assigned.
pub trait SlaveRegistry {
    fn create_slave(&self, request: SlaveRequest) -> Result<SlaveDetails, MprovError>;
    fn activate_slave(&self, details: &SlaveDetails) -> Result<ActivationOutcome, MprovError>;
}

pub struct SlaveRequest {
    pub hostname: String,
}

#[derive(Debug)]
pub struct SlaveDetails {
    pub id: u64,
    pub hostname: String,
}

/// The master's reply to a successful activation call.
#[derive(Debug)]
pub struct ActivationOutcome {
    pub status: u16,
    pub body: String,
}
