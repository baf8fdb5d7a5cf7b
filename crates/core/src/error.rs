#[derive(Debug)]
pub struct MprovError {
    pub message: String,
}

impl std::fmt::Display for MprovError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MprovError: {}", self.message)
    }
}

impl std::error::Error for MprovError {}

impl From<String> for MprovError {
    fn from(message: String) -> Self {
        MprovError { message }
    }
}

impl From<&str> for MprovError {
    fn from(message: &str) -> Self {
        MprovError { message: message.to_string() }
    }
}
