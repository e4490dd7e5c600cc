use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CeremonyError {
    pub error: CeremonyErrorType,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CeremonyErrorType {
    UnsupportedEnvironment,
    NotAllowedError,
    NotSupportedError,
    SecurityError,
    AbortError,
    EmptyResult,
    OtherError(String),
}

impl std::fmt::Display for CeremonyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            CeremonyErrorType::UnsupportedEnvironment => {
                write!(f, "this environment does not support the credential API")
            }
            CeremonyErrorType::NotAllowedError => write!(f, "cancelled by the user"),
            CeremonyErrorType::NotSupportedError => write!(f, "this feature is not supported"),
            CeremonyErrorType::SecurityError => write!(f, "a security error occurred"),
            CeremonyErrorType::AbortError => write!(f, "the operation timed out"),
            CeremonyErrorType::EmptyResult => write!(f, "creation was cancelled"),
            CeremonyErrorType::OtherError(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CeremonyError {}
