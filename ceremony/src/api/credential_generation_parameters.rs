use serde::{Deserialize, Serialize};

use crate::api::supporting_data_structures::{COSEAlgorithmIdentifier, PublicKeyCredentialType};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialParameters {
    pub r#type: PublicKeyCredentialType,
    pub alg: COSEAlgorithmIdentifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json() -> Result<(), Box<dyn std::error::Error>> {
        let test_parameters = PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg: -7,
        };

        let test_json = serde_json::to_string(&test_parameters)?;

        assert_eq!(test_json, r#"{"type":"public-key","alg":-7}"#);

        Ok(())
    }
}
