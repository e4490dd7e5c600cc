use serde::{Deserialize, Serialize};

use crate::api::authenticator_responses::AuthenticatorAttestationResponse;
use crate::api::supporting_data_structures::PublicKeyCredentialType;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub response: AuthenticatorAttestationResponse,
    pub r#type: PublicKeyCredentialType,
}

impl PublicKeyCredential {
    pub async fn generate(
        id: String,
        raw_id: Vec<u8>,
        response: AuthenticatorAttestationResponse,
    ) -> PublicKeyCredential {
        PublicKeyCredential {
            id,
            raw_id,
            response,
            r#type: PublicKeyCredentialType::PublicKey,
        }
    }
}
