use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::{broadcast, mpsc};
use uuid::Uuid;

use crate::api::authenticator_responses::AuthenticatorAttestationResponse;
use crate::api::credential_creation_options::CredentialCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::api::supporting_data_structures::CollectedClientData;
use crate::client::{IncomingData, OutgoingData};
use crate::error::{CeremonyError, CeremonyErrorType};

pub const UP: u8 = 0;
pub const UV: u8 = 2;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AttestationObject {
    #[serde(rename = "authData")]
    pub authenticator_data: Vec<u8>,
    #[serde(rename = "fmt")]
    pub format: String,
    #[serde(rename = "attStmt")]
    pub attestation_statement: NoneAttestationStatementSyntax,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NoneAttestationStatementSyntax {}

pub struct Authenticator {
    outgoing_data: mpsc::Receiver<OutgoingData>,
    incoming_data: broadcast::Sender<IncomingData>,
}

impl Authenticator {
    pub async fn init(
        outgoing_data: mpsc::Receiver<OutgoingData>,
        incoming_data: broadcast::Sender<IncomingData>,
    ) -> Authenticator {
        Authenticator {
            outgoing_data,
            incoming_data,
        }
    }

    pub async fn run(&mut self) -> Result<(), CeremonyError> {
        while let Some(outgoing_data) = self.outgoing_data.recv().await {
            match outgoing_data {
                OutgoingData::CredentialCreationOptions(options) => {
                    let incoming_data = match make_credential(&options).await {
                        Ok(credential) => IncomingData::PublicKeyCredential(Some(credential)),
                        Err(error) => IncomingData::Error(error),
                    };

                    if let Err(error) = self.incoming_data.send(incoming_data) {
                        println!("authenticator -> {:?}", error);
                    }
                }
            }
        }

        Ok(())
    }
}

pub async fn make_credential(
    options: &CredentialCreationOptions,
) -> Result<PublicKeyCredential, CeremonyError> {
    let collected_client_data = CollectedClientData {
        r#type: String::from("webauthn.create"),
        challenge: URL_SAFE_NO_PAD.encode(&options.public_key.challenge),
        origin: format!("https://{}", options.public_key.rp.id),
        cross_origin: false,
    };

    let client_data_json = match serde_json::to_vec(&collected_client_data) {
        Ok(json) => json,
        Err(error) => {
            println!("client data serialization -> {:?}", error);

            return Err(CeremonyError {
                error: CeremonyErrorType::OtherError(error.to_string()),
            });
        }
    };

    let attestation_object = generate_attestation_object(&options.public_key.rp.id).await?;

    let response = AuthenticatorAttestationResponse {
        client_data_json,
        attestation_object,
    };

    let raw_id = Uuid::new_v4().into_bytes().to_vec();
    let id = URL_SAFE_NO_PAD.encode(&raw_id);

    Ok(PublicKeyCredential::generate(id, raw_id, response).await)
}

async fn generate_attestation_object(rp_id: &str) -> Result<Vec<u8>, CeremonyError> {
    let mut digest = Sha256::new();

    digest.update(rp_id.as_bytes());

    let mut authenticator_data = Vec::with_capacity(37);

    authenticator_data.extend_from_slice(&digest.finalize());
    authenticator_data.push(1 << UP | 1 << UV);
    authenticator_data.extend_from_slice(&0_u32.to_be_bytes());

    let attestation_object = AttestationObject {
        authenticator_data,
        format: String::from("none"),
        attestation_statement: NoneAttestationStatementSyntax {},
    };

    let mut cbor = Vec::with_capacity(100);

    match ciborium::ser::into_writer(&attestation_object, &mut cbor) {
        Ok(()) => {
            cbor.shrink_to_fit();

            Ok(cbor)
        }
        Err(error) => {
            println!("attestation object serialization -> {:?}", error);

            Err(CeremonyError {
                error: CeremonyErrorType::OtherError(error.to_string()),
            })
        }
    }
}
