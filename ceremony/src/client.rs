use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;

use std::time::Duration;

use crate::api::credential_creation_options::CredentialCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::error::{CeremonyError, CeremonyErrorType};

#[derive(Clone, Debug)]
pub enum OutgoingData {
    CredentialCreationOptions(CredentialCreationOptions),
}

#[derive(Clone, Debug)]
pub enum IncomingData {
    PublicKeyCredential(Option<PublicKeyCredential>),
    Error(CeremonyError),
}

pub struct CredentialsContainer {
    outgoing_data: mpsc::Sender<OutgoingData>,
    incoming_data: broadcast::Sender<IncomingData>,
}

impl CredentialsContainer {
    pub async fn init() -> (
        CredentialsContainer,
        mpsc::Receiver<OutgoingData>,
        broadcast::Sender<IncomingData>,
    ) {
        let (outgoing_data, receiver) = mpsc::channel(1);
        let (incoming_data, _) = broadcast::channel(1);

        (
            CredentialsContainer {
                outgoing_data,
                incoming_data: incoming_data.to_owned(),
            },
            receiver,
            incoming_data,
        )
    }

    pub async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<Option<PublicKeyCredential>, CeremonyError> {
        let call_timeout = Duration::from_millis(options.public_key.timeout);
        let mut incoming_data = self.incoming_data.subscribe();

        match self
            .outgoing_data
            .send(OutgoingData::CredentialCreationOptions(options))
            .await
        {
            Ok(()) => match timeout(call_timeout, incoming_data.recv()).await {
                Ok(Ok(IncomingData::PublicKeyCredential(credential))) => Ok(credential),
                Ok(Ok(IncomingData::Error(error))) => Err(error),
                Ok(Err(error)) => {
                    println!("credentials create -> {:?}", error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::OtherError(error.to_string()),
                    })
                }
                Err(timeout_error) => {
                    println!("credentials create -> {:?}", timeout_error);

                    Err(CeremonyError {
                        error: CeremonyErrorType::AbortError,
                    })
                }
            },
            Err(error) => {
                println!("credentials create -> {:?}", error);

                Err(CeremonyError {
                    error: CeremonyErrorType::OtherError(error.to_string()),
                })
            }
        }
    }
}
