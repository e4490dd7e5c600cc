use tokio::time::sleep;

use std::time::Duration;

use crate::api::credential_creation_options::CredentialCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::client::CredentialsContainer;
use crate::display::{CredentialDetails, DisplayChannel, Severity};
use crate::error::{CeremonyError, CeremonyErrorType};

pub const STARTUP_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CeremonyState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

pub struct RegistrationCeremony {
    pub state: CeremonyState,
    startup_delay: Duration,
    credentials: Option<CredentialsContainer>,
    display: DisplayChannel,
}

impl RegistrationCeremony {
    pub async fn init(
        startup_delay: Duration,
        credentials: Option<CredentialsContainer>,
        display: DisplayChannel,
    ) -> RegistrationCeremony {
        RegistrationCeremony {
            state: CeremonyState::Idle,
            startup_delay,
            credentials,
            display,
        }
    }

    pub async fn start(&mut self) {
        if self.state != CeremonyState::Idle {
            return;
        }

        sleep(self.startup_delay).await;

        self.display
            .status(String::from("starting passkey creation..."), Severity::Info)
            .await;

        let outcome = match self.credentials.take() {
            Some(credentials) => {
                self.state = CeremonyState::Requesting;

                create_credential(&credentials).await
            }
            None => Err(CeremonyError {
                error: CeremonyErrorType::UnsupportedEnvironment,
            }),
        };

        match outcome {
            Ok(credential) => {
                self.state = CeremonyState::Succeeded;

                self.display
                    .status(
                        String::from("passkey created successfully"),
                        Severity::Success,
                    )
                    .await;

                let details = CredentialDetails {
                    id: credential.id,
                    r#type: credential.r#type,
                    response_type: String::from(credential.response.type_name().await),
                    attestation_object_size: credential.response.attestation_object.len(),
                    client_data_json_size: credential.response.client_data_json.len(),
                };

                self.display.details(details).await;
            }
            Err(error) => {
                println!("passkey creation -> {:?}", error);

                self.state = CeremonyState::Failed;

                self.display
                    .status(
                        format!("passkey creation failed: {}", error),
                        Severity::Error,
                    )
                    .await;
            }
        }
    }
}

async fn create_credential(
    credentials: &CredentialsContainer,
) -> Result<PublicKeyCredential, CeremonyError> {
    let options = CredentialCreationOptions::generate().await?;

    match serde_json::to_string(&options) {
        Ok(json) => println!("credential creation options -> {}", json),
        Err(error) => println!("credential creation options -> {:?}", error),
    }

    match credentials.create(options).await? {
        Some(credential) => Ok(credential),
        None => Err(CeremonyError {
            error: CeremonyErrorType::EmptyResult,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::authenticator_responses::AuthenticatorAttestationResponse;
    use crate::client::{IncomingData, OutgoingData};
    use crate::display::OutputData;

    #[tokio::test]
    async fn succeeded() -> Result<(), Box<dyn std::error::Error>> {
        let (test_credentials_container, mut test_outgoing_data, test_incoming_data) =
            CredentialsContainer::init().await;
        let (test_display_channel, mut test_output_data) = DisplayChannel::init().await;

        tokio::spawn(async move {
            if let Some(OutgoingData::CredentialCreationOptions(_options)) =
                test_outgoing_data.recv().await
            {
                let test_response = AuthenticatorAttestationResponse {
                    client_data_json: vec![0; 121],
                    attestation_object: vec![0; 37],
                };
                let test_credential = PublicKeyCredential::generate(
                    String::from("abc"),
                    vec![0; 16],
                    test_response,
                )
                .await;

                test_incoming_data
                    .send(IncomingData::PublicKeyCredential(Some(test_credential)))
                    .expect("receiver to settle");
            }
        });

        let mut test_registration_ceremony = RegistrationCeremony::init(
            Duration::ZERO,
            Some(test_credentials_container),
            test_display_channel,
        )
        .await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Idle);

        test_registration_ceremony.start().await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Succeeded);

        let mut test_output = Vec::with_capacity(3);

        while let Ok(test_data) = test_output_data.try_recv() {
            test_output.push(test_data);
        }

        assert_eq!(test_output.len(), 3);

        match &test_output[0] {
            OutputData::Status(test_status) => {
                assert_eq!(test_status.severity, Severity::Info);
            }
            OutputData::Details(_) => panic!("expected a status message"),
        }

        match &test_output[1] {
            OutputData::Status(test_status) => {
                assert_eq!(test_status.text, "passkey created successfully");
                assert_eq!(test_status.severity, Severity::Success);
            }
            OutputData::Details(_) => panic!("expected a status message"),
        }

        match &test_output[2] {
            OutputData::Details(test_details) => {
                let test_json = serde_json::to_string(test_details)?;

                assert!(test_json.contains("abc"));
                assert!(test_json.contains("public-key"));
                assert!(test_json.contains("AuthenticatorAttestationResponse"));
                assert!(test_json.contains("37"));
                assert!(test_json.contains("121"));
            }
            OutputData::Status(_) => panic!("expected a details report"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn failed_not_allowed() -> Result<(), Box<dyn std::error::Error>> {
        let (test_credentials_container, mut test_outgoing_data, test_incoming_data) =
            CredentialsContainer::init().await;
        let (test_display_channel, mut test_output_data) = DisplayChannel::init().await;

        tokio::spawn(async move {
            if let Some(OutgoingData::CredentialCreationOptions(_options)) =
                test_outgoing_data.recv().await
            {
                test_incoming_data
                    .send(IncomingData::Error(CeremonyError {
                        error: CeremonyErrorType::NotAllowedError,
                    }))
                    .expect("receiver to settle");
            }
        });

        let mut test_registration_ceremony = RegistrationCeremony::init(
            Duration::ZERO,
            Some(test_credentials_container),
            test_display_channel,
        )
        .await;

        test_registration_ceremony.start().await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Failed);

        let mut test_last_status = None;

        while let Ok(test_data) = test_output_data.try_recv() {
            if let OutputData::Status(test_status) = test_data {
                test_last_status = Some(test_status);
            }
        }

        let test_status = test_last_status.expect("a status message");

        assert_eq!(test_status.severity, Severity::Error);
        assert!(test_status.text.contains("passkey creation failed"));
        assert!(test_status.text.contains("cancelled by the user"));

        Ok(())
    }

    #[tokio::test]
    async fn failed_empty_result() -> Result<(), Box<dyn std::error::Error>> {
        let (test_credentials_container, mut test_outgoing_data, test_incoming_data) =
            CredentialsContainer::init().await;
        let (test_display_channel, mut test_output_data) = DisplayChannel::init().await;

        tokio::spawn(async move {
            if let Some(OutgoingData::CredentialCreationOptions(_options)) =
                test_outgoing_data.recv().await
            {
                test_incoming_data
                    .send(IncomingData::PublicKeyCredential(None))
                    .expect("receiver to settle");
            }
        });

        let mut test_registration_ceremony = RegistrationCeremony::init(
            Duration::ZERO,
            Some(test_credentials_container),
            test_display_channel,
        )
        .await;

        test_registration_ceremony.start().await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Failed);

        let mut test_last_status = None;

        while let Ok(test_data) = test_output_data.try_recv() {
            if let OutputData::Status(test_status) = test_data {
                test_last_status = Some(test_status);
            }
        }

        let test_status = test_last_status.expect("a status message");

        assert!(test_status.text.contains("creation was cancelled"));

        Ok(())
    }

    #[tokio::test]
    async fn failed_unsupported_environment() -> Result<(), Box<dyn std::error::Error>> {
        let (test_display_channel, mut test_output_data) = DisplayChannel::init().await;

        let mut test_registration_ceremony =
            RegistrationCeremony::init(Duration::ZERO, None, test_display_channel).await;

        test_registration_ceremony.start().await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Failed);

        let mut test_last_status = None;

        while let Ok(test_data) = test_output_data.try_recv() {
            if let OutputData::Status(test_status) = test_data {
                test_last_status = Some(test_status);
            }
        }

        let test_status = test_last_status.expect("a status message");

        assert!(test_status
            .text
            .contains("this environment does not support the credential API"));

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn failed_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let (test_credentials_container, _test_outgoing_data, _test_incoming_data) =
            CredentialsContainer::init().await;
        let (test_display_channel, mut test_output_data) = DisplayChannel::init().await;

        let mut test_registration_ceremony = RegistrationCeremony::init(
            STARTUP_DELAY,
            Some(test_credentials_container),
            test_display_channel,
        )
        .await;

        test_registration_ceremony.start().await;

        assert_eq!(test_registration_ceremony.state, CeremonyState::Failed);

        let mut test_last_status = None;

        while let Ok(test_data) = test_output_data.try_recv() {
            if let OutputData::Status(test_status) = test_data {
                test_last_status = Some(test_status);
            }
        }

        let test_status = test_last_status.expect("a status message");

        assert!(test_status.text.contains("the operation timed out"));

        Ok(())
    }
}
