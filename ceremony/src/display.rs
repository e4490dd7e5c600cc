use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::api::supporting_data_structures::PublicKeyCredentialType;
use crate::error::CeremonyError;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Severity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "error")]
    Error,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CredentialDetails {
    pub id: String,
    pub r#type: PublicKeyCredentialType,
    pub response_type: String,
    pub attestation_object_size: usize,
    pub client_data_json_size: usize,
}

#[derive(Clone, Debug)]
pub enum OutputData {
    Status(StatusMessage),
    Details(CredentialDetails),
}

#[derive(Clone)]
pub struct DisplayChannel {
    output_data: mpsc::Sender<OutputData>,
}

impl DisplayChannel {
    pub async fn init() -> (DisplayChannel, mpsc::Receiver<OutputData>) {
        let (output_data, receiver) = mpsc::channel(64);

        (DisplayChannel { output_data }, receiver)
    }

    pub async fn status(&self, text: String, severity: Severity) {
        _ = self
            .output_data
            .send(OutputData::Status(StatusMessage { text, severity }))
            .await;
    }

    pub async fn details(&self, details: CredentialDetails) {
        _ = self.output_data.send(OutputData::Details(details)).await;
    }
}

pub struct Display {
    output_data: mpsc::Receiver<OutputData>,
    pub current_status: Option<StatusMessage>,
    pub current_details: Option<CredentialDetails>,
}

impl Display {
    pub async fn init() -> (Display, DisplayChannel) {
        let (channel, receiver) = DisplayChannel::init().await;

        (
            Display {
                output_data: receiver,
                current_status: None,
                current_details: None,
            },
            channel,
        )
    }

    pub async fn run(&mut self) -> Result<(), CeremonyError> {
        while let Some(output_data) = self.output_data.recv().await {
            match output_data {
                OutputData::Status(status_message) => {
                    println!(
                        "status -> {} [{:?}]",
                        status_message.text, status_message.severity,
                    );

                    self.current_status = Some(status_message);
                }
                OutputData::Details(credential_details) => {
                    match serde_json::to_string(&credential_details) {
                        Ok(json) => println!("details -> {}", json),
                        Err(error) => println!("details serialization -> {:?}", error),
                    }

                    self.current_details = Some(credential_details);
                }
            }
        }

        Ok(())
    }
}
