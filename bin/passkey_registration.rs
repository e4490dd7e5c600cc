use ceremony::authenticator::Authenticator;
use ceremony::client::CredentialsContainer;
use ceremony::display::Display;
use ceremony::registration::{RegistrationCeremony, STARTUP_DELAY};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (mut display, display_channel) = Display::init().await;
    let (credentials_container, outgoing_data, incoming_data) = CredentialsContainer::init().await;
    let mut authenticator = Authenticator::init(outgoing_data, incoming_data).await;
    let mut registration_ceremony = RegistrationCeremony::init(
        STARTUP_DELAY,
        Some(credentials_container),
        display_channel,
    )
    .await;

    let display_join_handle = tokio::spawn(async move {
        if let Err(error) = display.run().await {
            println!("display -> {:?}", error);
        }
    });

    let authenticator_join_handle = tokio::spawn(async move {
        if let Err(error) = authenticator.run().await {
            println!("authenticator -> {:?}", error);
        }
    });

    let registration_ceremony_join_handle = tokio::spawn(async move {
        registration_ceremony.start().await;
    });

    tokio::try_join!(
        registration_ceremony_join_handle,
        authenticator_join_handle,
        display_join_handle,
    )?;

    Ok(())
}
