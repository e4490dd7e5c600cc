use serde::{Deserialize, Serialize};

use crate::api::credential_generation_parameters::PublicKeyCredentialParameters;
use crate::api::supporting_data_structures::{
    AuthenticationExtensionsClientInputs, CredentialMediationRequirement,
    PublicKeyCredentialDescriptor, PublicKeyCredentialType,
};
use crate::error::CeremonyError;
use crate::security::buffer::bytes_from_values;

pub const RP_ID: &str = "inabajunmr.github.io";
pub const RP_NAME: &str = "パスキーデモサイト";
pub const USER_NAME: &str = "demo@example.com";
pub const TIMEOUT_MILLISECONDS: u64 = 120000;

pub const CHALLENGE_BYTE_VALUES: [u32; 32] = [
    184, 191, 139, 132, 97, 131, 225, 90, 127, 84, 223, 104, 157, 62, 48, 208, 93, 18, 138, 44,
    102, 197, 199, 98, 208, 44, 184, 147, 111, 23, 121, 90,
];

pub const USER_ID_BYTE_VALUES: [u32; 64] = [
    146, 24, 66, 116, 193, 212, 110, 157, 126, 195, 141, 148, 162, 108, 201, 87, 37, 34, 159, 121,
    17, 164, 54, 81, 18, 201, 139, 60, 181, 118, 68, 244, 197, 43, 127, 231, 121, 229, 54, 148, 9,
    234, 161, 61, 112, 249, 163, 254, 146, 5, 42, 27, 205, 243, 254, 111, 46, 135, 251, 215, 134,
    248, 58, 237,
];

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CredentialCreationOptions {
    pub mediation: CredentialMediationRequirement,
    pub public_key: PublicKeyCredentialCreationOptions,
}

impl CredentialCreationOptions {
    pub async fn generate() -> Result<CredentialCreationOptions, CeremonyError> {
        let public_key = PublicKeyCredentialCreationOptions::generate().await?;

        Ok(CredentialCreationOptions {
            mediation: CredentialMediationRequirement::Conditional,
            public_key,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: Vec<u8>,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: u64,
    pub exclude_credentials: Vec<PublicKeyCredentialDescriptor>,
    pub authenticator_selection: AuthenticatorSelectionCriteria,
    pub extensions: AuthenticationExtensionsClientInputs,
}

impl PublicKeyCredentialCreationOptions {
    pub async fn generate() -> Result<PublicKeyCredentialCreationOptions, CeremonyError> {
        let challenge = bytes_from_values(&CHALLENGE_BYTE_VALUES).await?;
        let user_id = bytes_from_values(&USER_ID_BYTE_VALUES).await?;

        let mut pub_key_cred_params = Vec::with_capacity(3);
        let es256 = PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg: -7,
        };
        let ps256 = PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg: -37,
        };
        let rs256 = PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg: -257,
        };

        pub_key_cred_params.push(es256);
        pub_key_cred_params.push(ps256);
        pub_key_cred_params.push(rs256);

        let rp = PublicKeyCredentialRpEntity {
            id: String::from(RP_ID),
            name: String::from(RP_NAME),
        };

        let user = PublicKeyCredentialUserEntity {
            name: String::from(USER_NAME),
            id: user_id,
            display_name: String::from(USER_NAME),
        };

        let authenticator_selection = AuthenticatorSelectionCriteria {
            authenticator_attachment: AuthenticatorAttachment::Platform,
            resident_key: ResidentKeyRequirement::Required,
        };

        Ok(PublicKeyCredentialCreationOptions {
            rp,
            user,
            challenge,
            pub_key_cred_params,
            timeout: TIMEOUT_MILLISECONDS,
            exclude_credentials: Vec::with_capacity(0),
            authenticator_selection,
            extensions: AuthenticationExtensionsClientInputs {},
        })
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PublicKeyCredentialRpEntity {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialUserEntity {
    pub name: String,
    pub id: Vec<u8>,
    pub display_name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthenticatorSelectionCriteria {
    pub authenticator_attachment: AuthenticatorAttachment,
    pub resident_key: ResidentKeyRequirement,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AuthenticatorAttachment {
    #[serde(rename = "platform")]
    Platform,
    #[serde(rename = "cross-platform")]
    CrossPlatform,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ResidentKeyRequirement {
    #[serde(rename = "discouraged")]
    Discouraged,
    #[serde(rename = "preferred")]
    Preferred,
    #[serde(rename = "required")]
    Required,
}
