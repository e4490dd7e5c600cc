use crate::error::{CeremonyError, CeremonyErrorType};

pub async fn bytes_from_values(values: &[u32]) -> Result<Vec<u8>, CeremonyError> {
    let mut buffer = Vec::with_capacity(values.len());

    for value in values {
        match u8::try_from(*value) {
            Ok(byte) => buffer.push(byte),
            Err(_) => {
                return Err(CeremonyError {
                    error: CeremonyErrorType::OtherError(format!(
                        "byte value out of range -> {}",
                        value,
                    )),
                });
            }
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_values() -> Result<(), Box<dyn std::error::Error>> {
        let test_buffer = bytes_from_values(&[]).await?;

        assert!(test_buffer.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn ordered_values() -> Result<(), Box<dyn std::error::Error>> {
        let test_buffer = bytes_from_values(&[0, 255, 1]).await?;

        assert_eq!(test_buffer.len(), 3);
        assert_eq!(test_buffer, [0, 255, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let test_values = [184, 191, 139, 132, 97, 131, 225, 90];
        let test_buffer = bytes_from_values(&test_values).await?;
        let test_round_trip: Vec<u32> = test_buffer.iter().map(|byte| u32::from(*byte)).collect();

        assert_eq!(test_round_trip, test_values);

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_value() -> Result<(), Box<dyn std::error::Error>> {
        let test_error = bytes_from_values(&[0, 256]).await;

        assert!(test_error.is_err());
        assert!(test_error.unwrap_err().to_string().contains("256"));

        Ok(())
    }
}
