//! Gzip decompression for archive files.

use async_compression::tokio::bufread::GzipDecoder;
use thiserror::Error;
use tokio::io::AsyncReadExt;

/// Errors that can occur during decompression.
#[derive(Error, Debug)]
pub enum DecompressError {
    /// Gzip decompression failed.
    #[error("Gzip decompression failed: {0}")]
    Gzip(#[from] std::io::Error),

    /// Empty input data.
    #[error("Empty input data")]
    EmptyInput,
}

/// Decompresses a gzip-compressed archive payload.
///
/// # Errors
///
/// Returns an error if the input is empty or not valid gzip.
pub async fn decompress_gzip(compressed: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if compressed.is_empty() {
        return Err(DecompressError::EmptyInput);
    }

    let mut decoder = GzipDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).await?;

    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::write::GzipEncoder;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_empty_input() {
        let result = decompress_gzip(&[]).await;
        assert!(matches!(result, Err(DecompressError::EmptyInput)));
    }

    #[tokio::test]
    async fn test_invalid_gzip() {
        let result = decompress_gzip(&[0x00, 0x01, 0x02, 0x03]).await;
        assert!(matches!(result, Err(DecompressError::Gzip(_))));
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let payload = b"timestamp,side,size,price\n1.5,Buy,1.0,100.0\n";

        let mut encoder = GzipEncoder::new(Vec::new());
        encoder.write_all(payload).await.unwrap();
        encoder.shutdown().await.unwrap();
        let compressed = encoder.into_inner();

        let decompressed = decompress_gzip(&compressed).await.unwrap();
        assert_eq!(decompressed, payload);
    }
}
