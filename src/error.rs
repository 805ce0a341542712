use thiserror::Error;

/// Errors from talking to the remote posts API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected api response: {0}")]
    InvalidResponse(String),
}

/// Errors from the image attachment pipeline.
///
/// Both variants are local to a single attachment: a failed attachment
/// never aborts submission of the post's text content.
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("could not process image: {0}")]
    InvalidImage(String),

    #[error("could not encode attachment: {0}")]
    Encoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_invalid_response() {
        let error = ClientError::InvalidResponse("expected an array".to_string());
        assert_eq!(
            error.to_string(),
            "unexpected api response: expected an array"
        );
    }

    #[test]
    fn test_attachment_error_invalid_image() {
        let error = AttachmentError::InvalidImage("not a raster format".to_string());
        assert_eq!(
            error.to_string(),
            "could not process image: not a raster format"
        );
    }

    #[test]
    fn test_attachment_error_encoding() {
        let error = AttachmentError::Encoding("jpeg writer failed".to_string());
        assert_eq!(
            error.to_string(),
            "could not encode attachment: jpeg writer failed"
        );
    }
}
