//! Opaque page-token encoding for `ListTodos`.
//!
//! The resume position is the id of the last todo on the previous page,
//! wrapped in URL-safe unpadded base64 so clients treat the token as
//! opaque and can pass it through query strings unescaped.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use todo_tonic_core::{Error, Result};

/// Wraps the id of the last todo returned on a page into a resume token.
pub fn encode(id: &str) -> String {
    URL_SAFE_NO_PAD.encode(id)
}

/// Recovers the last-seen id from a client-supplied token.
///
/// # Errors
///
/// [`Error::InvalidPageToken`] if the token is not valid base64 or does
/// not decode to UTF-8.
pub fn decode(token: &str) -> Result<String> {
    let raw = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| Error::InvalidPageToken {
            reason: format!("token is not valid base64: {e}"),
        })?;

    String::from_utf8(raw).map_err(|_| Error::InvalidPageToken {
        reason: "token does not decode to UTF-8".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use todo_tonic_core::Error;

    #[test]
    fn token_round_trips() {
        let id = "0b2f7a2e-9f3c-4a53-9d3e-2f6b1d9c8a41";
        assert_eq!(decode(&encode(id)).unwrap(), id);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = decode("!!not-base64!!").unwrap_err();
        assert!(matches!(err, Error::InvalidPageToken { .. }));
    }
}
