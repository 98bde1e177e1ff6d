use crate::domain::{SendResult, VerifyLookup};
use crate::transport;

use super::{KavenegarClient, KavenegarError};

impl KavenegarClient {
    /// Send a templated verification code (`verify/lookup`).
    ///
    /// Tokens are sent as-is; the template is configured in the Kavenegar panel.
    /// `None` means the server accepted the call without echoing a result; the code
    /// was still sent.
    pub async fn verify_lookup(
        &self,
        request: &VerifyLookup,
    ) -> Result<Option<SendResult>, KavenegarError> {
        self.execute_first(
            "verify",
            "lookup",
            Some(transport::encode_verify_lookup_form(request)),
        )
        .await
    }
}
