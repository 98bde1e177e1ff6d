use crate::domain::{
    CountInbox, CountInboxResult, CountOutbox, CountOutboxResult, CountPostalCodeResult,
    LatestOutbox, LocalIds, MessageIds, Receive, ReceiveResult, SelectOutbox, SendArray,
    SendByPostalCode, SendResult, SendSms, StatusLocalMessageIdResult, StatusResult,
};
use crate::transport;

use super::{KavenegarClient, KavenegarError};

const SCOPE: &str = "sms";

impl KavenegarClient {
    /// Send one message to one or more receptors (`sms/send`).
    ///
    /// `sender` and `message` are HTML-encoded on the wire. Returns one result per
    /// receptor, or an empty list when the server sends no entries.
    pub async fn send(&self, request: SendSms) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(SCOPE, "send", transport::encode_send_form(&request))
            .await
    }

    /// Like [`KavenegarClient::send`], returning only the first result.
    ///
    /// Meant for single-receptor requests built with [`SendSms::to_one`]. `None` when
    /// the server accepted the call without entries.
    pub async fn send_single(
        &self,
        request: SendSms,
    ) -> Result<Option<SendResult>, KavenegarError> {
        Ok(self.send(request).await?.into_iter().next())
    }

    /// Send distinct messages to distinct receptors in one call (`sms/sendarray`).
    pub async fn send_array(&self, request: SendArray) -> Result<Vec<SendResult>, KavenegarError> {
        let params =
            transport::encode_send_array_form(&request).map_err(KavenegarError::Encode)?;
        self.execute_list(SCOPE, "sendarray", params).await
    }

    /// Delivery status of previously sent messages (`sms/status`).
    pub async fn status(&self, ids: &MessageIds) -> Result<Vec<StatusResult>, KavenegarError> {
        self.execute_list(SCOPE, "status", transport::encode_message_ids_form(ids))
            .await
    }

    /// Delivery status looked up by the caller's local ids (`sms/statuslocalmessageid`).
    pub async fn status_local_message_id(
        &self,
        ids: &LocalIds,
    ) -> Result<Vec<StatusLocalMessageIdResult>, KavenegarError> {
        self.execute_list(
            SCOPE,
            "statuslocalmessageid",
            transport::encode_local_ids_form(ids),
        )
        .await
    }

    /// Full records of previously sent messages (`sms/select`).
    pub async fn select(&self, ids: &MessageIds) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(SCOPE, "select", transport::encode_message_ids_form(ids))
            .await
    }

    /// Messages sent within a date range (`sms/selectoutbox`).
    pub async fn select_outbox(
        &self,
        request: &SelectOutbox,
    ) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(
            SCOPE,
            "selectoutbox",
            transport::encode_select_outbox_form(request),
        )
        .await
    }

    /// Most recent sent messages (`sms/latestoutbox`).
    pub async fn latest_outbox(
        &self,
        request: &LatestOutbox,
    ) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(
            SCOPE,
            "latestoutbox",
            transport::encode_latest_outbox_form(request),
        )
        .await
    }

    /// Sent-message totals for a date range (`sms/countoutbox`).
    ///
    /// Returns an all-zero result when the server sends no entries.
    pub async fn count_outbox(
        &self,
        request: &CountOutbox,
    ) -> Result<CountOutboxResult, KavenegarError> {
        Ok(self
            .execute_first(
                SCOPE,
                "countoutbox",
                Some(transport::encode_count_outbox_form(request)),
            )
            .await?
            .unwrap_or_default())
    }

    /// Received-message totals for a line and date range (`sms/countinbox`).
    pub async fn count_inbox(
        &self,
        request: &CountInbox,
    ) -> Result<CountInboxResult, KavenegarError> {
        Ok(self
            .execute_first(
                SCOPE,
                "countinbox",
                Some(transport::encode_count_inbox_form(request)),
            )
            .await?
            .unwrap_or_default())
    }

    /// Cancel scheduled or queued messages (`sms/cancel`).
    pub async fn cancel(&self, ids: &MessageIds) -> Result<Vec<StatusResult>, KavenegarError> {
        self.execute_list(SCOPE, "cancel", transport::encode_message_ids_form(ids))
            .await
    }

    /// Fetch inbound messages of a line (`sms/receive`).
    pub async fn receive(&self, request: &Receive) -> Result<Vec<ReceiveResult>, KavenegarError> {
        self.execute_list(SCOPE, "receive", transport::encode_receive_form(request))
            .await
    }

    /// Subscriber counts per carrier segment for a postal code (`sms/countpostalcode`).
    pub async fn count_postal_code(
        &self,
        postal_code: u64,
    ) -> Result<Vec<CountPostalCodeResult>, KavenegarError> {
        self.execute_list(
            SCOPE,
            "countpostalcode",
            transport::encode_count_postal_code_form(postal_code),
        )
        .await
    }

    /// Broadcast to subscribers of a postal code (`sms/sendbypostalcode`).
    pub async fn send_by_postal_code(
        &self,
        request: &SendByPostalCode,
    ) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(
            SCOPE,
            "sendbypostalcode",
            transport::encode_send_by_postal_code_form(request),
        )
        .await
    }
}
