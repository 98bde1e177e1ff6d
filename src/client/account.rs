use crate::domain::{AccountConfig, AccountConfigResult, AccountInfoResult, DateResult};
use crate::transport;

use super::{KavenegarClient, KavenegarError};

const ACCOUNT: &str = "account";
const UTILS: &str = "utils";

impl KavenegarClient {
    /// Remaining credit and expiry of the account (`account/info`).
    pub async fn account_info(&self) -> Result<Option<AccountInfoResult>, KavenegarError> {
        self.execute_first(ACCOUNT, "info", None).await
    }

    /// Change account settings and return the resulting configuration (`account/config`).
    ///
    /// Settings left as `None` are not sent, so an empty [`AccountConfig`] only reads
    /// the current values.
    pub async fn account_config(
        &self,
        config: &AccountConfig,
    ) -> Result<Option<AccountConfigResult>, KavenegarError> {
        self.execute_first(
            ACCOUNT,
            "config",
            Some(transport::encode_account_config_form(config)),
        )
        .await
    }

    /// Server date and time (`utils/getdate`).
    pub async fn utils_get_date(&self) -> Result<Option<DateResult>, KavenegarError> {
        self.execute_first(UTILS, "getdate", None).await
    }
}
