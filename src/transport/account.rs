use crate::domain::{AccountConfig, Sender};

use super::params::FormParams;

pub fn encode_account_config_form(request: &AccountConfig) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert_opt("apilogs", request.api_logs.map(|logs| logs.as_str()))
        .insert_opt("dailyreport", request.daily_report.map(|flag| flag.as_str()))
        .insert_opt("debugmode", request.debug_mode.map(|flag| flag.as_str()))
        .insert_opt(
            "defaultsender",
            request.default_sender.as_ref().map(Sender::as_str),
        )
        .insert_opt("mincreditalarm", request.min_credit_alarm)
        .insert_opt("resendfailed", request.resend_failed.map(|flag| flag.as_str()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiLogs, Toggle};

    #[test]
    fn empty_config_sends_no_fields() {
        assert!(encode_account_config_form(&AccountConfig::default()).is_empty());
    }

    #[test]
    fn only_given_settings_are_sent() {
        let request = AccountConfig {
            api_logs: Some(ApiLogs::JustFaults),
            daily_report: Some(Toggle::Enabled),
            min_credit_alarm: Some(50_000),
            ..Default::default()
        };

        assert_eq!(
            encode_account_config_form(&request).into_pairs(),
            vec![
                ("apilogs".to_owned(), "justfaults".to_owned()),
                ("dailyreport".to_owned(), "enabled".to_owned()),
                ("mincreditalarm".to_owned(), "50000".to_owned()),
            ]
        );
    }
}
