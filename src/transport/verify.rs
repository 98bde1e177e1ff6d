use crate::domain::{Receptor, SpacedToken, Template, Token, VerifyLookup};

use super::params::FormParams;

pub fn encode_verify_lookup_form(request: &VerifyLookup) -> FormParams {
    let options = &request.options;
    let mut params = FormParams::new();
    params
        .insert(Receptor::FIELD, request.receptor.as_str())
        .insert(Template::FIELD, request.template.as_str())
        .insert(Token::FIELD, request.token.as_str())
        .insert_opt("token2", options.token2.as_ref().map(Token::as_str))
        .insert_opt("token3", options.token3.as_ref().map(Token::as_str))
        .insert_opt("token10", options.token10.as_ref().map(SpacedToken::as_str))
        .insert_opt("token20", options.token20.as_ref().map(SpacedToken::as_str))
        .insert("type", options.lookup_type.as_i32());
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{VerifyLookupOptions, VerifyLookupType};

    fn lookup() -> VerifyLookup {
        VerifyLookup::new(
            Receptor::new("09121234567").unwrap(),
            Token::new("123456").unwrap(),
            Template::new("otp-template").unwrap(),
        )
    }

    #[test]
    fn defaults_omit_extra_tokens() {
        let params = encode_verify_lookup_form(&lookup());
        assert_eq!(params.get("token"), Some("123456"));
        assert_eq!(params.get("template"), Some("otp-template"));
        assert_eq!(params.get("type"), Some("1"));
        for absent in ["token2", "token3", "token10", "token20"] {
            assert!(!params.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn extra_tokens_and_call_channel_are_sent() {
        let mut request = lookup();
        request.options = VerifyLookupOptions {
            token2: Some(Token::new("abc").unwrap()),
            token10: Some(SpacedToken::new("Dear customer").unwrap()),
            lookup_type: VerifyLookupType::Call,
            ..Default::default()
        };

        let params = encode_verify_lookup_form(&request);
        assert_eq!(params.get("token2"), Some("abc"));
        assert_eq!(params.get("token10"), Some("Dear customer"));
        assert!(!params.contains_key("token3"));
        assert_eq!(params.get("type"), Some("2"));
    }
}
