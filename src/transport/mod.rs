//! Transport layer: form encoding and response decoding (wire-format details).

mod account;
mod call;
mod envelope;
mod html;
mod params;
mod sms;
mod verify;

pub use account::encode_account_config_form;
pub use call::encode_call_make_tts_form;
pub use envelope::{FirstEntry, decode_entries, decode_envelope};
pub use params::FormParams;
pub use sms::{
    encode_count_inbox_form, encode_count_outbox_form, encode_count_postal_code_form,
    encode_latest_outbox_form, encode_local_ids_form, encode_message_ids_form,
    encode_receive_form, encode_select_outbox_form, encode_send_array_form,
    encode_send_by_postal_code_form, encode_send_form,
};
pub use verify::encode_verify_lookup_form;
