use crate::domain::{
    CountInbox, CountOutbox, LatestOutbox, LineNumber, LocalId, LocalIds, MessageId, MessageIds,
    MessageText, MessageType, ReadFilter, Receive, Receptor, SelectOutbox, SendArray,
    SendByPostalCode, SendSms, Sender,
};

use super::html::html_encode;
use super::params::{FormParams, encode_date, join};

const DATE: &str = "date";
const START_DATE: &str = "startdate";
const END_DATE: &str = "enddate";
const POSTAL_CODE: &str = "postalcode";

pub fn encode_send_form(request: &SendSms) -> FormParams {
    let options = request.options();
    let receptors = join(request.receptors().iter().map(Receptor::as_str));

    let mut params = FormParams::new();
    params
        .insert(Sender::FIELD, html_encode(request.sender().as_str()))
        .insert(Receptor::FIELD, html_encode(&receptors))
        .insert(MessageText::FIELD, html_encode(request.message().as_str()))
        .insert(MessageType::FIELD, options.message_type.as_i32())
        .insert(DATE, encode_date(options.date));
    if !options.local_ids.is_empty() {
        params.insert(
            LocalId::FIELD,
            join(options.local_ids.iter().map(LocalId::as_str)),
        );
    }
    params
}

/// Each column goes out as its own JSON array; text is not HTML-encoded here.
pub fn encode_send_array_form(request: &SendArray) -> Result<FormParams, serde_json::Error> {
    let rows = request.messages();
    let messages = rows.iter().map(|row| row.message.as_str()).collect::<Vec<_>>();
    let senders = rows.iter().map(|row| row.sender.as_str()).collect::<Vec<_>>();
    let receptors = rows.iter().map(|row| row.receptor.as_str()).collect::<Vec<_>>();
    let types = rows
        .iter()
        .map(|row| row.message_type.as_i32())
        .collect::<Vec<_>>();

    let mut params = FormParams::new();
    params
        .insert(MessageText::FIELD, serde_json::to_string(&messages)?)
        .insert(Sender::FIELD, serde_json::to_string(&senders)?)
        .insert(Receptor::FIELD, serde_json::to_string(&receptors)?)
        .insert(MessageType::FIELD, serde_json::to_string(&types)?)
        .insert(DATE, encode_date(request.options().date));

    let local_ids = &request.options().local_message_ids;
    if !local_ids.is_empty() {
        params.insert(
            "localmessageids",
            join(local_ids.iter().map(LocalId::as_str)),
        );
    }
    Ok(params)
}

pub fn encode_message_ids_form(ids: &MessageIds) -> FormParams {
    let joined = join(ids.as_slice().iter().map(MessageId::to_string));
    let mut params = FormParams::new();
    params.insert(MessageId::FIELD, joined);
    params
}

pub fn encode_local_ids_form(ids: &LocalIds) -> FormParams {
    let mut params = FormParams::new();
    params.insert(LocalId::FIELD, join(ids.as_slice().iter().map(LocalId::as_str)));
    params
}

pub fn encode_select_outbox_form(request: &SelectOutbox) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert(START_DATE, encode_date(Some(request.start)))
        .insert(END_DATE, encode_date(request.end))
        .insert_opt(Sender::FIELD, request.sender.as_ref().map(Sender::as_str));
    params
}

pub fn encode_latest_outbox_form(request: &LatestOutbox) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert("pagesize", request.page_size)
        .insert_opt(Sender::FIELD, request.sender.as_ref().map(Sender::as_str));
    params
}

pub fn encode_count_outbox_form(request: &CountOutbox) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert(START_DATE, encode_date(Some(request.start)))
        .insert(END_DATE, encode_date(request.end))
        .insert_opt("status", request.status.map(|status| status.as_i32()));
    params
}

pub fn encode_count_inbox_form(request: &CountInbox) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert(START_DATE, encode_date(Some(request.start)))
        .insert(END_DATE, encode_date(request.end))
        .insert(LineNumber::FIELD, request.line_number.as_str())
        .insert(ReadFilter::FIELD, request.read.as_i32());
    params
}

pub fn encode_receive_form(request: &Receive) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert(LineNumber::FIELD, request.line_number.as_str())
        .insert(ReadFilter::FIELD, request.read.as_i32());
    params
}

pub fn encode_count_postal_code_form(postal_code: u64) -> FormParams {
    let mut params = FormParams::new();
    params.insert(POSTAL_CODE, postal_code);
    params
}

pub fn encode_send_by_postal_code_form(request: &SendByPostalCode) -> FormParams {
    let mut params = FormParams::new();
    params
        .insert(POSTAL_CODE, request.postal_code)
        .insert(Sender::FIELD, request.sender.as_str())
        .insert(MessageText::FIELD, html_encode(request.message.as_str()))
        // The server expects this exact casing.
        .insert("mcistartIndex", request.mci_start_index)
        .insert("mcicount", request.mci_count)
        .insert("mtnstartindex", request.mtn_start_index)
        .insert("mtncount", request.mtn_count)
        .insert(DATE, encode_date(request.date));
    params
}
