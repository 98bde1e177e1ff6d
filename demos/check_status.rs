use std::io;

use kavenegar::{ApiKey, KavenegarClient, MessageId, MessageIds};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;
    let ids_raw = std::env::var("KAVENEGAR_MESSAGE_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_MESSAGE_IDS environment variable is required (comma-separated ids)",
        )
    })?;

    let ids = ids_raw
        .split(',')
        .map(|raw| raw.trim().parse::<i64>().map(MessageId::new))
        .collect::<Result<Vec<_>, _>>()?;
    let ids = MessageIds::new(ids)?;

    let client = KavenegarClient::new(ApiKey::new(api_key)?);
    for entry in client.status(&ids).await? {
        println!(
            "messageid: {}, status: {:?}, final: {}, status_text: {:?}",
            entry.message_id,
            entry.status.known(),
            entry.status.is_final(),
            entry.status_text
        );
    }

    Ok(())
}
