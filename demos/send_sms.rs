use std::io;

use kavenegar::{ApiKey, KavenegarClient, MessageText, Receptor, SendOptions, SendSms, Sender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;
    let sender = std::env::var("KAVENEGAR_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_SENDER environment variable is required",
        )
    })?;
    let receptor = std::env::var("KAVENEGAR_RECEPTOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_RECEPTOR environment variable is required",
        )
    })?;
    let message = std::env::var("KAVENEGAR_MESSAGE")
        .unwrap_or_else(|_| "Hello from the kavenegar demo.".to_owned());

    let client = KavenegarClient::new(ApiKey::new(api_key)?);
    let request = SendSms::to_one(
        Sender::new(sender)?,
        Receptor::new(receptor)?,
        MessageText::new(message)?,
        SendOptions::default(),
    )?;

    match client.send_single(request).await? {
        Some(result) => println!(
            "messageid: {}, status: {:?}, status_text: {:?}, cost: {}",
            result.message_id, result.status, result.status_text, result.cost
        ),
        None => println!("accepted, no result returned"),
    }

    Ok(())
}
