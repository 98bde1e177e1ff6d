use std::io;

use kavenegar::{ApiKey, KavenegarClient, Receptor, Template, Token, VerifyLookup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;
    let receptor = std::env::var("KAVENEGAR_RECEPTOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_RECEPTOR environment variable is required",
        )
    })?;
    let template = std::env::var("KAVENEGAR_TEMPLATE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_TEMPLATE environment variable is required",
        )
    })?;
    let token = std::env::var("KAVENEGAR_TOKEN").unwrap_or_else(|_| "123456".to_owned());

    let client = KavenegarClient::new(ApiKey::new(api_key)?);
    let request = VerifyLookup::new(
        Receptor::new(receptor)?,
        Token::new(token)?,
        Template::new(template)?,
    );

    match client.verify_lookup(&request).await? {
        Some(result) => println!(
            "messageid: {}, status: {:?}, status_text: {:?}",
            result.message_id, result.status, result.status_text
        ),
        None => println!("accepted, no result returned"),
    }

    Ok(())
}
