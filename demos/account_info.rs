use std::io;

use kavenegar::{ApiKey, KavenegarClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("KAVENEGAR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "KAVENEGAR_API_KEY environment variable is required",
        )
    })?;

    let client = KavenegarClient::new(ApiKey::new(api_key)?);
    if let Some(info) = client.account_info().await? {
        println!(
            "remain_credit: {}, expire_date: {:?}, type: {:?}",
            info.remain_credit,
            info.expire_date.to_datetime(),
            info.account_type
        );
    }
    if let Some(server_date) = client.utils_get_date().await? {
        println!("server time: {}", server_date.datetime);
    }

    Ok(())
}
