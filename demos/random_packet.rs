//! Lists the available sets and reads the first packet of the last one.
//!
//! Run with: cargo run -p qbreader --example random_packet
//!
//! Set QBREADER_BASE_URL to point at a different server.

use qbreader::{ClientConfig, QbReaderClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let client = QbReaderClient::builder()
        .config(ClientConfig::from_env()?)
        .build()?;

    let sets = client.sets().list().await?;
    println!("{} sets available", sets.len());

    let Some(set_name) = sets.last() else {
        return Ok(());
    };

    let count = client.packets().count(set_name).await?;
    println!("{set_name} has {count} packets");
    if count == 0 {
        return Ok(());
    }

    let packet = client.packets().packet(set_name, 1).await?;
    println!("=== {packet} ({}) ===", packet.difficulty());
    for (tossup, bonus) in &packet {
        let power = if tossup.powerable() { " [power]" } else { "" };
        println!("{}.{power} {tossup}", tossup.question_number());
        println!("ANSWER: {}", tossup.answer());
        println!("{bonus}");
        println!();
    }

    Ok(())
}
