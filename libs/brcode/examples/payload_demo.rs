//! Demonstrates assembling a BR Code payload and inspecting its fields
//!
//! Run with: cargo run --example payload_demo -p brcode
//! Set RUST_LOG=brcode=debug to see the per-field tracing output.

use brcode::{debug_pix_payload, generate_pix_payload, PixData};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = PixData {
        key: "victor@example.com".to_string(),
        name: "Victor Monteiro Torres".to_string(),
        city: "Goiânia".to_string(),
        amount: Some(25.00),
        description: Some("Doação Farejei".to_string()),
        txid: Some("FAREJEI123".to_string()),
    };

    let payload = generate_pix_payload(&data)?;
    println!("BR Code payload ({} chars):\n{payload}\n", payload.len());

    println!("Field breakdown:");
    for field in debug_pix_payload(&payload)? {
        println!("  {} [{:02}] {}", field.tag, field.length, field.value);
        for child in &field.children {
            println!("    {} [{:02}] {}", child.tag, child.length, child.value);
        }
    }

    Ok(())
}
