//! # Pins Subcommand
//!
//! Lists what is currently pinned under a name.

use anyhow::Result;
use clap::Args;

use abisync_core::PinName;
use abisync_pinata::PinningService;

use crate::workflow::SyncError;

/// Arguments for the `abisync pins` subcommand.
#[derive(Args, Debug)]
pub struct PinsArgs {
    /// Pin name to look up.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Execute the pins subcommand.
pub async fn run_pins(args: &PinsArgs) -> Result<u8> {
    PinName::new(args.name.as_str()).map_err(SyncError::from)?;
    let client = crate::connect()?;
    pins_with(&client, args).await
}

/// List pins through an already constructed service.
///
/// Exits 1 when nothing is pinned under the name.
pub async fn pins_with<S: PinningService>(service: &S, args: &PinsArgs) -> Result<u8> {
    let name = PinName::new(args.name.as_str()).map_err(SyncError::from)?;
    let pins = service.list_pins(&name).await.map_err(SyncError::from)?;

    if pins.is_empty() {
        println!("NOT FOUND: no pins named {name}");
        return Ok(1);
    }
    for pin in &pins {
        let size = pin.size.map_or_else(|| "-".to_string(), |s| s.to_string());
        let pinned = pin
            .date_pinned
            .map_or_else(|| "-".to_string(), |d| d.to_rfc3339());
        println!("{}\t{size}\t{pinned}", pin.ipfs_pin_hash);
    }
    Ok(0)
}
