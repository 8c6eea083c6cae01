//! # Menagerie Entry Point
//!
//! Prints the price of the reference animal order. Setup lives in
//! `lib.rs` for testability.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    menagerie_cli::run()?;
    Ok(())
}
