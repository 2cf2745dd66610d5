//! Whitelist Merkle tree generator
//! Prints the Merkle root and a per-address inclusion proof array

use anyhow::Result;
use whitelist_merkle::whitelist::WhitelistTree;

/// Whitelist addresses
const ADDRESSES: &[&str] = &[
    // dummy address for testing
    "0x742D35cC6634c0532925a3b8d7C95a7d4D5c6E7f",
    "0x8Ba1f109551bD432803012645AaC136C86BB1A0F",
    "0xdd2fD4581271E230360230f9337d5c0434068c13",
    // Add more addresses as needed
];

fn main() -> Result<()> {
    env_logger::init();

    let whitelist = WhitelistTree::from_addresses(ADDRESSES)?;
    log::info!("built whitelist tree with {} addresses", ADDRESSES.len());

    println!("Merkle Root: {}", whitelist.root_hex()?);
    println!();
    println!("Proofs:");

    for address in ADDRESSES {
        let proof = whitelist.proof_hex_for(address)?;
        println!("{}: {}", address, serde_json::to_string(&proof)?);
    }

    Ok(())
}
