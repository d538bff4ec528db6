use crate::error::Result;
use crate::library::Library;
use sha2::{Digest, Sha256};

/// Describe the library parameters without revealing the key
pub fn show_info(library: &Library) -> Result<String> {
    let params = library.network().params();
    let text = library.text_codec();
    let layout = library.layout();
    let page_count = library.page_count().to_string();

    let mut output = String::new();

    output.push_str("Library of Babel\n");
    output.push_str("================\n\n");

    output.push_str("Alphabet:\n");
    output.push_str(&format!("  Symbols: {:?}\n", text.alphabet().symbols().iter().collect::<String>()));
    output.push_str(&format!("  Size: {}\n", text.alphabet().len()));
    output.push_str(&format!("  Filler: {:?}\n", text.filler()));
    output.push('\n');

    output.push_str("Pages:\n");
    output.push_str(&format!("  Symbols per page: {}\n", params.length()));
    output.push_str(&format!("  Layout: {} rows x {} columns\n", layout.rows, layout.columns));
    output.push_str(&format!(
        "  Page count: {}^{} ({} digits)\n",
        params.radix(),
        params.length(),
        page_count.len()
    ));
    output.push('\n');

    output.push_str("Permutation:\n");
    output.push_str(&format!("  Rounds: {}\n", params.rounds()));
    output.push_str(&format!("  Hash: {}\n", params.hash()));
    output.push_str(&format!("  Key fingerprint: {}\n", key_fingerprint(params.key())));

    Ok(output)
}

/// First 8 bytes of SHA-256 over the key, hex encoded
pub fn key_fingerprint(key: &[u8]) -> String {
    let digest = Sha256::digest(key);
    hex::encode(&digest[..8])
}
