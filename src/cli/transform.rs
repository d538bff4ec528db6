use crate::cli::parse::parse_value;
use crate::error::Result;
use crate::pipeline::FeistelNetwork;

/// Apply the forward permutation to a decimal value
pub fn permute_value(network: &FeistelNetwork, input: &str) -> Result<String> {
    let value = parse_value(input)?;
    Ok(network.permute(&value)?.to_string())
}

/// Apply the inverse permutation to a decimal value
pub fn invert_value(network: &FeistelNetwork, input: &str) -> Result<String> {
    let value = parse_value(input)?;
    Ok(network.invert(&value)?.to_string())
}
