use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jwk_core::{
    model::{GenerationRequest, RawGenerationRequest},
    JwkGenerator,
};


#[derive(Parser, Debug)]
#[command(
    name = "jwk-generator",
    about = "Generates JSON Web Keys and JSON Web Key Sets",
    long_about = "Generates JSON Web Keys and JSON Web Key Sets

EXAMPLES:
  jwk-generator -t RSA -s 2048 -u sig -a RS256       # RSA signing key
  jwk-generator -t EC -c P-256 -p                    # EC key, also print public key
  jwk-generator -t oct -s 256 -S -o keys.json        # append a symmetric key to keys.json
  jwk-generator -t simple -s 256 -k <TOKEN>          # key issued against a service account token",
    version
)]
pub struct Cli {
    /// Key type, one of: RSA, oct, EC, simple
    #[arg(short = 't', long = "type", value_name = "KEY_TYPE")]
    pub key_type: Option<String>,

    /// Key size in bits, required for RSA, oct and simple key types. Must be an integer divisible by 8
    #[arg(short = 's', long = "size", value_name = "BITS")]
    pub size: Option<String>,

    /// Usage, one of: enc, sig
    #[arg(short = 'u', long = "use", value_name = "USE")]
    pub usage: Option<String>,

    /// Algorithm
    #[arg(short = 'a', long = "alg", value_name = "ALG")]
    pub algorithm: Option<String>,

    /// Key ID, one will be generated if not defined
    #[arg(short = 'i', long = "kid", value_name = "KID")]
    pub key_id: Option<String>,

    /// Don't generate a Key ID if none defined
    #[arg(short = 'I', long = "no-kid")]
    pub no_key_id: bool,

    /// Display public key separately
    #[arg(short = 'p', long = "public")]
    pub public_key: bool,

    /// Key curve, required for EC key type. Must be one of P-256, P-384, P-521
    #[arg(short = 'c', long = "curve", value_name = "CURVE")]
    pub curve: Option<String>,

    /// Wrap the generated key in a key set
    #[arg(short = 'S', long = "key-set")]
    pub key_set: bool,

    /// Write output to file (appends to an existing key set if -S is used), no display of key material
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Service account token, required for simple key type
    #[arg(short = 'k', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    fn to_raw_request(&self) -> RawGenerationRequest {
        RawGenerationRequest {
            key_type: self.key_type.clone(),
            size: self.size.clone(),
            curve: self.curve.clone(),
            r#use: self.usage.clone(),
            algorithm: self.algorithm.clone(),
            key_id: self.key_id.clone(),
            no_key_id: self.no_key_id,
            token: self.token.clone(),
        }
    }
}

/// Log directives used when `RUST_LOG` is not set.
pub fn default_log_directives(verbose: bool) -> String {
    let log_level = if verbose { "debug" } else { "info" };

    ["jwk_generator", "jwk_core", "jwk_providers", "jwk_crypto"]
        .map(|target| format!("{target}={log_level}"))
        .join(",")
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let request = GenerationRequest::try_from(cli.to_raw_request())?;

    let core = JwkGenerator::default();
    let jwk = core.generation_service.generate(&request)?;

    match &cli.output {
        Some(path) => core
            .output_service
            .write_to_file(path, jwk, cli.key_set)
            .with_context(|| format!("Could not write key to {}", path.display()))?,
        None => print!(
            "{}",
            core.output_service
                .render_for_terminal(&jwk, cli.key_set, cli.public_key)?
        ),
    }

    Ok(())
}
