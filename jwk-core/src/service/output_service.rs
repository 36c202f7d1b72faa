use std::{fs, io::ErrorKind, path::Path};

use jwk_providers::{
    common_models::jwk::{Jwk, JwkSet},
    key_set::{merge_key_set, parse_key_set},
    presenter::to_pretty_json,
};

use super::error::ServiceError;


#[derive(Default)]
pub struct OutputService {}

impl OutputService {
    pub fn new() -> Self {
        Self {}
    }

    /// Renders the full key and, if requested, its public view for display.
    pub fn render_for_terminal(
        &self,
        jwk: &Jwk,
        wrap_in_set: bool,
        show_public: bool,
    ) -> Result<String, ServiceError> {
        let mut output = format!("Full key:\n{}\n", render(jwk, wrap_in_set)?);

        if show_public {
            output.push('\n');
            match jwk.to_public_jwk() {
                Some(public) => {
                    output.push_str(&format!("Public key:\n{}\n", render(&public, wrap_in_set)?));
                }
                None => output.push_str("No public key.\n"),
            }
        }

        Ok(output)
    }

    /// Reads the key set persisted at `path`. A missing file means there is no
    /// existing set; unreadable or unparsable content is an error.
    pub fn load_existing_key_set(&self, path: &Path) -> Result<Option<JwkSet>, ServiceError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(parse_key_set(&content)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no existing key set");
                Ok(None)
            }
            Err(err) => Err(ServiceError::IoFailure(err)),
        }
    }

    /// Writes the full key to `path`. With `wrap_in_set` the key is appended to
    /// the set already stored there; otherwise the file is replaced.
    pub fn write_to_file(
        &self,
        path: &Path,
        jwk: Jwk,
        wrap_in_set: bool,
    ) -> Result<(), ServiceError> {
        let output = if wrap_in_set {
            let key_set = merge_key_set(self.load_existing_key_set(path)?, jwk);
            to_pretty_json(&key_set)?
        } else {
            to_pretty_json(&jwk)?
        };

        fs::write(path, output)?;
        tracing::info!(path = %path.display(), wrap_in_set, "wrote key");

        Ok(())
    }
}

fn render(jwk: &Jwk, wrap_in_set: bool) -> Result<String, ServiceError> {
    let output = if wrap_in_set {
        to_pretty_json(&JwkSet::from(jwk.clone()))?
    } else {
        to_pretty_json(jwk)?
    };

    Ok(output)
}
