pub struct JwkGeneratorConfig {
    pub key_maker_config: KeyMakerConfig,
}

pub struct KeyMakerConfig {
    /// RSA sizes below this are still generated, with a warning.
    pub recommended_rsa_key_size: u32,
}

impl Default for JwkGeneratorConfig {
    fn default() -> Self {
        Self {
            key_maker_config: KeyMakerConfig {
                recommended_rsa_key_size: 2048,
            },
        }
    }
}
