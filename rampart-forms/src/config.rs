/// Form obfuscator configuration
#[derive(Debug, Clone)]
pub struct ObfuscatorConfig {
    /// Session bag holding one encoded blob per form name
    pub bag: String,

    /// Maximum construction attempts before a key collision becomes fatal
    pub max_attempts: u32,
}

impl ObfuscatorConfig {
    /// Set the session bag name
    pub fn with_bag(mut self, bag: impl Into<String>) -> Self {
        self.bag = bag.into();
        self
    }

    /// Set the collision retry cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

impl Default for ObfuscatorConfig {
    fn default() -> Self {
        Self {
            bag: "obfuscated_forms".to_string(),
            max_attempts: 5,
        }
    }
}
