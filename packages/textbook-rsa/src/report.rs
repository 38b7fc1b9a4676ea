use crate::codec;
use crate::rsa::{KeyPair, RsaPrivateKey, RsaPublicKey};

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Outcome of one encrypt/decrypt run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    message: String,
    #[serde(serialize_with = "decimal::serialize_all")]
    ciphertext: Vec<BigUint>,
    encrypted: String,
    decrypted: String,
    equal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    private: Option<RsaPrivateKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public: Option<RsaPublicKey>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_length")]
    length: Option<u64>,
}

impl Report {
    pub fn new(
        message: impl Into<String>,
        ciphertext: Vec<BigUint>,
        decrypted: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let decrypted = decrypted.into();

        Report {
            encrypted: codec::render_lossy(&ciphertext),
            equal: message == decrypted,
            message,
            ciphertext,
            decrypted,
            private: None,
            public: None,
            length: None,
        }
    }

    pub fn with_keys(mut self, keys: &KeyPair) -> Self {
        self.private = Some(keys.private().clone());
        self.public = Some(keys.public().clone());
        self
    }

    pub fn with_length(mut self, bit_length: u64) -> Self {
        self.length = Some(bit_length);
        self
    }

    pub fn decrypted(&self) -> &str {
        &self.decrypted
    }

    pub fn equal(&self) -> bool {
        self.equal
    }
}

fn serialize_length<S: Serializer>(
    length: &Option<u64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match length {
        Some(bits) => serializer.collect_str(&format_args!("{} Bit", bits)),
        None => serializer.serialize_none(),
    }
}

/// Big integers as decimal strings.
pub(crate) mod decimal {
    use num_bigint::BigUint;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn serialize_all<S: Serializer>(
        values: &[BigUint],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(BigUint::to_string))
    }
}
