use serde::{Deserialize, Serialize};

use crate::de;

/// Free-text metadata an operator publishes for their provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub moniker: Option<String>,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub security_contact: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// One finality provider record as served by the registry.
///
/// Fields the registry may omit decode to their empty value: `None` for text,
/// `false` for flags and `0` for slashing heights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalityProvider {
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub btc_pk: Option<String>,
    /// Raw commission rate as sent, e.g. `"0.050000000000000000"`.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub commission: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub jailed: bool,
    #[serde(default, deserialize_with = "de::flag")]
    pub soft_deleted: bool,
    #[serde(default, deserialize_with = "de::height")]
    pub slashed_babylon_height: u64,
    #[serde(default, deserialize_with = "de::height")]
    pub slashed_btc_height: u64,
}

impl FinalityProvider {
    pub fn moniker(&self) -> Option<&str> {
        self.description.as_ref()?.moniker.as_deref()
    }

    pub fn identity(&self) -> Option<&str> {
        self.description.as_ref()?.identity.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.description.as_ref()?.website.as_deref()
    }

    pub fn security_contact(&self) -> Option<&str> {
        self.description.as_ref()?.security_contact.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.description.as_ref()?.details.as_deref()
    }
}
