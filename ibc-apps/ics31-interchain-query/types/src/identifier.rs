use derive_more::{Display, From, Into};
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_primitives::prelude::*;
use sha2::{Digest, Sha256};

use crate::QueryType;

/// Identifier of an interchain query: the lowercase hex SHA-256 fingerprint of
/// the attributes that define the query.
///
/// Every field is hashed behind its big-endian `u64` length, so moving bytes
/// from one field into the adjacent one yields a different identifier. The
/// trailing `height` is hashed as its 8-byte big-endian two's complement form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct QueryId(String);

impl QueryId {
    pub fn fingerprint(
        connection_id: &ConnectionId,
        chain_id: &ChainId,
        query_type: &QueryType,
        request: &[u8],
        callback_module: &str,
        height: i64,
    ) -> Self {
        let mut hasher = Sha256::new();

        for field in [
            connection_id.as_str().as_bytes(),
            chain_id.as_str().as_bytes(),
            query_type.as_str().as_bytes(),
            request,
            callback_module.as_bytes(),
        ] {
            hasher.update((field.len() as u64).to_be_bytes());
            hasher.update(field);
        }
        hasher.update(height.to_be_bytes());

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for QueryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for QueryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
