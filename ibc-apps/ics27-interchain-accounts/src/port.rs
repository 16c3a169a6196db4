use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::CONTROLLER_PORT_PREFIX;
use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::prelude::*;

/// Controller port of the interchain account registered by `owner`.
pub fn new_controller_port_id(owner: &str) -> Result<PortId, InterchainAccountError> {
    let port_id = format!("{CONTROLLER_PORT_PREFIX}{owner}");
    PortId::new(port_id.clone())
        .map_err(|reason| InterchainAccountError::InvalidPort { port_id, reason })
}
