use ibc_app_stakeibc::context::{StakeIbcExecutionContext, StakeIbcValidationContext};
use ibc_app_stakeibc::error::StakeIbcError;
use ibc_app_stakeibc::types::{DepositRecord, HostZone};
use ibc_primitives::prelude::*;

use crate::context::MockContext;

impl StakeIbcValidationContext for MockContext {
    fn host_zone(&self, chain_id: &str) -> Result<Option<HostZone>, StakeIbcError> {
        Ok(self.store.host_zones.get(chain_id).cloned())
    }

    fn host_zones(&self) -> Result<Vec<HostZone>, StakeIbcError> {
        Ok(self.store.host_zones.values().cloned().collect())
    }

    fn deposit_record(&self, record_id: u64) -> Result<Option<DepositRecord>, StakeIbcError> {
        Ok(self.store.deposit_records.get(&record_id).cloned())
    }

    fn deposit_records(&self) -> Result<Vec<DepositRecord>, StakeIbcError> {
        Ok(self.store.deposit_records.values().cloned().collect())
    }
}

impl StakeIbcExecutionContext for MockContext {
    fn store_host_zone(&mut self, host_zone: HostZone) -> Result<(), StakeIbcError> {
        self.store
            .host_zones
            .insert(host_zone.chain_id.to_string(), host_zone);
        Ok(())
    }

    fn append_deposit_record(&mut self, mut record: DepositRecord) -> Result<u64, StakeIbcError> {
        let id = self.store.deposit_record_counter;
        self.store.deposit_record_counter += 1;

        record.id = id;
        self.store.deposit_records.insert(id, record);
        Ok(id)
    }

    fn remove_deposit_record(&mut self, record_id: u64) -> Result<(), StakeIbcError> {
        self.store.deposit_records.remove(&record_id);
        Ok(())
    }
}
