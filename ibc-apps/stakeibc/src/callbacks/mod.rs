//! Callbacks settling the staking operations once host chains answer.
mod delegate;
mod reinvest;
mod withdrawal_balance;

pub use delegate::*;
pub use reinvest::*;
pub use withdrawal_balance::*;

use ibc_app_callbacks::{CallbackRegistryBuilder, RegistryError};
use ibc_app_interchain_accounts::controller::callback::{IcaCallbackFn, IcaCallbacks};
use ibc_app_interchain_query::callback::{QueryCallbackFn, QueryCallbacks};

use crate::context::StakeIbcExecutionContext;
use crate::types::{ICA_CALLBACK_DELEGATE, ICA_CALLBACK_REINVEST, ICQ_CALLBACK_WITHDRAWAL_BALANCE};
use crate::MODULE_ID_STR;

/// Transaction callbacks of the staking application.
pub fn ica_callbacks<Ctx>() -> IcaCallbacks<Ctx>
where
    Ctx: StakeIbcExecutionContext,
{
    IcaCallbacks::new()
        .with(ICA_CALLBACK_DELEGATE, delegate_callback::<Ctx>)
        .with(ICA_CALLBACK_REINVEST, reinvest_callback::<Ctx>)
}

/// Query callbacks of the staking application.
pub fn icq_callbacks<Ctx>() -> QueryCallbacks<Ctx>
where
    Ctx: StakeIbcExecutionContext,
{
    QueryCallbacks::new().with(
        ICQ_CALLBACK_WITHDRAWAL_BALANCE,
        withdrawal_balance_callback::<Ctx>,
    )
}

/// Registers the transaction callbacks under the module name.
pub fn register_ica_callbacks<Ctx>(
    builder: &mut CallbackRegistryBuilder<IcaCallbackFn<Ctx>>,
) -> Result<(), RegistryError>
where
    Ctx: StakeIbcExecutionContext,
{
    builder.register(MODULE_ID_STR, ica_callbacks())?;
    Ok(())
}

/// Registers the query callbacks under the module name.
pub fn register_icq_callbacks<Ctx>(
    builder: &mut CallbackRegistryBuilder<QueryCallbackFn<Ctx>>,
) -> Result<(), RegistryError>
where
    Ctx: StakeIbcExecutionContext,
{
    builder.register(MODULE_ID_STR, icq_callbacks())?;
    Ok(())
}
