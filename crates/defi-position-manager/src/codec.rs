use alloy_primitives::{Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use defi_abi::uniswap4::ActionStream;
use defi_abi::IPositionManager;
use defi_types::{Result, UniswapV4Error};
use tracing::trace;

use crate::actions::{Action, ActionTag};

pub fn encode_action(action: &Action) -> (ActionTag, Bytes) {
    (action.tag(), action.encode_params())
}

/// Checks that `params` is exactly the canonical encoding of the parameters `tag` expects.
pub fn validate_params(tag: ActionTag, params: &[u8]) -> Result<()> {
    let canonical = Action::decode(tag, params)?.encode_params();
    if canonical.as_ref() != params {
        return Err(UniswapV4Error::protocol_encoding(format!(
            "{tag} params of {} bytes do not match canonical encoding of {} bytes",
            params.len(),
            canonical.len()
        )));
    }
    Ok(())
}

/// Encodes `abi.encode(bytes actions, bytes[] params)`, one tag byte per action in the given order.
pub fn encode_action_stream<T>(actions: &[(T, Bytes)]) -> Result<Bytes>
where
    T: Copy + Into<u8>,
{
    let mut tags = Vec::with_capacity(actions.len());
    let mut params = Vec::with_capacity(actions.len());

    for (tag, data) in actions {
        let tag = ActionTag::try_from((*tag).into())?;
        validate_params(tag, data)?;
        tags.push(u8::from(tag));
        params.push(data.clone());
    }

    let stream = ActionStream { actions: Bytes::from(tags), params };
    trace!(actions = %stream.actions, "encoded action stream");
    Ok(Bytes::from(stream.abi_encode_params()))
}

pub fn decode_action_stream(data: &[u8]) -> Result<Vec<(ActionTag, Bytes)>> {
    let stream = ActionStream::abi_decode_params(data, true).map_err(|e| UniswapV4Error::protocol_encoding(format!("action stream: {e}")))?;

    if stream.actions.len() != stream.params.len() {
        return Err(UniswapV4Error::protocol_encoding(format!(
            "{} action tags but {} parameter blocks",
            stream.actions.len(),
            stream.params.len()
        )));
    }

    stream
        .actions
        .iter()
        .zip(stream.params)
        .map(|(byte, params)| {
            let tag = ActionTag::try_from(*byte)?;
            validate_params(tag, &params)?;
            Ok((tag, params))
        })
        .collect()
}

/// Calldata for `modifyLiquidities(bytes unlockData, uint256 deadline)`.
pub fn encode_modify_liquidities(unlock_data: Bytes, deadline: U256) -> Bytes {
    let call = IPositionManager::modifyLiquiditiesCall { unlockData: unlock_data, deadline };
    Bytes::from(SolCall::abi_encode(&call))
}
