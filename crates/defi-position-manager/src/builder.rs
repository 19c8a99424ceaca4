use alloy_primitives::{Bytes, U256};
use defi_types::Result;
use tracing::debug;

use crate::actions::{Action, ActionTag};
use crate::codec::{encode_action, encode_action_stream, encode_modify_liquidities};

/// Ordered list of actions, validated and encoded together.
#[derive(Clone, Debug, Default)]
pub struct ActionStreamBuilder {
    actions: Vec<Action>,
}

impl ActionStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn push(&mut self, action: Action) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn tags(&self) -> Vec<ActionTag> {
        self.actions.iter().map(Action::tag).collect()
    }

    /// Unlock data: `abi.encode(bytes actions, bytes[] params)`.
    pub fn build(&self) -> Result<Bytes> {
        let encoded: Vec<(ActionTag, Bytes)> = self.actions.iter().map(encode_action).collect();
        let unlock_data = encode_action_stream(&encoded)?;
        debug!(actions = ?self.tags(), len = unlock_data.len(), "Built action stream");
        Ok(unlock_data)
    }

    /// Full `modifyLiquidities` calldata.
    pub fn build_calldata(&self, deadline: U256) -> Result<Bytes> {
        Ok(encode_modify_liquidities(self.build()?, deadline))
    }
}

impl From<Vec<Action>> for ActionStreamBuilder {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl FromIterator<Action> for ActionStreamBuilder {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self { actions: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::{address, Address};
    use alloy_sol_types::SolCall;
    use defi_abi::IPositionManager;

    use super::*;
    use crate::codec::decode_action_stream;

    const WETH: Address = address!("4200000000000000000000000000000000000006");
    const CLAWD: Address = address!("9f86dB9fc6f7c9408e8Fda3Ff8ce4e78ac7a6b07");

    #[test]
    fn test_builder_order() {
        let recipient = Address::repeat_byte(0x33);
        let mut builder = ActionStreamBuilder::new()
            .with_action(Action::decrease_liquidity(U256::from(1), 500, 0, 0))
            .with_action(Action::close_currency(WETH));
        builder.push(Action::close_currency(CLAWD)).push(Action::sweep(WETH, recipient)).push(Action::sweep(CLAWD, recipient));

        assert_eq!(builder.len(), 5);
        let decoded = decode_action_stream(&builder.build().unwrap()).unwrap();
        assert_eq!(decoded.len(), 5);
        assert_eq!(decoded.iter().map(|(tag, _)| *tag).collect::<Vec<_>>(), builder.tags());
        assert_eq!(decoded[4].1, Action::sweep(CLAWD, recipient).encode_params());
    }

    #[test]
    fn test_build_calldata() {
        let builder: ActionStreamBuilder = [Action::close_currency(WETH)].into_iter().collect();
        let calldata = builder.build_calldata(U256::from(1800)).unwrap();
        let call = IPositionManager::modifyLiquiditiesCall::abi_decode(&calldata, true).unwrap();
        assert_eq!(call.unlockData, builder.build().unwrap());
        assert_eq!(call.deadline, U256::from(1800));
    }

    #[test]
    fn test_empty_builder() {
        let builder = ActionStreamBuilder::new();
        assert!(builder.is_empty());
        assert!(decode_action_stream(&builder.build().unwrap()).unwrap().is_empty());
    }
}
