pub use actions::{Action, ActionTag};
pub use builder::ActionStreamBuilder;
pub use codec::{decode_action_stream, encode_action, encode_action_stream, encode_modify_liquidities, validate_params};
pub use plans::{IncreasePlan, MintPlan, RemovePlan, DEFAULT_SLIPPAGE_BPS};
pub use position::Position;
pub use position_info::{decode_position_info, decode_position_info_with, encode_position_info, PositionInfo, PositionInfoLayout};

mod actions;
mod builder;
mod codec;
mod plans;
mod position;
mod position_info;
