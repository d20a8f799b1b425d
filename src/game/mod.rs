pub mod agent;
pub mod player;
pub mod turn;

pub use agent::{AgentMove, RandomAgent};
pub use player::{Player, PlayerKind};
pub use turn::{EndRule, NeverEnds, TurnController, TurnState, THINKING_DELAY};
