use crate::core::MoveOutcome;

pub struct GameRenderState {
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
}
