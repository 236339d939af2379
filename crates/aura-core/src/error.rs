use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("wellness score {0} is outside [0, 100]")]
    ScoreOutOfRange(u32),
}
