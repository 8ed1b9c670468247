/// Failure conditions surfaced by the analysis pipeline.
///
/// Every variant is local to a single call; the engine holds no state a failed
/// call could corrupt, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid asset: {0}")]
    InvalidAsset(String),
    #[error("invalid event: {0}")]
    InvalidEvent(String),
    #[error("unsupported asset type '{0}'")]
    UnsupportedAssetType(String),
    #[error("unsupported event type '{0}'")]
    UnsupportedEventType(String),
    #[error("baseline stress score is zero; risk reduction ratio is undefined")]
    DegenerateBaseline,
    #[error("at least one scenario is required")]
    NoScenarios,
}
