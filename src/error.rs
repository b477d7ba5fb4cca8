use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown activity `{0}`")]
    UnknownActivity(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
