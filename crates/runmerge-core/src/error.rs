use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunMergeError {
    #[error("Cannot merge sales with different days: {left_day} and {right_day}")]
    InvalidMerge { left_day: i32, right_day: i32 },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RunMergeError>;
