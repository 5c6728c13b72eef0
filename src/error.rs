use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read feed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trip table: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed station document: {0}")]
    Json(#[from] serde_json::Error),
}
