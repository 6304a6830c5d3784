use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("nothing to report: the prediction run is empty")]
    EmptyRun,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
