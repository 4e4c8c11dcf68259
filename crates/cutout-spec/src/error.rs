pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid display configuration: {message}")]
    InvalidDisplay { message: String },

    #[error("Invalid path data `{data}`: {message}")]
    PathData { data: String, message: String },
}
