use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("no commands found in given path")]
    NoCommandsFound,
    #[error("unsupported command `{segment}` will be ignored")]
    UnsupportedCommand { segment: String },
    #[error("command would produce more than {limit} points")]
    TooManyPoints { limit: usize },
}
