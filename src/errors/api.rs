use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    ApiCallError(String),
    RpcError { code: i64, message: String },
    CouldNotFindPrice { assets: Vec<String> },
    DeserializationError(String),
    InvalidAbiWord(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ApiCallError(error) => write!(f, "API call failed: {error}"),
            ApiError::RpcError { code, message } => {
                write!(f, "RPC node answered with error {code}: {message}")
            }
            ApiError::CouldNotFindPrice { assets } => {
                let assets_string = assets.join(", ");
                write!(f, "Couldn't find price for assets: {assets_string} ")
            }
            ApiError::DeserializationError(e) => {
                write!(f, "Error during serde deserialisation: {e} ")
            }
            ApiError::InvalidAbiWord(word) => {
                write!(f, "Malformed uint256 word in call result: {word}")
            }
        }
    }
}
