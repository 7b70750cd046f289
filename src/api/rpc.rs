use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/* Minimal JSON-RPC 2.0 client. The only method the tracker needs is
eth_call against the latest block, so that is all this exposes. */

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'a str,
    method: &'a str,
    params: (CallParams<'a>, &'a str),
    id: u32,
}

#[derive(Debug, Serialize)]
struct CallParams<'a> {
    to: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RpcResponse {
    pub result: Option<String>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

pub struct RpcClient {
    endpoint: String,
    client: reqwest::Client,
}

impl RpcClient {
    pub fn new(endpoint: String) -> Self {
        return RpcClient {
            endpoint,
            client: reqwest::Client::new(),
        };
    }

    /* Returns the raw hex word of a view call, or the node's error. */
    pub async fn eth_call(&self, to: &str, data: &str) -> Result<String, ApiError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "eth_call",
            params: (CallParams { to, data }, "latest"),
            id: 1,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

        let rpc_response: RpcResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        if let Some(error) = rpc_response.error {
            return Err(ApiError::RpcError {
                code: error.code,
                message: error.message,
            });
        }

        match rpc_response.result {
            Some(word) => Ok(word),
            None => Err(ApiError::RpcError {
                code: 0,
                message: String::from("response carried neither result nor error"),
            }),
        }
    }
}

/* Decodes one 32-byte ABI word into an unsigned integer. Values wider than
u128 are refused rather than truncated. */
pub fn decode_uint(word: &str) -> Result<u128, ApiError> {
    let trimmed = word.strip_prefix("0x").unwrap_or(word);
    let bytes = hex::decode(trimmed).map_err(|e| ApiError::InvalidAbiWord(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(ApiError::InvalidAbiWord(word.to_string()));
    }

    let (high, low) = bytes.split_at(16);
    if high.iter().any(|byte| *byte != 0) {
        return Err(ApiError::InvalidAbiWord(word.to_string()));
    }

    let mut value: u128 = 0;
    for byte in low {
        value = (value << 8) | *byte as u128;
    }
    return Ok(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_uint_reads_a_big_endian_word() {
        // 1e18, the reserve factor mantissa scale
        let word = "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000";
        assert_eq!(decode_uint(word).unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn decode_uint_accepts_bare_words() {
        let word = "00000000000000000000000000000000000000000000000000000000000000ff";
        assert_eq!(decode_uint(word).unwrap(), 255);
    }

    #[test]
    fn decode_uint_rejects_short_words() {
        assert!(decode_uint("0x00ff").is_err());
    }

    #[test]
    fn decode_uint_rejects_non_hex_input() {
        let word = "0x00000000000000000000000000000000000000000000000000000000000000zz";
        assert!(decode_uint(word).is_err());
    }

    #[test]
    fn decode_uint_rejects_values_wider_than_u128() {
        let word = "0x0000000000000000000000000001000000000000000000000000000000000000";
        assert!(decode_uint(word).is_err());
    }

    #[test]
    fn test_deserialize_call_result() {
        let json_data = r#"
        {
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x00000000000000000000000000000000000000000000000000000002540be400"
        }
        "#;

        let response: RpcResponse = serde_json::from_str(json_data).unwrap();
        let word = response.result.unwrap();
        assert_eq!(decode_uint(&word).unwrap(), 10_000_000_000);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_deserialize_node_error() {
        let json_data = r#"
        {
            "jsonrpc": "2.0",
            "id": 1,
            "error": {
                "code": -32000,
                "message": "execution reverted"
            }
        }
        "#;

        let response: RpcResponse = serde_json::from_str(json_data).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32000);
        assert_eq!(error.message, "execution reverted");
    }
}
