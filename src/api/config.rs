use std::env;

/* Defaults point at the USDC pool on Mode mainnet; both values can be
overridden through the environment (or a .env file loaded by the binary). */
pub const DEFAULT_RPC_URL: &str = "https://mainnet.mode.network";
pub const DEFAULT_POOL_ADDRESS: &str = "0xBa6e89c9cDa3d72B7D8D5B05547a29f9BdBDBaec";

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub rpc_url: String,
    pub pool_address: String,
}

impl PoolConfig {
    pub fn from_env() -> Self {
        let rpc_url = env::var("MODE_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let pool_address =
            env::var("POOL_ADDRESS").unwrap_or_else(|_| DEFAULT_POOL_ADDRESS.to_string());
        return PoolConfig {
            rpc_url,
            pool_address,
        };
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn missing_variables_fall_back_to_the_defaults() {
        env::remove_var("MODE_RPC_URL");
        env::remove_var("POOL_ADDRESS");

        let config = PoolConfig::from_env();

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.pool_address, DEFAULT_POOL_ADDRESS);
    }

    #[test]
    #[serial]
    fn environment_overrides_win() {
        env::set_var("MODE_RPC_URL", "http://localhost:8545");
        env::set_var("POOL_ADDRESS", "0x0000000000000000000000000000000000000001");

        let config = PoolConfig::from_env();

        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(
            config.pool_address,
            "0x0000000000000000000000000000000000000001"
        );

        env::remove_var("MODE_RPC_URL");
        env::remove_var("POOL_ADDRESS");
    }
}
