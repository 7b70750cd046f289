use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{decode_uint, PoolConfig, RpcClient};
use crate::errors::ApiError;
use crate::functions::{base_supply_rate, projected_supply_rate};

/* First four bytes of keccak256 of each view signature. The getters take no
arguments, so the selector is the whole calldata. */
const SELECTOR_GET_CASH: &str = "0x3b1d21a2"; // getCash()
const SELECTOR_TOTAL_BORROW: &str = "0x8285ef40"; // totalBorrow()
const SELECTOR_TOTAL_RESERVE: &str = "0x4c68df67"; // totalReserve()
const SELECTOR_RESERVE_FACTOR: &str = "0x4322b714"; // reserveFactor()

/* One snapshot of the figures the rate model consumes, in the pool's raw
on-chain units; reserve_factor is the 1e18-scaled mantissa. */
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PoolReserves {
    pub cash: u128,
    pub total_borrow: u128,
    pub total_reserve: u128,
    pub reserve_factor: u128,
}

impl PoolReserves {
    pub fn supply_rate(&self) -> f64 {
        return base_supply_rate(
            self.cash,
            self.total_borrow,
            self.total_reserve,
            self.reserve_factor,
        );
    }

    pub fn projected_supply_rate(&self, additional_deposit: u128) -> f64 {
        return projected_supply_rate(
            self.cash,
            self.total_borrow,
            self.total_reserve,
            self.reserve_factor,
            additional_deposit,
        );
    }
}

async fn read_uint(rpc: &RpcClient, pool_address: &str, selector: &str) -> Result<u128, ApiError> {
    let word = rpc.eth_call(pool_address, selector).await?;
    return decode_uint(&word);
}

#[tokio::main]
pub async fn fetch_pool_reserves(config: &PoolConfig) -> Result<PoolReserves, ApiError> {
    let rpc = RpcClient::new(config.rpc_url.clone());

    let cash = read_uint(&rpc, &config.pool_address, SELECTOR_GET_CASH).await?;
    let total_borrow = read_uint(&rpc, &config.pool_address, SELECTOR_TOTAL_BORROW).await?;
    let total_reserve = read_uint(&rpc, &config.pool_address, SELECTOR_TOTAL_RESERVE).await?;
    let reserve_factor = read_uint(&rpc, &config.pool_address, SELECTOR_RESERVE_FACTOR).await?;

    let reserves = PoolReserves {
        cash,
        total_borrow,
        total_reserve,
        reserve_factor,
    };
    debug!(?reserves, "fetched pool reserves");

    return Ok(reserves);
}
