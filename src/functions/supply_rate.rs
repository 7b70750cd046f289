/* Linear utilization model of a Compound-style lending pool: borrowers pay
BASE_RATE + RATE_SLOPE * utilization, and suppliers earn that borrow rate
weighted by utilization, minus the share diverted to protocol reserves. */

pub const BASE_RATE: f64 = 0.02;
pub const RATE_SLOPE: f64 = 0.18;

/* reserveFactor() comes back as a mantissa scaled by 1e18. */
const RESERVE_FACTOR_SCALE: f64 = 1e18;

pub fn base_supply_rate(
    cash: u128,
    borrowed: u128,
    reserves: u128,
    reserve_factor_raw: u128,
) -> f64 {
    return supply_rate(cash as f64, borrowed as f64, reserves as f64, reserve_factor_raw);
}

/* Same model with the hypothetical deposit already counted in the pool's
cash, which dilutes utilization and with it the supplier rate. */
pub fn projected_supply_rate(
    cash: u128,
    borrowed: u128,
    reserves: u128,
    reserve_factor_raw: u128,
    additional_deposit: u128,
) -> f64 {
    return supply_rate(
        cash as f64 + additional_deposit as f64,
        borrowed as f64,
        reserves as f64,
        reserve_factor_raw,
    );
}

fn supply_rate(cash: f64, borrowed: f64, reserves: f64, reserve_factor_raw: u128) -> f64 {
    let denom = cash + borrowed - reserves;
    if denom <= 0.0 {
        return 0.0;
    }

    let utilization = borrowed / denom;
    let borrow_rate = BASE_RATE + RATE_SLOPE * utilization;
    let reserve_factor = reserve_factor_raw as f64 / RESERVE_FACTOR_SCALE;

    return borrow_rate * utilization * (1.0 - reserve_factor);
}
