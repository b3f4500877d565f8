use soroban_sdk::{log, token, Address, Env};

use crate::error::SupplyChainError;

/// Cost of `quantity` units at `unit_price`; overflow is rejected as invalid
/// input rather than wrapping.
pub fn total_cost(unit_price: i128, quantity: u64) -> Result<i128, SupplyChainError> {
    unit_price
        .checked_mul(quantity as i128)
        .ok_or(SupplyChainError::InvalidInput)
}

pub fn require_payment(
    env: &Env,
    payment: i128,
    unit_price: i128,
    quantity: u64,
) -> Result<(), SupplyChainError> {
    let due = total_cost(unit_price, quantity)?;
    if payment < due {
        log!(env, "payment {} below amount due {}", payment, due);
        return Err(SupplyChainError::InsufficientPayment);
    }
    Ok(())
}

/// Forward the attached payment to `payee` through the configured token.
///
/// Runs after the caller's state writes. A failed transfer surfaces as
/// `PaymentFailed`, and returning that error rolls the writes back together
/// with the transfer.
pub fn forward_payment(
    env: &Env,
    token_contract: &Address,
    payer: &Address,
    payee: &Address,
    amount: i128,
) -> Result<(), SupplyChainError> {
    if amount == 0 {
        return Ok(());
    }

    let token_client = token::Client::new(env, token_contract);
    match token_client.try_transfer(payer, payee, &amount) {
        Ok(Ok(())) => {
            log!(env, "forwarded {} to {}", amount, payee.clone());
            Ok(())
        }
        _ => {
            log!(env, "transfer of {} from {} failed", amount, payer.clone());
            Err(SupplyChainError::PaymentFailed)
        }
    }
}
