use soroban_sdk::{log, Address, Env};

use crate::error::SupplyChainError;
use crate::events;
use crate::types::{DataKey, Role};

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::HasRole(role, account.clone()))
        .unwrap_or(false)
}

/// Guard run at the top of every role-gated entry point, after the caller
/// has authenticated.
pub fn require_role(env: &Env, role: Role, caller: &Address) -> Result<(), SupplyChainError> {
    if !has_role(env, role, caller) {
        log!(
            env,
            "access denied: {} lacks role {}",
            caller.clone(),
            role as u32
        );
        return Err(SupplyChainError::Unauthorized);
    }
    Ok(())
}

/// Every role, including the admin role itself, is administered by `Admin`.
pub fn get_role_admin(_role: Role) -> Role {
    Role::Admin
}

pub fn grant_role(
    env: &Env,
    sender: &Address,
    role: Role,
    account: &Address,
) -> Result<(), SupplyChainError> {
    require_role(env, get_role_admin(role), sender)?;
    grant(env, sender, role, account)
}

pub fn revoke_role(
    env: &Env,
    sender: &Address,
    role: Role,
    account: &Address,
) -> Result<(), SupplyChainError> {
    require_role(env, get_role_admin(role), sender)?;
    revoke(env, sender, role, account);
    Ok(())
}

pub fn renounce_role(env: &Env, account: &Address, role: Role) {
    revoke(env, account, role, account);
}

/// Grant without the role-admin check, used by `grant_role` and during
/// initialization. An account holds at most one operational role; `Admin`
/// is not counted.
pub(crate) fn grant(
    env: &Env,
    sender: &Address,
    role: Role,
    account: &Address,
) -> Result<(), SupplyChainError> {
    if has_role(env, role, account) {
        return Ok(());
    }
    if role != Role::Admin {
        for held in Role::OPERATIONAL {
            if held != role && has_role(env, held, account) {
                log!(
                    env,
                    "role conflict: {} already holds role {}",
                    account.clone(),
                    held as u32
                );
                return Err(SupplyChainError::RoleConflict);
            }
        }
    }
    env.storage()
        .persistent()
        .set(&DataKey::HasRole(role, account.clone()), &true);
    events::emit_role_granted(env, role, account.clone(), sender.clone());
    Ok(())
}

fn revoke(env: &Env, sender: &Address, role: Role, account: &Address) {
    if !has_role(env, role, account) {
        return;
    }
    env.storage()
        .persistent()
        .remove(&DataKey::HasRole(role, account.clone()));
    events::emit_role_revoked(env, role, account.clone(), sender.clone());
}
