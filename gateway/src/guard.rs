//! Reentrancy lock.
//!
//! The flag lives in contract storage so that a contract called during an
//! outbound transfer observes it. `acquire` is taken when the transfer is
//! dispatched and `release` runs in the reply that confirms it. A failing
//! call never needs an explicit release: the host reverts the whole
//! transaction, the lock write included.

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::REENTRANCY_LOCK;

pub fn is_locked(storage: &dyn Storage) -> StdResult<bool> {
    Ok(REENTRANCY_LOCK.may_load(storage)?.unwrap_or(false))
}

/// Fail with `Reentrant` if a transfer is in flight.
pub fn ensure_unlocked(storage: &dyn Storage) -> Result<(), ContractError> {
    if is_locked(storage)? {
        return Err(ContractError::Reentrant);
    }
    Ok(())
}

pub fn acquire(storage: &mut dyn Storage) -> Result<(), ContractError> {
    ensure_unlocked(storage)?;
    REENTRANCY_LOCK.save(storage, &true)?;
    Ok(())
}

pub fn release(storage: &mut dyn Storage) -> StdResult<()> {
    REENTRANCY_LOCK.save(storage, &false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn unset_lock_reads_as_free() {
        let storage = MockStorage::new();
        assert!(!is_locked(&storage).unwrap());
    }

    #[test]
    fn second_acquire_is_reentrant() {
        let mut storage = MockStorage::new();
        acquire(&mut storage).unwrap();
        assert_eq!(acquire(&mut storage), Err(ContractError::Reentrant));

        release(&mut storage).unwrap();
        acquire(&mut storage).unwrap();
    }
}
