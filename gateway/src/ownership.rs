//! Owner access control.
//!
//! Owner-only handlers take an `AccessControl` implementation instead of
//! reading storage directly, so tests can substitute their own.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

pub trait AccessControl {
    fn owner(&self, storage: &dyn Storage) -> StdResult<Addr>;

    fn set_owner(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()>;

    fn is_owner(&self, storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
        Ok(self.owner(storage)? == *account)
    }

    fn assert_owner(&self, storage: &dyn Storage, account: &Addr) -> Result<(), ContractError> {
        if !self.is_owner(storage, account)? {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Replace the owner, returning the previous one. Callers gate this
    /// with `assert_owner`.
    fn transfer_ownership(&self, storage: &mut dyn Storage, new_owner: &Addr) -> StdResult<Addr> {
        let previous = self.owner(storage)?;
        self.set_owner(storage, new_owner)?;
        Ok(previous)
    }
}

/// Owner kept in a single storage item
pub struct StoredOwner<'a>(Item<'a, Addr>);

impl<'a> StoredOwner<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        StoredOwner(Item::new(namespace))
    }
}

impl AccessControl for StoredOwner<'_> {
    fn owner(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.0.load(storage)
    }

    fn set_owner(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
        self.0.save(storage, owner)
    }
}

pub const OWNERSHIP: StoredOwner = StoredOwner::new("owner");

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn stored_owner_round_trip() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        OWNERSHIP.set_owner(&mut storage, &owner).unwrap();

        assert!(OWNERSHIP.is_owner(&storage, &owner).unwrap());
        assert_eq!(
            OWNERSHIP.assert_owner(&storage, &Addr::unchecked("mallory")),
            Err(ContractError::Unauthorized)
        );
    }

    #[test]
    fn transfer_returns_previous_owner() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");
        let next = Addr::unchecked("next");
        OWNERSHIP.set_owner(&mut storage, &owner).unwrap();

        let previous = OWNERSHIP.transfer_ownership(&mut storage, &next).unwrap();
        assert_eq!(previous, owner);
        assert_eq!(OWNERSHIP.owner(&storage).unwrap(), next);
        assert!(!OWNERSHIP.is_owner(&storage, &owner).unwrap());
    }
}
