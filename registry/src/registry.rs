//! The escrow/registry state machine.

use std::sync::Mutex;

use facet_ledger::LedgerFactory;
use facet_store::{AssetRegistry, FractionalisationRecord, RecordStore};
use facet_types::{Address, Amount, AssetHandle, LedgerId};

use crate::error::RegistryError;
use crate::escrow::EscrowBook;

/// Everything the registry mutates, guarded by one mutex.
///
/// The record store, the ledgers, and the escrow accounting always change
/// together under the same lock, so readers observe either the pre-state or
/// the post-state of an operation, never a partial one.
struct WorldState<R: RecordStore> {
    records: R,
    ledgers: LedgerFactory,
    escrow: EscrowBook,
}

/// The registry: locks assets into escrow exactly once and mediates
/// purchases of fractional units against the resulting records.
///
/// Generic over the external [`AssetRegistry`] collaborator and the
/// [`RecordStore`] backend; the core never touches a concrete
/// implementation of either.
///
/// All mutating operations serialize through the internal world-state
/// mutex — equivalent to a single global lock held for the duration of
/// each call. That serialization is what makes the already-locked and
/// supply-bound checks race-free.
pub struct FractionalisationRegistry<A: AssetRegistry, R: RecordStore> {
    /// The registry's own account: custodian of locked assets and recorded
    /// creator (mint authority) of every fractional ledger.
    escrow_address: Address,
    assets: A,
    world: Mutex<WorldState<R>>,
}

impl<A: AssetRegistry, R: RecordStore> FractionalisationRegistry<A, R> {
    pub fn new(escrow_address: Address, assets: A, records: R) -> Self {
        Self {
            escrow_address,
            assets,
            world: Mutex::new(WorldState {
                records,
                ledgers: LedgerFactory::new(),
                escrow: EscrowBook::new(),
            }),
        }
    }

    /// The account holding escrowed assets and payments.
    pub fn escrow_address(&self) -> &Address {
        &self.escrow_address
    }

    /// Lock `asset` into escrow and create its fractional ledger.
    ///
    /// The caller must currently own the asset and must have approved the
    /// registry's escrow account for the custody transfer. On success the
    /// fractionalisation record is persisted with zero units sold and the
    /// deterministic ledger identity is returned.
    ///
    /// All-or-nothing: every validation runs before the external custody
    /// transfer, and the ledger/record commit happens only after the
    /// transfer succeeded, so a rejection at any step leaves no effects.
    pub fn lock_and_fractionalise(
        &self,
        asset: &AssetHandle,
        total_supply: Amount,
        price_per_unit: Amount,
        caller: &Address,
    ) -> Result<LedgerId, RegistryError> {
        let mut world = self.world.lock().unwrap();

        if total_supply.is_zero() {
            tracing::warn!(%asset, "lock rejected: zero total supply");
            return Err(RegistryError::ZeroSupply);
        }

        // The locked check runs before the ownership check: once locked,
        // custody sits with the escrow account, and a repeat lock must
        // report AlreadyLocked no matter who asks. The record check and the
        // factory check are evaluated under the same lock; a record without
        // a ledger (or the reverse) is a bug.
        let ledger_id = LedgerId::for_asset(asset);
        if world.records.get_record(&ledger_id)?.is_some() || world.ledgers.contains(&ledger_id) {
            tracing::warn!(%asset, ledger = %ledger_id, "lock rejected: already locked");
            return Err(RegistryError::AlreadyLocked(asset.clone()));
        }
        match self.assets.owner_of(asset) {
            Some(ref owner) if owner == caller => {}
            _ => {
                tracing::warn!(%asset, %caller, "lock rejected: caller is not the owner");
                return Err(RegistryError::Unauthorized {
                    caller: caller.clone(),
                    asset: asset.clone(),
                });
            }
        }

        // External custody transfer before any state is written: a rejection
        // here aborts with nothing to roll back. The collaborator holds no
        // handle back into the registry, so it cannot re-enter while the
        // world lock is held.
        self.assets
            .transfer_from(&self.escrow_address, caller, &self.escrow_address, asset)
            .map_err(|e| {
                tracing::warn!(%asset, %caller, "custody transfer rejected: {e}");
                RegistryError::TransferFailed(e.to_string())
            })?;

        world.ledgers.create(ledger_id, self.escrow_address.clone())?;
        let record = FractionalisationRecord {
            asset: asset.clone(),
            original_owner: caller.clone(),
            ledger_id,
            total_supply,
            price_per_unit,
            total_sold: Amount::ZERO,
            is_locked: true,
        };
        if let Err(e) = world.records.put_record(&record) {
            // Undo the two steps that already happened so the failed lock
            // leaves no observable effects. Custody return cannot be
            // rejected (the escrow account owns the asset at this point);
            // if it is, the collaborator itself is broken.
            world.ledgers.remove(&ledger_id);
            if let Err(return_err) = self.assets.transfer_from(
                &self.escrow_address,
                &self.escrow_address,
                caller,
                asset,
            ) {
                tracing::error!(
                    %asset,
                    owner = %caller,
                    "custody return failed during lock rollback: {return_err}"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            %asset,
            ledger = %ledger_id,
            owner = %caller,
            supply = %total_supply,
            price = %price_per_unit,
            "asset locked and fractionalised"
        );
        Ok(ledger_id)
    }

    /// Purchase `quantity` fractional units from the record at `ledger_id`.
    ///
    /// `paid_amount` must equal `quantity * price_per_unit` exactly; over-
    /// and underpayment are both rejected. The payment is retained in
    /// escrow. Minting and the accounting update commit together or not at
    /// all.
    pub fn buy_fractional_tokens(
        &self,
        ledger_id: &LedgerId,
        quantity: Amount,
        paid_amount: Amount,
        buyer: &Address,
    ) -> Result<(), RegistryError> {
        let mut world = self.world.lock().unwrap();

        let mut record = match world.records.get_record(ledger_id)? {
            Some(r) if r.is_locked => r,
            _ => {
                tracing::warn!(ledger = %ledger_id, "purchase rejected: not locked");
                return Err(RegistryError::NotLocked(*ledger_id));
            }
        };
        if quantity.is_zero() {
            tracing::warn!(ledger = %ledger_id, "purchase rejected: zero quantity");
            return Err(RegistryError::ZeroQuantity);
        }
        let expected = quantity
            .checked_mul(record.price_per_unit)
            .ok_or(RegistryError::Overflow)?;
        if paid_amount != expected {
            tracing::warn!(
                ledger = %ledger_id,
                %expected,
                paid = %paid_amount,
                "purchase rejected: inexact payment"
            );
            return Err(RegistryError::InvalidAmount {
                expected,
                paid: paid_amount,
            });
        }
        let new_sold = record
            .total_sold
            .checked_add(quantity)
            .ok_or(RegistryError::Overflow)?;
        if new_sold > record.total_supply {
            tracing::warn!(
                ledger = %ledger_id,
                requested = %quantity,
                remaining = %record.remaining_supply(),
                "purchase rejected: supply exceeded"
            );
            return Err(RegistryError::SupplyExceeded {
                requested: quantity,
                remaining: record.remaining_supply(),
            });
        }
        let new_escrow = world
            .escrow
            .credited(ledger_id, paid_amount)
            .ok_or(RegistryError::Overflow)?;

        // Commit. Everything below was validated above: the record write is
        // the only step that can genuinely fail and it runs first, the mint
        // cannot be rejected (the registry is the recorded creator and
        // issuance is bounded by the supply just checked), and the escrow
        // total was computed with checked arithmetic before any mutation.
        record.total_sold = new_sold;
        world.records.put_record(&record)?;
        world
            .ledgers
            .get_mut(ledger_id)
            .ok_or(RegistryError::NotLocked(*ledger_id))?
            .mint(&self.escrow_address, buyer, quantity)?;
        world.escrow.hold(*ledger_id, new_escrow);

        tracing::info!(
            ledger = %ledger_id,
            %buyer,
            units = %quantity,
            paid = %paid_amount,
            sold = %new_sold,
            "fractional units purchased"
        );
        Ok(())
    }

    /// The ledger identity `lock_and_fractionalise` computes for `asset`.
    ///
    /// Pure derivation, no state access: the result is the same before and
    /// after the asset is locked.
    pub fn fractional_ledger_id(&self, asset: &AssetHandle) -> LedgerId {
        LedgerId::for_asset(asset)
    }

    /// Read-only projection of the record at `ledger_id`.
    pub fn token_details(
        &self,
        ledger_id: &LedgerId,
    ) -> Result<FractionalisationRecord, RegistryError> {
        let world = self.world.lock().unwrap();
        world
            .records
            .get_record(ledger_id)?
            .ok_or(RegistryError::NotFound(*ledger_id))
    }

    /// Fractional-unit balance of `holder` on the ledger at `ledger_id`.
    pub fn balance_of(
        &self,
        ledger_id: &LedgerId,
        holder: &Address,
    ) -> Result<Amount, RegistryError> {
        let world = self.world.lock().unwrap();
        world
            .ledgers
            .get(ledger_id)
            .map(|l| l.balance_of(holder))
            .ok_or(RegistryError::NotFound(*ledger_id))
    }

    /// Total fractional units issued by the ledger at `ledger_id`.
    pub fn total_issued(&self, ledger_id: &LedgerId) -> Result<Amount, RegistryError> {
        let world = self.world.lock().unwrap();
        world
            .ledgers
            .get(ledger_id)
            .map(|l| l.total_issued())
            .ok_or(RegistryError::NotFound(*ledger_id))
    }

    /// Payment value retained in escrow for the ledger at `ledger_id`.
    ///
    /// Always equals `total_sold * price_per_unit` of the record; no
    /// operation moves value out.
    pub fn escrowed_payments(&self, ledger_id: &LedgerId) -> Result<Amount, RegistryError> {
        let world = self.world.lock().unwrap();
        if !world.ledgers.contains(ledger_id) {
            return Err(RegistryError::NotFound(*ledger_id));
        }
        Ok(world.escrow.held(ledger_id))
    }

    /// Number of fractionalisation records ever created.
    pub fn record_count(&self) -> Result<u64, RegistryError> {
        let world = self.world.lock().unwrap();
        Ok(world.records.record_count()?)
    }
}
