//! Voucher engine: redemption, name binding, administration, and queries.
//!
//! Every mutating call validates completely before it touches any store, so a
//! rejected call leaves the replay guard, quota ledger, allocator and name
//! registry exactly as they were.

use crate::allocator::PassAllocator;
use crate::error::RegistryError;
use crate::events::RegistryEvent;
use crate::length::LengthValidator;
use crate::names::NameRegistry;
use crate::quota::{QuotaLedger, QuotaRecord};
use crate::replay::ReplayGuard;
use crate::voucher::{NameOutcome, Redemption, VoucherKind, VoucherRequest};
use lockpass_crypto::{
    bound_voucher_message, open_voucher_message, signature_fingerprint, Ed25519Verifier,
    SignatureError, SignatureVerifier, VoucherSignature,
};
use lockpass_store::{RoleStore, StoreError, TokenLedger};
use lockpass_types::{Address, Fingerprint, Pass, PassClass, PassId, RegistryParams};
use std::collections::HashMap;

/// How a redemption changes the quota ledger.
#[derive(Clone, Copy, Debug)]
enum QuotaChange {
    /// First bound voucher for the recipient.
    Initialize(PassClass),
    /// Open voucher: the issuer spends one invitation.
    Consume(Address),
}

/// A fully validated redemption, ready to commit.
#[derive(Debug)]
struct RedemptionPlan {
    kind: VoucherKind,
    issuer: Address,
    primary: PassId,
    class: PassClass,
    bonus: Vec<PassId>,
    quota: QuotaChange,
    signature: Fingerprint,
}

impl RedemptionPlan {
    fn minted(&self) -> impl Iterator<Item = PassId> + '_ {
        std::iter::once(self.primary).chain(self.bonus.iter().copied())
    }
}

/// Orchestrates voucher redemption over the external ledger and role store.
pub struct VoucherEngine<L, R, V = Ed25519Verifier> {
    params: RegistryParams,
    ledger: L,
    roles: R,
    verifier: V,
    validator: LengthValidator,
    replay: ReplayGuard,
    quota: QuotaLedger,
    allocator: PassAllocator,
    names: NameRegistry,
    passes: HashMap<PassId, Pass>,
    /// Pending events for the host to process.
    pending_events: Vec<RegistryEvent>,
}

impl<L: TokenLedger, R: RoleStore> VoucherEngine<L, R, Ed25519Verifier> {
    pub fn new(params: RegistryParams, ledger: L, roles: R) -> Self {
        Self::with_verifier(params, ledger, roles, Ed25519Verifier)
    }
}

impl<L: TokenLedger, R: RoleStore, V: SignatureVerifier> VoucherEngine<L, R, V> {
    pub fn with_verifier(params: RegistryParams, ledger: L, roles: R, verifier: V) -> Self {
        Self {
            validator: LengthValidator::from_params(&params),
            quota: QuotaLedger::new(params.invitation_allotment),
            allocator: PassAllocator::new(params.reserved_upper_bound),
            replay: ReplayGuard::new(),
            names: NameRegistry::new(),
            passes: HashMap::new(),
            pending_events: Vec::new(),
            params,
            ledger,
            roles,
            verifier,
        }
    }

    pub fn params(&self) -> &RegistryParams {
        &self.params
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn roles(&self) -> &R {
        &self.roles
    }

    // ── Redemption ───────────────────────────────────────────────────────

    /// Redeem a voucher on behalf of `caller`, minting to `caller`.
    ///
    /// A non-empty `request.name` is bound to the new pass afterwards. A
    /// naming failure is reported in [`Redemption::name`] and does not undo
    /// the mint.
    pub fn redeem(
        &mut self,
        caller: &Address,
        request: &VoucherRequest,
    ) -> Result<Redemption, RegistryError> {
        let plan = match self.plan_redemption(caller, request) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::debug!(
                    caller = %caller,
                    target = request.target,
                    class = %request.class,
                    error = %e,
                    "voucher rejected"
                );
                return Err(e);
            }
        };
        self.commit(caller, &plan)?;

        let name = if request.name.is_empty() {
            None
        } else {
            Some(
                match self.bind_to_pass(plan.primary, plan.class, &request.name) {
                    Ok(fingerprint) => NameOutcome::Bound(fingerprint),
                    Err(e) => {
                        tracing::debug!(pass_id = plan.primary, error = %e, "name not bound");
                        NameOutcome::Rejected(e)
                    }
                },
            )
        };

        Ok(Redemption {
            pass_id: plan.primary,
            class: plan.class,
            kind: plan.kind,
            bonus: plan.bonus,
            name,
        })
    }

    fn plan_redemption(
        &self,
        caller: &Address,
        request: &VoucherRequest,
    ) -> Result<RedemptionPlan, RegistryError> {
        let fingerprint = signature_fingerprint(&request.signature);
        match request.kind() {
            VoucherKind::Bound => self.replay.check_bound(&fingerprint)?,
            VoucherKind::Open => {
                self.replay.check_open(&fingerprint, caller)?;
            }
        }

        let signature = VoucherSignature::parse(&request.signature)?;
        if signature.is_compact() && !self.params.accept_compact_codes {
            return Err(SignatureError::Malformed {
                len: request.signature.len(),
            }
            .into());
        }

        match request.kind() {
            VoucherKind::Bound => self.plan_bound(request, &signature, fingerprint),
            VoucherKind::Open => self.plan_open(request, &signature, fingerprint),
        }
    }

    fn plan_bound(
        &self,
        request: &VoucherRequest,
        signature: &VoucherSignature,
        fingerprint: Fingerprint,
    ) -> Result<RedemptionPlan, RegistryError> {
        let target = request.target;
        if self.passes.contains_key(&target)
            || self.allocator.is_allocated(target)
            || self.ledger.exists(target)?
        {
            return Err(RegistryError::TargetAlreadyConsumed(target));
        }

        // Compact codes never carry Inviter authority.
        if signature.is_compact() {
            return Err(RegistryError::InvalidIssuer);
        }
        let message = bound_voucher_message(target, request.class);
        let issuer = match self.verifier.recover(&message, signature) {
            Ok(issuer) => issuer,
            Err(SignatureError::Mismatch) => return Err(RegistryError::InvalidIssuer),
            Err(e) => return Err(e.into()),
        };
        if !self.roles.has_inviter_role(&issuer)? {
            return Err(RegistryError::InvalidIssuer);
        }

        self.allocator.check_explicit(target)?;
        let bonus = self
            .allocator
            .peek_next(self.params.bonus_passes.get(request.class))?;

        Ok(RedemptionPlan {
            kind: VoucherKind::Bound,
            issuer,
            primary: target,
            class: request.class,
            bonus,
            quota: QuotaChange::Initialize(request.class),
            signature: fingerprint,
        })
    }

    fn plan_open(
        &self,
        request: &VoucherRequest,
        signature: &VoucherSignature,
        fingerprint: Fingerprint,
    ) -> Result<RedemptionPlan, RegistryError> {
        if request.class != PassClass::C {
            return Err(RegistryError::InvalidTarget(format!(
                "open vouchers only mint class C, not {}",
                request.class
            )));
        }

        let message = open_voucher_message(request.class);
        let issuer = match self.verifier.recover(&message, signature) {
            Ok(issuer) => issuer,
            Err(SignatureError::Mismatch) => {
                return Err(RegistryError::InvalidTarget(
                    "voucher signer could not be established".into(),
                ))
            }
            Err(e) => return Err(e.into()),
        };
        if !self.holds_named_pass(&issuer)? {
            return Err(RegistryError::InvalidTarget(format!(
                "issuer {issuer} holds no named pass"
            )));
        }
        self.quota.check(&issuer)?;

        Ok(RedemptionPlan {
            kind: VoucherKind::Open,
            issuer,
            primary: self.allocator.check_next()?,
            class: PassClass::C,
            bonus: Vec::new(),
            quota: QuotaChange::Consume(issuer),
            signature: fingerprint,
        })
    }

    fn holds_named_pass(&self, holder: &Address) -> Result<bool, RegistryError> {
        Ok(self
            .ledger
            .passes_of(holder)?
            .iter()
            .any(|id| self.passes.get(id).is_some_and(Pass::is_named)))
    }

    fn commit(&mut self, caller: &Address, plan: &RedemptionPlan) -> Result<(), RegistryError> {
        for id in plan.minted() {
            if self.ledger.exists(id)? {
                return Err(StoreError::Duplicate(id).into());
            }
        }
        let mut minted = Vec::with_capacity(plan.bonus.len() + 1);
        for id in plan.minted() {
            if let Err(e) = self.ledger.mint(caller, id) {
                self.roll_back_mints(&minted);
                return Err(e.into());
            }
            minted.push(id);
        }

        match plan.kind {
            VoucherKind::Bound => {
                self.allocator.allocate_explicit(plan.primary)?;
            }
            VoucherKind::Open => {
                self.allocator.allocate_next()?;
            }
        }
        for _ in &plan.bonus {
            self.allocator.allocate_next()?;
        }

        match plan.quota {
            QuotaChange::Initialize(class) => {
                if self.quota.initialize(caller, class) {
                    tracing::debug!(address = %caller, class = %class, "invitation quota granted");
                }
            }
            QuotaChange::Consume(issuer) => {
                let remaining = self.quota.consume_one(&issuer)?;
                tracing::debug!(issuer = %issuer, remaining, "invitation spent");
            }
        }
        match plan.kind {
            VoucherKind::Bound => {
                self.replay.consume(plan.signature);
            }
            VoucherKind::Open => self.replay.consume_open(plan.signature, caller),
        }

        self.record_pass(plan.primary, plan.class, caller, Some(plan.issuer));
        for &id in &plan.bonus {
            self.record_pass(id, PassClass::C, caller, None);
        }
        Ok(())
    }

    /// Burn passes minted by a redemption that failed partway through.
    fn roll_back_mints(&self, minted: &[PassId]) {
        if minted.is_empty() {
            return;
        }
        tracing::warn!(count = minted.len(), "ledger failed mid-redemption, rolling back");
        for &id in minted.iter().rev() {
            if let Err(e) = self.ledger.burn(id) {
                tracing::error!(pass_id = id, error = %e, "could not roll back minted pass");
            }
        }
    }

    fn record_pass(
        &mut self,
        pass_id: PassId,
        class: PassClass,
        owner: &Address,
        issuer: Option<Address>,
    ) {
        self.passes.insert(pass_id, Pass::new(pass_id, class));
        tracing::info!(pass_id, class = %class, owner = %owner, "pass locked");
        self.pending_events.push(RegistryEvent::PassLocked {
            pass_id,
            class,
            owner: *owner,
            issuer,
        });
    }

    // ── Names ────────────────────────────────────────────────────────────

    /// Bind `name` to a pass held by `caller`.
    pub fn bind_name(
        &mut self,
        caller: &Address,
        pass_id: PassId,
        name: &str,
    ) -> Result<Fingerprint, RegistryError> {
        let class = self
            .passes
            .get(&pass_id)
            .map(|pass| pass.class)
            .ok_or(RegistryError::PassNotFound(pass_id))?;
        let owner = self.ledger.owner_of(pass_id).map_err(|e| match e {
            StoreError::NotFound(id) => RegistryError::PassNotFound(id),
            other => other.into(),
        })?;
        if owner != *caller {
            return Err(RegistryError::NotOwner(pass_id));
        }
        self.bind_to_pass(pass_id, class, name)
    }

    fn bind_to_pass(
        &mut self,
        pass_id: PassId,
        class: PassClass,
        name: &str,
    ) -> Result<Fingerprint, RegistryError> {
        let fingerprint = self.names.bind(&self.validator, pass_id, class, name)?;
        self.mark_named(pass_id, fingerprint, name);
        Ok(fingerprint)
    }

    fn mark_named(&mut self, pass_id: PassId, fingerprint: Fingerprint, name: &str) {
        if let Some(pass) = self.passes.get_mut(&pass_id) {
            pass.name = Some(fingerprint);
        }
        tracing::info!(pass_id, fingerprint = %fingerprint, "name locked");
        self.pending_events.push(RegistryEvent::NameLocked {
            pass_id,
            fingerprint,
            name: name.to_string(),
        });
    }

    // ── Administration ───────────────────────────────────────────────────

    fn require_admin(&self, caller: &Address) -> Result<(), RegistryError> {
        if !self.roles.is_admin(caller)? {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    /// Withhold names from public binding. Returns the newly reserved ones.
    pub fn reserve_names(
        &mut self,
        caller: &Address,
        fingerprints: &[Fingerprint],
    ) -> Result<Vec<Fingerprint>, RegistryError> {
        self.require_admin(caller)?;
        let added = self.names.reserve(fingerprints);
        tracing::info!(count = added.len(), admin = %caller, "names reserved");
        self.pending_events.push(RegistryEvent::NamesReserved {
            fingerprints: added.clone(),
        });
        Ok(added)
    }

    /// Lift reservations. Returns the ones that were reserved.
    pub fn unreserve_names(
        &mut self,
        caller: &Address,
        fingerprints: &[Fingerprint],
    ) -> Result<Vec<Fingerprint>, RegistryError> {
        self.require_admin(caller)?;
        let removed = self.names.unreserve(fingerprints);
        tracing::info!(count = removed.len(), admin = %caller, "names unreserved");
        self.pending_events.push(RegistryEvent::NamesUnreserved {
            fingerprints: removed.clone(),
        });
        Ok(removed)
    }

    /// Mint the next auto-allocated class-C pass to `recipient` with a
    /// reserved `name` already bound. The length rule does not apply.
    pub fn release_and_mint(
        &mut self,
        caller: &Address,
        name: &str,
        recipient: &Address,
    ) -> Result<PassId, RegistryError> {
        self.require_admin(caller)?;
        self.names.check_release(name)?;
        let pass_id = self.allocator.check_next()?;
        if self.ledger.exists(pass_id)? {
            return Err(StoreError::Duplicate(pass_id).into());
        }

        self.ledger.mint(recipient, pass_id)?;
        self.allocator.allocate_next()?;
        self.record_pass(pass_id, PassClass::C, recipient, None);
        let fingerprint = self.names.release_and_bind(pass_id, name)?;
        if let Some(pass) = self.passes.get_mut(&pass_id) {
            pass.name = Some(fingerprint);
        }

        tracing::info!(
            pass_id,
            fingerprint = %fingerprint,
            recipient = %recipient,
            "reserved name minted"
        );
        self.pending_events.push(RegistryEvent::ReservedNameMinted {
            pass_id,
            fingerprint,
            recipient: *recipient,
        });
        Ok(pass_id)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn pass_info(&self, pass_id: PassId) -> Option<&Pass> {
        self.passes.get(&pass_id)
    }

    /// Passes currently held by `holder`, ascending.
    pub fn passes_of(&self, holder: &Address) -> Result<Vec<PassId>, RegistryError> {
        Ok(self.ledger.passes_of(holder)?)
    }

    pub fn passes_info_of(&self, holder: &Address) -> Result<Vec<Pass>, RegistryError> {
        Ok(self
            .passes_of(holder)?
            .into_iter()
            .filter_map(|id| self.passes.get(&id).cloned())
            .collect())
    }

    pub fn name_by_fingerprint(&self, fingerprint: &Fingerprint) -> Result<&str, RegistryError> {
        self.names
            .name_of(fingerprint)
            .ok_or(RegistryError::NameNotFound)
    }

    pub fn pass_by_fingerprint(&self, fingerprint: &Fingerprint) -> Result<PassId, RegistryError> {
        self.names
            .pass_of(fingerprint)
            .ok_or(RegistryError::NameNotFound)
    }

    /// Current ledger holder of the pass a name is bound to.
    pub fn owner_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Address, RegistryError> {
        let pass_id = self.pass_by_fingerprint(fingerprint)?;
        Ok(self.ledger.owner_of(pass_id)?)
    }

    pub fn quota_of(&self, address: &Address) -> Option<QuotaRecord> {
        self.quota.record(address).copied()
    }

    pub fn remaining_quota(&self, address: &Address, class: PassClass) -> u32 {
        self.quota.remaining(address, class)
    }

    pub fn is_reserved(&self, fingerprint: &Fingerprint) -> bool {
        self.names.is_reserved(fingerprint)
    }

    pub fn is_name_reserved(&self, name: &str) -> bool {
        self.names.is_reserved(&Self::name_fingerprint(name))
    }

    pub fn len_valid(&self, minimum: u32, name: &str) -> bool {
        self.validator.is_valid(minimum, name)
    }

    pub fn name_fingerprint(name: &str) -> Fingerprint {
        lockpass_crypto::name_fingerprint(name)
    }

    /// Whether these exact signature bytes were accepted as a bound voucher.
    pub fn is_signature_consumed(&self, signature: &[u8]) -> bool {
        self.replay.is_consumed(&signature_fingerprint(signature))
    }

    /// Whether these exact signature bytes were accepted as an open voucher
    /// by at least one recipient.
    pub fn is_open_signature_accepted(&self, signature: &[u8]) -> bool {
        self.replay.is_open_accepted(&signature_fingerprint(signature))
    }

    /// Identifier the next open voucher or reserved-name mint will receive.
    pub fn next_pass_id(&self) -> PassId {
        self.allocator.next_auto()
    }

    /// Drain pending events for the host to process.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
