//! Set-difference matching and the orchestrating engine facade

use std::collections::HashSet;

use crate::locale::LocaleProfile;
use crate::normalizer::Normalizer;
use crate::reconciler::key::transaction_key;
use crate::types::{RawRow, ReconResult, ReconciliationResult, Transaction};
use crate::utils::validation;

/// Classify each side's transactions against the other by exact key equality.
///
/// Pure function: inputs are already-normalized transactions, outputs
/// preserve each input's order. Runs in O(n + m) via hash-set membership on
/// precomputed keys.
///
/// Duplicate transactions within one side collapse to a single key, so a
/// movement recorded twice on the same side is indistinguishable from the
/// same row imported twice. Known limitation; matching is set-based, not
/// count-aware.
///
/// An empty side is accepted here and simply leaves every transaction on the
/// other side unmatched; rejecting empty inputs up front is the caller's job
/// (see [`ReconciliationEngine::run`]).
pub fn reconcile(accounting: &[Transaction], bank: &[Transaction]) -> ReconciliationResult {
    let accounting_keys: HashSet<String> = accounting.iter().map(transaction_key).collect();
    let bank_keys: HashSet<String> = bank.iter().map(transaction_key).collect();

    // Dateless transactions get a fresh random key on every call, so they
    // can never be found in either key set and always end up reported.
    let missing_from_accounting: Vec<Transaction> = bank
        .iter()
        .filter(|tx| !accounting_keys.contains(&transaction_key(tx)))
        .cloned()
        .collect();

    let missing_from_bank: Vec<Transaction> = accounting
        .iter()
        .filter(|tx| !bank_keys.contains(&transaction_key(tx)))
        .cloned()
        .collect();

    ReconciliationResult {
        missing_from_accounting,
        missing_from_bank,
    }
}

/// Orchestrating facade: validate inputs, normalize both ledgers, reconcile.
///
/// The engine holds configuration only (the locale profile, via its
/// normalizer); ledger data flows through [`ReconciliationEngine::run`] as
/// plain values, so callers own the state lifecycle and may reuse one engine
/// across runs or threads.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationEngine {
    normalizer: Normalizer,
}

impl ReconciliationEngine {
    /// Create an engine with the default (es-AR) locale profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine for a custom locale profile, rejecting invalid ones
    pub fn with_profile(profile: LocaleProfile) -> ReconResult<Self> {
        profile.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(profile),
        })
    }

    /// The normalizer (and therefore the profile) this engine runs with
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Run the full pipeline over two raw ledgers.
    ///
    /// Empty row collections are rejected before any normalization happens:
    /// an empty upload is an input problem, distinct from a successful
    /// reconciliation that finds no differences.
    pub fn run(
        &self,
        accounting_rows: &[RawRow],
        bank_rows: &[RawRow],
    ) -> ReconResult<ReconciliationResult> {
        validation::validate_ledgers(accounting_rows, bank_rows)?;

        let accounting = self.normalizer.normalize_all(accounting_rows);
        let bank = self.normalizer.normalize_all(bank_rows);
        Ok(reconcile(&accounting, &bank))
    }
}
