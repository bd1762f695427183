//! Window order swaps, committed per workspace view plus at most one pending.
use super::{MonitorId, WindowDescriptor, WindowId, WorkspaceId};
use crate::errors::{MosaicError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A workspace as seen on one monitor. Each view is laid out independently.
pub type ViewKey = (WorkspaceId, MonitorId);

/// Exchange of two windows' places in a descriptor list.
///
/// Swaps name windows, not positions: every time a swap is applied, it exchanges wherever the
/// two windows sit in the list at that moment. Windows opening, closing or hiding elsewhere in the
/// list therefore never redirect a swap onto bystanders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap(pub WindowId, pub WindowId);

impl Swap {
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self(self.1, self.0)
    }

    #[must_use]
    pub fn involves(self, id: WindowId) -> bool {
        self.0 == id || self.1 == id
    }

    /// Swaps the two windows. Returns false, leaving `list` alone, when either is missing.
    pub fn apply(self, list: &mut [WindowDescriptor]) -> bool {
        let a = list.iter().position(|w| w.id == self.0);
        let b = list.iter().position(|w| w.id == self.1);
        match (a, b) {
            (Some(a), Some(b)) => {
                list.swap(a, b);
                true
            }
            _ => false,
        }
    }
}

/// Applies `committed` in recorded order, then `pending`, to a copy of `descriptors`.
///
/// A swap naming a window that is not in `descriptors` is skipped.
#[must_use]
pub fn resolve(
    committed: &[Swap],
    pending: Option<Swap>,
    descriptors: &[WindowDescriptor],
) -> Vec<WindowDescriptor> {
    let mut resolved = descriptors.to_vec();
    for swap in committed.iter().chain(pending.iter()) {
        swap.apply(&mut resolved);
    }
    resolved
}

#[derive(Debug, Clone, Default)]
pub struct SwapLedger {
    committed: HashMap<ViewKey, Vec<Swap>>,
    /// The swap previewed during a drag, with the view that owns it.
    pending: Option<(ViewKey, Swap)>,
    /// Order of the last built working set, committed swaps applied, pending not.
    snapshot: Vec<WindowDescriptor>,
    snapshot_view: Option<ViewKey>,
}

impl SwapLedger {
    #[must_use]
    pub fn committed(&self, view: ViewKey) -> &[Swap] {
        self.committed
            .get(&view)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pending(&self) -> Option<Swap> {
        self.pending.map(|(_, swap)| swap)
    }

    #[must_use]
    pub fn pending_for(&self, view: ViewKey) -> Option<Swap> {
        self.pending
            .and_then(|(owner, swap)| (owner == view).then_some(swap))
    }

    #[must_use]
    pub fn snapshot(&self) -> &[WindowDescriptor] {
        &self.snapshot
    }

    /// Orders freshly built descriptors of `view` and remembers the result as the snapshot
    /// later pending swaps are checked against.
    pub fn working_order(
        &mut self,
        view: ViewKey,
        descriptors: &[WindowDescriptor],
    ) -> Vec<WindowDescriptor> {
        self.snapshot = resolve(self.committed(view), None, descriptors);
        self.snapshot_view = Some(view);
        let mut working = self.snapshot.clone();
        if let Some(pending) = self.pending_for(view) {
            pending.apply(&mut working);
        }
        working
    }

    /// Same order as [`Self::working_order`] without touching the snapshot or the ledger.
    #[must_use]
    pub fn preview(&self, view: ViewKey, descriptors: &[WindowDescriptor]) -> Vec<WindowDescriptor> {
        resolve(self.committed(view), self.pending_for(view), descriptors)
    }

    /// Sets the pending swap between two windows of the current snapshot. The view the snapshot
    /// was built for owns the swap.
    ///
    /// Naming the same window twice changes nothing; naming the reverse of the pending swap
    /// cancels it.
    ///
    /// # Errors
    ///
    /// `UnresolvedSwap` when either window is missing from the snapshot. The ledger is left
    /// untouched.
    pub fn set_pending(&mut self, a: WindowId, b: WindowId) -> Result<()> {
        let known = |id| self.snapshot.iter().any(|w| w.id == id);
        let view = match self.snapshot_view {
            Some(view) if known(a) && known(b) => view,
            _ => return Err(MosaicError::UnresolvedSwap { a, b }),
        };
        if a == b {
            return Ok(());
        }
        let swap = Swap(a, b);
        if self.pending == Some((view, swap.reversed())) {
            self.pending = None;
        } else {
            self.pending = Some((view, swap));
        }
        Ok(())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Records the pending swap (if any) for the view that owns it and clears it.
    pub fn commit(&mut self) {
        if let Some((view, swap)) = self.pending.take() {
            tracing::debug!(
                "Committing swap of windows {} and {} on workspace {} monitor {}",
                swap.0,
                swap.1,
                view.0,
                view.1
            );
            self.committed.entry(view).or_default().push(swap);
        }
    }

    /// Drops every swap naming `id`, in every view. Called once the window is gone for good;
    /// hidden or moved windows keep their swaps, which apply again once they are back.
    pub fn forget_window(&mut self, id: WindowId) {
        for (view, swaps) in &mut self.committed {
            let before = swaps.len();
            swaps.retain(|swap| !swap.involves(id));
            if swaps.len() != before {
                tracing::debug!(
                    "Dropped {} swaps of window {} on workspace {} monitor {}",
                    before - swaps.len(),
                    id,
                    view.0,
                    view.1
                );
            }
        }
        self.committed.retain(|_, swaps| !swaps.is_empty());
        if self.pending.is_some_and(|(_, swap)| swap.involves(id)) {
            self.pending = None;
        }
    }
}
