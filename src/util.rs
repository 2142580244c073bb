use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a single tree instance. Handed out once per constructed tree so that a
/// [`NodeRef`](crate::handle::NodeRef) taken from one tree is never mistaken for a node of another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u64);

impl TreeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
