//! Bounded history of published generations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tessel_grid::GridSnapshot;

/// A stored snapshot and the publish count it was stored under.
type Entry = Option<(u64, Arc<GridSnapshot>)>;

/// The last `capacity` snapshots published by a tick thread.
///
/// The tick thread is the only publisher. Renderers on any thread read
/// [`latest`](Self::latest) or look up an earlier publish by its sequence
/// number; either way they receive a complete `GridSnapshot`, never a grid
/// mid-swap.
pub struct SnapshotRing {
    entries: Vec<Mutex<Entry>>,
    published: AtomicU64,
    capacity: usize,
}

impl SnapshotRing {
    /// A ring holding up to `capacity` snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`;
    /// [`SchedulerConfig::validate`](crate::SchedulerConfig::validate)
    /// rejects such sizes first.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "SnapshotRing capacity must be >= 2, got {capacity}");
        Self {
            entries: (0..capacity).map(|_| Mutex::new(None)).collect(),
            published: AtomicU64::new(0),
            capacity,
        }
    }

    fn entry(&self, seq: u64) -> MutexGuard<'_, Entry> {
        // Entries are replaced whole, so a poisoned lock is still usable.
        self.entries[(seq % self.capacity as u64) as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish a snapshot, returning the one it displaced once the ring
    /// is full.
    pub fn push(&self, snapshot: GridSnapshot) -> Option<Arc<GridSnapshot>> {
        let seq = self.published.load(Ordering::Relaxed);
        let displaced = self
            .entry(seq)
            .replace((seq, Arc::new(snapshot)))
            .map(|(_, old)| old);
        self.published.store(seq + 1, Ordering::Release);
        displaced
    }

    /// The newest snapshot, or `None` before anything was published.
    pub fn latest(&self) -> Option<Arc<GridSnapshot>> {
        self.published
            .load(Ordering::Acquire)
            .checked_sub(1)
            .and_then(|seq| self.get_by_pos(seq))
    }

    /// The snapshot published as number `seq` (0-based), if it is still
    /// held.
    pub fn get_by_pos(&self, seq: u64) -> Option<Arc<GridSnapshot>> {
        let published = self.published.load(Ordering::Acquire);
        if seq >= published || published - seq > self.capacity as u64 {
            return None;
        }
        match self.entry(seq).as_ref() {
            Some((stored, snap)) if *stored == seq => Some(Arc::clone(snap)),
            _ => None,
        }
    }

    /// Snapshots currently held.
    pub fn len(&self) -> usize {
        usize::try_from(self.write_pos())
            .unwrap_or(usize::MAX)
            .min(self.capacity)
    }

    /// Whether nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.write_pos() == 0
    }

    /// Maximum snapshots held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total snapshots published so far.
    pub fn write_pos(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for SnapshotRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotRing")
            .field("capacity", &self.capacity)
            .field("published", &self.write_pos())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::{Generation, GridDims};
    use tessel_grid::Grid;

    fn snapshot_at(generation: u64) -> GridSnapshot {
        let mut grid = Grid::new(GridDims::new(2, 2), 0).unwrap();
        for _ in 0..generation {
            grid.advance_generation();
        }
        grid.snapshot()
    }

    #[test]
    fn ring_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnapshotRing>();
    }

    #[test]
    fn new_ring_is_empty() {
        let ring = SnapshotRing::new(4);
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.capacity(), 4);
        assert!(ring.latest().is_none());
    }

    #[test]
    fn latest_tracks_last_push() {
        let ring = SnapshotRing::new(4);
        ring.push(snapshot_at(1));
        ring.push(snapshot_at(2));
        assert_eq!(ring.latest().unwrap().generation(), Generation(2));
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let ring = SnapshotRing::new(2);
        assert!(ring.push(snapshot_at(0)).is_none());
        assert!(ring.push(snapshot_at(1)).is_none());
        let evicted = ring.push(snapshot_at(2)).unwrap();
        assert_eq!(evicted.generation(), Generation(0));
        assert!(ring.get_by_pos(0).is_none());
        assert_eq!(ring.get_by_pos(2).unwrap().generation(), Generation(2));
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn unwritten_position_is_none() {
        let ring = SnapshotRing::new(3);
        ring.push(snapshot_at(0));
        assert!(ring.get_by_pos(1).is_none());
    }

    #[test]
    #[should_panic(expected = "capacity must be >= 2")]
    fn capacity_below_two_panics() {
        SnapshotRing::new(1);
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let ring = Arc::new(SnapshotRing::new(4));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let ring = Arc::clone(&ring);
                std::thread::spawn(move || {
                    let mut seen = 0u64;
                    for _ in 0..2000 {
                        if let Some(snap) = ring.latest() {
                            assert!(snap.generation().0 >= seen);
                            seen = snap.generation().0;
                        }
                    }
                })
            })
            .collect();
        for g in 0..200 {
            ring.push(snapshot_at(g));
        }
        for r in readers {
            r.join().unwrap();
        }
    }
}
