//! Growable degree-bucket index over vertices.

/// Location of a vertex inside the bucket array.
#[derive(Debug, Clone, Copy)]
struct Slot {
    degree: usize,
    position: usize,
}

/// Maps every tracked vertex to the bucket matching its current degree.
///
/// Buckets grow on demand up to the maximum degree seen. Each vertex carries
/// a back-pointer slot so erasing it is O(1) via swap-remove; within-bucket
/// order is therefore unspecified.
#[derive(Debug, Clone, Default)]
pub(crate) struct DegreeBuckets {
    buckets: Vec<Vec<u32>>,
    slots: Vec<Option<Slot>>,
}

impl DegreeBuckets {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Grows the slot table so `vertex` can be tracked.
    fn ensure_slot(&mut self, vertex: u32) {
        let needed = vertex as usize + 1;
        if self.slots.len() < needed {
            self.slots.resize(needed, None);
        }
    }

    fn ensure_bucket(&mut self, degree: usize) {
        if self.buckets.len() <= degree {
            self.buckets.resize_with(degree + 1, Vec::new);
        }
    }

    /// Inserts a vertex at the given degree. The vertex must not be tracked.
    pub(crate) fn insert(&mut self, vertex: u32, degree: usize) {
        self.ensure_slot(vertex);
        debug_assert!(self.slots[vertex as usize].is_none());
        self.ensure_bucket(degree);
        let position = self.buckets[degree].len();
        self.buckets[degree].push(vertex);
        self.slots[vertex as usize] = Some(Slot { degree, position });
    }

    /// Removes a vertex from whichever bucket currently holds it and returns
    /// the degree it was filed under.
    pub(crate) fn remove(&mut self, vertex: u32) -> Option<usize> {
        let slot = self.slots.get_mut(vertex as usize)?.take()?;
        let bucket = &mut self.buckets[slot.degree];
        bucket.swap_remove(slot.position);
        if let Some(&moved) = bucket.get(slot.position) {
            self.slots[moved as usize] = Some(Slot {
                degree: slot.degree,
                position: slot.position,
            });
        }
        Some(slot.degree)
    }

    /// Moves a vertex from its current bucket by `delta` and returns the new
    /// degree.
    pub(crate) fn shift(&mut self, vertex: u32, delta: isize) -> usize {
        let old = self.remove(vertex).unwrap_or(0);
        debug_assert!(delta >= 0 || old >= delta.unsigned_abs());
        let new = old.saturating_add_signed(delta);
        self.insert(vertex, new);
        new
    }

    /// Collects up to `k` vertices scanning buckets in ascending degree
    /// order.
    pub(crate) fn lowest(&self, k: usize) -> Vec<u32> {
        let mut collected = Vec::with_capacity(k.min(self.slots.len()));
        for bucket in &self.buckets {
            for &vertex in bucket {
                if collected.len() >= k {
                    return collected;
                }
                collected.push(vertex);
            }
        }
        collected
    }

    /// Iterates `(degree, vertex_count)` pairs over non-empty buckets.
    pub(crate) fn occupancy(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(degree, bucket)| (degree, bucket.len()))
    }

    /// Drops all bucket contents while keeping the slot table allocated.
    pub(crate) fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DegreeBuckets;

    #[test]
    fn insert_shift_remove_roundtrip() {
        let mut buckets = DegreeBuckets::new();
        buckets.insert(0, 0);
        buckets.insert(1, 0);
        buckets.insert(2, 3);

        assert_eq!(buckets.shift(1, 2), 2);
        assert_eq!(buckets.remove(1), Some(2));

        assert_eq!(buckets.remove(2), Some(3));
        assert_eq!(buckets.remove(2), None);
        assert_eq!(buckets.lowest(8), vec![0]);
    }

    #[test]
    fn lowest_scans_ascending_degrees() {
        let mut buckets = DegreeBuckets::new();
        buckets.insert(7, 2);
        buckets.insert(3, 0);
        buckets.insert(5, 1);
        buckets.insert(6, 1);

        let lowest = buckets.lowest(3);
        assert_eq!(lowest[0], 3);
        assert!(lowest[1..].contains(&5));
        assert!(lowest[1..].contains(&6));
        assert_eq!(buckets.lowest(10).len(), 4);
    }

    #[test]
    fn swap_remove_keeps_backpointers_valid() {
        let mut buckets = DegreeBuckets::new();
        for vertex in 0..8 {
            buckets.insert(vertex, 1);
        }
        buckets.remove(0);
        for vertex in 1..8 {
            assert_eq!(buckets.remove(vertex), Some(1));
        }
        assert!(buckets.lowest(8).is_empty());
    }
}
