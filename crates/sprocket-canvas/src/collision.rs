//! Collision memory and the geometric collision test.

use std::collections::HashSet;

use crate::sprite::{Sprite, SpriteId};

/// Unordered sprite pair, stored smallest id first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct Pair(SpriteId, SpriteId);

impl Pair {
    fn new(a: SpriteId, b: SpriteId) -> Self {
        if a <= b { Pair(a, b) } else { Pair(b, a) }
    }

    fn other(&self, id: SpriteId) -> Option<SpriteId> {
        if self.0 == id {
            Some(self.1)
        } else if self.1 == id {
            Some(self.0)
        } else {
            None
        }
    }
}

/// Set of sprite pairs currently known to be colliding.
///
/// A pair is one entry, so "A collides with B" and "B collides with A" can
/// never disagree.
#[derive(Debug, Default)]
pub struct CollisionRegistry {
    pairs: HashSet<Pair>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, a: SpriteId, b: SpriteId) -> bool {
        self.pairs.contains(&Pair::new(a, b))
    }

    /// Records a collision. A pair that is already registered is logged and
    /// left alone; returns whether the pair was new.
    pub fn register(&mut self, a: SpriteId, b: SpriteId) -> bool {
        let inserted = self.pairs.insert(Pair::new(a, b));
        if !inserted {
            log::error!("collision between {a} and {b} is already registered");
        }
        inserted
    }

    /// Drops a collision. A pair that was never registered is logged; returns
    /// whether the pair existed.
    pub fn unregister(&mut self, a: SpriteId, b: SpriteId) -> bool {
        let removed = self.pairs.remove(&Pair::new(a, b));
        if !removed {
            log::error!("collision between {a} and {b} was not registered");
        }
        removed
    }

    /// Sprites currently colliding with `id`, in no particular order.
    pub fn partners(&self, id: SpriteId) -> impl Iterator<Item = SpriteId> + '_ {
        self.pairs.iter().filter_map(move |pair| pair.other(id))
    }

    /// Drops every pair `id` belongs to without reporting anything. Returns
    /// how many pairs were dropped.
    pub fn forget(&mut self, id: SpriteId) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.other(id).is_none());
        before - self.pairs.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Whether two sprites overlap.
///
/// Both bounding boxes are grown by `margin`, intersected, and every integer
/// point of the overlap is tested against both shapes. The cost is linear in
/// the overlap area.
pub fn colliding(a: &Sprite, b: &Sprite, margin: f64) -> bool {
    let mut overlap = a.bounding_box(margin);
    if !overlap.intersect_destructively(&b.bounding_box(margin)) {
        return false;
    }
    overlap
        .sample_points()
        .any(|p| a.contains_point(p) && b.contains_point(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (SpriteId, SpriteId, SpriteId) {
        (SpriteId(1), SpriteId(2), SpriteId(3))
    }

    #[test]
    fn pairs_are_unordered() {
        let (a, b, _) = ids();
        let mut reg = CollisionRegistry::new();
        assert!(reg.register(a, b));
        assert!(reg.contains(b, a));
        assert!(reg.unregister(b, a));
        assert!(reg.is_empty());
    }

    #[test]
    fn double_register_is_suppressed() {
        let (a, b, _) = ids();
        let mut reg = CollisionRegistry::new();
        assert!(reg.register(a, b));
        assert!(!reg.register(b, a));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unregister_unknown_pair_is_harmless() {
        let (a, b, c) = ids();
        let mut reg = CollisionRegistry::new();
        reg.register(a, b);
        assert!(!reg.unregister(a, c));
        assert!(reg.contains(a, b));
    }

    #[test]
    fn forget_drops_every_pair_of_one_sprite() {
        let (a, b, c) = ids();
        let mut reg = CollisionRegistry::new();
        reg.register(a, b);
        reg.register(c, a);
        reg.register(b, c);

        let mut partners: Vec<_> = reg.partners(a).collect();
        partners.sort();
        assert_eq!(partners, vec![b, c]);

        assert_eq!(reg.forget(a), 2);
        assert!(reg.contains(b, c));
        assert_eq!(reg.partners(a).count(), 0);
    }
}
