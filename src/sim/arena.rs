//! Fixed-capacity entity storage
//!
//! Asteroids live in an append-only arena whose high-water mark only resets
//! with the level; bullets live in a ring buffer with a single write cursor.
//! Slots carry an explicit [`Slot::Active`]/[`Slot::Inactive`] tag, so no
//! coordinate or radius value doubles as a "dead" marker.

use serde::{Deserialize, Serialize};

use super::state::{Asteroid, Bullet};
use crate::consts::{ASTEROID_CAPACITY, BULLET_CAPACITY};
use crate::error::SimError;

/// A storage slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<T> {
    Inactive,
    Active(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Inactive
    }
}

impl<T> Slot<T> {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }

    #[inline]
    pub fn as_active(&self) -> Option<&T> {
        match self {
            Slot::Active(value) => Some(value),
            Slot::Inactive => None,
        }
    }

    #[inline]
    pub fn as_active_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Active(value) => Some(value),
            Slot::Inactive => None,
        }
    }
}

/// Handle to an asteroid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AsteroidId(pub usize);

/// Handle to a bullet slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BulletId(pub usize);

/// Append-only asteroid arena
///
/// Destroyed asteroids leave an inactive hole; their slot is not reused
/// until [`AsteroidField::clear`].
#[derive(Debug, Clone)]
pub struct AsteroidField {
    slots: [Slot<Asteroid>; ASTEROID_CAPACITY],
    /// High-water mark: slots at or past `len` have never been written
    len: usize,
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self::new()
    }
}

impl AsteroidField {
    pub fn new() -> Self {
        Self {
            slots: [Slot::Inactive; ASTEROID_CAPACITY],
            len: 0,
        }
    }

    /// Drop every asteroid and reset the high-water mark
    pub fn clear(&mut self) {
        self.slots = [Slot::Inactive; ASTEROID_CAPACITY];
        self.len = 0;
    }

    /// Slots handed out so far, live or not
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        ASTEROID_CAPACITY
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Append an asteroid at the next free slot
    pub fn push(&mut self, asteroid: Asteroid) -> Result<AsteroidId, SimError> {
        if self.is_full() {
            return Err(SimError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let id = AsteroidId(self.len);
        self.slots[id.0] = Slot::Active(asteroid);
        self.len += 1;
        Ok(id)
    }

    pub fn get(&self, id: AsteroidId) -> Option<&Asteroid> {
        self.slots[..self.len].get(id.0).and_then(Slot::as_active)
    }

    pub fn get_mut(&mut self, id: AsteroidId) -> Option<&mut Asteroid> {
        self.slots[..self.len]
            .get_mut(id.0)
            .and_then(Slot::as_active_mut)
    }

    /// Remove an asteroid, leaving its slot inactive
    pub fn destroy(&mut self, id: AsteroidId) -> Option<Asteroid> {
        let slot = self.slots[..self.len].get_mut(id.0)?;
        match std::mem::take(slot) {
            Slot::Active(asteroid) => Some(asteroid),
            Slot::Inactive => None,
        }
    }

    /// Split an asteroid in two, appending the new fragment
    ///
    /// Fails without touching the field if the arena is full or the handle
    /// is dead.
    pub fn split(&mut self, id: AsteroidId) -> Result<AsteroidId, SimError> {
        if self.is_full() {
            return Err(SimError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let parent = self
            .get_mut(id)
            .ok_or(SimError::InactiveSlot { index: id.0 })?;
        let fragment = parent.split();
        self.push(fragment)
    }

    /// Active asteroids in slot order
    pub fn iter(&self) -> impl Iterator<Item = (AsteroidId, &Asteroid)> {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_active().map(|a| (AsteroidId(i), a)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AsteroidId, &mut Asteroid)> {
        self.slots[..self.len]
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_active_mut().map(|a| (AsteroidId(i), a)))
    }

    pub fn live_count(&self) -> usize {
        self.iter().count()
    }

    /// Sum of live radii
    pub fn total_radius(&self) -> f32 {
        self.iter().map(|(_, a)| a.radius).sum()
    }
}

/// Round-robin bullet storage
///
/// Firing always writes at the cursor, so with every slot in flight the
/// oldest bullet is overwritten.
#[derive(Debug, Clone)]
pub struct BulletRing {
    slots: [Slot<Bullet>; BULLET_CAPACITY],
    cursor: usize,
}

impl Default for BulletRing {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletRing {
    pub fn new() -> Self {
        Self {
            slots: [Slot::Inactive; BULLET_CAPACITY],
            cursor: 0,
        }
    }

    pub fn clear(&mut self) {
        self.slots = [Slot::Inactive; BULLET_CAPACITY];
        self.cursor = 0;
    }

    /// Slot the next shot will occupy
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn capacity(&self) -> usize {
        BULLET_CAPACITY
    }

    /// Write a bullet at the cursor and advance it
    pub fn push(&mut self, bullet: Bullet) -> BulletId {
        let id = BulletId(self.cursor);
        self.slots[id.0] = Slot::Active(bullet);
        self.cursor = (self.cursor + 1) % self.capacity();
        id
    }

    pub fn get(&self, id: BulletId) -> Option<&Bullet> {
        self.slots.get(id.0).and_then(Slot::as_active)
    }

    pub fn deactivate(&mut self, id: BulletId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = Slot::Inactive;
        }
    }

    /// Active bullets in slot order
    pub fn iter(&self) -> impl Iterator<Item = (BulletId, &Bullet)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_active().map(|b| (BulletId(i), b)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BulletId, &mut Bullet)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_active_mut().map(|b| (BulletId(i), b)))
    }

    pub fn active_count(&self) -> usize {
        self.iter().count()
    }
}
