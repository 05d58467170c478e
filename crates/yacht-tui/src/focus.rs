//! FocusRing — keyboard focus cycling between the search bar's slots.

use crate::action::HeroSlot;

pub struct FocusRing {
    items: Vec<HeroSlot>,
    current: usize,
}

impl FocusRing {
    pub fn new(items: Vec<HeroSlot>) -> Self {
        Self { items, current: 0 }
    }

    pub fn current(&self) -> Option<HeroSlot> {
        self.items.get(self.current).copied()
    }

    pub fn next(&mut self) -> Option<HeroSlot> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.items.len();
        self.current()
    }

    pub fn prev(&mut self) -> Option<HeroSlot> {
        if self.items.is_empty() {
            return None;
        }
        self.current = if self.current == 0 {
            self.items.len() - 1
        } else {
            self.current - 1
        };
        self.current()
    }

    pub fn set(&mut self, slot: HeroSlot) {
        if let Some(pos) = self.items.iter().position(|&x| x == slot) {
            self.current = pos;
        }
    }

    /// Replace the ring contents (on mode switch). Focus goes to the first
    /// slot; fields from the old mode are gone.
    pub fn set_items(&mut self, items: Vec<HeroSlot>) {
        self.items = items;
        self.current = 0;
    }
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yacht_search::fields::FieldKey;

    #[test]
    fn cycles_both_ways() {
        let mut ring = FocusRing::new(vec![
            HeroSlot::Field(FieldKey::Query),
            HeroSlot::Field(FieldKey::Location),
            HeroSlot::Submit,
        ]);
        assert_eq!(ring.next(), Some(HeroSlot::Field(FieldKey::Location)));
        assert_eq!(ring.next(), Some(HeroSlot::Submit));
        assert_eq!(ring.next(), Some(HeroSlot::Field(FieldKey::Query)));
        assert_eq!(ring.prev(), Some(HeroSlot::Submit));
    }

    #[test]
    fn set_items_resets_to_first() {
        let mut ring = FocusRing::new(vec![HeroSlot::Submit]);
        ring.set_items(vec![HeroSlot::Field(FieldKey::Service), HeroSlot::Submit]);
        assert_eq!(ring.current(), Some(HeroSlot::Field(FieldKey::Service)));
        ring.set(HeroSlot::Submit);
        assert_eq!(ring.current(), Some(HeroSlot::Submit));
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring = FocusRing::default();
        assert_eq!(ring.next(), None);
        assert_eq!(ring.prev(), None);
        assert_eq!(ring.current(), None);
    }
}
