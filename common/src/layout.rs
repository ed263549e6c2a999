// side of the timeline an entry's content sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Right,
    Left,
}

impl Placement {
    // entries alternate, starting on the right
    pub fn for_index(index: usize) -> Placement {
        if index % 2 == 0 {
            Placement::Right
        } else {
            Placement::Left
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Placement::Right => "align-right",
            Placement::Left => "align-left",
        }
    }
}

// one item of a rendered list with its position-dependent decoration
#[derive(Clone, Debug, PartialEq)]
pub struct Placed<T> {
    pub index: usize,
    pub item: T,
    pub placement: Placement,
    pub delay_ms: u32,
}

// decorate a list for rendering.  order is preserved and nothing is dropped,
// so the container gets exactly one element per entry
pub fn place<T: Clone>(items: &[T], step_ms: u32) -> Vec<Placed<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Placed {
            index,
            item: item.clone(),
            placement: Placement::for_index(index),
            delay_ms: stagger(index, step_ms),
        })
        .collect()
}

pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

// RevealOnce
//
// latch for scroll-triggered animations: the first time the element is seen
// intersecting the viewport it flips, and later visibility changes are ignored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    // returns true only on the transition
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
