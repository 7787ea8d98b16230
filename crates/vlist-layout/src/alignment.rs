//! Cross-axis alignment of list items

/// Where an item sits on the cross axis when it is narrower than the widest
/// item currently placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    End,
    Middle,
}

impl Alignment {
    /// Computes the cross offset of a `child` extent inside `available`.
    pub fn align(&self, available: i32, child: i32) -> i32 {
        match self {
            Alignment::Start => 0,
            Alignment::End => available - child,
            Alignment::Middle => (available - child) / 2,
        }
    }
}
