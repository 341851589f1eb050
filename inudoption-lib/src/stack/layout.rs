use crate::{Profile, ProfileId};

/// Height of every card in the stack.
pub const CARD_HEIGHT: f32 = 400.0;
/// How much narrower, and how much lower, a card is for each rank it sits behind the front.
pub const RANK_STEP: f32 = 10.0;

/// Receding geometry of the stack for a given container width.
///
/// Ranks are derived from the number of live profiles rather than from a card's place in the
/// visible window, so after a profile in the middle of the deck has been dismissed the front
/// card can end up wider than the container and shifted upwards. This is intentional and
/// matches how the deck has always been laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    geometry_width: f32,
    total_count: usize,
}

impl StackLayout {
    pub fn new(geometry_width: f32, total_count: usize) -> Self {
        Self {
            geometry_width,
            total_count,
        }
    }

    pub fn width(&self, id: ProfileId) -> f32 {
        self.geometry_width - self.step(id)
    }

    pub fn vertical_offset(&self, id: ProfileId) -> f32 {
        self.step(id)
    }

    fn rank(&self, id: ProfileId) -> i64 {
        let count = i64::try_from(self.total_count).unwrap_or(i64::MAX);
        count - 1 - i64::from(id.get())
    }

    // Ranks are bounded by the size of the deck, far below f32's exact integer range
    #[allow(clippy::cast_precision_loss)]
    fn step(&self, id: ProfileId) -> f32 {
        self.rank(id) as f32 * RANK_STEP
    }
}

/// Where a single visible card is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout<'a> {
    pub profile: &'a Profile,
    pub width: f32,
    pub vertical_offset: f32,
}
