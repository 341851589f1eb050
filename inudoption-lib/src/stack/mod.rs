//! The deck of live profiles.

use std::collections::HashSet;

use tracing::debug;

use crate::{CardEvent, Error, Profile, ProfileId, Result};

mod layout;

pub use layout::{CARD_HEIGHT, CardLayout, RANK_STEP, StackLayout};

/// Ordered collection of profiles that haven't been dismissed yet.
///
/// Insertion order is preserved and profiles only ever leave the stack.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    profiles: Vec<Profile>,
}

impl Stack {
    /// Maximum number of cards drawn at once.
    pub const VISIBLE_DEPTH: i32 = 4;

    pub fn new(profiles: Vec<Profile>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = profiles.iter().find(|p| !seen.insert(p.id())) {
            return Err(Error::DuplicateProfileId(duplicate.id()));
        }

        Ok(Self { profiles })
    }

    /// A stack holding [`Profile::seed`].
    pub fn seeded() -> Self {
        Self {
            profiles: Profile::seed(),
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Highest id among the live profiles, recomputed on every call.
    pub fn max_id(&self) -> Option<ProfileId> {
        self.profiles.iter().map(Profile::id).max()
    }

    /// Whether `id` falls inside the window of the [`Self::VISIBLE_DEPTH`] highest ids.
    pub fn is_visible(&self, id: ProfileId) -> bool {
        self.max_id().is_some_and(|max| {
            let (id, max) = (i64::from(id.get()), i64::from(max.get()));
            (max - i64::from(Self::VISIBLE_DEPTH - 1)..=max).contains(&id)
        })
    }

    /// Visible profiles in stack order, back to front.
    pub fn visible(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|p| self.is_visible(p.id()))
    }

    /// Removes the profile with the given id. Removing an id that isn't present does nothing.
    pub fn remove(&mut self, id: ProfileId) -> Option<Profile> {
        let index = self.profiles.iter().position(|p| p.id() == id)?;
        let profile = self.profiles.remove(index);

        debug!("Removed profile: {profile}");

        Some(profile)
    }

    /// Apply an event reported by one of the stack's cards.
    pub fn apply(&mut self, event: CardEvent) -> Option<Profile> {
        match event {
            CardEvent::Dismissed(profile) => self.remove(profile.id()),
        }
    }

    /// Geometry of every visible card for a container of the given width, back to front.
    pub fn layout(&self, geometry_width: f32) -> Vec<CardLayout<'_>> {
        let layout = StackLayout::new(geometry_width, self.len());

        self.visible()
            .map(|profile| CardLayout {
                profile,
                width: layout.width(profile.id()),
                vertical_offset: layout.vertical_offset(profile.id()),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Card, DragEvent, Translation};

    fn ids(stack: &Stack) -> Vec<i32> {
        stack.profiles().iter().map(|p| p.id().get()).collect()
    }

    fn visible_ids(stack: &Stack) -> Vec<i32> {
        stack.visible().map(|p| p.id().get()).collect()
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut profiles = Profile::seed();
        profiles.push(Profile::new(2, "Again", "2", 1, 0, "michael", "Judge"));

        let err = Stack::new(profiles).unwrap_err();

        assert!(matches!(err, Error::DuplicateProfileId(id) if id == ProfileId::new(2)));
    }

    #[test]
    fn test_remove() {
        let mut stack = Stack::seeded();

        let removed = stack.remove(ProfileId::new(2)).unwrap();

        assert_eq!(removed.id(), ProfileId::new(2));
        assert_eq!(ids(&stack), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut stack = Stack::seeded();

        assert!(stack.remove(ProfileId::new(42)).is_none());
        assert_eq!(ids(&stack), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_visible_window() {
        let mut stack = Stack::seeded();

        assert_eq!(visible_ids(&stack), vec![1, 2, 3, 4]);

        stack.remove(ProfileId::new(4));
        assert_eq!(visible_ids(&stack), vec![0, 1, 2, 3]);

        stack.remove(ProfileId::new(2));
        assert_eq!(visible_ids(&stack), vec![0, 1, 3]);
    }

    #[test]
    fn test_window_bounded_and_contains_max() {
        let sparse = vec![
            Profile::new(10, "A", "", 1, 0, "a", ""),
            Profile::new(3, "B", "", 1, 0, "b", ""),
            Profile::new(7, "C", "", 1, 0, "c", ""),
            Profile::new(8, "D", "", 1, 0, "d", ""),
            Profile::new(9, "E", "", 1, 0, "e", ""),
            Profile::new(-2, "F", "", 1, 0, "f", ""),
        ];
        let mut stack = Stack::new(sparse).unwrap();

        while let Some(max) = stack.max_id() {
            let visible = visible_ids(&stack);

            assert!(visible.len() <= 4);
            assert!(visible.contains(&max.get()));

            stack.remove(max);
        }

        assert_eq!(stack.visible().count(), 0);
    }

    #[test]
    fn test_layout() {
        let stack = Stack::seeded();

        let layout = stack.layout(375.0);
        let summary: Vec<(i32, f32, f32)> = layout
            .iter()
            .map(|card| (card.profile.id().get(), card.width, card.vertical_offset))
            .collect();

        assert_eq!(
            summary,
            vec![
                (1, 345.0, 30.0),
                (2, 355.0, 20.0),
                (3, 365.0, 10.0),
                (4, 375.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_dismissing_every_card() {
        let mut stack = Stack::seeded();
        let mut dismissed = Vec::new();

        loop {
            let Some((profile, width)) = stack
                .layout(500.0)
                .last()
                .map(|front| (front.profile.clone(), front.width))
            else {
                break;
            };
            let mut card = Card::new(profile);

            card.handle(DragEvent::Changed(Translation::new(0.6 * width, 0.0)), width);
            let event = card
                .handle(DragEvent::Ended(Translation::new(0.6 * width, 0.0)), width)
                .unwrap();

            dismissed.push(stack.apply(event).unwrap().id().get());
        }

        assert_eq!(dismissed, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_renders_nothing() {
        let mut stack = Stack::seeded();

        for id in 0..5 {
            stack.remove(ProfileId::new(id));
        }

        assert!(stack.is_empty());
        assert_eq!(stack.max_id(), None);
        assert!(stack.layout(375.0).is_empty());
    }
}
