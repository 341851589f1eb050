use iced::{
    Element, Length, Rectangle, Size,
    widget::{canvas, center, text},
};
use inudoption_lib::{Profile, ProfileId, Stack};
use tracing::debug;

use crate::components::card_view::{self, CardView, resting_bounds};

mod canvas_program;

/// Horizontal room kept free on both sides of the deck.
const PADDING: f32 = 20.0;
/// Widest the deck gets, no matter how wide the window is.
const MAX_DECK_WIDTH: f32 = 420.0;

#[derive(Debug, Clone)]
pub enum Message {
    Card(ProfileId, card_view::Message),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Dismissed(Profile),
}

/// Stack of swipeable profile cards.
pub struct StackView {
    stack: Stack,
    /// One card per visible profile, back to front
    cards: Vec<CardView>,
    /// Bumped whenever in-flight drags are cancelled so the canvas drops its pointer state
    drag_epoch: u64,
}

impl StackView {
    pub fn new(stack: Stack) -> Self {
        let mut view = Self {
            stack,
            cards: Vec::new(),
            drag_epoch: 0,
        };
        view.sync_cards();
        view
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Card(id, message) => {
                let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) else {
                    debug!("Ignoring input for card {id}, it is no longer visible");
                    return Action::None;
                };

                match card.update(message) {
                    card_view::Action::None => Action::None,
                    card_view::Action::Report(event) => match self.stack.apply(event) {
                        Some(profile) => {
                            self.sync_cards();
                            Action::Dismissed(profile)
                        }
                        None => Action::None,
                    },
                }
            }
        }
    }

    /// Snap back every card that is being dragged, e.g. when something covers the deck before
    /// the pointer is released.
    pub fn cancel_drags(&mut self) {
        self.drag_epoch += 1;
        for card in &mut self.cards {
            card.cancel();
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.stack.is_empty() {
            return center(text("No more friends nearby")).into();
        }

        canvas(self).width(Length::Fill).height(Length::Fill).into()
    }

    /// Cards in drawing order together with where they rest inside `container`.
    fn placed_cards(&self, container: Size) -> Vec<(&CardView, Rectangle)> {
        let geometry_width = (container.width - 2.0 * PADDING).min(MAX_DECK_WIDTH);

        self.stack
            .layout(geometry_width)
            .into_iter()
            .filter_map(|layout| {
                let card = self
                    .cards
                    .iter()
                    .find(|card| card.id() == layout.profile.id())?;

                Some((
                    card,
                    resting_bounds(container, layout.width, layout.vertical_offset),
                ))
            })
            .collect()
    }

    /// Rebuild the visible cards after the stack changed, keeping the drag state of cards that
    /// stay on screen.
    fn sync_cards(&mut self) {
        let mut previous = std::mem::take(&mut self.cards);

        self.cards = self
            .stack
            .visible()
            .map(|profile| {
                match previous.iter().position(|card| card.id() == profile.id()) {
                    Some(index) => previous.swap_remove(index),
                    None => CardView::new(profile.clone()),
                }
            })
            .collect();
    }
}
