use iced::{
    Point, Rectangle, Renderer, Theme, Vector, mouse,
    widget::canvas::{self, Event, Frame, Geometry},
};
use inudoption_lib::ProfileId;

use crate::components::{
    card_view,
    stack_view::{Message, StackView},
};

/// Pointer interaction tracked by the canvas between events.
#[derive(Debug, Default)]
pub struct Pointer {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    card: ProfileId,
    /// Width the drag is measured against
    container_width: f32,
    origin: Point,
    translation: Vector,
    /// Value of the view's drag epoch when the drag started
    epoch: u64,
}

impl Drag {
    fn end(self) -> Message {
        Message::Card(
            self.card,
            card_view::Message::DragEnded {
                translation: self.translation,
                container_width: self.container_width,
            },
        )
    }
}

/// What the canvas does with a pointer event.
#[derive(Debug)]
enum Response {
    Capture,
    Publish(Message),
}

impl StackView {
    fn handle_pointer(
        &self,
        pointer: &mut Pointer,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Response> {
        // The cards were reset under this drag, it no longer belongs to anyone
        if pointer
            .drag
            .is_some_and(|drag| drag.epoch != self.drag_epoch)
        {
            pointer.drag = None;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // The release of an earlier drag never arrived, end it before starting over
                let interrupted = pointer.drag.take();
                pointer.drag = self.drag_at(bounds, cursor, interrupted.map(|drag| drag.card));

                match (interrupted, pointer.drag) {
                    (Some(drag), _) => Some(Response::Publish(drag.end())),
                    (None, Some(_)) => Some(Response::Capture),
                    (None, None) => None,
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let drag = pointer.drag.as_mut()?;
                drag.translation = *position - drag.origin;

                Some(Response::Publish(Message::Card(
                    drag.card,
                    card_view::Message::DragChanged(drag.translation),
                )))
            }
            Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) => Some(Response::Publish(pointer.drag.take()?.end())),
            _ => None,
        }
    }

    /// Start a drag on the frontmost card under the cursor. `returning` is hit-tested at its
    /// resting place since it is about to snap back.
    fn drag_at(
        &self,
        bounds: Rectangle,
        cursor: mouse::Cursor,
        returning: Option<ProfileId>,
    ) -> Option<Drag> {
        let position = cursor.position_in(bounds)?;
        let (card, resting) = self
            .placed_cards(bounds.size())
            .into_iter()
            .rev()
            .find(|(card, resting)| {
                let offset_x = if returning == Some(card.id()) {
                    0.0
                } else {
                    card.offset_x()
                };

                (*resting + Vector::new(offset_x, 0.0)).contains(position)
            })?;

        Some(Drag {
            card: card.id(),
            container_width: resting.width,
            origin: cursor.position()?,
            translation: Vector::ZERO,
            epoch: self.drag_epoch,
        })
    }
}

impl canvas::Program<Message> for StackView {
    type State = Pointer;

    fn update(
        &self,
        pointer: &mut Pointer,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        self.handle_pointer(pointer, event, bounds, cursor)
            .map(|response| match response {
                Response::Capture => canvas::Action::capture(),
                Response::Publish(message) => canvas::Action::publish(message).and_capture(),
            })
    }

    fn draw(
        &self,
        _pointer: &Pointer,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for (card, resting) in self.placed_cards(bounds.size()) {
            card.draw(&mut frame, resting);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        pointer: &Pointer,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if pointer.drag.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
