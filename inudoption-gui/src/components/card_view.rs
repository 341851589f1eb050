use iced::{
    Color, Degrees, Font, Point, Radians, Rectangle, Size, Vector,
    advanced::svg::Svg,
    font::Weight,
    widget::canvas::{Frame, Path, Text},
};
use inudoption_lib::{
    Card, CardEvent, DragEvent, GesturePhase, Profile, ProfileId, Translation,
    stack::CARD_HEIGHT,
};

use crate::icons::{icon_handle, portrait};

/// Share of the card's height taken by the portrait.
const PORTRAIT_RATIO: f32 = 0.75;
const CORNER_RADIUS: f32 = 10.0;
const SHADOW_RADIUS: f32 = 5.0;
const PADDING: f32 = 16.0;

#[derive(Debug, Clone)]
pub enum Message {
    DragChanged(Vector),
    DragEnded {
        translation: Vector,
        container_width: f32,
    },
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    /// Forward an event to the owning stack
    Report(CardEvent),
}

/// A single swipeable card.
#[derive(Debug, Clone)]
pub struct CardView {
    card: Card,
}

impl CardView {
    pub fn new(profile: Profile) -> Self {
        Self {
            card: Card::new(profile),
        }
    }

    pub fn id(&self) -> ProfileId {
        self.card.profile().id()
    }

    /// Horizontal distance the card currently follows the pointer by.
    pub fn offset_x(&self) -> f32 {
        self.card.gesture().translation().x
    }

    pub fn update(&mut self, message: Message) -> Action {
        let (event, container_width) = match message {
            // Rotation is recomputed on draw, the width doesn't matter while dragging
            Message::DragChanged(delta) => (DragEvent::Changed(translation(delta)), 0.0),
            Message::DragEnded {
                translation: delta,
                container_width,
            } => (DragEvent::Ended(translation(delta)), container_width),
        };

        match self.card.handle(event, container_width) {
            Some(event) => Action::Report(event),
            None => Action::None,
        }
    }

    /// End an interrupted drag and put the card back at rest.
    pub fn cancel(&mut self) {
        if self.card.gesture().phase() == GesturePhase::Dragging {
            // A zero-width container never dismisses
            self.card.handle(DragEvent::Ended(Translation::ZERO), 0.0);
        }
    }

    /// Draw the card into `frame` at its resting place `bounds`, following the current drag.
    pub fn draw(&self, frame: &mut Frame, bounds: Rectangle) {
        let gesture = self.card.gesture();
        let rotation = gesture.rotation_degrees(bounds.width);
        let anchor = Point::new(bounds.center_x(), bounds.y + bounds.height);

        frame.with_save(|frame| {
            // Rotate around the bottom center, then slide along with the pointer
            frame.translate(Vector::new(anchor.x, anchor.y));
            frame.rotate(Radians::from(Degrees(rotation)));
            frame.translate(Vector::new(self.offset_x() - bounds.width / 2.0, -bounds.height));

            self.draw_body(frame, bounds.size());
        });
    }

    fn draw_body(&self, frame: &mut Frame, size: Size) {
        let profile = self.card.profile();

        let shadow = Path::rounded_rectangle(
            Point::new(-SHADOW_RADIUS / 2.0, 0.0),
            Size::new(size.width + SHADOW_RADIUS, size.height + SHADOW_RADIUS),
            (CORNER_RADIUS + SHADOW_RADIUS / 2.0).into(),
        );
        frame.fill(&shadow, Color::from_rgba(0.0, 0.0, 0.0, 0.15));

        let background = Path::rounded_rectangle(Point::ORIGIN, size, CORNER_RADIUS.into());
        frame.fill(&background, Color::WHITE);

        let portrait_bounds = Rectangle::new(
            Point::ORIGIN,
            Size::new(size.width, size.height * PORTRAIT_RATIO),
        );
        frame.draw_svg(portrait_bounds, Svg::new(portrait(profile.image_ref())));

        let mut y = portrait_bounds.height + PADDING / 2.0;
        for (content, text_size, color, weight) in [
            (profile.headline(), 28.0, Color::BLACK, Weight::Bold),
            (
                profile.occupation().to_owned(),
                15.0,
                Color::BLACK,
                Weight::Bold,
            ),
            (
                profile.mutual_friends_caption(),
                15.0,
                Color::from_rgb8(0x8e, 0x8e, 0x93),
                Weight::Normal,
            ),
        ] {
            frame.fill_text(Text {
                content,
                position: Point::new(PADDING, y),
                color,
                size: text_size.into(),
                font: Font {
                    weight,
                    ..Font::DEFAULT
                },
                ..Text::default()
            });
            y += text_size + 6.0;
        }

        let info_size = 22.0;
        frame.draw_svg(
            Rectangle::new(
                Point::new(
                    size.width - PADDING - info_size,
                    portrait_bounds.height
                        + (size.height - portrait_bounds.height - info_size) / 2.0,
                ),
                Size::new(info_size, info_size),
            ),
            Svg::new(icon_handle("info")),
        );
    }
}

/// Where a card of `width` rests inside a container of `container` size.
pub fn resting_bounds(container: Size, width: f32, vertical_offset: f32) -> Rectangle {
    Rectangle::new(
        Point::new(
            (container.width - width) / 2.0,
            (container.height - CARD_HEIGHT) / 2.0 + vertical_offset,
        ),
        Size::new(width, CARD_HEIGHT),
    )
}

fn translation(delta: Vector) -> Translation {
    Translation::new(delta.x, delta.y)
}

#[cfg(test)]
mod test {
    use super::*;

    fn card_view() -> CardView {
        CardView::new(Profile::new(2, "Michael", "2", 27, 0, "michael", "Judge"))
    }

    #[test]
    fn test_long_swipe_dismisses() {
        let mut view = card_view();

        view.update(Message::DragChanged(Vector::new(200.0, 5.0)));
        let action = view.update(Message::DragEnded {
            translation: Vector::new(300.0, 5.0),
            container_width: 500.0,
        });

        assert!(matches!(
            action,
            Action::Report(CardEvent::Dismissed(profile)) if profile.id() == ProfileId::new(2)
        ));
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let mut view = card_view();

        view.update(Message::DragChanged(Vector::new(150.0, 0.0)));
        assert_eq!(view.offset_x(), 150.0);

        let action = view.update(Message::DragEnded {
            translation: Vector::new(150.0, 0.0),
            container_width: 500.0,
        });

        assert!(matches!(action, Action::None));
        assert_eq!(view.offset_x(), 0.0);
    }

    #[test]
    fn test_cancel_resets_drag() {
        let mut view = card_view();

        view.update(Message::DragChanged(Vector::new(400.0, 0.0)));
        view.cancel();

        assert_eq!(view.offset_x(), 0.0);
        assert_eq!(view.card.gesture().phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_resting_bounds() {
        let bounds = resting_bounds(Size::new(500.0, 600.0), 480.0, 20.0);

        assert_eq!(bounds, Rectangle::new(Point::new(10.0, 120.0), Size::new(480.0, 400.0)));
    }
}
