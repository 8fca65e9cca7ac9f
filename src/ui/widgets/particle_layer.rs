// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering of the particle background.

use crate::ui::state::ParticleField;
use crate::ui::state::particles::Link;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

const LINK_WIDTH: f32 = 1.0;

/// Borrowed view of a [`ParticleField`] drawn on a canvas.
pub struct ParticleLayer<'a> {
    field: &'a ParticleField,
    color: Color,
    link_opacity: f32,
    cursor: Option<Point>,
}

impl<'a> ParticleLayer<'a> {
    #[must_use]
    pub fn new(field: &'a ParticleField, color: Color, link_opacity: f32) -> Self {
        Self {
            field,
            color,
            link_opacity,
            cursor: None,
        }
    }

    /// Draws grab links from `cursor` (window coordinates) when set.
    #[must_use]
    pub fn with_cursor(mut self, cursor: Option<Point>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn stroke_link(&self, frame: &mut Frame, link: &Link) {
        let path = Path::line(link.from, link.to);
        frame.stroke(
            &path,
            Stroke::default().with_width(LINK_WIDTH).with_color(Color {
                a: self.link_opacity * link.strength,
                ..self.color
            }),
        );
    }
}

impl<Message> canvas::Program<Message> for ParticleLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for link in self.field.links() {
            self.stroke_link(&mut frame, &link);
        }

        if let Some(cursor) = self.cursor {
            let local = Point::new(cursor.x - bounds.x, cursor.y - bounds.y);
            for link in self.field.grab_links(local) {
                self.stroke_link(&mut frame, &link);
            }
        }

        for particle in self.field.particles() {
            frame.fill(&Path::circle(particle.position, particle.radius), self.color);
        }

        vec![frame.into_geometry()]
    }
}
