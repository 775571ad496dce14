use horizons_core::Starfield;
use horizons_core::starfield::project;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};

/// Canvas program drawing the starfield at its current rotation.
pub(super) struct StarfieldCanvas<'a> {
    pub(super) field: &'a Starfield,
}

impl<Message> Program<Message> for StarfieldCanvas<'_> {
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
        let rotation = self.field.rotation();
        for star in self.field.stars() {
            let Some(projected) = project(star, rotation, bounds.width, bounds.height) else {
                continue;
            };
            let [r, g, b] = projected.color;
            frame.fill(
                &Path::circle(Point::new(projected.x, projected.y), projected.radius),
                Color::from_rgba(r, g, b, 0.9),
            );
        }
        vec![frame.into_geometry()]
    }
}
