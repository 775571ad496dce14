use super::messages::Message;
use super::starfield::StarfieldCanvas;
use super::state::{
    App, ContactField, FormError, HOME_SCROLL_ID, MIN_SECTION_HEIGHT_PX, NewsletterField,
    PAGE_SCROLL_ID, SIDEBAR_WIDTH_PX,
};
use crate::config::ThemeMode;
use crate::content::{ABOUT_PARAGRAPHS, ORG_NAME, page_copy};
use crate::routes::{NAV_ROUTES, Route};
use crate::theme;
use horizons_core::motion::INACTIVE_BLUR_PX;
use horizons_core::{Slide, SlideVisual};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Space, Stack, button, canvas, checkbox, column, container, horizontal_space, image,
    opaque, progress_bar, row, scrollable, text, text_input, vertical_space,
};
use iced::{Background, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match &self.route {
            Route::Home => self.home_view(),
            Route::Contact => self.page_view(Some(self.contact_form())),
            _ => self.page_view(None),
        };

        let layout = row![self.sidebar(), page].height(Length::Fill);
        Stack::new()
            .push(layout)
            .push(self.toast_layer())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let mut nav = Column::new()
            .spacing(6)
            .push(text(ORG_NAME).size(18))
            .push(Space::with_height(Length::Fixed(12.0)));
        for route in NAV_ROUTES {
            let style: ButtonStyle = if route.same_section(&self.route) {
                button::primary
            } else {
                button::text
            };
            nav = nav.push(
                button(text(route.label()))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(Message::Navigate(route)),
            );
        }

        let theme_label = match self.config.theme {
            ThemeMode::Night => "Day Mode",
            ThemeMode::Day => "Night Mode",
        };
        nav = nav
            .push(vertical_space())
            .push(
                checkbox("Reduced motion", self.config.reduced_motion)
                    .on_toggle(|_| Message::ToggleReducedMotion),
            )
            .push(
                button(text(theme_label))
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(Message::ToggleTheme),
            );

        container(nav)
            .padding(16)
            .width(Length::Fixed(SIDEBAR_WIDTH_PX))
            .height(Length::Fill)
            .into()
    }

    fn home_view(&self) -> Element<'_, Message> {
        let viewport_height = self
            .hero
            .viewport_height()
            .unwrap_or(self.window.height)
            .max(1.0);
        let track_height = self.deck.len() as f32 * viewport_height;

        // Sections swallow clicks so the hero controls underneath never see them.
        let sections = column![
            Space::new(Length::Fill, Length::Fixed(track_height)),
            opaque(self.about_section(viewport_height)),
            opaque(self.newsletter_section()),
            opaque(footer()),
        ];
        let page = scrollable(sections)
            .id(HOME_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::HomeScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        // The hero sits behind the scrollable; the track region above is transparent.
        Stack::new()
            .push(self.hero_layer(viewport_height))
            .push(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn hero_layer(&self, viewport_height: f32) -> Element<'_, Message> {
        if self.deck.is_empty() {
            return Space::new(Length::Fill, Length::Fill).into();
        }
        let width = (self.window.width - SIDEBAR_WIDTH_PX).max(1.0);
        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(viewport_height))
            .push(solid(Color::BLACK));

        let visuals = self
            .hero
            .slide_visuals(Instant::now(), &self.motion_policy());
        for (slide, visual) in self.deck.iter().zip(visuals) {
            if visual.opacity <= 0.0 {
                continue;
            }
            layers = layers.push(slide_picture(slide, visual, width, viewport_height));
        }

        layers
            .push(solid(theme::hero_scrim()))
            .push(self.hero_content())
            .into()
    }

    fn hero_content(&self) -> Element<'_, Message> {
        let count = self.deck.len();
        let active = self.hero.selector.active_index();
        let Some(slide) = self.deck.get(active) else {
            return Space::new(Length::Fill, Length::Fill).into();
        };
        let fade = self
            .hero
            .content_fade(Instant::now(), &self.motion_policy());
        let live = self.hero.controls_visible();
        let ink = |alpha: f32| Color {
            a: alpha * fade,
            ..Color::WHITE
        };

        let indicators = (0..count).fold(row![].spacing(8), |dots, index| {
            let (width, style): (f32, ButtonStyle) = if index == active {
                (28.0, button::primary)
            } else {
                (10.0, button::secondary)
            };
            dots.push(
                button(Space::new(Length::Fixed(width), Length::Fixed(4.0)))
                    .padding(3)
                    .style(style)
                    .on_press_maybe(live.then_some(Message::JumpToSlide(index))),
            )
        });
        let next_label = if self.hero.selector.is_last_slide() {
            "Continue"
        } else {
            "Next"
        };

        let copy = column![
            text(format!("{:02} / {:02}", active + 1, count))
                .size(14)
                .color(ink(0.7)),
            text(slide.title.as_str()).size(52).color(ink(1.0)),
            text(slide.description.as_str()).size(18).color(ink(0.85)),
            button(text("Explore"))
                .padding([10, 20])
                .on_press_maybe(live.then(|| Message::OpenLink(slide.link.clone()))),
        ]
        .spacing(18)
        .max_width(720);

        let controls = row![
            indicators,
            horizontal_space(),
            button(text(next_label))
                .style(button::text)
                .on_press_maybe(live.then_some(Message::NextSlide)),
        ]
        .align_y(Vertical::Center);

        column![
            vertical_space(),
            copy,
            controls,
            progress_bar(0.0..=1.0, self.hero.selector.progress_bar_fraction())
                .height(Length::Fixed(3.0)),
        ]
        .spacing(28)
        .padding(48)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn about_section(&self, viewport_height: f32) -> Element<'_, Message> {
        let body = column![
            text(ORG_NAME).size(36),
            text("International Research Collaboration")
                .size(20)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::accent(theme)),
                }),
            text(ABOUT_PARAGRAPHS[0]).size(18),
            text(ABOUT_PARAGRAPHS[1]).style(muted_text),
        ]
        .spacing(16)
        .max_width(760);

        section(body)
            .height(Length::Fixed(viewport_height.max(MIN_SECTION_HEIGHT_PX)))
            .into()
    }

    fn newsletter_section(&self) -> Element<'_, Message> {
        let form = &self.newsletter;
        let input = |placeholder: &'static str, field: NewsletterField| {
            text_input(placeholder, form.value(field))
                .on_input(move |value| Message::NewsletterFieldChanged(field, value))
                .on_submit(Message::NewsletterSubmitted)
                .padding(10)
        };

        let mut body = column![
            text("Stay Connected").size(32),
            text("Receive discoveries, events and stories from across the initiative.")
                .style(muted_text),
            row![
                input("First name", NewsletterField::FirstName),
                input("Last name", NewsletterField::LastName),
            ]
            .spacing(12),
            input("Email address", NewsletterField::Email),
        ]
        .spacing(14)
        .max_width(640);
        if let Some(error) = &form.error {
            body = body.push(error_text(error));
        }
        body = body.push(button(text("Subscribe")).on_press(Message::NewsletterSubmitted));

        section(body).into()
    }

    fn contact_form(&self) -> Element<'_, Message> {
        let form = &self.contact;
        let input = |placeholder: &'static str, field: ContactField| {
            text_input(placeholder, form.value(field))
                .on_input(move |value| Message::ContactFieldChanged(field, value))
                .on_submit(Message::ContactSubmitted)
                .padding(10)
        };

        let mut body = column![
            row![
                input("Your name", ContactField::Name),
                input("Email address", ContactField::Email),
            ]
            .spacing(12),
            input("Subject", ContactField::Subject),
            input("Message", ContactField::Message),
        ]
        .spacing(14);
        if let Some(error) = &form.error {
            body = body.push(error_text(error));
        }
        body.push(button(text("Send message")).on_press(Message::ContactSubmitted))
            .into()
    }

    fn page_view<'a>(&'a self, extra: Option<Element<'a, Message>>) -> Element<'a, Message> {
        let copy = page_copy(&self.route);
        let mut content = column![
            text(copy.title).size(48),
            text(copy.subtitle).size(20).style(muted_text),
        ]
        .spacing(16)
        .max_width(900);

        if let Route::NotFound(path) = &self.route {
            content = content
                .push(text(format!("Nothing lives at {path}.")))
                .push(button(text("Return home")).on_press(Message::Navigate(Route::Home)));
        }
        if let Some(extra) = extra {
            content = content.push(extra);
        }

        let page = scrollable(
            column![
                container(content).padding(48).center_x(Length::Fill),
                footer()
            ]
            .width(Length::Fill),
        )
        .id(PAGE_SCROLL_ID.clone())
        .width(Length::Fill)
        .height(Length::Fill);

        if self.config.theme != ThemeMode::Night {
            return page.into();
        }
        Stack::new()
            .push(
                canvas(StarfieldCanvas {
                    field: &self.starfield,
                })
                .width(Length::Fill)
                .height(Length::Fill),
            )
            .push(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn toast_layer(&self) -> Element<'_, Message> {
        let toasts = self.toasts.items.iter().fold(column![].spacing(8), |list, toast| {
            list.push(
                container(
                    row![
                        column![
                            text(toast.title.as_str()).size(16),
                            text(toast.body.as_str()).size(14).style(muted_text),
                        ]
                        .spacing(4)
                        .width(Length::Fill),
                        button(text("x"))
                            .style(button::text)
                            .on_press(Message::DismissToast(toast.id)),
                    ]
                    .spacing(12)
                    .align_y(Vertical::Center),
                )
                .padding(12)
                .width(Length::Fixed(340.0))
                .style(container::rounded_box),
            )
        });

        container(toasts)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into()
    }
}

/// The image is oversized by the visual's scale and clipped to the viewport.
fn slide_picture<'a>(
    slide: &'a Slide,
    visual: SlideVisual,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(&slide.image))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(width * visual.scale))
        .height(Length::Fixed(height * visual.scale))
        .opacity(visual.opacity);
    // No blur filter is available; blur is rendered as a proportional veil.
    let veil_alpha = (visual.blur_px / INACTIVE_BLUR_PX).clamp(0.0, 1.0) * 0.35 * visual.opacity;
    let veil = solid(Color::from_rgba(0.02, 0.03, 0.08, veil_alpha));

    container(
        Stack::new()
            .push(picture)
            .push(veil)
            .width(Length::Fixed(width * visual.scale))
            .height(Length::Fixed(height * visual.scale)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .clip(true)
    .into()
}

fn solid<'a>(color: Color) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        })
        .into()
}

/// Opaque full-width band that scrolls over the hero.
fn section<'a>(body: impl Into<Element<'a, Message>>) -> container::Container<'a, Message> {
    container(body)
        .padding(48)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(theme.palette().background)),
            ..container::Style::default()
        })
}

fn footer<'a>() -> Element<'a, Message> {
    section(
        text(format!("© {ORG_NAME}. Exploring the cosmos together."))
            .size(13)
            .style(muted_text),
    )
    .padding([24, 48])
    .into()
}

fn error_text<'a>(error: &FormError) -> Element<'a, Message> {
    text(error.to_string())
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().danger),
        })
        .into()
}

fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme::muted(theme)),
    }
}
