//! Headline copy for each page.

use crate::routes::Route;

pub const ORG_NAME: &str = "Cosmic Horizons Initiative";
pub const WINDOW_TITLE: &str = "Cosmic Horizons Initiative | International Astronomy & Space Science";

pub struct PageCopy {
    pub title: String,
    pub subtitle: &'static str,
}

pub fn page_copy(route: &Route) -> PageCopy {
    let (title, subtitle) = match route {
        Route::Home => (ORG_NAME.to_string(), "International Research Collaboration"),
        Route::About => (
            "About Us".to_string(),
            "Inspiring curiosity, fostering exploration, and igniting scientific innovation",
        ),
        Route::Science { topic: None } => (
            "Science".to_string(),
            "Exploring the fundamental questions of astrophysics and cosmology",
        ),
        Route::Science { topic: Some(topic) } => (
            format!("Science: {}", topic_title(topic)),
            "Exploring the fundamental questions of astrophysics and cosmology",
        ),
        Route::Research => (
            "Research".to_string(),
            "Pushing the boundaries of human knowledge through rigorous investigation",
        ),
        Route::Programs => (
            "Programs".to_string(),
            "Opportunities to learn, collaborate, and contribute to cosmic discovery",
        ),
        Route::People => (
            "Our People".to_string(),
            "Meet the minds behind the Cosmic Horizons Initiative",
        ),
        Route::Partners => (
            "Our Partners".to_string(),
            "Building meaningful connections with passionate students and academic communities worldwide",
        ),
        Route::Community => (
            "Community".to_string(),
            "A global network united by curiosity about the cosmos",
        ),
        Route::Explore => (
            "Explore the Universe".to_string(),
            "Interactive tools and visualizations to journey through the cosmos",
        ),
        Route::News => (
            "News & Insights".to_string(),
            "The latest discoveries, announcements, and stories from our community",
        ),
        Route::Contact => (
            "Contact Us".to_string(),
            "Get in touch with the Cosmic Horizons Initiative",
        ),
        Route::NotFound(_) => (
            "404".to_string(),
            "Oops! This page drifted beyond the observable universe.",
        ),
    };
    PageCopy { title, subtitle }
}

/// `black-holes` -> `Black Holes`.
fn topic_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "How can we expand the limits of human knowledge further into the unknown? The Cosmic \
     Horizons Initiative is an international collaboration designed to ask big questions about \
     the universe, build the tools needed to answer them, and share the resulting discoveries \
     with the world.",
    "Our researchers span six continents, united in the pursuit of understanding cosmic \
     phenomena from the smallest particles to the largest structures in the observable universe.",
];
