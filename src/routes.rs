//! Fixed route table for the site pages.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Science { topic: Option<String> },
    Research,
    Programs,
    People,
    Partners,
    Community,
    Explore,
    News,
    Contact,
    NotFound(String),
}

/// Routes listed in the sidebar, in display order.
pub const NAV_ROUTES: [Route; 11] = [
    Route::Home,
    Route::About,
    Route::Science { topic: None },
    Route::Research,
    Route::Programs,
    Route::People,
    Route::Partners,
    Route::Community,
    Route::Explore,
    Route::News,
    Route::Contact,
];

impl Route {
    /// Resolve a path like `/science/black-holes`. Query strings and fragments
    /// are ignored; unknown paths resolve to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["science"] => Route::Science { topic: None },
            ["science", topic] => Route::Science {
                topic: Some((*topic).to_string()),
            },
            ["research"] => Route::Research,
            ["programs"] => Route::Programs,
            ["people"] => Route::People,
            ["partners"] => Route::Partners,
            ["community"] => Route::Community,
            ["explore"] => Route::Explore,
            ["news"] => Route::News,
            ["contact"] => Route::Contact,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Science { topic: None } => "/science".to_string(),
            Route::Science { topic: Some(topic) } => format!("/science/{topic}"),
            Route::Research => "/research".to_string(),
            Route::Programs => "/programs".to_string(),
            Route::People => "/people".to_string(),
            Route::Partners => "/partners".to_string(),
            Route::Community => "/community".to_string(),
            Route::Explore => "/explore".to_string(),
            Route::News => "/news".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Science { .. } => "Science",
            Route::Research => "Research",
            Route::Programs => "Programs",
            Route::People => "People",
            Route::Partners => "Partners",
            Route::Community => "Community",
            Route::Explore => "Explore",
            Route::News => "News",
            Route::Contact => "Contact",
            Route::NotFound(_) => "Not found",
        }
    }

    /// True when both routes select the same sidebar entry.
    pub fn same_section(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
