use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/play/:slug")]
    Play { slug: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Route for an activity tile on the hub.
    #[must_use]
    pub fn play(slug: &str) -> Self {
        Self::Play {
            slug: slug.to_string(),
        }
    }
}
