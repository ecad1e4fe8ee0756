//! Place details with community reviews.

use crate::data::{self, ImageRef, Review, ReviewId};

const DEFAULT_LOCATION: &str = "Eje Cafetero";
const DEFAULT_DESCRIPTION: &str = "Imagina caminar entre las palmas más altas del mundo, \
donde la niebla abraza las montañas verdes de Colombia.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub title: String,
    pub location: String,
    pub description: String,
    pub image: ImageRef,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMsg {
    LikeReview(ReviewId),
}

impl DetailState {
    /// Seed the screen for the place named in the route
    pub fn for_place(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: DEFAULT_LOCATION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: ImageRef::ValleDelCocora,
            reviews: data::reviews(),
        }
    }

    pub fn update(&self, msg: DetailMsg) -> Self {
        match msg {
            DetailMsg::LikeReview(id) => Self {
                reviews: self
                    .reviews
                    .iter()
                    .map(|r| if r.id == id { r.liked() } else { r.clone() })
                    .collect(),
                ..self.clone()
            },
        }
    }

    /// Like every review that reads the same as `review`.
    ///
    /// Content-equal reviews all receive the like. Use `LikeReview` to
    /// target a single review.
    pub fn like_matching(&self, review: &Review) -> Self {
        Self {
            reviews: self
                .reviews
                .iter()
                .map(|r| {
                    if r.same_content(review) {
                        r.liked()
                    } else {
                        r.clone()
                    }
                })
                .collect(),
            ..self.clone()
        }
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::for_place(ImageRef::ValleDelCocora.label())
    }
}
