//! Entities shown across the app.
//!
//! Every list item carries a synthetic id assigned when its provider builds
//! it, so updates target one record even when two records read the same.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a feed post
    PostId
);
id_type!(
    /// Identifier of a recommended place
    PlaceId
);
id_type!(
    /// Identifier of a community review
    ReviewId
);
id_type!(
    /// Identifier of a notification
    NotificationId
);

/// Symbolic image reference. The terminal renders a labelled placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    Cartagena,
    ValleDelCocora,
    SantaMarta,
    Medellin,
    Atardecer,
    Catedral,
    Avatar,
    Map,
}

impl ImageRef {
    pub fn label(&self) -> &'static str {
        match self {
            ImageRef::Cartagena => "Cartagena",
            ImageRef::ValleDelCocora => "Valle del Cocora",
            ImageRef::SantaMarta => "Santa Marta",
            ImageRef::Medellin => "Medellín",
            ImageRef::Atardecer => "Atardecer",
            ImageRef::Catedral => "Catedral",
            ImageRef::Avatar => "Avatar",
            ImageRef::Map => "Mapa",
        }
    }

    /// Glyph used in place of the photo
    pub fn glyph(&self) -> &'static str {
        match self {
            ImageRef::Cartagena | ImageRef::Catedral => "⛪",
            ImageRef::ValleDelCocora => "🌴",
            ImageRef::SantaMarta => "🏖",
            ImageRef::Medellin => "🏙",
            ImageRef::Atardecer => "🌅",
            ImageRef::Avatar => "👤",
            ImageRef::Map => "🗺",
        }
    }
}

/// A post in the home feed. Counts are display strings ("1.2k").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub location: String,
    pub image: ImageRef,
    pub likes: String,
    pub comments: String,
}

impl Post {
    /// First letter of the author, used as the avatar initial
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

/// Highest star rating a review can carry
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// Star rating, 0 through [`MAX_RATING`]
    pub rating: u8,
    pub comment: String,
    pub likes: u32,
}

impl Review {
    /// Build a review, clamping the rating into 0..=5
    pub fn new(
        id: ReviewId,
        author: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        likes: u32,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            rating: rating.min(MAX_RATING),
            comment: comment.into(),
            likes,
        }
    }

    /// Same review with one more like
    pub fn liked(&self) -> Self {
        Self {
            likes: self.likes.saturating_add(1),
            ..self.clone()
        }
    }

    /// Whether two reviews read the same to a user, ignoring ids
    pub fn same_content(&self, other: &Review) -> bool {
        self.author == other.author
            && self.rating == other.rating
            && self.comment == other.comment
            && self.likes == other.likes
    }
}

/// A recommended place in the explore grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub image: ImageRef,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub avatar: ImageRef,
    pub photos: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_name: String,
    pub action: String,
    /// Relative time label ("hace 2 días.")
    pub time: String,
    pub avatar: ImageRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rating_is_clamped() {
        let review = Review::new(ReviewId(1), "Ana", 9, "Genial", 0);
        assert_eq!(review.rating, MAX_RATING);
    }

    #[test]
    fn test_liked_increments_by_one() {
        let review = Review::new(ReviewId(1), "Ana", 4, "Genial", 3);
        let liked = review.liked();
        assert_eq!(liked.likes, 4);
        assert_eq!(liked.id, review.id);
        assert_eq!(review.likes, 3);
    }

    #[test]
    fn test_same_content_ignores_id() {
        let a = Review::new(ReviewId(1), "Ana", 4, "Genial", 3);
        let b = Review::new(ReviewId(2), "Ana", 4, "Genial", 3);
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&PostId(7)).unwrap(), "7");
        assert_eq!(PlaceId(3).to_string(), "3");
    }
}
