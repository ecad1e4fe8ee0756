//! Review composer.

use super::is_blank;
use crate::data::MAX_RATING;

pub const DEFAULT_RATING: u8 = 4;
const MIN_RATING: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewState {
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewMsg {
    /// Set the star rating, clamped to 1..=5
    SetRating(u8),
    CommentChanged(String),
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            comment: String::new(),
        }
    }
}

impl ReviewState {
    pub fn can_publish(&self) -> bool {
        !is_blank(&self.comment)
    }

    pub fn update(&self, msg: ReviewMsg) -> Self {
        match msg {
            ReviewMsg::SetRating(rating) => Self {
                rating: rating.clamp(MIN_RATING, MAX_RATING),
                ..self.clone()
            },
            ReviewMsg::CommentChanged(comment) => Self {
                comment,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating_is_four() {
        assert_eq!(ReviewState::default().rating, 4);
    }

    #[test]
    fn test_rating_is_clamped() {
        let state = ReviewState::default();
        assert_eq!(state.update(ReviewMsg::SetRating(0)).rating, 1);
        assert_eq!(state.update(ReviewMsg::SetRating(9)).rating, 5);
        assert_eq!(state.update(ReviewMsg::SetRating(2)).rating, 2);
    }

    #[test]
    fn test_publish_requires_comment() {
        let state = ReviewState::default();
        assert!(!state.can_publish());
        assert!(!state.update(ReviewMsg::CommentChanged("  ".into())).can_publish());
        assert!(state.update(ReviewMsg::CommentChanged("Hermoso".into())).can_publish());
    }
}
