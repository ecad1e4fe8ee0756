//! Home feed of traveller posts.

use crate::data::{self, Post};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub posts: Vec<Post>,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMsg {
    /// Select the post at this index; out-of-range indices are ignored
    SelectPost(usize),
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            posts: data::posts(),
            selected: None,
        }
    }
}

impl HomeState {
    pub fn selected_post(&self) -> Option<&Post> {
        self.selected.and_then(|i| self.posts.get(i))
    }

    pub fn update(&self, msg: HomeMsg) -> Self {
        match msg {
            HomeMsg::SelectPost(index) if index < self.posts.len() => Self {
                selected: Some(index),
                ..self.clone()
            },
            HomeMsg::SelectPost(_) => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_posts() {
        let state = HomeState::default();
        assert_eq!(state.posts.len(), 4);
        assert!(state.selected_post().is_none());
    }

    #[test]
    fn test_select_post() {
        let state = HomeState::default().update(HomeMsg::SelectPost(1));
        assert_eq!(state.selected_post().map(|p| p.author.as_str()), Some("Mateo Ruiz"));
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let state = HomeState::default().update(HomeMsg::SelectPost(2));
        assert_eq!(state.update(HomeMsg::SelectPost(40)), state);
    }
}
