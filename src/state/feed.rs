//! Explore screen: category chips and recommended places.

use crate::data::{self, Place};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Landscapes,
    Beaches,
    Cultural,
    Hotels,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Landscapes,
        Category::Beaches,
        Category::Cultural,
        Category::Hotels,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Landscapes => "Paisajes",
            Category::Beaches => "Playas",
            Category::Cultural => "Cultural",
            Category::Hotels => "Hoteles",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub selected_category: usize,
    pub places: Vec<Place>,
    /// Place under the cursor in the recommendations grid
    pub highlighted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMsg {
    SelectCategory(usize),
    HighlightPlace(usize),
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            selected_category: 0,
            places: data::places(),
            highlighted: 0,
        }
    }
}

impl FeedState {
    pub fn category(&self) -> Category {
        Category::ALL
            .get(self.selected_category)
            .copied()
            .unwrap_or(Category::Landscapes)
    }

    pub fn highlighted_place(&self) -> Option<&Place> {
        self.places.get(self.highlighted)
    }

    pub fn update(&self, msg: FeedMsg) -> Self {
        match msg {
            FeedMsg::SelectCategory(index) if index < Category::ALL.len() => Self {
                selected_category: index,
                ..self.clone()
            },
            FeedMsg::HighlightPlace(index) if index < self.places.len() => Self {
                highlighted: index,
                ..self.clone()
            },
            FeedMsg::SelectCategory(_) | FeedMsg::HighlightPlace(_) => self.clone(),
        }
    }
}
