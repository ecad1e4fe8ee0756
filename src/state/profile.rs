//! Signed-in traveller profile.

use crate::data::{self, ImageRef};

/// Read-only view of the signed-in traveller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub name: String,
    pub handle: String,
    pub avatar: ImageRef,
    pub photos: Vec<ImageRef>,
}

impl Default for ProfileState {
    fn default() -> Self {
        let profile = data::profile();
        Self {
            name: profile.name,
            handle: profile.handle,
            avatar: profile.avatar,
            photos: profile.photos,
        }
    }
}
