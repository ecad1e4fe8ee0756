//! Notification list with tabs.

use crate::data::{self, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationTab {
    #[default]
    All,
    Mentions,
    Followers,
    Likes,
}

impl NotificationTab {
    pub const ALL: [NotificationTab; 4] = [
        NotificationTab::All,
        NotificationTab::Mentions,
        NotificationTab::Followers,
        NotificationTab::Likes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationTab::All => "Todo",
            NotificationTab::Mentions => "Menciones",
            NotificationTab::Followers => "Followers",
            NotificationTab::Likes => "Likes",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsState {
    pub selected_tab: NotificationTab,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationsMsg {
    SelectTab(NotificationTab),
    ClearAll,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            selected_tab: NotificationTab::default(),
            notifications: data::notifications(),
        }
    }
}

impl NotificationsState {
    pub fn update(&self, msg: NotificationsMsg) -> Self {
        match msg {
            NotificationsMsg::SelectTab(selected_tab) => Self {
                selected_tab,
                ..self.clone()
            },
            NotificationsMsg::ClearAll => Self {
                notifications: Vec::new(),
                ..self.clone()
            },
        }
    }
}
