//! Screen state records.
//!
//! Each screen owns one flat record and a message enum. `update` takes the
//! current record and a message and returns the next record; it never
//! mutates in place and never performs I/O, so the same (record, message)
//! pair always yields the same result.
//!
//! ```text
//!   key event ──► controller ──► Msg ──► State::update ──► new State
//!                                                            │
//!                                  draw_* (pure) ◄───────────┘
//! ```
//!
//! Validity is expressed as derived booleans (`can_sign_in`, `can_save`,
//! ...). Controllers consult them before sending a submit message; the
//! submit messages also re-check them so an invalid submit is a no-op.

pub mod detail;
pub mod edit_profile;
pub mod feed;
pub mod home;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod review;
pub mod signup;
pub mod splash;

pub use detail::{DetailMsg, DetailState};
pub use edit_profile::{EditProfileMsg, EditProfileNotice, EditProfileState};
pub use feed::{Category, FeedMsg, FeedState};
pub use home::{HomeMsg, HomeState};
pub use login::{LoginMsg, LoginNotice, LoginState};
pub use notifications::{NotificationTab, NotificationsMsg, NotificationsState};
pub use profile::ProfileState;
pub use review::{ReviewMsg, ReviewState, DEFAULT_RATING};
pub use signup::{SignUpMsg, SignUpState};
pub use splash::SplashState;

/// A required field counts as filled when it has a non-whitespace character
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
