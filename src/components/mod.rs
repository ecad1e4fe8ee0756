// Presentational pieces shared by the screens. All stateless.

pub mod bottom_bar;
pub mod button;
pub mod cards;
pub mod chips;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod image;
pub mod notice;
pub mod rating;

pub use bottom_bar::{BottomBar, BottomTab};
pub use button::{Button, ButtonKind};
pub use cards::{notification_line, PlaceCard, PostCard, ReviewCard};
pub use chips::chip_row;
pub use footer::Footer;
pub use header::{Header, HEADER_HEIGHT};
pub use help_overlay::HelpOverlay;
pub use image::{avatar, ImagePlaceholder};
pub use notice::NoticeBanner;
pub use rating::{large_stars, stars};
