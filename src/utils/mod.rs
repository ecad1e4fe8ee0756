pub mod focus;
pub mod layout;
pub mod path;
pub mod style;
pub mod text_input;

pub use layout::{
    center_popup, centered_column, create_standard_layout, ScreenLayout,
};
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use style::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
