pub mod click;
pub mod resize;
pub mod touch;

pub use click::{wire_buttons, wire_dots};
pub use resize::wire_resize;
pub use touch::wire_swipe;
