pub mod constants;
pub mod easing;
pub mod error;
pub mod hearts;
pub mod morph;
pub mod path;
pub mod pinch;
pub mod pixelate;
pub mod ripple;
pub mod state;

pub use constants::*;
pub use easing::*;
pub use error::*;
pub use hearts::*;
pub use morph::*;
pub use path::*;
pub use pinch::*;
pub use pixelate::*;
pub use ripple::*;
pub use state::*;
