pub mod f32;
pub mod gray;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::gray::GrayU8;
pub use self::rgb::RgbU8;
pub use self::traits::{ImageView, ImageViewMut};
