pub mod color;
pub mod io;
pub mod raster;

pub use self::color::Rgba;
pub use self::raster::RasterImage;
