pub mod convert;
pub mod params;
pub mod scale;
pub mod variations;

pub use convert::{
    handle_convert, ColorQuery, ConvertResponse, FormatStrings, HslValue, OklchValue, RgbValue,
    __path_handle_convert,
};
pub use scale::{
    handle_scale, handle_scale_export, ExportQuery, ScaleQuery, ScaleResponse, SwatchValue,
    __path_handle_scale, __path_handle_scale_export,
};
pub use variations::{handle_variations, VariationsResponse, __path_handle_variations};
