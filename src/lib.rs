//! 坐标转换库
//!
//! 支持 GPS84、GCJ02 (火星坐标)、BD09 (百度坐标) 之间的相互转换，
//! 并为瓦片图层提供渲染前的中心点重映射

mod convert;
mod coords;
mod tile_layer;
mod types;

pub use convert::{convert_array, convert_point, ConvertError};
pub use coords::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02, A,
    EE, R, X_PI,
};
pub use tile_layer::{
    calculate_tiles, project, zoom_scale, PixelBounds, TileLayerAdapter, ZoomTransform, TILE_SIZE,
};
pub use types::{
    get_all_systems, get_system_info, Bounds, CoordSystem, Point, SystemInfo, TileCoord,
};
