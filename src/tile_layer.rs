//! 瓦片图层坐标适配
//!
//! 图层声明自己的坐标系后，在标准 Web Mercator 像素计算之前
//! 先把 GPS84 的地图中心点重映射到 GCJ02 或 BD09。
//! 适配层只经由公开转换函数使用引擎，本身无状态、不缓存

use crate::coords;
use crate::types::{Bounds, CoordSystem, Point, TileCoord};
use std::f64::consts::PI;

/// 瓦片边长 (像素)
pub const TILE_SIZE: f64 = 256.0;

/// 像素坐标范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBounds {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

/// 图层缩放动画的平移和缩放
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub translate: (f64, f64),
    pub scale: f64,
}

/// 两个缩放层级之间的比例
pub fn zoom_scale(to_zoom: f64, from_zoom: f64) -> f64 {
    2f64.powf(to_zoom - from_zoom)
}

/// 经纬度投影到指定层级的像素坐标 (Web Mercator)
pub fn project(point: Point, zoom: f64) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let x = (point.lon + 180.0) / 360.0 * scale;
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * scale;
    (x, y)
}

/// 计算经纬度边界内指定层级的所有瓦片坐标
pub fn calculate_tiles(bounds: &Bounds, zoom_levels: &[u32]) -> Vec<TileCoord> {
    let mut tiles = Vec::new();

    for &z in zoom_levels {
        let n = 2u32.pow(z);

        // 经度转瓦片X
        let x_min = ((bounds.west + 180.0) / 360.0 * n as f64).floor() as u32;
        let x_max = ((bounds.east + 180.0) / 360.0 * n as f64).floor() as u32;

        // 纬度转瓦片Y (Web Mercator)
        let lat_rad_north = bounds.north.to_radians();
        let lat_rad_south = bounds.south.to_radians();

        let y_min = ((1.0 - lat_rad_north.tan().asinh() / PI) / 2.0 * n as f64)
            .floor() as u32;
        let y_max = ((1.0 - lat_rad_south.tan().asinh() / PI) / 2.0 * n as f64)
            .floor() as u32;

        for x in x_min..=x_max.min(n - 1) {
            for y in y_min..=y_max.min(n - 1) {
                tiles.push(TileCoord::new(z, x, y));
            }
        }
    }

    log::debug!("计算瓦片范围: {:?} 共 {} 个瓦片", zoom_levels, tiles.len());

    tiles
}

/// 瓦片图层适配器
///
/// 持有图层声明的坐标系；`coord_type` 为 None 或 Gps84 时不做重映射
pub struct TileLayerAdapter {
    coord_type: Option<CoordSystem>,
}

impl TileLayerAdapter {
    pub fn new(coord_type: Option<CoordSystem>) -> Self {
        Self { coord_type }
    }

    /// 把 GPS84 中心点重映射到图层声明的坐标系
    fn remap_center(&self, center: Point) -> Point {
        match self.coord_type {
            Some(CoordSystem::Gcj02) => coords::wgs84_to_gcj02(center.lon, center.lat),
            Some(CoordSystem::Bd09) => coords::wgs84_to_bd09(center.lon, center.lat),
            _ => center,
        }
    }

    /// 缩放动画中图层的平移量和缩放比例
    pub fn zoom_transform(
        &self,
        level_origin: (f64, f64),
        level_zoom: f64,
        center: Point,
        zoom: f64,
        view_size: (f64, f64),
    ) -> ZoomTransform {
        let center = self.remap_center(center);
        let scale = zoom_scale(zoom, level_zoom);
        let origin = pixel_origin(center, zoom, view_size);
        let translate = (
            (level_origin.0 * scale - origin.0).round(),
            (level_origin.1 * scale - origin.1).round(),
        );
        ZoomTransform { translate, scale }
    }

    /// 视口在瓦片层级下覆盖的像素范围
    pub fn tiled_pixel_bounds(
        &self,
        center: Point,
        map_zoom: f64,
        tile_zoom: f64,
        view_size: (f64, f64),
    ) -> PixelBounds {
        let center = self.remap_center(center);
        let scale = zoom_scale(map_zoom, tile_zoom);
        let (cx, cy) = project(center, tile_zoom);
        let (cx, cy) = (cx.floor(), cy.floor());
        let half = (view_size.0 / (scale * 2.0), view_size.1 / (scale * 2.0));

        PixelBounds {
            min: (cx - half.0, cy - half.1),
            max: (cx + half.0, cy + half.1),
        }
    }
}

/// 视口左上角在指定层级的像素坐标
fn pixel_origin(center: Point, zoom: f64, view_size: (f64, f64)) -> (f64, f64) {
    let (x, y) = project(center, zoom);
    ((x - view_size.0 / 2.0).round(), (y - view_size.1 / 2.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEIJING: Point = Point { lon: 116.404, lat: 39.915 };

    #[test]
    fn test_zoom_scale() {
        assert_eq!(zoom_scale(13.0, 12.0), 2.0);
        assert_eq!(zoom_scale(12.0, 13.0), 0.5);
        assert_eq!(zoom_scale(13.0, 13.0), 1.0);
    }

    #[test]
    fn test_project_beijing() {
        let (x, y) = project(BEIJING, 13.0);
        assert_eq!((x / TILE_SIZE).floor() as u32, 6744);
        assert_eq!((y / TILE_SIZE).floor() as u32, 3103);
    }

    #[test]
    fn test_calculate_tiles_beijing_block() {
        let bounds = Bounds::new(40.1, 39.7, 116.8, 116.1);
        let tiles = calculate_tiles(&bounds, &[10]);
        assert_eq!(tiles.len(), 6);
        for t in &tiles {
            assert_eq!(t.z, 10);
            assert!((842..=844).contains(&t.x), "{t:?}");
            assert!((387..=388).contains(&t.y), "{t:?}");
        }
    }

    #[test]
    fn test_calculate_tiles_multi_level() {
        let bounds = Bounds::new(40.1, 39.7, 116.8, 116.1);
        let tiles = calculate_tiles(&bounds, &[10, 11]);
        assert!(tiles.iter().any(|t| t.z == 10));
        assert!(tiles.iter().any(|t| t.z == 11));
    }

    #[test]
    fn test_pixel_bounds_size_matches_view() {
        let adapter = TileLayerAdapter::new(None);
        let b = adapter.tiled_pixel_bounds(BEIJING, 13.0, 13.0, (1024.0, 768.0));
        assert_eq!(b.max.0 - b.min.0, 1024.0);
        assert_eq!(b.max.1 - b.min.1, 768.0);

        // 地图层级高于瓦片层级时视口覆盖的瓦片像素减半
        let b = adapter.tiled_pixel_bounds(BEIJING, 14.0, 13.0, (1024.0, 768.0));
        assert_eq!(b.max.0 - b.min.0, 512.0);
    }

    #[test]
    fn test_gcj02_layer_shifts_pixel_bounds() {
        let gps = TileLayerAdapter::new(None);
        let gcj = TileLayerAdapter::new(Some(CoordSystem::Gcj02));
        let view = (1024.0, 768.0);

        let a = gps.tiled_pixel_bounds(BEIJING, 13.0, 13.0, view);
        let b = gcj.tiled_pixel_bounds(BEIJING, 13.0, 13.0, view);

        // 北京的 GCJ02 偏移在 z13 约为东移 36 像素、北移 11 像素
        let dx = b.min.0 - a.min.0;
        let dy = b.min.1 - a.min.1;
        assert!(dx > 30.0 && dx < 42.0, "dx = {dx}");
        assert!(dy < -6.0 && dy > -16.0, "dy = {dy}");

        // gps84 声明与不声明等价
        let c = TileLayerAdapter::new(Some(CoordSystem::Gps84))
            .tiled_pixel_bounds(BEIJING, 13.0, 13.0, view);
        assert_eq!(a, c);
    }

    #[test]
    fn test_zoom_transform_scale_and_shift() {
        let gps = TileLayerAdapter::new(None);
        let bd = TileLayerAdapter::new(Some(CoordSystem::Bd09));
        let view = (1024.0, 768.0);
        let origin = (1000.0, 2000.0);

        let t = gps.zoom_transform(origin, 12.0, BEIJING, 13.0, view);
        assert_eq!(t.scale, 2.0);

        // bd09 图层像素原点更靠东，平移量相应减小
        let t2 = bd.zoom_transform(origin, 12.0, BEIJING, 13.0, view);
        assert_eq!(t2.scale, 2.0);
        assert!(t2.translate.0 < t.translate.0);
    }
}
