//! 坐标转换演示
//!
//! 把天安门坐标在三个坐标系之间转换，并演示批量转换和图层适配

use coord_converter::{
    convert_array, get_all_systems, wgs84_to_bd09, wgs84_to_gcj02, CoordSystem, Point,
    TileLayerAdapter,
};

fn main() {
    env_logger::init();

    for info in get_all_systems() {
        println!("{}: {} (加偏: {})", info.id, info.name, info.obfuscated);
    }
    println!();

    let origin = Point::new(116.404, 39.915);
    let gcj02 = wgs84_to_gcj02(origin.lon, origin.lat);
    let bd09 = wgs84_to_bd09(origin.lon, origin.lat);

    println!("GPS84: {:.6}, {:.6}", origin.lon, origin.lat);
    println!("GCJ02: {:.6}, {:.6}", gcj02.lon, gcj02.lat);
    println!("BD09:  {:.6}, {:.6}", bd09.lon, bd09.lat);
    println!();

    let points = vec![
        Point::new(116.404, 39.915),
        Point::new(121.4737, 31.2304),
        Point::new(113.2644, 23.1291),
    ];
    match convert_array(&points, "gps84", "bd09") {
        Ok(converted) => {
            for (src, dst) in points.iter().zip(&converted) {
                println!(
                    "{:.4}, {:.4} -> {:.6}, {:.6}",
                    src.lon, src.lat, dst.lon, dst.lat
                );
            }
        }
        Err(e) => log::error!("{}", e),
    }
    println!();

    // 高德瓦片图层在 z13 的视口像素范围
    let adapter = TileLayerAdapter::new(Some(CoordSystem::Gcj02));
    let bounds = adapter.tiled_pixel_bounds(origin, 13.0, 13.0, (1024.0, 768.0));
    println!("GCJ02 图层像素范围: {:?}", bounds);
}
