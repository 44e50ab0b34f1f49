//! 坐标转换引擎
//!
//! 支持 GPS84、GCJ02 (火星坐标)、BD09 (百度坐标) 之间的相互转换。
//! 全部为纯函数，对任意有限输入都有定义，不做范围校验

use crate::types::Point;
use std::f64::consts::PI;

/// 参考椭球长半轴 (米)
pub const A: f64 = 6_378_245.0;
/// 参考椭球偏心率平方
pub const EE: f64 = 0.006_693_421_622_965_943;
/// 百度坐标系偏转参数
pub const X_PI: f64 = PI * 3000.0 / 180.0;
/// 平均地球半径 (米)，转换公式未使用，保留以保持接口完整
pub const R: f64 = 6_378_137.0;

/// GPS84 坐标转 GCJ02
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> Point {
    let dlat = transform_lat(lon - 105.0, lat - 35.0);
    let dlon = transform_lon(lon - 105.0, lat - 35.0);
    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrtmagic = magic.sqrt();
    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    let dlon = (dlon * 180.0) / (A / sqrtmagic * radlat.cos() * PI);
    Point::new(lon + dlon, lat + dlat)
}

/// GCJ02 坐标转 GPS84
///
/// 近似逆变换：对已加偏的输入再做一次正向加偏，取对称点还原。
/// 偏移量小且平滑，城市尺度下误差在米级以内，是该坐标族的通行约定
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> Point {
    let offset = wgs84_to_gcj02(lon, lat);
    Point::new(lon * 2.0 - offset.lon, lat * 2.0 - offset.lat)
}

/// GCJ02 坐标转 BD09
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> Point {
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();
    let bd_lon = z * theta.cos() + 0.0065;
    let bd_lat = z * theta.sin() + 0.006;
    Point::new(bd_lon, bd_lat)
}

/// BD09 坐标转 GCJ02
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> Point {
    let x = lon - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    let gcj_lon = z * theta.cos();
    let gcj_lat = z * theta.sin();
    Point::new(gcj_lon, gcj_lat)
}

/// GPS84 坐标转 BD09
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> Point {
    let gcj02 = wgs84_to_gcj02(lon, lat);
    gcj02_to_bd09(gcj02.lon, gcj02.lat)
}

/// BD09 坐标转 GPS84
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> Point {
    let gcj02 = bd09_to_gcj02(lon, lat);
    gcj02_to_wgs84(gcj02.lon, gcj02.lat)
}

/// 纬度偏移多项式，x/y 以中国近似中心 (105, 35) 为原点
fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// 经度偏移多项式，系数与纬度不对称
fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
