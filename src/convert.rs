//! 坐标批量转换调度
//!
//! 根据 (源, 目标) 坐标系选择单点转换函数并映射到整个点序列

use crate::coords;
use crate::types::{CoordSystem, Point};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// 源或目标坐标系不在 gps84/gcj02/bd09 之内
    #[error("不支持的转换类型: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },
}

/// 按 (源, 目标) 对解析单点转换函数，同坐标系返回 None
fn resolve(from: CoordSystem, to: CoordSystem) -> Option<fn(f64, f64) -> Point> {
    match (from, to) {
        (CoordSystem::Gps84, CoordSystem::Gcj02) => Some(coords::wgs84_to_gcj02),
        (CoordSystem::Gps84, CoordSystem::Bd09) => Some(coords::wgs84_to_bd09),
        (CoordSystem::Gcj02, CoordSystem::Gps84) => Some(coords::gcj02_to_wgs84),
        (CoordSystem::Gcj02, CoordSystem::Bd09) => Some(coords::gcj02_to_bd09),
        (CoordSystem::Bd09, CoordSystem::Gps84) => Some(coords::bd09_to_wgs84),
        (CoordSystem::Bd09, CoordSystem::Gcj02) => Some(coords::bd09_to_gcj02),
        _ => None,
    }
}

/// 单点转换，同坐标系时原样返回
pub fn convert_point(point: Point, from: CoordSystem, to: CoordSystem) -> Point {
    match resolve(from, to) {
        Some(convert) => convert(point.lon, point.lat),
        None => point,
    }
}

/// 批量转换坐标数组
///
/// `from_type` / `to_type` 取值为 "gps84" | "gcj02" | "bd09"。
/// 两者相同时原样返回；未知标签整批报错，不产生部分结果
pub fn convert_array(
    points: &[Point],
    from_type: &str,
    to_type: &str,
) -> Result<Vec<Point>, ConvertError> {
    if from_type == to_type {
        return Ok(points.to_vec());
    }

    let (from, to) = match (CoordSystem::from_tag(from_type), CoordSystem::from_tag(to_type)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            log::warn!("不支持的转换类型: {} -> {}", from_type, to_type);
            return Err(ConvertError::UnsupportedConversion {
                from: from_type.to_string(),
                to: to_type.to_string(),
            });
        }
    };

    log::debug!(
        "批量转换坐标: {} -> {}, 共 {} 个点",
        from_type,
        to_type,
        points.len()
    );

    match resolve(from, to) {
        Some(convert) => Ok(points.iter().map(|p| convert(p.lon, p.lat)).collect()),
        // 标签大小写不同但坐标系相同
        None => Ok(points.to_vec()),
    }
}
