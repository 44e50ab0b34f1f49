//! 公共类型定义
//!
//! 坐标点、坐标系标签以及瓦片相关的基础类型

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 经纬度坐标点 (十进制度)
///
/// 引擎不做范围校验，超出中国区域时公式仍有定义但结果无实际意义
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// 坐标系类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordSystem {
    Gps84,
    Gcj02,
    Bd09,
}

impl ToString for CoordSystem {
    fn to_string(&self) -> String {
        match self {
            CoordSystem::Gps84 => "gps84".to_string(),
            CoordSystem::Gcj02 => "gcj02".to_string(),
            CoordSystem::Bd09 => "bd09".to_string(),
        }
    }
}

impl CoordSystem {
    /// 解析坐标系标签，未知标签返回 None
    pub fn from_tag(s: &str) -> Option<CoordSystem> {
        match s.to_lowercase().as_str() {
            "gps84" => Some(CoordSystem::Gps84),
            "gcj02" => Some(CoordSystem::Gcj02),
            "bd09" => Some(CoordSystem::Bd09),
            _ => None,
        }
    }

    /// 全部坐标系
    pub fn all() -> [CoordSystem; 3] {
        [CoordSystem::Gps84, CoordSystem::Gcj02, CoordSystem::Bd09]
    }
}

/// 坐标系信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub id: String,
    pub name: String,
    /// 是否为加偏坐标系
    pub obfuscated: bool,
}

static SYSTEM_INFO: Lazy<HashMap<CoordSystem, SystemInfo>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(CoordSystem::Gps84, SystemInfo {
        id: "gps84".to_string(),
        name: "GPS84 (WGS84 原始坐标)".to_string(),
        obfuscated: false,
    });

    m.insert(CoordSystem::Gcj02, SystemInfo {
        id: "gcj02".to_string(),
        name: "火星坐标 (高德/腾讯)".to_string(),
        obfuscated: true,
    });

    m.insert(CoordSystem::Bd09, SystemInfo {
        id: "bd09".to_string(),
        name: "百度坐标".to_string(),
        obfuscated: true,
    });

    m
});

/// 按坐标系获取信息
pub fn get_system_info(system: CoordSystem) -> Option<SystemInfo> {
    SYSTEM_INFO.get(&system).cloned()
}

/// 获取所有坐标系信息
pub fn get_all_systems() -> Vec<SystemInfo> {
    CoordSystem::all()
        .iter()
        .filter_map(|s| get_system_info(*s))
        .collect()
}

/// 经纬度边界
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// 验证边界是否有效
    pub fn is_valid(&self) -> bool {
        self.north > self.south && self.east > self.west
            && self.north <= 85.0511 && self.south >= -85.0511
            && self.east <= 180.0 && self.west >= -180.0
    }
}

/// 瓦片坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}
