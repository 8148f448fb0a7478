//! 건물 메타데이터(층수, 높이, 바닥면적) 조회.
//!
//! 실제 구현은 OSM/Overpass 같은 GIS 서비스를 호출해야 하지만 현재는 고정값 스텁만 제공한다.

use serde::Serialize;

/// 위치 기반으로 조회한 건물 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingProfile {
    pub levels: u32,
    /// 건물 높이 hn [m]
    pub height_m: f64,
    /// 바닥면적 [sq.ft]
    pub footprint: f64,
}

/// 위경도로 건물 정보를 제공하는 외부 서비스 경계.
pub trait SpatialMetadataProvider {
    fn fetch(&self, latitude: f64, longitude: f64) -> BuildingProfile;
}

/// 어떤 좌표에도 같은 건물을 돌려주는 스텁. 다카의 전형적인 6층 건물이다.
#[derive(Debug, Clone, Copy)]
pub struct FixedSpatialProvider {
    profile: BuildingProfile,
}

impl FixedSpatialProvider {
    pub fn new(profile: BuildingProfile) -> Self {
        Self { profile }
    }
}

impl Default for FixedSpatialProvider {
    fn default() -> Self {
        Self::new(BuildingProfile {
            levels: 6,
            height_m: 18.6,
            footprint: 1200.0,
        })
    }
}

impl SpatialMetadataProvider for FixedSpatialProvider {
    fn fetch(&self, latitude: f64, longitude: f64) -> BuildingProfile {
        tracing::debug!(latitude, longitude, "returning fixed building profile");
        self.profile
    }
}
