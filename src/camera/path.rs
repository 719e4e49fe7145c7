// A camera path: start/end ground points, independent heights, timing and
// orientation behavior. Paths are validated before any camera mutation.

use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use super::interpolation::{Easing, lerp};
use super::rig;
use crate::error::ValidationError;

/// Duration of a path at speed 1.0, in seconds.
pub const BASE_DURATION_SECS: f32 = 3.0;

/// How far ahead of the camera the `LookForward` target sits.
const LOOK_AHEAD_DISTANCE: f32 = 5.0;

/// Distance of the spherical look target in `Angle` mode, and of the fixed
/// forward target in `Parallel` mode.
const ANGLE_LOOK_DISTANCE: f32 = 10.0;

/// Point on the world ground plane. Height is tracked per path end, not in
/// the point, because it is edited independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPoint {
    pub x: f32,
    pub z: f32,
}

impl CameraPoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

/// Pan/tilt in degrees for the `Angle` look mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LookAngles {
    pub pan: f32,
    pub tilt: f32,
}

/// Rule used to compute where the camera points while it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookMode {
    #[default]
    LookAtCar,
    LookForward,
    Parallel,
    Angle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPath {
    pub start: CameraPoint,
    pub end: CameraPoint,
    pub start_height: f32,
    pub end_height: f32,
    /// Duration scale; the path runs for `BASE_DURATION_SECS / speed`.
    pub speed: f32,
    pub interpolation: Easing,
    pub look_mode: LookMode,
    pub angles: Option<LookAngles>,
    pub fov: f32,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            start: CameraPoint::default(),
            end: CameraPoint::default(),
            start_height: 1.5,
            end_height: 1.5,
            speed: 1.0,
            interpolation: Easing::Linear,
            look_mode: LookMode::LookAtCar,
            angles: None,
            fov: rig::DEFAULT_FOV,
        }
    }
}

impl CameraPath {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ValidationError::NonPositiveSpeed(self.speed));
        }
        if self.look_mode == LookMode::Angle && self.angles.is_none() {
            return Err(ValidationError::MissingAngles);
        }
        Ok(())
    }

    /// Playback duration in seconds. Finite and positive for validated paths.
    pub fn duration(&self) -> f32 {
        BASE_DURATION_SECS / self.speed
    }

    /// Camera position at eased progress `t`. Height blends with the same
    /// parameter as the ground coordinates.
    pub fn position_at(&self, t: f32) -> glm::Vec3 {
        glm::vec3(
            lerp(self.start.x, self.end.x, t),
            lerp(self.start_height, self.end_height, t),
            lerp(self.start.z, self.end.z, t),
        )
    }

    /// Look target for the camera at `position`, per the path's look mode.
    pub fn look_target(&self, position: glm::Vec3) -> glm::Vec3 {
        match self.look_mode {
            LookMode::LookAtCar => rig::car_pivot(),
            LookMode::LookForward => {
                let dx = self.end.x - self.start.x;
                let dz = self.end.z - self.start.z;
                let length = (dx * dx + dz * dz).sqrt();
                if length > 0.0 {
                    glm::vec3(
                        position.x + dx / length * LOOK_AHEAD_DISTANCE,
                        position.y,
                        position.z + dz / length * LOOK_AHEAD_DISTANCE,
                    )
                } else {
                    // Degenerate zero-length path: fall back to the car.
                    rig::car_pivot()
                }
            }
            LookMode::Parallel => {
                glm::vec3(position.x, position.y, position.z - ANGLE_LOOK_DISTANCE)
            }
            LookMode::Angle => {
                let angles = self.angles.unwrap_or_default();
                let pan = angles.pan.to_radians();
                let tilt = angles.tilt.to_radians();
                glm::vec3(
                    position.x + ANGLE_LOOK_DISTANCE * pan.sin() * tilt.cos(),
                    position.y + ANGLE_LOOK_DISTANCE * tilt.sin(),
                    position.z - ANGLE_LOOK_DISTANCE * pan.cos() * tilt.cos(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_speed_is_rejected() {
        let mut path = CameraPath::default();
        path.speed = 0.0;
        assert_eq!(path.validate(), Err(ValidationError::NonPositiveSpeed(0.0)));
        path.speed = -1.0;
        assert!(path.validate().is_err());
        path.speed = f32::INFINITY;
        assert!(path.validate().is_err());
    }

    #[test]
    fn angle_mode_requires_angles() {
        let mut path = CameraPath::default();
        path.look_mode = LookMode::Angle;
        assert_eq!(path.validate(), Err(ValidationError::MissingAngles));

        path.angles = Some(LookAngles { pan: 90.0, tilt: 0.0 });
        assert!(path.validate().is_ok());
    }

    #[test]
    fn duration_scales_inverse_to_speed() {
        let mut path = CameraPath::default();
        path.speed = 0.5;
        assert_eq!(path.duration(), 6.0);
        path.speed = 2.0;
        assert_eq!(path.duration(), 1.5);
    }

    #[test]
    fn position_interpolates_ground_and_height() {
        let path = CameraPath {
            start: CameraPoint::new(-2.0, 0.0),
            end: CameraPoint::new(2.0, 4.0),
            start_height: 1.0,
            end_height: 3.0,
            ..Default::default()
        };
        let mid = path.position_at(0.5);
        assert_eq!(mid, glm::vec3(0.0, 2.0, 2.0));
    }

    #[test]
    fn look_forward_aims_along_travel_direction() {
        let path = CameraPath {
            start: CameraPoint::new(0.0, 0.0),
            end: CameraPoint::new(4.0, 0.0),
            look_mode: LookMode::LookForward,
            ..Default::default()
        };
        let position = path.position_at(0.25);
        let target = path.look_target(position);
        assert_eq!(target, glm::vec3(position.x + 5.0, position.y, position.z));
    }

    #[test]
    fn look_forward_degenerate_path_falls_back_to_car() {
        let path = CameraPath {
            look_mode: LookMode::LookForward,
            ..Default::default()
        };
        assert_eq!(path.look_target(glm::vec3(1.0, 1.0, 1.0)), rig::car_pivot());
    }

    #[test]
    fn angle_target_uses_spherical_offset() {
        let path = CameraPath {
            look_mode: LookMode::Angle,
            angles: Some(LookAngles { pan: 90.0, tilt: 0.0 }),
            ..Default::default()
        };
        let target = path.look_target(glm::vec3(0.0, 1.0, 0.0));
        assert!((target.x - 10.0).abs() < 1e-4);
        assert!((target.y - 1.0).abs() < 1e-4);
        assert!(target.z.abs() < 1e-3);
    }

    #[test]
    fn path_round_trips_through_json() {
        let path = CameraPath {
            look_mode: LookMode::Angle,
            angles: Some(LookAngles { pan: 92.0, tilt: 0.0 }),
            ..Default::default()
        };
        let json = serde_json::to_string(&path).unwrap();
        assert!(json.contains("\"lookMode\":\"angle\""));
        let back: CameraPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
