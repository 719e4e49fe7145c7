// Camera rig and orbit-control toggle. The rig is owned by the viewer; the
// animation subsystem borrows it for the duration of a playback session and
// hands control back when the session ends.

use nalgebra_glm as glm;

/// Default perspective field of view, degrees.
pub const DEFAULT_FOV: f32 = 30.0;

/// Fixed aim point slightly above ground at the model's pivot.
pub fn car_pivot() -> glm::Vec3 {
    glm::vec3(0.0, 0.5, 0.0)
}

/// The three named static views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    Front,
    Side,
    Rear,
}

impl ViewPreset {
    pub fn position(self) -> glm::Vec3 {
        match self {
            ViewPreset::Front => glm::vec3(-3.0, 1.2, -3.0),
            ViewPreset::Side => glm::vec3(3.5, 1.2, 0.0),
            ViewPreset::Rear => glm::vec3(3.0, 1.2, 3.0),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "front" => Some(ViewPreset::Front),
            "side" => Some(ViewPreset::Side),
            "rear" => Some(ViewPreset::Rear),
            _ => None,
        }
    }
}

/// Saved rig pose, taken when a session starts so a cancelled preview can
/// put the camera back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    pub position: glm::Vec3,
    pub fov: f32,
    pub target: glm::Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub position: glm::Vec3,
    pub fov: f32,
    target: glm::Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: ViewPreset::Front.position(),
            fov: DEFAULT_FOV,
            target: car_pivot(),
        }
    }

    pub fn look_at(&mut self, target: glm::Vec3) {
        self.target = target;
    }

    pub fn target(&self) -> glm::Vec3 {
        self.target
    }

    pub fn apply_view(&mut self, view: ViewPreset) {
        self.position = view.position();
        self.target = car_pivot();
    }

    /// Canonical home pose the movie mode restores: front view, default fov.
    pub fn reset_to_front(&mut self) {
        self.apply_view(ViewPreset::Front);
        self.fov = DEFAULT_FOV;
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            position: self.position,
            fov: self.fov,
            target: self.target,
        }
    }

    pub fn restore(&mut self, snapshot: &CameraSnapshot) {
        self.position = snapshot.position;
        self.fov = snapshot.fov;
        self.target = snapshot.target;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

/// External free-look controller. Scripted playback disables it and
/// re-enables it on completion or cancellation.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: glm::Vec3,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            enabled: true,
            target: car_pivot(),
        }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}
