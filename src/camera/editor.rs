// Path editor model: one editable camera path plus a fixed store of three
// preset slots. Presets live in memory only, for the session.

use serde::{Deserialize, Serialize};

use super::interpolation::Easing;
use super::path::{CameraPath, CameraPoint, LookAngles, LookMode};
use super::rig::DEFAULT_FOV;
use crate::error::{PresetError, ValidationError};

pub const PRESET_SLOTS: usize = 3;

/// One saved path with a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPreset {
    pub name: String,
    pub path: CameraPath,
}

/// Which path endpoint a placed point ended up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct PathEditor {
    start_point: Option<CameraPoint>,
    end_point: Option<CameraPoint>,
    pub start_height: f32,
    pub end_height: f32,
    pub speed: f32,
    pub interpolation: Easing,
    pub look_mode: LookMode,
    pub pan: f32,
    pub tilt: f32,
    pub fov: f32,
    presets: [Option<PathPreset>; PRESET_SLOTS],
    selected_slot: Option<usize>,
}

impl PathEditor {
    /// Fresh editor with the three built-in default presets.
    pub fn new() -> Self {
        Self {
            start_point: None,
            end_point: None,
            start_height: 1.5,
            end_height: 1.5,
            speed: 1.0,
            interpolation: Easing::Linear,
            look_mode: LookMode::LookAtCar,
            pan: 0.0,
            tilt: 0.0,
            fov: DEFAULT_FOV,
            presets: default_presets(),
            selected_slot: None,
        }
    }

    pub fn start_point(&self) -> Option<CameraPoint> {
        self.start_point
    }

    pub fn end_point(&self) -> Option<CameraPoint> {
        self.end_point
    }

    /// Place the next path point. The first click sets the start, the second
    /// the end; a third click begins a fresh path.
    pub fn place_point(&mut self, point: CameraPoint) -> PointRole {
        match (self.start_point, self.end_point) {
            (None, _) => {
                self.start_point = Some(point);
                PointRole::Start
            }
            (Some(_), None) => {
                self.end_point = Some(point);
                PointRole::End
            }
            (Some(_), Some(_)) => {
                self.start_point = Some(point);
                self.end_point = None;
                PointRole::Start
            }
        }
    }

    pub fn clear_path(&mut self) {
        self.start_point = None;
        self.end_point = None;
    }

    /// Snapshot the current editable fields as a validated path.
    pub fn current_path(&self) -> Result<CameraPath, ValidationError> {
        let start = self
            .start_point
            .ok_or(ValidationError::IncompletePath("start point is not set"))?;
        let end = self
            .end_point
            .ok_or(ValidationError::IncompletePath("end point is not set"))?;

        let path = CameraPath {
            start,
            end,
            start_height: self.start_height,
            end_height: self.end_height,
            speed: self.speed,
            interpolation: self.interpolation,
            look_mode: self.look_mode,
            angles: (self.look_mode == LookMode::Angle).then_some(LookAngles {
                pan: self.pan,
                tilt: self.tilt,
            }),
            fov: self.fov,
        };
        path.validate()?;
        Ok(path)
    }

    /// Export the current path as JSON, for copy-out of a configured move.
    pub fn export_path(&self) -> Result<String, ValidationError> {
        let path = self.current_path()?;
        Ok(serde_json::to_string_pretty(&path).unwrap_or_default())
    }

    pub fn preset(&self, slot: usize) -> Option<&PathPreset> {
        if (1..=PRESET_SLOTS).contains(&slot) {
            self.presets[slot - 1].as_ref()
        } else {
            None
        }
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    /// Mark a slot as the save target. Slots are numbered 1..=3.
    pub fn select_slot(&mut self, slot: usize) -> Result<(), PresetError> {
        if !(1..=PRESET_SLOTS).contains(&slot) {
            return Err(PresetError::NotFound(slot));
        }
        self.selected_slot = Some(slot);
        Ok(())
    }

    /// Load a preset into the editor, overwriting every editable field
    /// including the field of view. The loaded slot becomes the selected
    /// save target.
    pub fn load_preset(&mut self, slot: usize) -> Result<PathPreset, PresetError> {
        let preset = self
            .preset(slot)
            .cloned()
            .ok_or(PresetError::NotFound(slot))?;

        let path = &preset.path;
        self.start_point = Some(path.start);
        self.end_point = Some(path.end);
        self.start_height = path.start_height;
        self.end_height = path.end_height;
        self.speed = path.speed;
        self.interpolation = path.interpolation;
        self.look_mode = path.look_mode;
        if let Some(angles) = path.angles {
            self.pan = angles.pan;
            self.tilt = angles.tilt;
        }
        self.fov = path.fov;
        self.selected_slot = Some(slot);

        log::info!("loaded preset {slot} ({})", preset.name);
        Ok(preset)
    }

    /// Save the current path into the selected slot, overwriting prior
    /// content. Fails without mutating any slot if the path is incomplete
    /// or no slot has been selected.
    pub fn save_preset(&mut self) -> Result<usize, PresetError> {
        if self.start_point.is_none() || self.end_point.is_none() {
            return Err(PresetError::InvalidState(
                "start and end points must be set before saving",
            ));
        }
        let slot = self
            .selected_slot
            .ok_or(PresetError::InvalidState("no preset slot selected"))?;

        let path = self.current_path().map_err(|_| {
            PresetError::InvalidState("current path configuration is invalid")
        })?;

        let name = self.presets[slot - 1]
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Preset {slot}"));
        self.presets[slot - 1] = Some(PathPreset { name, path });

        log::info!("saved preset {slot}");
        Ok(slot)
    }

    /// Save into a specific slot: select, then save.
    pub fn save_preset_to(&mut self, slot: usize) -> Result<usize, PresetError> {
        if self.start_point.is_none() || self.end_point.is_none() {
            return Err(PresetError::InvalidState(
                "start and end points must be set before saving",
            ));
        }
        self.select_slot(slot)?;
        self.save_preset()
    }
}

impl Default for PathEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in Side/Rear/Front paths, carried over from the original preset
/// table verbatim.
fn default_presets() -> [Option<PathPreset>; PRESET_SLOTS] {
    let base = CameraPath {
        speed: 0.5,
        interpolation: Easing::Linear,
        look_mode: LookMode::Angle,
        fov: 30.0,
        ..Default::default()
    };

    [
        Some(PathPreset {
            name: "Side".to_string(),
            path: CameraPath {
                start: CameraPoint::new(-1.707_165_1, -1.371_180_5),
                end: CameraPoint::new(-1.732_087_2, 1.651_041_7),
                start_height: 0.3,
                end_height: 0.3,
                angles: Some(LookAngles { pan: 92.0, tilt: 0.0 }),
                ..base.clone()
            },
        }),
        Some(PathPreset {
            name: "Rear".to_string(),
            path: CameraPath {
                start: CameraPoint::new(-0.834_890_96, 2.295_486_1),
                end: CameraPoint::new(0.859_813_08, 2.228_819_4),
                start_height: 0.4,
                end_height: 0.4,
                angles: Some(LookAngles { pan: 1.0, tilt: 0.0 }),
                ..base.clone()
            },
        }),
        Some(PathPreset {
            name: "Front".to_string(),
            path: CameraPath {
                start: CameraPoint::new(0.9375, -2.5),
                end: CameraPoint::new(-0.6875, -2.5),
                start_height: 0.3,
                end_height: 0.3,
                angles: Some(LookAngles { pan: 180.0, tilt: 0.0 }),
                ..base
            },
        }),
    ]
}
