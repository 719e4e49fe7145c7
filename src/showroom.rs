// The owning session object: preloaded vehicle scenes, the currently
// displayed vehicle with its part buckets, the path editor, the playback
// sequencer and the camera rig. This is the surface the UI layer calls into;
// it never touches widgets itself.

use std::collections::HashMap;
use std::future::Future;

use nalgebra_glm as glm;

use crate::camera::{
    CameraPath, CameraRig, OrbitControls, PathEditor, PathPreset, PlaybackMode, Sequencer,
    ViewPreset,
};
use crate::classify::{PartBuckets, classify};
use crate::error::{CarvisError, LoadError, PresetError};
use crate::loader::{VehicleEntry, preload_all};
use crate::materials::{adjust_wheel_materials, set_paint_color};
use crate::scene::Scene;

pub struct Showroom {
    catalog: Vec<VehicleEntry>,
    /// Pristine preloaded scenes, cloned on display so per-vehicle material
    /// edits never leak back into the templates.
    templates: HashMap<String, Scene>,
    current_id: Option<String>,
    current_scene: Option<Scene>,
    buckets: PartBuckets,
    pub editor: PathEditor,
    sequencer: Sequencer,
    pub rig: CameraRig,
    pub orbit: OrbitControls,
}

impl Showroom {
    pub fn new(catalog: Vec<VehicleEntry>) -> Self {
        Self {
            catalog,
            templates: HashMap::new(),
            current_id: None,
            current_scene: None,
            buckets: PartBuckets::default(),
            editor: PathEditor::new(),
            sequencer: Sequencer::new(),
            rig: CameraRig::new(),
            orbit: OrbitControls::new(),
        }
    }

    pub fn catalog(&self) -> &[VehicleEntry] {
        &self.catalog
    }

    /// Fetch every catalog entry in parallel and display the first vehicle.
    /// Fail-fast: one load failure rejects the whole startup.
    pub async fn preload<L, Fut>(&mut self, load: L) -> Result<(), CarvisError>
    where
        L: Fn(String) -> Fut,
        Fut: Future<Output = Result<Scene, LoadError>> + Send + 'static,
    {
        self.templates = preload_all(&self.catalog, load).await?;
        if let Some(first) = self.catalog.first().map(|e| e.id.clone()) {
            self.select_vehicle(&first)?;
        }
        Ok(())
    }

    /// Swap the displayed vehicle: clone the preloaded template, rebuild the
    /// part buckets from scratch, run the one-time wheel fixups and return
    /// the camera to the front view.
    pub fn select_vehicle(&mut self, id: &str) -> Result<(), CarvisError> {
        if !self.catalog.iter().any(|e| e.id == id) {
            return Err(CarvisError::UnknownVehicle(id.to_string()));
        }
        let template = self
            .templates
            .get(id)
            .ok_or_else(|| CarvisError::NotPreloaded(id.to_string()))?;

        let mut scene = template.clone();
        let buckets = classify(&mut scene);
        adjust_wheel_materials(&mut scene, &buckets);

        self.current_id = Some(id.to_string());
        self.current_scene = Some(scene);
        self.buckets = buckets;
        self.rig.apply_view(ViewPreset::Front);
        log::info!("displaying vehicle {id}");
        Ok(())
    }

    pub fn current_vehicle(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.current_scene.as_ref()
    }

    pub fn buckets(&self) -> &PartBuckets {
        &self.buckets
    }

    /// Repaint the current vehicle's paint-body parts. A vehicle with no
    /// detected paint parts makes this a logged no-op.
    pub fn set_paint_color(&mut self, color: glm::Vec3) -> usize {
        match self.current_scene.as_mut() {
            Some(scene) => set_paint_color(scene, &self.buckets, color),
            None => 0,
        }
    }

    pub fn set_camera_view(&mut self, view: ViewPreset) {
        self.rig.apply_view(view);
    }

    /// Preview the editor's current path.
    pub fn start_preview(&mut self) -> Result<(), CarvisError> {
        let path = self.editor.current_path()?;
        self.start_preview_path(path)
    }

    /// Preview an explicit path configuration.
    pub fn start_preview_path(&mut self, path: CameraPath) -> Result<(), CarvisError> {
        self.sequencer
            .start_preview(path, &mut self.rig, &mut self.orbit)?;
        Ok(())
    }

    /// Play the three preset slots back to back. Every slot must hold a
    /// preset.
    pub fn start_movie(&mut self) -> Result<(), CarvisError> {
        let segments = [
            self.preset_path(1)?,
            self.preset_path(2)?,
            self.preset_path(3)?,
        ];
        self.sequencer
            .start_movie(segments, &mut self.rig, &mut self.orbit)?;
        Ok(())
    }

    fn preset_path(&self, slot: usize) -> Result<CameraPath, PresetError> {
        self.editor
            .preset(slot)
            .map(|preset| preset.path.clone())
            .ok_or(PresetError::InvalidState(
                "movie playback requires presets in all three slots",
            ))
    }

    pub fn start_cinematic(&mut self) {
        self.sequencer.start_cinematic(&mut self.rig, &mut self.orbit);
    }

    /// Cooperative stop; takes effect on the next tick.
    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    /// Per-frame advance, driven by the host's scheduler.
    pub fn tick(&mut self, dt: f32) -> PlaybackMode {
        self.sequencer.tick(dt, &mut self.rig, &mut self.orbit)
    }

    pub fn playback_mode(&self) -> PlaybackMode {
        self.sequencer.mode()
    }

    /// Load a preset into the editor and apply its field of view to the rig,
    /// as the editor UI does.
    pub fn load_preset(&mut self, slot: usize) -> Result<PathPreset, CarvisError> {
        let preset = self.editor.load_preset(slot)?;
        self.rig.fov = preset.path.fov;
        Ok(preset)
    }

    pub fn save_preset(&mut self, slot: usize) -> Result<usize, CarvisError> {
        Ok(self.editor.save_preset_to(slot)?)
    }
}
