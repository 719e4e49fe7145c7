pub mod cinematic;
pub mod editor;
pub mod interpolation;
pub mod path;
pub mod rig;
pub mod sequencer;

pub use editor::{PRESET_SLOTS, PathEditor, PathPreset, PointRole};
pub use interpolation::{Easing, lerp};
pub use path::{CameraPath, CameraPoint, LookAngles, LookMode};
pub use rig::{CameraRig, CameraSnapshot, OrbitControls, ViewPreset};
pub use sequencer::{PlaybackMode, Sequencer};
