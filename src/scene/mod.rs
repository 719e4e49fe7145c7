mod node;

pub use node::{Material, NodeId, Scene, SceneNode};
