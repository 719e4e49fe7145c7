// Loaded scene graph, stored flat with parent/child links by index.
// The configurator only reads names and materials and flips shadow flags;
// it never restructures the tree.

use nalgebra_glm as glm;

pub type NodeId = usize;

/// Subset of a surface material the configurator is allowed to touch.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Base color, `None` when the material has no settable color channel.
    pub color: Option<glm::Vec3>,
    pub metalness: f32,
    pub roughness: f32,
    pub transparent: bool,
    /// `None` means the importer left opacity unset.
    pub opacity: Option<f32>,
    pub env_map_intensity: f32,
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: glm::Vec3) -> Self {
        self.color = Some(color);
        self
    }

    /// Convert a packed 0xRRGGBB color to linear rgb.
    pub fn rgb(hex: u32) -> glm::Vec3 {
        glm::vec3(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: None,
            metalness: 0.0,
            roughness: 1.0,
            transparent: false,
            opacity: None,
            env_map_intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// True for mesh-bearing nodes; groups and empties carry no geometry.
    pub has_mesh: bool,
    pub materials: Vec<Material>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn mesh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_mesh: true,
            ..Default::default()
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }
}

/// Flat node arena. Hierarchy is kept as parent/child indices, the same way
/// the animation skeleton keeps bone parents, so part buckets can reference
/// nodes by id without owning them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                parent_node.children.push(id);
            }
        }
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut SceneNode)> {
        self.nodes.iter_mut().enumerate()
    }
}
