// Part classification over a loaded scene graph. Buckets are rebuilt from
// scratch every time a vehicle is displayed and hold node ids only; the
// scene keeps ownership of the nodes.

use super::rules::{BODY_EXCLUSIONS, KEYWORD_RULES, PartKind, contains_any};
use crate::scene::{NodeId, Scene};

/// Glass materials with no explicit opacity get this value.
const DEFAULT_GLASS_OPACITY: f32 = 0.7;

#[derive(Debug, Clone, Default)]
pub struct PartBuckets {
    pub body: Vec<NodeId>,
    pub wheels: Vec<NodeId>,
    pub interior: Vec<NodeId>,
    pub glass: Vec<NodeId>,
    pub paint_body: Vec<NodeId>,
    pub doors: Vec<NodeId>,
    pub lights: Vec<NodeId>,
}

impl PartBuckets {
    pub fn of(&self, kind: PartKind) -> &[NodeId] {
        match kind {
            PartKind::Body => &self.body,
            PartKind::Wheels => &self.wheels,
            PartKind::Interior => &self.interior,
            PartKind::Glass => &self.glass,
            PartKind::PaintBody => &self.paint_body,
            PartKind::Doors => &self.doors,
            PartKind::Lights => &self.lights,
        }
    }

    fn push(&mut self, kind: PartKind, id: NodeId) {
        match kind {
            PartKind::Body => self.body.push(id),
            PartKind::Wheels => self.wheels.push(id),
            PartKind::Interior => self.interior.push(id),
            PartKind::Glass => self.glass.push(id),
            PartKind::PaintBody => self.paint_body.push(id),
            PartKind::Doors => self.doors.push(id),
            PartKind::Lights => self.lights.push(id),
        }
    }

    fn log_summary(&self) {
        log::debug!(
            "part buckets: body={} wheels={} interior={} glass={} doors={} lights={} paintBody={}",
            self.body.len(),
            self.wheels.len(),
            self.interior.len(),
            self.glass.len(),
            self.doors.len(),
            self.lights.len(),
            self.paint_body.len(),
        );
    }
}

/// Walk every mesh-bearing node and bucket it by name/material heuristics.
///
/// Bucket membership is a pure function of the input tree. The only
/// mutations are idempotent side effects: every mesh gets its shadow flags
/// raised, and glass materials are forced transparent with a default
/// opacity.
pub fn classify(scene: &mut Scene) -> PartBuckets {
    let mut buckets = PartBuckets::default();

    for id in 0..scene.len() {
        let Some(node) = scene.node_mut(id) else {
            continue;
        };
        if !node.has_mesh {
            continue;
        }

        node.cast_shadow = true;
        node.receive_shadow = true;

        let name = node.name.to_lowercase();

        let mut kinds: Vec<PartKind> = KEYWORD_RULES
            .iter()
            .filter(|rule| contains_any(&name, rule.keywords))
            .map(|rule| rule.kind)
            .collect();

        // Paint parts may be tagged on the material rather than the mesh.
        if !kinds.contains(&PartKind::PaintBody)
            && node
                .materials
                .iter()
                .any(|m| m.name.to_lowercase().contains("paint"))
        {
            kinds.push(PartKind::PaintBody);
        }

        // Catch-all: unlabeled meshes with a settable color still count as
        // body panels, unless a non-body keyword claims them first.
        if !kinds.contains(&PartKind::Body)
            && !contains_any(&name, BODY_EXCLUSIONS)
            && node.materials.iter().any(|m| m.color.is_some())
        {
            kinds.push(PartKind::Body);
        }

        if kinds.contains(&PartKind::Glass) {
            for material in &mut node.materials {
                material.transparent = true;
                if material.opacity.is_none() {
                    material.opacity = Some(DEFAULT_GLASS_OPACITY);
                }
            }
        }

        for kind in kinds {
            buckets.push(kind, id);
        }
    }

    buckets.log_summary();
    if buckets.paint_body.is_empty() {
        log::warn!("no paint parts detected; repainting will be a no-op");
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, SceneNode};
    use nalgebra_glm as glm;

    fn colored(name: &str) -> Material {
        Material::named(name).with_color(glm::vec3(0.5, 0.5, 0.5))
    }

    #[test]
    fn tire_mesh_lands_in_wheels_only() {
        let mut scene = Scene::new();
        scene.add_node(
            SceneNode::mesh("LeftFrontTire_mesh").with_material(colored("Rubber")),
            None,
        );

        let buckets = classify(&mut scene);
        assert_eq!(buckets.wheels.len(), 1);
        assert!(buckets.paint_body.is_empty());
        assert!(buckets.body.is_empty());
    }

    #[test]
    fn paint_named_mesh_lands_in_body_and_paint_body() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("BodyPaint_Hood").with_material(colored("Gloss")),
            None,
        );

        let buckets = classify(&mut scene);
        assert_eq!(buckets.body, vec![id]);
        assert_eq!(buckets.paint_body, vec![id]);
    }

    #[test]
    fn paint_material_name_is_enough() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("Cube012").with_material(colored("CarPaint.001")),
            None,
        );

        let buckets = classify(&mut scene);
        assert_eq!(buckets.paint_body, vec![id]);
    }

    #[test]
    fn unlabeled_colored_mesh_falls_through_to_body() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("Cube042").with_material(colored("Default")),
            None,
        );

        let buckets = classify(&mut scene);
        assert_eq!(buckets.body, vec![id]);
    }

    #[test]
    fn uncolored_decoration_matches_no_bucket() {
        let mut scene = Scene::new();
        scene.add_node(SceneNode::mesh("Antenna").with_material(Material::named("Wire")), None);

        let buckets = classify(&mut scene);
        assert!(buckets.body.is_empty());
        assert!(buckets.wheels.is_empty());
        assert!(buckets.lights.is_empty());
    }

    #[test]
    fn glass_gets_transparency_and_default_opacity() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("Windshield_Glass").with_material(Material::named("Glass")),
            None,
        );

        let buckets = classify(&mut scene);
        assert_eq!(buckets.glass, vec![id]);
        let material = &scene.node(id).unwrap().materials[0];
        assert!(material.transparent);
        assert_eq!(material.opacity, Some(0.7));
    }

    #[test]
    fn glass_keeps_explicit_opacity() {
        let mut scene = Scene::new();
        let mut material = Material::named("Tinted");
        material.opacity = Some(0.4);
        let id = scene.add_node(SceneNode::mesh("RearWindow").with_material(material), None);

        classify(&mut scene);
        assert_eq!(scene.node(id).unwrap().materials[0].opacity, Some(0.4));
    }

    #[test]
    fn every_mesh_gets_shadow_flags() {
        let mut scene = Scene::new();
        let root = scene.add_node(SceneNode::group("root"), None);
        let id = scene.add_node(SceneNode::mesh("Antenna"), Some(root));

        classify(&mut scene);
        let node = scene.node(id).unwrap();
        assert!(node.cast_shadow);
        assert!(node.receive_shadow);
        // Groups are untouched.
        assert!(!scene.node(root).unwrap().cast_shadow);
    }

    #[test]
    fn classification_is_idempotent() {
        let mut scene = Scene::new();
        scene.add_node(
            SceneNode::mesh("Door_Glass").with_material(Material::named("Glass")),
            None,
        );

        let first = classify(&mut scene);
        let second = classify(&mut scene);
        assert_eq!(first.glass, second.glass);
        assert_eq!(first.doors, second.doors);
    }
}
