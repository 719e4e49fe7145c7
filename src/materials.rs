// Deterministic material fixups applied once per model load, plus the
// user-facing repaint operation.

use nalgebra_glm as glm;

use crate::classify::PartBuckets;
use crate::scene::{Material, Scene};

/// Material name that gets the bespoke dark-metallic rim treatment.
pub const SPECIAL_RIM_MATERIAL: &str = "Rim.003";

/// Adjust wheel materials: the special rim material gets a fixed
/// dark-metallic look, tires go black and rough, rims go grey and metallic.
pub fn adjust_wheel_materials(scene: &mut Scene, buckets: &PartBuckets) {
    for &id in &buckets.wheels {
        let Some(node) = scene.node_mut(id) else {
            continue;
        };
        let name = node.name.to_lowercase();

        for material in &mut node.materials {
            if material.name == SPECIAL_RIM_MATERIAL {
                material.color = Some(Material::rgb(0x707070));
                material.metalness = 0.95;
                material.roughness = 0.15;
                material.env_map_intensity = 1.5;
            } else if name.contains("tire") || name.contains("tyre") {
                material.color = Some(Material::rgb(0x1a1a1a));
                material.metalness = 0.0;
                material.roughness = 0.9;
            } else if name.contains("rim") || name.contains("alloy") || name.contains("wheel") {
                material.color = Some(Material::rgb(0x888888));
                material.metalness = 0.9;
                material.roughness = 0.2;
            }
        }
    }
}

/// Repaint every paint-body material. Last write wins; materials without a
/// color channel are skipped. Returns the number of materials touched, zero
/// when the vehicle has no detected paint parts.
pub fn set_paint_color(scene: &mut Scene, buckets: &PartBuckets, color: glm::Vec3) -> usize {
    if buckets.paint_body.is_empty() {
        log::warn!("no paint body parts found; paint color change has no effect");
        return 0;
    }

    let mut touched = 0;
    for &id in &buckets.paint_body {
        let Some(node) = scene.node_mut(id) else {
            continue;
        };
        for material in &mut node.materials {
            if material.color.is_some() {
                material.color = Some(color);
                touched += 1;
            }
        }
    }

    log::debug!("paint color updated on {touched} materials");
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::scene::SceneNode;

    fn wheel_scene() -> (Scene, PartBuckets) {
        let mut scene = Scene::new();
        scene.add_node(
            SceneNode::mesh("FrontLeftTire").with_material(Material::named("Rubber")),
            None,
        );
        scene.add_node(
            SceneNode::mesh("FrontLeftRim").with_material(Material::named(SPECIAL_RIM_MATERIAL)),
            None,
        );
        scene.add_node(
            SceneNode::mesh("RearRim_Alloy").with_material(Material::named("Alloy")),
            None,
        );
        let buckets = classify(&mut scene);
        (scene, buckets)
    }

    #[test]
    fn special_rim_material_gets_dark_metallic_look() {
        let (mut scene, buckets) = wheel_scene();
        adjust_wheel_materials(&mut scene, &buckets);

        let rim = &scene.node(1).unwrap().materials[0];
        assert_eq!(rim.metalness, 0.95);
        assert_eq!(rim.roughness, 0.15);
        assert_eq!(rim.env_map_intensity, 1.5);
        assert_eq!(rim.color, Some(Material::rgb(0x707070)));
    }

    #[test]
    fn tires_go_black_rims_go_metallic() {
        let (mut scene, buckets) = wheel_scene();
        adjust_wheel_materials(&mut scene, &buckets);

        let tire = &scene.node(0).unwrap().materials[0];
        assert_eq!(tire.color, Some(Material::rgb(0x1a1a1a)));
        assert_eq!(tire.metalness, 0.0);
        assert_eq!(tire.roughness, 0.9);

        let alloy = &scene.node(2).unwrap().materials[0];
        assert_eq!(alloy.color, Some(Material::rgb(0x888888)));
        assert_eq!(alloy.metalness, 0.9);
    }

    #[test]
    fn repaint_is_noop_without_paint_parts() {
        let (mut scene, buckets) = wheel_scene();
        let before = scene.clone();
        let touched = set_paint_color(&mut scene, &buckets, Material::rgb(0xff0000));

        assert_eq!(touched, 0);
        for (id, node) in before.iter() {
            assert_eq!(node.materials, scene.node(id).unwrap().materials);
        }
    }

    #[test]
    fn repaint_last_write_wins() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("BodyPaint")
                .with_material(Material::named("Paint").with_color(Material::rgb(0xffffff))),
            None,
        );
        let buckets = classify(&mut scene);

        set_paint_color(&mut scene, &buckets, Material::rgb(0xff0000));
        set_paint_color(&mut scene, &buckets, Material::rgb(0x0000ff));

        let material = &scene.node(id).unwrap().materials[0];
        assert_eq!(material.color, Some(Material::rgb(0x0000ff)));
    }

    #[test]
    fn repaint_skips_colorless_materials() {
        let mut scene = Scene::new();
        let id = scene.add_node(
            SceneNode::mesh("PaintTrim").with_material(Material::named("Decal")),
            None,
        );
        let buckets = classify(&mut scene);

        let touched = set_paint_color(&mut scene, &buckets, Material::rgb(0x00ff00));
        assert_eq!(touched, 0);
        assert_eq!(scene.node(id).unwrap().materials[0].color, None);
    }
}
