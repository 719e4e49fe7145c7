// Headless demo: preload a synthetic catalog, classify the parts, repaint
// the body, then run the movie and cinematic playback with fixed-dt ticks.

use anyhow::Result;

use carvis::camera::PlaybackMode;
use carvis::loader::VehicleEntry;
use carvis::scene::{Material, Scene, SceneNode};
use carvis::showroom::Showroom;

/// Build a stand-in car scene with the part names a real export would have.
fn synthetic_car(path: &str) -> Scene {
    let mut scene = Scene::new();
    let root = scene.add_node(SceneNode::group(path), None);

    scene.add_node(
        SceneNode::mesh("BodyPaint_Shell")
            .with_material(Material::named("CarPaint").with_color(Material::rgb(0xc0c0c0))),
        Some(root),
    );
    scene.add_node(
        SceneNode::mesh("Hood").with_material(Material::named("Metal").with_color(Material::rgb(0xb0b0b0))),
        Some(root),
    );
    for corner in ["FrontLeft", "FrontRight", "RearLeft", "RearRight"] {
        scene.add_node(
            SceneNode::mesh(format!("{corner}Tire")).with_material(Material::named("Rubber")),
            Some(root),
        );
        scene.add_node(
            SceneNode::mesh(format!("{corner}Rim")).with_material(Material::named("Rim.003")),
            Some(root),
        );
    }
    scene.add_node(
        SceneNode::mesh("Windshield_Glass").with_material(Material::named("Glass")),
        Some(root),
    );
    scene.add_node(
        SceneNode::mesh("Door_Left").with_material(Material::named("Metal").with_color(Material::rgb(0xb0b0b0))),
        Some(root),
    );
    scene.add_node(
        SceneNode::mesh("Headlight_Left").with_material(Material::named("Lens")),
        Some(root),
    );
    scene.add_node(
        SceneNode::mesh("Seat_Driver").with_material(Material::named("Leather")),
        Some(root),
    );
    scene
}

fn run_playback(showroom: &mut Showroom, label: &str) {
    // 20 fps fixed step, logged every second of simulated time.
    let dt = 0.05;
    let mut elapsed = 0.0_f32;
    let mut next_report = 0.0_f32;

    while showroom.tick(dt) != PlaybackMode::Idle {
        elapsed += dt;
        if elapsed >= next_report {
            let p = showroom.rig.position;
            log::info!("{label} t={elapsed:>5.1}s camera=({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
            next_report += 1.0;
        }
    }
    log::info!("{label} finished after {elapsed:.1}s");
}

fn main() -> Result<()> {
    env_logger::init();

    let catalog = vec![
        VehicleEntry::new("DaimlerV8", "assets/DaimlerV8.glb"),
        VehicleEntry::new("JaguarXJ8", "assets/JaguarXJ8.glb"),
        VehicleEntry::new("JaguarXJR", "assets/JaguarXJR.glb"),
        VehicleEntry::new("JaguarSuperV8", "assets/JaguarSuperV8.glb"),
        VehicleEntry::new("JaguarXJSovereign", "assets/JaguarXJSovereign.glb"),
        VehicleEntry::new("JaguarXJSports", "assets/JaguarXJSports.glb"),
    ];

    let rt = tokio::runtime::Runtime::new()?;
    let mut showroom = Showroom::new(catalog);
    rt.block_on(showroom.preload(|path| async move { Ok(synthetic_car(&path)) }))?;

    log::info!(
        "displaying {} with {} paint parts, {} wheel parts",
        showroom.current_vehicle().unwrap_or("<none>"),
        showroom.buckets().paint_body.len(),
        showroom.buckets().wheels.len(),
    );

    let touched = showroom.set_paint_color(Material::rgb(0x1b4332));
    log::info!("repainted {touched} materials");

    showroom.start_movie()?;
    run_playback(&mut showroom, "movie");

    showroom.start_cinematic();
    run_playback(&mut showroom, "cinematic");

    Ok(())
}
