// Fixed scripted camera sweep: seven hard-coded shots covering disjoint
// progress ranges with no gaps. Each shot is a closed-form function of its
// eased local progress.

use std::f32::consts::PI;

use nalgebra_glm as glm;

use super::interpolation::{Easing, lerp};

/// Total length of the sweep in seconds.
pub const CINEMATIC_DURATION_SECS: f32 = 30.0;

/// Camera pose produced by one shot evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotFrame {
    pub position: glm::Vec3,
    pub look_at: glm::Vec3,
}

struct Shot {
    start: f32,
    end: f32,
    eval: fn(f32) -> ShotFrame,
}

// Ranges are matched first-wins with inclusive bounds, so each boundary
// belongs to the earlier shot.
const SHOTS: &[Shot] = &[
    Shot { start: 0.0, end: 0.1, eval: hero_approach },
    Shot { start: 0.1, end: 0.25, eval: front_sweep },
    Shot { start: 0.25, end: 0.4, eval: side_profile },
    Shot { start: 0.4, end: 0.5, eval: wheel_track },
    Shot { start: 0.5, end: 0.65, eval: rear_sweep },
    Shot { start: 0.65, end: 0.8, eval: high_orbit },
    Shot { start: 0.8, end: 1.0, eval: finale_orbit },
];

/// Hero shot: approach from distance at a fixed angle.
fn hero_approach(t: f32) -> ShotFrame {
    let distance = lerp(8.0, 4.5, t);
    let angle = PI * 0.2;
    ShotFrame {
        position: glm::vec3(angle.sin() * distance, 1.5, angle.cos() * distance),
        look_at: glm::vec3(0.0, 0.5, 0.0),
    }
}

/// Front focus: lateral slide left to right at fixed depth.
fn front_sweep(t: f32) -> ShotFrame {
    let x = lerp(-1.5, 1.5, t);
    ShotFrame {
        position: glm::vec3(x, 0.8, -1.8),
        look_at: glm::vec3(x * 0.2, 0.6, 0.0),
    }
}

/// Side profile: swing out while pulling back and rising.
fn side_profile(t: f32) -> ShotFrame {
    let angle = lerp(PI * 0.15, PI * 0.5, t);
    let distance = lerp(2.0, 5.0, t);
    let height = lerp(0.8, 1.2, t);
    ShotFrame {
        position: glm::vec3(angle.sin() * distance, height, angle.cos() * distance),
        look_at: glm::vec3(0.0, 0.5, 0.0),
    }
}

/// Wheel focus: low track from front wheel to rear wheel.
fn wheel_track(t: f32) -> ShotFrame {
    let z = lerp(-0.8, 0.8, t);
    ShotFrame {
        position: glm::vec3(2.0, 0.3, z),
        look_at: glm::vec3(0.8, 0.2, z),
    }
}

/// Rear focus: lateral slide right to left behind the car.
fn rear_sweep(t: f32) -> ShotFrame {
    let x = lerp(1.5, -1.5, t);
    ShotFrame {
        position: glm::vec3(x, 0.8, 1.8),
        look_at: glm::vec3(x * 0.2, 0.6, 0.0),
    }
}

/// High-angle overhead swing.
fn high_orbit(t: f32) -> ShotFrame {
    let angle = lerp(PI * 0.85, PI * 1.25, t);
    let distance = lerp(4.0, 5.0, t);
    let height = lerp(1.5, 4.0, t);
    ShotFrame {
        position: glm::vec3(angle.sin() * distance, height, angle.cos() * distance),
        look_at: glm::vec3(0.0, 0.3, 0.0),
    }
}

/// Finale: full orbit around the car.
fn finale_orbit(t: f32) -> ShotFrame {
    let angle = lerp(PI * 1.25, PI * 2.25, t);
    let distance = 4.5;
    ShotFrame {
        position: glm::vec3(angle.sin() * distance, 1.8, angle.cos() * distance),
        look_at: glm::vec3(0.0, 0.5, 0.0),
    }
}

/// Evaluate the sweep at global progress in [0, 1]. Shot-local progress is
/// eased with the cubic ease-in-out curve before evaluation.
pub fn evaluate(progress: f32) -> Option<ShotFrame> {
    for shot in SHOTS {
        if progress >= shot.start && progress <= shot.end {
            let local = (progress - shot.start) / (shot.end - shot.start);
            return Some((shot.eval)(Easing::EaseInOut.apply(local)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_the_whole_range() {
        for step in 0..=1000 {
            let progress = step as f32 / 1000.0;
            assert!(evaluate(progress).is_some(), "gap at {progress}");
        }
        assert!(evaluate(1.1).is_none());
        assert!(evaluate(-0.1).is_none());
    }

    #[test]
    fn shot_ranges_are_disjoint_and_ordered() {
        for pair in SHOTS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
        assert_eq!(SHOTS.first().map(|s| s.start), Some(0.0));
        assert_eq!(SHOTS.last().map(|s| s.end), Some(1.0));
    }

    #[test]
    fn progress_040_and_050_land_in_different_shots() {
        // 0.4 closes the side-profile shot, 0.5 closes the wheel shot.
        let a = evaluate(0.4).unwrap();
        let b = evaluate(0.5).unwrap();
        assert_ne!(a, b);

        // 0.4 is the side-profile end pose.
        let expected = side_profile(1.0);
        assert!((a.position - expected.position).norm() < 1e-4);

        // 0.5 is the wheel-track end pose, bounded by the segment's range.
        let expected = wheel_track(1.0);
        assert!((b.position - expected.position).norm() < 1e-4);
        assert!(b.position.z >= -0.8 && b.position.z <= 0.8);
    }

    #[test]
    fn shot_local_progress_is_eased() {
        // Midpoint of the wheel shot: ease-in-out fixes f(0.5) = 0.5, so the
        // camera sits exactly between the wheels.
        let frame = evaluate(0.45).unwrap();
        assert!(frame.position.z.abs() < 1e-4);
    }

    #[test]
    fn finale_ends_where_it_started_the_orbit() {
        let start = evaluate(0.8 + 1e-6).unwrap();
        let end = evaluate(1.0).unwrap();
        // One full revolution: PI*1.25 to PI*2.25 plus the shared radius.
        assert!((start.position.y - end.position.y).abs() < 1e-4);
        assert!((start.position.norm() - end.position.norm()).abs() < 1e-3);
    }
}
