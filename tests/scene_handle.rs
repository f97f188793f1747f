//! End-to-end checks of the scene handle contract.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use helix_scene::animation::Transform;
use helix_scene::camera::{CameraPath, Damping};
use helix_scene::engine::{init_scene, RenderState, SceneHandle};
use helix_scene::error::{ConfigError, SceneError};
use helix_scene::geometry::build_helix;
use helix_scene::options::{BodyKind, BodySpec, SceneConfig};
use helix_scene::util::color::Color;

const DT: f32 = 1.0 / 60.0;

fn landing(seed: u64) -> SceneHandle {
    init_scene(&SceneConfig {
        seed: Some(seed),
        ..SceneConfig::default()
    })
    .unwrap()
}

fn rest_of(spec: &BodySpec) -> Transform {
    Transform::from_arrays(spec.position, spec.rotation, spec.scale)
}

#[test]
fn zero_time_reproduces_configured_poses() {
    let config = SceneConfig {
        seed: Some(1),
        ..SceneConfig::default()
    };
    let mut scene = init_scene(&config).unwrap();
    scene.tick(0.0).unwrap();
    let state = scene.render_state().unwrap();

    let helix = &state.bodies[0];
    assert_eq!(helix.kind, BodyKind::Helix);
    assert_eq!(helix.transform, Transform::IDENTITY);

    assert_eq!(state.bodies.len(), config.bodies.len() + 1);
    for (body, spec) in state.bodies[1..].iter().zip(&config.bodies) {
        assert_eq!(body.kind, spec.kind);
        assert_eq!(body.transform, rest_of(spec), "body {:?}", body.id);
    }
    assert_eq!(state.root, Transform::IDENTITY);
    assert_eq!(state.camera.position, Vec3::new(0.0, 0.0, 14.0));
    assert_eq!(state.camera.look_at, Vec3::ZERO);
}

#[test]
fn long_runs_stay_finite() {
    let mut scene = landing(2);
    for frame in 0..3_000u32 {
        let t = frame as f32 * DT;
        scene.set_scroll_progress((t * 0.1).sin().abs()).unwrap();
        scene.tick(t).unwrap();
        assert!(scene.render_state().unwrap().is_finite(), "frame {frame}");
    }
    // Far into a session.
    scene.tick(86_400.0).unwrap();
    assert!(scene.render_state().unwrap().is_finite());
}

#[test]
fn reference_helix() {
    let helix = build_helix(40, 8.0, 4.0, 0.8, 5);
    assert_eq!(helix.strand_a().len(), 40);
    assert_eq!(helix.strand_b().len(), 40);
    assert_eq!(helix.links().len(), 8);
    for (a, b) in helix.strand_a().iter().zip(helix.strand_b()) {
        assert!((a.distance(*b) - 1.6).abs() < 1e-5);
    }
}

#[test]
fn same_seed_same_frames() {
    let mut a = landing(42);
    let mut b = landing(42);
    for frame in 1..=120u32 {
        let t = frame as f32 * DT;
        a.tick(t).unwrap();
        b.tick(t).unwrap();
    }
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    assert_eq!(a.render_state().unwrap(), b.render_state().unwrap());
}

#[test]
fn retick_at_same_time_is_idempotent() {
    let mut scene = landing(3);
    for frame in 1..=30u32 {
        scene.tick(frame as f32 * DT).unwrap();
    }
    let first = scene.render_state().unwrap();
    scene.tick(30.0 * DT).unwrap();
    let second = scene.render_state().unwrap();
    assert_eq!(first.digest(), second.digest());
    assert_eq!(first.bodies, second.bodies);
    assert_eq!(first.camera, second.camera);
    assert_eq!(second.frame, first.frame + 1);
}

#[test]
fn camera_converges_geometrically() {
    let target = Vec3::new(0.0, 3.0, 8.0);
    let mut config = SceneConfig::bare();
    config.camera.path = CameraPath::fixed(target.to_array());
    let mut scene = init_scene(&config).unwrap();

    let mut last = f32::INFINITY;
    for frame in 1..=1_200u32 {
        scene.tick(frame as f32 * DT).unwrap();
        let eye = scene.render_state().unwrap().camera.position;
        let gap = eye.distance(target);
        assert!(gap <= last, "frame {frame}: {gap} > {last}");
        last = gap;
    }
    assert!(last < 1e-3, "gap after 20s: {last}");
}

#[test]
fn per_frame_damping_matches_reference_factor() {
    let target = Vec3::new(6.0, 0.0, 14.0);
    let mut config = SceneConfig::bare();
    config.camera.path = CameraPath::fixed(target.to_array());
    config.camera.damping = Damping::PerFrame { factor: 0.02 };
    let mut scene = init_scene(&config).unwrap();
    scene.tick(DT).unwrap();
    let eye = scene.render_state().unwrap().camera.position;
    assert!((eye.x - 6.0 * 0.02).abs() < 1e-5);
}

#[test]
fn orb_bobs_from_its_rest_height() {
    let json = r#"{
        "seed": 9,
        "bodies": [
            { "kind": "orb", "position": [0, 5, -3], "scale": 1.8 }
        ],
        "helix": { "segments": 40, "vertical_span": 8, "turns": 4,
                   "radius": 0.8, "link_stride": 5 }
    }"#;
    let config = SceneConfig::from_json_str(json).unwrap();
    let mut scene = init_scene(&config).unwrap();
    scene.tick(0.5).unwrap();
    let state = scene.render_state().unwrap();

    let orb = state
        .bodies
        .iter()
        .find(|b| b.kind == BodyKind::Orb)
        .unwrap();
    let expected = 5.0 + (0.5f32 * 0.5).sin() * 0.2;
    assert!((orb.transform.position.y - expected).abs() < 1e-6);
    assert_eq!(orb.transform.position.x, 0.0);
    assert_eq!(orb.transform.position.z, -3.0);
    assert_eq!(orb.transform.scale, 1.8);

    let helix = scene.helix_geometry().unwrap().unwrap();
    assert_eq!(helix.len(), 40);
    assert_eq!(helix.links().len(), 8);
}

#[test]
fn molecules_tumble_at_fixed_rates() {
    let mut config = SceneConfig::bare();
    config.helix.enabled = false;
    config.bodies.push(BodySpec::molecule([7.0, -4.0, -6.0], 1.0));
    let mut scene = init_scene(&config).unwrap();
    scene.tick(2.0).unwrap();
    let molecule = scene.render_state().unwrap().bodies[0].transform;
    assert!((molecule.rotation.x - 0.6).abs() < 1e-6);
    assert!((molecule.rotation.y - 0.4).abs() < 1e-6);
    assert_eq!(molecule.position, Vec3::new(7.0, -4.0, -6.0));
}

#[test]
fn molecule_atoms_float_inside_the_body() {
    let mut config = SceneConfig::bare();
    config.helix.enabled = false;
    config
        .bodies
        .push(BodySpec::molecule([7.0, -4.0, -6.0], 1.0).with_phase(2.0));
    let mut scene = init_scene(&config).unwrap();
    let template = scene.molecule_template().unwrap().clone();

    scene.tick(0.0).unwrap();
    let at_rest = scene.render_state().unwrap().bodies[0].parts.clone();
    let offsets: Vec<Vec3> =
        template.atoms.iter().map(|a| a.offset).collect();
    let rest_positions: Vec<Vec3> =
        at_rest.iter().map(|p| p.position).collect();
    assert_eq!(rest_positions, offsets);

    scene.tick(4.0).unwrap();
    let state = scene.render_state().unwrap();
    let parts = &state.bodies[0].parts;
    assert_eq!(parts.len(), template.atoms.len());
    assert!(parts.iter().zip(&offsets).any(|(p, o)| p.position != *o));
    for (part, offset) in parts.iter().zip(&offsets) {
        // Float intensity 0.3 caps the bob at 0.06 and the tilt is small.
        assert!(part.position.distance(*offset) < 0.5);
    }
}

#[test]
fn floating_orb_adds_a_vertical_bob() {
    let still = BodySpec {
        float: None,
        ..BodySpec::orb([0.0, 5.0, -3.0], 1.0, Color::MINT).with_phase(1.0)
    };
    let floating =
        BodySpec::orb([2.0, 5.0, -3.0], 1.0, Color::MINT).with_phase(1.0);
    let mut config = SceneConfig::bare();
    config.helix.enabled = false;
    config.bodies = vec![still, floating];
    let mut scene = init_scene(&config).unwrap();
    scene.tick(3.0).unwrap();
    let state = scene.render_state().unwrap();
    let bob = state.bodies[1].transform.position.y
        - state.bodies[0].transform.position.y;
    let theta = |t: f32| t / 4.0 * 1.5;
    let expected = (theta(4.0).sin() - theta(1.0).sin()) / 10.0 * 0.5;
    assert!((bob - expected).abs() < 1e-5);
}

#[test]
fn helix_spins_about_y() {
    let mut scene = init_scene(&SceneConfig::bare()).unwrap();
    scene.tick(5.0).unwrap();
    let helix = scene.render_state().unwrap().bodies[0].transform;
    assert!((helix.rotation.y - 1.0).abs() < 1e-6);
    assert_eq!(helix.rotation.x, 0.0);
    assert_eq!(helix.position, Vec3::ZERO);
}

#[test]
fn zero_speed_freezes_and_negative_speed_reverses() {
    let capsule = |speed| {
        let rotation = [0.5, 0.3, 0.8];
        BodySpec::capsule([1.0, 2.0, 3.0], rotation, 1.0, Color::MINT, speed)
            .with_phase(10.0)
    };
    let mut config = SceneConfig::bare();
    config.helix.enabled = false;
    config.bodies = vec![capsule(0.0), capsule(1.0), capsule(-1.0)];
    let mut scene = init_scene(&config).unwrap();
    for frame in 1..=90u32 {
        scene.tick(frame as f32 * DT).unwrap();
    }
    let state = scene.render_state().unwrap();
    let frozen = state.bodies[0].transform;
    assert_eq!(frozen, rest_of(&config.bodies[0]));

    let forward = state.bodies[1].transform;
    let backward = state.bodies[2].transform;
    assert!(forward != frozen);
    assert!(backward != frozen);
    assert!(forward != backward);
    assert!(backward.is_finite());
}

#[test]
fn invalid_configs_fail_at_init() {
    let mut config = SceneConfig::bare();
    config.helix.segments = 0;
    assert!(matches!(
        init_scene(&config),
        Err(SceneError::Config(ConfigError::ZeroSegments))
    ));

    let mut config = SceneConfig::bare();
    config
        .bodies
        .push(BodySpec::orb([0.0; 3], -2.0, Color::BRAND_GREEN));
    assert!(matches!(
        init_scene(&config),
        Err(SceneError::Config(ConfigError::NegativeScale { .. }))
    ));

    let mut config = SceneConfig::bare();
    config.camera.znear = 0.0;
    config.camera.fovy = 0.0;
    assert!(matches!(
        init_scene(&config),
        Err(SceneError::Config(ConfigError::InvalidProjection(_)))
    ));

    let mut config = SceneConfig::bare();
    config.helix.segments = usize::MAX / 2;
    assert!(matches!(
        init_scene(&config),
        Err(SceneError::Config(ConfigError::TooLarge { .. }))
    ));

    let mut config = SceneConfig::bare();
    config.particles.count = 1_000_000;
    assert!(matches!(
        init_scene(&config),
        Err(SceneError::Config(ConfigError::TooLarge { .. }))
    ));

    let missing_position = r#"{ "bodies": [ { "kind": "orb" } ] }"#;
    assert!(matches!(
        SceneConfig::from_json_str(missing_position),
        Err(SceneError::Parse(_))
    ));
}

#[test]
fn camera_parked_on_origin_stays_finite() {
    let mut config = SceneConfig::bare();
    config.camera.position = [0.0; 3];
    config.camera.path = CameraPath::fixed([0.0; 3]);
    let mut scene = init_scene(&config).unwrap();
    scene.tick(1.0).unwrap();
    let uniform = scene.camera_uniform().unwrap();
    assert!(uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
    assert!(uniform.forward.iter().all(|v| v.is_finite()));
}

#[test]
fn disposal_is_terminal() {
    let frames = Rc::new(RefCell::new(Vec::<RenderState>::new()));
    let sink = Rc::clone(&frames);
    let mut scene = landing(4);
    scene
        .set_frame_listener(move |state| sink.borrow_mut().push(state.clone()))
        .unwrap();
    scene.tick(DT).unwrap();
    scene.dispose().unwrap();

    assert!(matches!(scene.tick(2.0 * DT), Err(SceneError::Disposed)));
    assert!(matches!(scene.render_state(), Err(SceneError::Disposed)));
    assert!(matches!(scene.instances(), Err(SceneError::Disposed)));
    assert!(matches!(
        scene.set_scroll_progress(0.5),
        Err(SceneError::Disposed)
    ));
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn snapshots_are_copies() {
    let mut scene = landing(5);
    scene.tick(1.0).unwrap();
    let mut state = scene.render_state().unwrap();
    state.bodies[0].transform.position = Vec3::splat(100.0);
    state.camera.position = Vec3::ZERO;
    let fresh = scene.render_state().unwrap();
    assert_ne!(fresh.bodies[0].transform.position, Vec3::splat(100.0));
    assert_ne!(fresh.camera.position, Vec3::ZERO);
}

#[test]
fn scroll_turns_the_root_and_moves_the_camera() {
    let mut still = landing(6);
    let mut scrolled = landing(6);
    scrolled.set_scroll_progress(1.0).unwrap();
    for frame in 1..=600u32 {
        let t = frame as f32 * DT;
        still.tick(t).unwrap();
        scrolled.tick(t).unwrap();
    }
    let a = still.render_state().unwrap();
    let b = scrolled.render_state().unwrap();
    let turn = b.root.rotation.y - a.root.rotation.y;
    assert!((turn - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    // Fully scrolled, the camera dollies in toward z = 8.
    assert!(b.camera.position.z < a.camera.position.z);
    assert_eq!(a.bodies, b.bodies);
}

#[test]
fn bundled_presets_load_and_run() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
    let names = SceneConfig::list_presets(&dir);
    assert!(names.contains(&"calm".to_owned()));
    for name in names {
        let config = SceneConfig::load(&dir.join(format!("{name}.toml")))
            .unwrap_or_else(|e| panic!("preset {name}: {e}"));
        let mut scene = init_scene(&config).unwrap();
        scene.set_scroll_progress(1.0).unwrap();
        scene.tick(3.0).unwrap();
        let state = scene.render_state().unwrap();
        assert!(state.is_finite());
    }
}

#[test]
fn calm_preset_ignores_scroll() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
    let config = SceneConfig::load(&dir.join("calm.toml")).unwrap();
    let mut still = init_scene(&config).unwrap();
    let mut scrolled = init_scene(&config).unwrap();
    scrolled.set_scroll_progress(0.8).unwrap();
    for frame in 1..=120u32 {
        let t = frame as f32 * DT;
        still.tick(t).unwrap();
        scrolled.tick(t).unwrap();
    }
    let a = still.render_state().unwrap();
    let b = scrolled.render_state().unwrap();
    assert_eq!(a.camera, b.camera);
    assert_eq!(a.root, b.root);
}
