use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::generation::states::{ComponentKind, ParticleSet};

/// Generated particles plus the world-to-screen scales used for drawing
#[derive(Resource)]
struct GalaxyView {
    set: ParticleSet,
    scale: f32, // pixels per meter
    arrow_scale: f32, // pixels per m/s
}

const VIEW_RADIUS: f32 = 350.0; // outermost particle lands this far from the center, px
const DOT_RADIUS: f32 = 1.5;
const MAX_ARROW: f32 = 25.0; // fastest particle's velocity vector length, px

const DISK_COLOR: Color = Color::srgb(0.3, 0.5, 1.0);
const BULGE_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);

/// Open a window showing positions (disk blue, bulge red) and velocity vectors.
/// Blocks until the window is closed.
pub fn run_2d(set: ParticleSet) {
    tracing::info!("run_2d: starting Bevy 2D viewer with {} particles", set.len());

    let max_r = set.iter().map(|p| p.radius()).fold(0.0, f64::max);
    let max_v = set.iter().map(|p| p.v.norm()).fold(0.0, f64::max);

    let view = GalaxyView {
        scale: screen_scale(VIEW_RADIUS, max_r),
        arrow_scale: screen_scale(MAX_ARROW, max_v),
        set,
    };

    App::new()
        .insert_resource(view)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, draw_velocities_system)
        .run();
}

/// Pixels per unit so that `extent` maps to `pixels`; 1 for a degenerate extent
fn screen_scale(pixels: f32, extent: f64) -> f32 {
    if extent > 0.0 && extent.is_finite() {
        (pixels as f64 / extent) as f32
    } else {
        1.0
    }
}

fn component_color(kind: ComponentKind) -> Color {
    match kind {
        ComponentKind::Disk => DISK_COLOR,
        ComponentKind::Bulge => BULGE_COLOR,
    }
}

fn setup_particles_system(mut commands: Commands, view: Res<GalaxyView>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // one mesh and one material per component, shared by every dot
    let dot = Mesh2dHandle(meshes.add(Circle::new(DOT_RADIUS)));
    let disk_material = materials.add(ColorMaterial::from(DISK_COLOR));
    let bulge_material = materials.add(ColorMaterial::from(BULGE_COLOR));

    for p in view.set.iter() {
        let material = match p.kind {
            ComponentKind::Disk => disk_material.clone(),
            ComponentKind::Bulge => bulge_material.clone(),
        };
        let x = p.x.x as f32 * view.scale;
        let y = p.x.y as f32 * view.scale;

        commands.spawn(MaterialMesh2dBundle {
            mesh: dot.clone(),
            material,
            // bulge drawn above the disk
            transform: Transform::from_xyz(x, y, if p.kind == ComponentKind::Bulge { 1.0 } else { 0.0 }),
            ..Default::default()
        });
    }
}

fn draw_velocities_system(view: Res<GalaxyView>, mut gizmos: Gizmos) {
    for p in view.set.iter() {
        let start = Vec2::new(p.x.x as f32 * view.scale, p.x.y as f32 * view.scale);
        let end = start + Vec2::new(p.v.x as f32, p.v.y as f32) * view.arrow_scale;
        gizmos.line_2d(start, end, component_color(p.kind).with_alpha(0.4));
    }
}
