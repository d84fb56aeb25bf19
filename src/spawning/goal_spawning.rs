use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use crate::core::components::GoalPart;
use crate::core::config::{GoalConfig, SceneConfig};
use crate::management::texture_autoloader::{SceneTextures, TextureWatch};

const LIGHT_GRAY: Color = Color::srgb(0.827, 0.827, 0.827);
const SUPPORT_ANGLE_DEGREES: f32 = 45.0;
const NET_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalShape {
    // along local Y
    Cylinder { radius: f32, length: f32 },
    // in local XY
    Disc { radius: f32 },
    Rectangle { width: f32, height: f32 },
    // right triangle in local XY, right angle at the origin
    SideNet { height: f32, depth: f32 },
    Cube { size: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalMaterial {
    Frame,
    Disc,
    Net,
    LogoBase,
    LogoOverlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalPiece {
    pub name: &'static str,
    pub shape: GoalShape,
    pub material: GoalMaterial,
    pub transform: Transform,
}

impl GoalPiece {
    // The logo box rides on top of the goal but keeps its size when the goal shrinks
    pub fn shrinks_with_goal(&self) -> bool {
        !matches!(self.material, GoalMaterial::LogoBase | GoalMaterial::LogoOverlay)
    }
}

struct SideNames {
    post: &'static str,
    support: &'static str,
    post_disc: &'static str,
    support_disc: &'static str,
    side_net: &'static str,
}

const RIGHT_SIDE: SideNames = SideNames {
    post: "RightPost",
    support: "RightSupport",
    post_disc: "RightPostDisc",
    support_disc: "RightSupportDisc",
    side_net: "RightSideNet",
};

const LEFT_SIDE: SideNames = SideNames {
    post: "LeftPost",
    support: "LeftSupport",
    post_disc: "LeftPostDisc",
    support_disc: "LeftSupportDisc",
    side_net: "LeftSideNet",
};

/// Lays out the goal frame, nets and logo box for a goal of the given height at depth `z`.
///
/// Pieces are built by composing translation and rotation matrices; radii and small offsets
/// are proportioned for a 16 unit goal and scale with `height`.
pub fn goal_layout(goal: &GoalConfig) -> Vec<GoalPiece> {
    let height = goal.height;
    let z = goal.z;
    let unit = height / 16.0;
    let support_angle = SUPPORT_ANGLE_DEGREES.to_radians();

    let crossbar_length = 3.0 * height + 1.0;
    let post_position = height * 3.0 / 2.0 - 0.1;
    let support_length = height / support_angle.cos() + unit;
    let support_z = -post_position / 3.0 + (z - 0.025);
    let support_disc_offset = height / support_angle.tan() - 0.1;
    let logo_size = height / 2.0;

    let mut pieces = vec![GoalPiece {
        name: "Crossbar",
        shape: GoalShape::Cylinder { radius: unit, length: crossbar_length },
        material: GoalMaterial::Frame,
        transform: Transform::from_matrix(
            Mat4::from_translation(Vec3::new(0.0, height / 2.0, z)) * Mat4::from_rotation_z(FRAC_PI_2),
        ),
    }];

    for (names, sign) in [(RIGHT_SIDE, 1.0), (LEFT_SIDE, -1.0)] {
        let x = sign * post_position;
        pieces.push(GoalPiece {
            name: names.post,
            shape: GoalShape::Cylinder { radius: 0.75 * unit, length: height + 0.75 * unit },
            material: GoalMaterial::Frame,
            transform: Transform::from_matrix(Mat4::from_translation(Vec3::new(
                sign * (post_position + 0.0675),
                0.05,
                z,
            ))),
        });
        pieces.push(GoalPiece {
            name: names.support,
            shape: GoalShape::Cylinder { radius: 0.5 * unit, length: support_length },
            material: GoalMaterial::Frame,
            transform: Transform::from_matrix(
                Mat4::from_translation(Vec3::new(x, 0.0, support_z)) * Mat4::from_rotation_x(support_angle),
            ),
        });
        pieces.push(GoalPiece {
            name: names.post_disc,
            shape: GoalShape::Disc { radius: 1.25 * unit },
            material: GoalMaterial::Disc,
            transform: Transform::from_matrix(
                Mat4::from_translation(Vec3::new(x, -height / 2.0 - 0.25, z)) * Mat4::from_rotation_x(FRAC_PI_2),
            ),
        });
        pieces.push(GoalPiece {
            name: names.support_disc,
            shape: GoalShape::Disc { radius: unit },
            material: GoalMaterial::Disc,
            transform: Transform::from_matrix(
                Mat4::from_translation(Vec3::new(x, -height / 2.0 - 0.3, -support_disc_offset + (z - 0.1)))
                    * Mat4::from_rotation_x(FRAC_PI_2),
            ),
        });
        pieces.push(GoalPiece {
            name: names.side_net,
            shape: GoalShape::SideNet {
                height: height + 0.5,
                depth: (15.0 / 24.0) * height * support_angle.tan(),
            },
            material: GoalMaterial::Net,
            transform: Transform::from_xyz(sign * 1.5 * height, -height / 2.0, z)
                .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        });
    }

    pieces.push(GoalPiece {
        name: "BackNet",
        shape: GoalShape::Rectangle { width: crossbar_length, height: support_length - 0.1 },
        material: GoalMaterial::Net,
        transform: Transform::from_matrix(
            Mat4::from_translation(Vec3::new(0.0, 0.0, support_z)) * Mat4::from_rotation_x(FRAC_PI_4),
        ),
    });

    let logo_center = Vec3::new(0.0, height + logo_size / 2.0, z);
    pieces.push(GoalPiece {
        name: "LogoBox",
        shape: GoalShape::Cube { size: logo_size },
        material: GoalMaterial::LogoBase,
        transform: Transform::from_translation(logo_center),
    });
    // a hair larger so the overlay never z-fights the white box
    pieces.push(GoalPiece {
        name: "LogoOverlay",
        shape: GoalShape::Cube { size: logo_size * 1.002 },
        material: GoalMaterial::LogoOverlay,
        transform: Transform::from_translation(logo_center),
    });

    pieces
}

pub fn side_net_mesh(height: f32, depth: f32) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [0.0, height, 0.0], [depth, 0.0, 0.0]],
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 3])
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]])
        .with_inserted_indices(Indices::U32(vec![0, 2, 1]))
}

fn shape_mesh(shape: GoalShape) -> Mesh {
    match shape {
        GoalShape::Cylinder { radius, length } => Cylinder::new(radius, length).mesh().resolution(32).build(),
        GoalShape::Disc { radius } => Circle::new(radius).mesh().resolution(32).build(),
        GoalShape::Rectangle { width, height } => Rectangle::new(width, height).mesh().build(),
        GoalShape::SideNet { height, depth } => side_net_mesh(height, depth),
        GoalShape::Cube { size } => Cuboid::from_length(size).mesh().build(),
    }
}

pub(crate) fn goal_materials(
    textures: &SceneTextures,
    materials: &mut Assets<StandardMaterial>,
    watch: &mut TextureWatch,
) -> [(GoalMaterial, Handle<StandardMaterial>); 5] {
    let frame = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });
    let disc = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let net = materials.add(StandardMaterial {
        base_color: LIGHT_GRAY.with_alpha(NET_OPACITY),
        base_color_texture: Some(textures.net.clone()),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let logo_base = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let logo_overlay = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(textures.logo.clone()),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    watch.watch("net", &textures.net, &net);
    watch.watch("logo", &textures.logo, &logo_overlay);

    [
        (GoalMaterial::Frame, frame),
        (GoalMaterial::Disc, disc),
        (GoalMaterial::Net, net),
        (GoalMaterial::LogoBase, logo_base),
        (GoalMaterial::LogoOverlay, logo_overlay),
    ]
}

pub fn spawn_goal(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut watch: ResMut<TextureWatch>,
    textures: Res<SceneTextures>,
    config: Res<SceneConfig>,
) {
    let palette = goal_materials(&textures, &mut materials, &mut watch);
    let pieces = goal_layout(&config.goal);

    for piece in &pieces {
        let Some((_, material)) = palette.iter().find(|(kind, _)| *kind == piece.material) else {
            continue;
        };
        let entity = commands.spawn_empty()
            .insert(Mesh3d(meshes.add(shape_mesh(piece.shape))))
            .insert(MeshMaterial3d(material.clone()))
            .insert(piece.transform)
            .insert(Name::new(piece.name))
            .id();
        if piece.shrinks_with_goal() {
            commands.entity(entity).insert(GoalPart);
        }
    }

    debug!("Spawned {} goal pieces", pieces.len());
}
