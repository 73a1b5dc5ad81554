use crate::entity::{Entity, Role};
use crate::frame::FrameContext;
use crate::input::InputSnapshot;
use crate::math::{Aabb, Matrix4, Vector3};
use crate::motion::{player, Camera};
use crate::traits::RenderBackend;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters. The matrix is computed once per
/// configuration change, not per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::projection(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 70.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Scene owner: entity storage and the fixed per-frame order
/// sample-input → viewer → player → matrices.
///
/// Single-threaded and frame-sequential; the obstacle set is assembled fresh
/// on every update from whatever collidable entities exist this frame.
pub struct Scene {
    entities: Vec<Entity>,
    camera: Camera,
    viewer: usize,
    player: Option<usize>,
    projection: Matrix4,
}

impl Scene {
    pub fn new(viewer: Transform, projection: Projection) -> Self {
        Self {
            entities: vec![Entity::new(viewer, Role::Viewer, false)],
            camera: Camera::new(),
            viewer: 0,
            player: None,
            projection: projection.matrix(),
        }
    }

    /// Add an entity and return its index. The first entity with
    /// [`Role::Player`] becomes the controlled player; later ones are
    /// treated as scenery.
    pub fn add(&mut self, entity: Entity) -> usize {
        let index = self.entities.len();
        if entity.role() == Role::Player {
            if self.player.is_none() {
                self.player = Some(index);
            } else {
                log::warn!("scene already has a player; entity {} will not be driven", index);
            }
        }
        self.entities.push(entity);
        index
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Copy of the viewer's pose.
    pub fn viewer_transform(&self) -> Transform {
        self.entities[self.viewer].transform()
    }

    /// Copy of the player's placement, if a player was added.
    pub fn player_transform(&self) -> Option<Transform> {
        self.player.map(|i| self.entities[i].transform())
    }

    /// Recompute the projection matrix, e.g. after an aspect-ratio change.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection.matrix();
    }

    /// Advance the scene one frame.
    ///
    /// The viewer moves first so the player sees this frame's look angle.
    pub fn update(&mut self, frame: &FrameContext, input: &InputSnapshot) {
        let mut viewer_pose = self.entities[self.viewer].transform();
        self.camera.update(&mut viewer_pose, input);
        *self.entities[self.viewer].transform_mut() = viewer_pose;

        if let Some(index) = self.player {
            let obstacles = self.obstacles_excluding(index);
            let angle = Camera::horizontal_angle(&viewer_pose);
            player::update(
                self.entities[index].transform_mut(),
                input,
                angle,
                &obstacles,
            );
        }

        log::trace!(
            "frame {}: viewer at {:?}, player at {:?}",
            frame.number,
            viewer_pose.position,
            self.player_transform().map(|t| t.position),
        );
    }

    /// The live obstacle set: every collidable entity except the mover.
    fn obstacles_excluding(&self, mover: usize) -> Vec<Aabb> {
        self.entities
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mover)
            .filter_map(|(_, e)| e.hitbox())
            .collect()
    }

    /// Hand model/view/projection to the backend for every drawable entity.
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        let view = Camera::view_matrix(&self.entities[self.viewer].transform());
        for entity in &self.entities {
            if entity.role() == Role::Viewer {
                continue;
            }
            let model = entity.transform().model_matrix();
            backend.draw(&model, &view, &self.projection);
        }
    }
}

/// Serializable scene description, the demo binary's JSON surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub projection: Projection,
    #[serde(default)]
    pub viewer: Transform,
    #[serde(default)]
    pub player: Option<Transform>,
    #[serde(default)]
    pub obstacles: Vec<Transform>,
}

impl SceneDescription {
    pub fn build(&self) -> Scene {
        let mut scene = Scene::new(self.viewer, self.projection);
        for &placement in &self.obstacles {
            scene.add(Entity::obstacle(placement));
        }
        if let Some(placement) = self.player {
            scene.add(Entity::new(placement, Role::Player, true));
        }
        scene
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        // a small demo room: player at the origin, one wall ahead of it
        Self {
            projection: Projection::default(),
            viewer: Transform::from_position(Vector3::new(0.0, 1.0, 5.0)),
            player: Some(Transform::IDENTITY),
            obstacles: vec![
                Transform::new(
                    Vector3::new(0.0, 0.0, -3.0),
                    Vector3::ZERO,
                    Vector3::new(4.0, 2.0, 1.0),
                ),
                Transform::new(
                    Vector3::new(0.0, -1.5, 0.0),
                    Vector3::ZERO,
                    Vector3::new(20.0, 1.0, 20.0),
                ),
            ],
        }
    }
}
