//! Authoritative scene: flat node storage with a name index.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! Named nodes are additionally indexed by name so the view-state machine
//! can address parts the way a scene-graph lookup would. A lookup for a
//! missing name yields `None`; callers treat that as "skip", never as an
//! error.

pub mod cabinet;

use glam::{EulerRot, Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;

pub use cabinet::build_cabinet;

/// Index of a node inside a [`CabinetScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw index into the scene's node list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Geometry attached to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Pure transform node with no geometry of its own.
    Group,
    /// Axis-aligned box centred on the node origin.
    Cuboid {
        /// Extent along x, y, z.
        size: Vec3,
    },
    /// Cylinder along the local y axis.
    Cylinder {
        /// Radius of both caps.
        radius: f32,
        /// Length along y.
        height: f32,
    },
    /// Flat rectangle in the local xy plane.
    Plane {
        /// Extent along x.
        width: f32,
        /// Extent along y.
        height: f32,
    },
}

/// Flat diffuse surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// `0xRRGGBB` colour.
    pub color: u32,
}

impl Material {
    /// Material with the given `0xRRGGBB` colour.
    #[must_use]
    pub const fn new(color: u32) -> Self {
        Self { color }
    }

    /// Colour as linear-ish `[r, g, b]` in `0.0..=1.0`.
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// Scene light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light from every direction.
    Ambient {
        /// `0xRRGGBB` colour.
        color: u32,
        /// Multiplier on `color`.
        intensity: f32,
    },
    /// Parallel light shining from `position` toward the origin.
    Directional {
        /// `0xRRGGBB` colour.
        color: u32,
        /// Multiplier on `color`.
        intensity: f32,
        /// Where the light shines from.
        position: Vec3,
        /// Whether this light casts shadows.
        cast_shadow: bool,
    },
}

/// One node of the scene hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Lookup name, if the node is addressable.
    pub name: Option<String>,
    /// Geometry drawn at this node.
    pub primitive: Primitive,
    /// Surface, `None` for groups.
    pub material: Option<Material>,
    /// Translation relative to the parent.
    pub position: Vec3,
    /// Euler rotation (x, y, z order) relative to the parent, in radians.
    pub rotation: Vec3,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Child nodes in insertion order.
    pub children: Vec<NodeId>,
}

impl SceneNode {
    /// Parent-relative transform.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Description of a node to insert with [`CabinetScene::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    name: Option<String>,
    primitive: Primitive,
    material: Option<Material>,
    position: Vec3,
    rotation: Vec3,
}

impl NodeSpec {
    /// Transform-only group.
    #[must_use]
    pub fn group() -> Self {
        Self {
            name: None,
            primitive: Primitive::Group,
            material: None,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Geometry node with the given surface.
    #[must_use]
    pub fn mesh(primitive: Primitive, material: Material) -> Self {
        Self {
            primitive,
            material: Some(material),
            ..Self::group()
        }
    }

    /// Make the node addressable by `name`.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the parent-relative position.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the parent-relative Euler rotation.
    #[must_use]
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// The authoritative scene. Owns every node in a flat list.
#[derive(Debug, Clone)]
pub struct CabinetScene {
    nodes: Vec<SceneNode>,
    by_name: FxHashMap<String, NodeId>,
    lights: Vec<Light>,
    background: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl CabinetScene {
    /// Create a scene holding only an empty root group named `root_name`.
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        let mut scene = Self {
            nodes: Vec::new(),
            by_name: FxHashMap::default(),
            lights: Vec::new(),
            background: 0x0060_6060,
            generation: 0,
            rendered_generation: 0,
        };
        let _ = scene.insert(NodeSpec::group().named(root_name), None);
        scene
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer has consumed the current state.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// The root group every other node descends from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(name) = &spec.name {
            if let Some(previous) = self.by_name.insert(name.clone(), id) {
                log::warn!(
                    "node name {name:?} reused; lookup now resolves to \
                     {id:?} instead of {previous:?}"
                );
            }
        }
        self.nodes.push(SceneNode {
            name: spec.name,
            primitive: spec.primitive,
            material: spec.material,
            position: spec.position,
            rotation: spec.rotation,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        self.invalidate();
        id
    }

    /// Add a node under `parent`. Returns `None` if `parent` does not
    /// belong to this scene.
    pub fn add(&mut self, parent: NodeId, spec: NodeSpec) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        Some(self.insert(spec, Some(parent)))
    }

    /// Look up a node by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Look up `name` among the descendants of `group` (the group itself
    /// excluded).
    #[must_use]
    pub fn find_in(&self, group: NodeId, name: &str) -> Option<NodeId> {
        let id = self.find(name)?;
        let mut cursor = self.node(id)?.parent;
        while let Some(ancestor) = cursor {
            if ancestor == group {
                return Some(id);
            }
            cursor = self.nodes[ancestor.0].parent;
        }
        None
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Borrow a node by name.
    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&SceneNode> {
        self.find(name).and_then(|id| self.node(id))
    }

    /// All nodes, in insertion order (parents before children).
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Set a node's parent-relative position. Returns `false` if the node
    /// does not exist.
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> bool {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return false;
        };
        if node.position != position {
            node.position = position;
            self.invalidate();
        }
        true
    }

    /// Set the position of the node called `name`. A missing name is a
    /// silent no-op that returns `false`.
    pub fn set_position_by_name(&mut self, name: &str, position: Vec3) -> bool {
        match self.find(name) {
            Some(id) => self.set_position(id, position),
            None => {
                log::trace!("no scene node named {name:?}; skipping");
                false
            }
        }
    }

    /// Set a node's parent-relative Euler rotation. Returns `false` if the
    /// node does not exist.
    pub fn set_rotation(&mut self, id: NodeId, rotation: Vec3) -> bool {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return false;
        };
        if node.rotation != rotation {
            node.rotation = rotation;
            self.invalidate();
        }
        true
    }

    /// Compose parent transforms down to `id`.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.node(id)?;
        let mut matrix = node.local_matrix();
        while let Some(parent) = node.parent {
            node = &self.nodes[parent.0];
            matrix = node.local_matrix() * matrix;
        }
        Some(matrix)
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
        self.invalidate();
    }

    /// Lights in insertion order.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Clear colour as `0xRRGGBB`.
    #[must_use]
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Change the clear colour.
    pub fn set_background(&mut self, color: u32) {
        self.background = color;
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_has_named_root() {
        let scene = CabinetScene::new("cabinet");
        assert_eq!(scene.find("cabinet"), Some(scene.root()));
        assert_eq!(scene.nodes().len(), 1);
    }

    #[test]
    fn missing_name_is_skipped() {
        let mut scene = CabinetScene::new("cabinet");
        assert!(!scene.set_position_by_name("nope", Vec3::ONE));
        assert_eq!(scene.find("nope"), None);
    }

    #[test]
    fn find_in_respects_hierarchy() {
        let mut scene = CabinetScene::new("root");
        let group = scene
            .add(scene.root(), NodeSpec::group().named("group"))
            .unwrap();
        let _ = scene
            .add(group, NodeSpec::group().named("inner"))
            .unwrap();
        let _ = scene
            .add(scene.root(), NodeSpec::group().named("outer"))
            .unwrap();
        assert!(scene.find_in(group, "inner").is_some());
        assert!(scene.find_in(group, "outer").is_none());
        assert!(scene.find_in(group, "group").is_none());
    }

    #[test]
    fn add_rejects_foreign_parent() {
        let mut scene = CabinetScene::new("root");
        assert!(scene.add(NodeId(42), NodeSpec::group()).is_none());
    }

    #[test]
    fn world_matrix_composes_parents() {
        let mut scene = CabinetScene::new("root");
        let group = scene
            .add(scene.root(), NodeSpec::group().at(Vec3::new(0.0, 0.0, 3.0)))
            .unwrap();
        let child = scene
            .add(group, NodeSpec::group().at(Vec3::new(1.0, 0.0, 0.0)))
            .unwrap();
        let world = scene.world_matrix(child).unwrap();
        let origin = world.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(1.0, 0.0, 3.0), 1e-6));
    }

    #[test]
    fn unchanged_writes_do_not_dirty_the_scene() {
        let mut scene = CabinetScene::new("root");
        scene.mark_rendered();
        assert!(scene.set_position(scene.root(), Vec3::ZERO));
        assert!(!scene.is_dirty());
        assert!(scene.set_position(scene.root(), Vec3::X));
        assert!(scene.is_dirty());
    }

    #[test]
    fn material_rgb_unpacks_channels() {
        let rgb = Material::new(0x00ff_8000).rgb();
        assert_eq!(rgb[0], 1.0);
        assert!((rgb[1] - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(rgb[2], 0.0);
    }
}
