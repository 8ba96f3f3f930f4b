/// Reference spaces and poses.
///
/// A reference space is the coordinate frame a pose is expressed in.
/// The viewer space follows the device and is only used to scope the
/// hit-test source; hit poses are always resolved against the
/// world-anchored local space supplied by the renderer.

use glam::Mat4;

/// Kind of reference space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSpaceType {
    /// Head/device-relative space
    Viewer,
    /// World-anchored space with origin near the session start position
    Local,
    /// Local space with the origin on the floor
    LocalFloor,
}

impl ReferenceSpaceType {
    /// True for spaces that stay fixed relative to the real world
    pub fn is_world_anchored(&self) -> bool {
        !matches!(self, ReferenceSpaceType::Viewer)
    }
}

/// Opaque reference space handle issued by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceSpace {
    id: u64,
    space_type: ReferenceSpaceType,
}

impl ReferenceSpace {
    /// Wrap a platform handle
    pub fn new(id: u64, space_type: ReferenceSpaceType) -> Self {
        Self { id, space_type }
    }

    /// Platform handle id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Kind of space
    pub fn space_type(&self) -> ReferenceSpaceType {
        self.space_type
    }
}

/// Raw 4x4 rigid transform as delivered by the platform.
///
/// The 16 floats are column-major, matching the WebXR and OpenXR matrix
/// layout and `glam::Mat4::from_cols_array`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    matrix: [f32; 16],
}

impl RigidTransform {
    /// Wrap a column-major matrix
    pub fn from_cols_array(matrix: [f32; 16]) -> Self {
        Self { matrix }
    }

    /// Wrap a glam matrix
    pub fn from_mat4(matrix: Mat4) -> Self {
        Self { matrix: matrix.to_cols_array() }
    }

    /// Raw column-major floats
    pub fn cols_array(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// Same floats as a glam matrix (bit-for-bit)
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix)
    }
}

/// A pose resolved against a reference space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrPose {
    /// Transform from the pose to the reference space it was resolved in
    pub transform: RigidTransform,
    /// True when the position is estimated rather than tracked
    pub emulated_position: bool,
}

impl XrPose {
    /// A tracked pose
    pub fn new(transform: RigidTransform) -> Self {
        Self { transform, emulated_position: false }
    }
}
