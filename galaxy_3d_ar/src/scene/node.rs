/// Owned scene-graph node.
///
/// A node owns its children by value. Cloning a node therefore copies the
/// whole subtree: no transform or animation state is shared between the
/// original and the copy.

use glam::Mat4;
use super::transform::Transform;

/// Playback state of a node animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Clip name
    pub clip: String,
    /// Playback position in seconds
    pub time: f32,
    /// Whether time advances each frame
    pub playing: bool,
}

impl AnimationState {
    /// Start playing `clip` from the beginning
    pub fn playing(clip: impl Into<String>) -> Self {
        Self { clip: clip.into(), time: 0.0, playing: true }
    }
}

/// Scene-graph node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    transform: Transform,
    visible: bool,
    animation: Option<AnimationState>,
    children: Vec<Node>,
}

/// Capability to produce an independent deep copy as a scene node.
///
/// The placement core only needs this from the model it places, so tests
/// and alternative model representations can stand in for a loaded asset.
pub trait Cloneable {
    /// Return a copy sharing no mutable state with `self`
    fn deep_clone(&self) -> Node;
}

impl Node {
    /// Create an empty, visible node with identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            visible: true,
            animation: None,
            children: Vec::new(),
        }
    }

    /// Builder: set the transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: attach an animation
    pub fn with_animation(mut self, animation: AnimationState) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    // ===== GETTERS =====

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Local transform as a matrix
    pub fn local_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Visibility flag
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Animation state, if any
    pub fn animation(&self) -> Option<&AnimationState> {
        self.animation.as_ref()
    }

    /// Direct children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes below this one (all depths)
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Depth-first search by name (self included)
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    // ===== SETTERS =====

    /// Replace the local transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Mutable access to the local transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Show or hide the node
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Mutable access to the animation state
    pub fn animation_mut(&mut self) -> Option<&mut AnimationState> {
        self.animation.as_mut()
    }

    /// Append a child
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Mutable access to the direct children
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

impl Cloneable for Node {
    fn deep_clone(&self) -> Node {
        self.clone()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
