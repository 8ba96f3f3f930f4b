/// Tests for Node and Transform
///
/// These tests validate the node builder API, tree queries, deep cloning
/// and transform decomposition.

use super::*;
use glam::{Mat4, Quat, Vec3};

// ============================================================================
// Helper Functions
// ============================================================================

fn create_test_tree() -> Node {
    Node::new("model")
        .with_child(
            Node::new("tulip")
                .with_animation(AnimationState::playing("sway"))
                .with_child(Node::new("petal")),
        )
        .with_child(Node::new("stem"))
}

// ============================================================================
// Tests: Tree Queries
// ============================================================================

#[test]
fn test_new_node_defaults() {
    let node = Node::new("empty");
    assert_eq!(node.name(), "empty");
    assert_eq!(*node.transform(), Transform::IDENTITY);
    assert!(node.visible());
    assert!(node.animation().is_none());
    assert_eq!(node.child_count(), 0);
}

#[test]
fn test_descendant_count() {
    let tree = create_test_tree();
    assert_eq!(tree.child_count(), 2);
    assert_eq!(tree.descendant_count(), 3);
}

#[test]
fn test_find_by_name() {
    let tree = create_test_tree();
    assert_eq!(tree.find("petal").map(|n| n.name()), Some("petal"));
    assert!(tree.find("model").is_some());
    assert!(tree.find("leaf").is_none());
}

// ============================================================================
// Tests: Deep Clone
// ============================================================================

#[test]
fn test_deep_clone_is_equal_but_independent() {
    let template = create_test_tree();
    let mut copy = template.deep_clone();
    assert_eq!(copy, template);

    copy.set_transform(Transform {
        position: Vec3::new(1.0, 2.0, 3.0),
        ..Transform::IDENTITY
    });
    copy.children_mut()[0]
        .animation_mut()
        .unwrap()
        .time = 4.5;

    assert_eq!(*template.transform(), Transform::IDENTITY);
    assert_eq!(template.children()[0].animation().unwrap().time, 0.0);
}

#[test]
fn test_deep_clone_copies_children() {
    let template = create_test_tree();
    let mut copy = template.deep_clone();
    copy.add_child(Node::new("extra"));
    assert_eq!(template.child_count(), 2);
    assert_eq!(copy.child_count(), 3);
}

// ============================================================================
// Tests: Transform
// ============================================================================

#[test]
fn test_transform_from_matrix() {
    let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0), rotation, Vec3::new(0.5, -1.0, 3.0),
    );

    let transform = Transform::from_matrix(&matrix);

    assert!(transform.position.abs_diff_eq(Vec3::new(0.5, -1.0, 3.0), 1e-6));
    assert!(transform.scale.abs_diff_eq(Vec3::splat(2.0), 1e-5));
    assert!(transform.rotation.abs_diff_eq(rotation, 1e-5));
    assert!(transform.to_matrix().abs_diff_eq(matrix, 1e-5));
}

#[test]
fn test_transform_default_is_identity() {
    assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
}
