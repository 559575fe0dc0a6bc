//! Hinge-pair transforms: where the two door leaves sit for a given
//! progress value.
//!
//! Both leaves are children of the target-anchored door group. Leaf one
//! pivots on the left hinge and leaf two on the right; their panels hang
//! inward from the hinges so that at progress 0 they meet in the middle
//! and cover the target. The leaves rotate about Y by equal and opposite
//! angles.

use glam::{Mat4, Vec3};

use crate::animation::hinge_pair;
use crate::options::DoorOptions;

/// GPU instance data for one door leaf.
///
/// Layout (80 bytes, no padding):
///   model: mat4x4<f32>     (offset 0)
///   half_extents: vec3<f32> (offset 64)
///   leaf: u32              (offset 76)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DoorInstance {
    /// Leaf model matrix in door-group space, column-major.
    pub model: [[f32; 4]; 4],
    /// Half the panel box size.
    pub half_extents: [f32; 3],
    /// 0 for the left leaf, 1 for the right leaf.
    pub leaf: u32,
}

/// Geometry of a pair of hinged door leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct HingePair {
    hinge_offset: f32,
    panel_offset: f32,
    panel_size: Vec3,
    open_angle: f32,
}

impl HingePair {
    /// Hinge pair from door options.
    #[must_use]
    pub fn new(options: &DoorOptions) -> Self {
        Self {
            hinge_offset: options.hinge_offset,
            panel_offset: options.panel_offset,
            panel_size: Vec3::from_array(options.panel_size),
            open_angle: options.open_angle,
        }
    }

    /// Y rotation (radians) of each leaf at `progress`.
    ///
    /// Leaf one swings by `-progress * open_angle`, leaf two by the
    /// opposite angle.
    #[must_use]
    pub fn leaf_angles(&self, progress: f32) -> [f32; 2] {
        let [a, b] = hinge_pair(progress);
        [-a * self.open_angle, -b * self.open_angle]
    }

    /// Model matrices of both leaves at `progress`.
    #[must_use]
    pub fn transforms(&self, progress: f32) -> [Mat4; 2] {
        let [left, right] = self.leaf_angles(progress);
        [
            leaf_transform(-self.hinge_offset, self.panel_offset, left),
            leaf_transform(self.hinge_offset, -self.panel_offset, right),
        ]
    }

    /// Panel centres of both leaves at `progress`.
    #[must_use]
    pub fn panel_centers(&self, progress: f32) -> [Vec3; 2] {
        self.transforms(progress)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Instance data for both leaves at `progress`.
    #[must_use]
    pub fn instances(&self, progress: f32) -> [DoorInstance; 2] {
        let half_extents = (self.panel_size * 0.5).to_array();
        let [left, right] = self.transforms(progress);
        [
            DoorInstance {
                model: left.to_cols_array_2d(),
                half_extents,
                leaf: 0,
            },
            DoorInstance {
                model: right.to_cols_array_2d(),
                half_extents,
                leaf: 1,
            },
        ]
    }
}

impl Default for HingePair {
    fn default() -> Self {
        Self::new(&DoorOptions::default())
    }
}

/// Hinge at `hinge_x`, rotated by `angle`, panel offset `panel_x` from it.
fn leaf_transform(hinge_x: f32, panel_x: f32, angle: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(hinge_x, 0.0, 0.0))
        * Mat4::from_rotation_y(angle)
        * Mat4::from_translation(Vec3::new(panel_x, 0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn closed_doors_meet_in_the_middle() {
        let pair = HingePair::default();
        let [left, right] = pair.panel_centers(0.0);
        assert!(approx(left, Vec3::new(-0.8, 0.0, 0.0)));
        assert!(approx(right, Vec3::new(0.8, 0.0, 0.0)));
    }

    #[test]
    fn leaves_swing_by_opposite_angles() {
        let pair = HingePair::default();
        let [a, b] = pair.leaf_angles(1.0);
        assert!((a + 1.6).abs() < 1e-6);
        assert!((b - 1.6).abs() < 1e-6);
        assert_eq!(pair.leaf_angles(0.0), [0.0, 0.0]);
    }

    #[test]
    fn open_doors_are_mirror_images() {
        let pair = HingePair::default();
        for progress in [0.1, 0.5, 0.9, 1.0] {
            let [left, right] = pair.panel_centers(progress);
            assert!((left.x + right.x).abs() < 1e-5);
            assert!((left.z - right.z).abs() < 1e-5);
            assert!(left.z > 0.0, "leaves swing toward the viewer");
        }
    }

    #[test]
    fn hinges_stay_put() {
        let pair = HingePair::default();
        for progress in [0.0, 0.3, 1.0] {
            let [left, right] = pair.transforms(progress);
            let left_hinge = left.transform_point3(Vec3::new(-0.7, 0.0, 0.0));
            let right_hinge = right.transform_point3(Vec3::new(0.7, 0.0, 0.0));
            assert!(approx(left_hinge, Vec3::new(-1.5, 0.0, 0.0)));
            assert!(approx(right_hinge, Vec3::new(1.5, 0.0, 0.0)));
        }
    }

    #[test]
    fn instances_are_upload_ready() {
        let pair = HingePair::default();
        let instances = pair.instances(0.5);
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 2 * 80);
        assert_eq!(instances[0].leaf, 0);
        assert_eq!(instances[1].leaf, 1);
        assert_eq!(instances[0].half_extents, [0.8, 1.0, 0.05]);
    }
}
