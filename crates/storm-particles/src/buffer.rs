//! Instance transform buffer: one model matrix per pool slot

use bytemuck::{Pod, Zeroable};
use storm_core::{Transform, TransformSink};

/// GPU instance data — a column-major model matrix.
/// 64 bytes (4 columns of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceTransform {
    pub model: [[f32; 4]; 4],
}

impl InstanceTransform {
    pub const IDENTITY: Self = Self {
        model: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            model: transform.to_matrix(),
        }
    }

    pub fn translation(&self) -> [f32; 3] {
        let [x, y, z, _] = self.model[3];
        [x, y, z]
    }
}

/// CPU mirror of an instanced mesh's matrix buffer.
///
/// Every write marks the buffer dirty; the renderer uploads `as_bytes()` and
/// calls `mark_uploaded()`.
pub struct InstanceBuffer {
    instances: Vec<InstanceTransform>,
    needs_upload: bool,
}

impl InstanceBuffer {
    pub fn new(slots: usize) -> Self {
        Self {
            instances: vec![InstanceTransform::IDENTITY; slots],
            needs_upload: true,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&InstanceTransform> {
        self.instances.get(slot)
    }

    pub fn instances(&self) -> &[InstanceTransform] {
        &self.instances
    }

    /// Raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    pub fn mark_uploaded(&mut self) {
        self.needs_upload = false;
    }
}

impl TransformSink for InstanceBuffer {
    fn slot_count(&self) -> usize {
        self.instances.len()
    }

    fn set_transform(&mut self, slot: usize, transform: &Transform) {
        if let Some(instance) = self.instances.get_mut(slot) {
            *instance = InstanceTransform::from_transform(transform);
            self.needs_upload = true;
        }
    }
}
