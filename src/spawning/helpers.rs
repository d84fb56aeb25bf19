use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::SeedableRng;

/// Left-multiplies `matrix` onto the transform's world matrix, so the new
/// transform is `matrix` applied after everything the old one did.
pub fn apply_matrix(transform: &Transform, matrix: Mat4) -> Transform {
    Transform::from_matrix(matrix * transform.compute_matrix())
}

// Uniform scale about the world origin, not about the object's own center
pub fn scale_about_origin(transform: &Transform, factor: f32) -> Transform {
    apply_matrix(transform, Mat4::from_scale(Vec3::splat(factor)))
}

#[derive(Resource)]
pub struct GenRng(WyRand);

impl GenRng {

    pub fn new(seed: u64) -> Self {
        GenRng(WyRand::seed_from_u64(seed))
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}
