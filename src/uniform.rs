use crate::api::GlApi;
use crate::sampler::Sampler;


/// A host value that knows the one driver call that uploads it to a uniform.
///
/// Dispatch is resolved at compile time: a type without an impl fails to
/// build, which is the point. Consumers extend the set by implementing this
/// for their own value types; each impl must issue exactly one upload whose
/// element count matches the type's component count.
pub trait UniformValue {
	fn apply(&self, api: &dyn GlApi, location: i32);
}

impl<T: UniformValue + ?Sized> UniformValue for &T {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		(**self).apply(api, location);
	}
}

impl UniformValue for f32 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_floats(location, 1, &[*self]);
	}
}

impl UniformValue for i32 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_ints(location, 1, &[*self]);
	}
}

macro_rules! impl_uniform_array {
	($elem:ty, $n:expr, $upload:ident) => {
		impl UniformValue for [$elem; $n] {
			fn apply(&self, api: &dyn GlApi, location: i32) {
				api.$upload(location, $n, self);
			}
		}
	};
}

impl_uniform_array!(f32, 2, uniform_floats);
impl_uniform_array!(f32, 3, uniform_floats);
impl_uniform_array!(f32, 4, uniform_floats);
impl_uniform_array!(i32, 2, uniform_ints);
impl_uniform_array!(i32, 3, uniform_ints);
impl_uniform_array!(i32, 4, uniform_ints);

impl UniformValue for glam::Vec2 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_floats(location, 2, &self.to_array());
	}
}

impl UniformValue for glam::Vec3 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_floats(location, 3, &self.to_array());
	}
}

impl UniformValue for glam::Vec4 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_floats(location, 4, &self.to_array());
	}
}

impl UniformValue for glam::Mat3 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_matrix(location, 3, 3, &self.to_cols_array());
	}
}

impl UniformValue for glam::Mat4 {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_matrix(location, 4, 4, &self.to_cols_array());
	}
}

// A sampler uniform is just the texture unit index it was constructed with.
impl UniformValue for Sampler<'_> {
	fn apply(&self, api: &dyn GlApi, location: i32) {
		api.uniform_ints(location, 1, &[self.unit() as i32]);
	}
}
