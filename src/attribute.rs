use crate::context::Context;
use crate::error::Error;


/// A host type that can describe a vertex attribute slot.
///
/// The associated constants pick the attribute-pointer call at compile time;
/// a type without an impl fails to build. Consumers extend the set by
/// implementing this for their own vertex element types.
pub trait AttributeValue {
	const COMPONENTS: i32;
	const GL_TYPE: u32;
	const INTEGER: bool = false;
}

impl AttributeValue for f32 {
	const COMPONENTS: i32 = 1;
	const GL_TYPE: u32 = gl::FLOAT;
}

macro_rules! impl_attribute_int {
	($t:ty, $gl_type:expr) => {
		impl AttributeValue for $t {
			const COMPONENTS: i32 = 1;
			const GL_TYPE: u32 = $gl_type;
			const INTEGER: bool = true;
		}
	};
}

impl_attribute_int!(u8, gl::UNSIGNED_BYTE);
impl_attribute_int!(u16, gl::UNSIGNED_SHORT);
impl_attribute_int!(u32, gl::UNSIGNED_INT);
impl_attribute_int!(i8, gl::BYTE);
impl_attribute_int!(i16, gl::SHORT);
impl_attribute_int!(i32, gl::INT);

macro_rules! impl_attribute_vec {
	($t:ty, $components:expr) => {
		impl AttributeValue for $t {
			const COMPONENTS: i32 = $components;
			const GL_TYPE: u32 = gl::FLOAT;
		}
	};
}

impl_attribute_vec!([f32; 2], 2);
impl_attribute_vec!([f32; 3], 3);
impl_attribute_vec!([f32; 4], 4);
impl_attribute_vec!(glam::Vec2, 2);
impl_attribute_vec!(glam::Vec3, 3);
impl_attribute_vec!(glam::Vec4, 4);


/// Enables attribute slot `index` and declares its layout: elements of type
/// `T`, `stride` bytes apart, starting `offset` bytes into the currently
/// bound array buffer.
///
/// Exactly one attribute-pointer call is issued, the float or integer variant
/// chosen by `T`.
pub fn attribute<T: AttributeValue>(ctx: &Context, index: u32, stride: usize, offset: usize)
	-> Result<(), Error>
{
	let api = ctx.api();

	api.enable_vertex_attrib(index);

	if T::INTEGER {
		api.vertex_attrib_int_pointer(index, T::COMPONENTS, T::GL_TYPE, stride, offset);
	} else {
		api.vertex_attrib_pointer(index, T::COMPONENTS, T::GL_TYPE, false, stride, offset);
	}

	ctx.check("attribute")
}
