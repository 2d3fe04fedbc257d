use crate::api::Handle;
use crate::buffer::Buffer;
use crate::context::Context;
use crate::error::Error;


/// Primitive topology for non-indexed draws.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum DrawMode {
	Triangles,
	Lines,
	Points,
}

impl DrawMode {
	pub fn gl_topology(self) -> u32 {
		match self {
			DrawMode::Triangles => gl::TRIANGLES,
			DrawMode::Lines => gl::LINES,
			DrawMode::Points => gl::POINTS,
		}
	}
}


/// One driver vertex-array object plus the buffers it was configured over.
///
/// Construction takes ownership of the buffer list: the vertex array is the
/// sole owner of its attached buffers from then on, and dropping it drops each
/// of them exactly once.
#[derive(Debug)]
pub struct VertexArray {
	ctx: Context,
	handle: Handle,
	buffers: Vec<Buffer>,
}

impl VertexArray {
	/// Creates and binds a vertex array, then hands the buffer list to
	/// `configure`, which is expected to bind each buffer and declare its
	/// attribute layout (see [`crate::attribute`]).
	pub fn new<F>(ctx: &Context, buffers: Vec<Buffer>, configure: F) -> Result<VertexArray, Error>
		where F: FnOnce(&Context, &[Buffer]) -> Result<(), Error>
	{
		let handle = ctx.api().create_vertex_array();

		let vertex_array = VertexArray {
			ctx: ctx.clone(),
			handle,
			buffers,
		};

		ctx.api().bind_vertex_array(handle);
		ctx.check("VertexArray::new")?;

		configure(ctx, &vertex_array.buffers)?;
		ctx.check("VertexArray::configure")?;

		Ok(vertex_array)
	}

	pub fn handle(&self) -> Handle {
		self.handle
	}

	/// The attached buffers, in the order they were supplied at construction.
	pub fn buffers(&self) -> &[Buffer] {
		&self.buffers
	}

	pub fn bind(&self) -> Result<(), Error> {
		self.ctx.api().bind_vertex_array(self.handle);
		self.ctx.check("VertexArray::bind")
	}

	/// Issues a non-indexed draw over the vertex range `[offset, offset + count)`.
	///
	/// The vertex array must currently be bound; like the rest of the wrapper
	/// this relies on call order, not enforcement.
	pub fn draw(&self, mode: DrawMode, offset: i32, count: i32) -> Result<(), Error> {
		self.ctx.api().draw_arrays(mode.gl_topology(), offset, count);
		self.ctx.check("VertexArray::draw")
	}
}

impl Drop for VertexArray {
	fn drop(&mut self) {
		self.ctx.api().delete_vertex_array(self.handle);
		// attached buffers drop with the Vec, each releasing its own handle
	}
}
