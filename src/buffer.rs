use crate::api::Handle;
use crate::context::Context;
use crate::error::Error;


/// Binding target semantics of a buffer.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum BufferType {
	Array,
	Element,
	Uniform,
	Shader,
}

impl BufferType {
	pub fn gl_target(self) -> u32 {
		match self {
			BufferType::Array => gl::ARRAY_BUFFER,
			BufferType::Element => gl::ELEMENT_ARRAY_BUFFER,
			BufferType::Uniform => gl::UNIFORM_BUFFER,
			BufferType::Shader => gl::SHADER_STORAGE_BUFFER,
		}
	}
}


/// Reinterprets a slice of plain values as its raw bytes, for buffer uploads.
pub fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
	unsafe {
		std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data))
	}
}


/// One driver buffer object. Owns its handle; released on drop.
#[derive(Debug)]
pub struct Buffer {
	ctx: Context,
	handle: Handle,
	size: usize,
	buffer_type: BufferType,
}

impl Buffer {
	/// Creates a buffer of `size` bytes bound to `buffer_type`'s target.
	///
	/// `initial` fills the allocation from byte zero; `None` reserves
	/// uninitialized storage. `dynamic` picks the usage hint.
	pub fn new(ctx: &Context, buffer_type: BufferType, size: usize,
		initial: Option<&[u8]>, dynamic: bool) -> Result<Buffer, Error>
	{
		let api = ctx.api();
		let handle = api.create_buffer();

		let buffer = Buffer {
			ctx: ctx.clone(),
			handle,
			size,
			buffer_type,
		};

		let target = buffer_type.gl_target();
		let usage = if dynamic { gl::DYNAMIC_DRAW } else { gl::STATIC_DRAW };

		api.bind_buffer(target, handle);
		api.buffer_data(target, size, initial, usage);
		ctx.check("Buffer::new")?;

		Ok(buffer)
	}

	pub fn handle(&self) -> Handle {
		self.handle
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn buffer_type(&self) -> BufferType {
		self.buffer_type
	}

	/// Binds this buffer to its type's target. Mutates global driver bind state.
	pub fn bind(&self) -> Result<(), Error> {
		self.ctx.api().bind_buffer(self.buffer_type.gl_target(), self.handle);
		self.ctx.check("Buffer::bind")
	}

	/// Uploads `data` into the existing allocation starting at byte `offset`.
	///
	/// `offset + data.len() <= size` is the caller's contract; a violation is
	/// reported by the driver through the configured check policy.
	pub fn write(&self, data: &[u8], offset: usize) -> Result<(), Error> {
		let target = self.buffer_type.gl_target();
		let api = self.ctx.api();

		api.bind_buffer(target, self.handle);
		api.buffer_sub_data(target, offset, data);
		self.ctx.check("Buffer::write")
	}
}

impl Drop for Buffer {
	fn drop(&mut self) {
		self.ctx.api().delete_buffer(self.handle);
	}
}
