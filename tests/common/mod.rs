#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use modernglpp::{CheckPolicy, Context, DriverError, GlApi, Handle};


/// Every driver call the wrapper can issue, as recorded by [`RecordingGl`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	CreateBuffer(Handle),
	DeleteBuffer(Handle),
	BindBuffer { target: u32, handle: Handle },
	BufferData { target: u32, size: usize, usage: u32, initialized: bool },
	BufferSubData { target: u32, offset: usize, len: usize },

	CreateVertexArray(Handle),
	DeleteVertexArray(Handle),
	BindVertexArray(Handle),
	EnableVertexAttrib(u32),
	VertexAttribPointer { index: u32, components: i32, scalar_type: u32, integer: bool, stride: usize, offset: usize },
	DrawArrays { topology: u32, first: i32, count: i32 },

	CreateTexture(Handle),
	DeleteTexture(Handle),
	BindTexture(Handle),
	ActiveTexture(u32),
	TexImage2d { internal_format: u32, width: i32, height: i32, format: u32, scalar_type: u32, initialized: bool },
	TexSubImage2d { x: i32, y: i32, width: i32, height: i32, format: u32, scalar_type: u32, len: usize },
	TexParameter { parameter: u32, value: u32 },

	CreateShader { handle: Handle, stage: u32 },
	DeleteShader(Handle),
	CompileShader(Handle),
	CreateProgram(Handle),
	DeleteProgram(Handle),
	AttachShader { program: Handle, shader: Handle },
	LinkProgram(Handle),
	UseProgram(Handle),
	UniformLocation { program: Handle, name: String, location: i32 },

	UniformFloats { location: i32, components: u32, data: Vec<f32> },
	UniformInts { location: i32, components: u32, data: Vec<i32> },
	UniformMatrix { location: i32, columns: u32, rows: u32, len: usize },

	Viewport { x: i32, y: i32, width: i32, height: i32 },
	Clear { colour: bool, depth: bool },
}

impl Call {
	/// True for the three typed uniform-upload calls.
	pub fn is_uniform_upload(&self) -> bool {
		matches!(self,
			Call::UniformFloats { .. } | Call::UniformInts { .. } | Call::UniformMatrix { .. })
	}
}


#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Kind {
	Buffer,
	VertexArray,
	Texture,
	Shader,
	Program,
}


#[derive(Debug, Default)]
struct ShaderState {
	stage: u32,
	source: String,
	compiled: bool,
}

#[derive(Debug, Default)]
struct ProgramState {
	// sources are copied at attach time so shader deletion doesn't lose them
	attached_sources: Vec<String>,
	attached_count: usize,
	linked: bool,
}


/// Fake driver: records every call, simulates buffer storage, shader
/// compilation and uniform locations, and raises the polled error flag on
/// out-of-range accesses.
///
/// Shader "compilation" fails when the source contains an `#error` directive.
/// Uniform names resolve to a location when they occur in any attached
/// shader's source, and to the -1 sentinel otherwise.
#[derive(Default)]
pub struct RecordingGl {
	calls: RefCell<Vec<Call>>,
	next_handle: Cell<Handle>,
	next_location: Cell<i32>,
	error_flag: Cell<Option<DriverError>>,

	buffers: RefCell<HashMap<Handle, Vec<u8>>>,
	bound_buffers: RefCell<HashMap<u32, Handle>>,
	shaders: RefCell<HashMap<Handle, ShaderState>>,
	programs: RefCell<HashMap<Handle, ProgramState>>,
	uniform_locations: RefCell<HashMap<(Handle, String), i32>>,

	created: RefCell<Vec<(Kind, Handle)>>,
	deleted: RefCell<Vec<(Kind, Handle)>>,
}

impl RecordingGl {
	/// Fake driver plus a context wrapping it under the given policy.
	pub fn new_context(policy: CheckPolicy) -> (Rc<RecordingGl>, Context) {
		let fake = Rc::new(RecordingGl::default());
		let ctx = Context::with_api(fake.clone(), policy);
		(fake, ctx)
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	pub fn call_count(&self) -> usize {
		self.calls.borrow().len()
	}

	pub fn calls_from(&self, start: usize) -> Vec<Call> {
		self.calls.borrow()[start..].to_vec()
	}

	/// Read-back of a buffer's simulated storage.
	pub fn buffer_contents(&self, handle: Handle) -> Vec<u8> {
		self.buffers.borrow()[&handle].clone()
	}

	pub fn created(&self, kind: Kind) -> Vec<Handle> {
		self.created.borrow().iter()
			.filter(|(k, _)| *k == kind)
			.map(|(_, handle)| *handle)
			.collect()
	}

	pub fn deleted(&self, kind: Kind) -> Vec<Handle> {
		self.deleted.borrow().iter()
			.filter(|(k, _)| *k == kind)
			.map(|(_, handle)| *handle)
			.collect()
	}

	/// Asserts that every created handle of `kind` was deleted exactly once.
	pub fn assert_balanced(&self, kind: Kind) {
		let mut created = self.created(kind);
		let mut deleted = self.deleted(kind);
		created.sort_unstable();
		deleted.sort_unstable();

		assert_eq!(created, deleted, "{kind:?} create/delete mismatch");
	}

	fn record(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}

	fn fresh_handle(&self, kind: Kind) -> Handle {
		let handle = self.next_handle.get() + 1;
		self.next_handle.set(handle);
		self.created.borrow_mut().push((kind, handle));
		handle
	}

	fn raise(&self, error: DriverError) {
		// first error sticks, like the real error flag
		if self.error_flag.get().is_none() {
			self.error_flag.set(Some(error));
		}
	}
}

impl GlApi for RecordingGl {
	fn create_buffer(&self) -> Handle {
		let handle = self.fresh_handle(Kind::Buffer);
		self.buffers.borrow_mut().insert(handle, Vec::new());
		self.record(Call::CreateBuffer(handle));
		handle
	}

	fn delete_buffer(&self, handle: Handle) {
		self.deleted.borrow_mut().push((Kind::Buffer, handle));
		self.buffers.borrow_mut().remove(&handle);
		self.record(Call::DeleteBuffer(handle));
	}

	fn bind_buffer(&self, target: u32, handle: Handle) {
		self.bound_buffers.borrow_mut().insert(target, handle);
		self.record(Call::BindBuffer { target, handle });
	}

	fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32) {
		self.record(Call::BufferData { target, size, usage, initialized: data.is_some() });

		let bound = self.bound_buffers.borrow().get(&target).copied();
		let Some(bound) = bound else {
			self.raise(DriverError::InvalidOperation);
			return;
		};

		let mut buffers = self.buffers.borrow_mut();
		let Some(storage) = buffers.get_mut(&bound) else {
			self.raise(DriverError::InvalidOperation);
			return;
		};

		*storage = vec![0; size];
		if let Some(data) = data {
			if data.len() > size {
				self.raise(DriverError::InvalidValue);
				return;
			}
			storage[..data.len()].copy_from_slice(data);
		}
	}

	fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
		self.record(Call::BufferSubData { target, offset, len: data.len() });

		let bound = self.bound_buffers.borrow().get(&target).copied();
		let Some(bound) = bound else {
			self.raise(DriverError::InvalidOperation);
			return;
		};

		let mut buffers = self.buffers.borrow_mut();
		let Some(storage) = buffers.get_mut(&bound) else {
			self.raise(DriverError::InvalidOperation);
			return;
		};

		if offset + data.len() > storage.len() {
			self.raise(DriverError::InvalidValue);
			return;
		}

		storage[offset..offset + data.len()].copy_from_slice(data);
	}

	fn create_vertex_array(&self) -> Handle {
		let handle = self.fresh_handle(Kind::VertexArray);
		self.record(Call::CreateVertexArray(handle));
		handle
	}

	fn delete_vertex_array(&self, handle: Handle) {
		self.deleted.borrow_mut().push((Kind::VertexArray, handle));
		self.record(Call::DeleteVertexArray(handle));
	}

	fn bind_vertex_array(&self, handle: Handle) {
		self.record(Call::BindVertexArray(handle));
	}

	fn enable_vertex_attrib(&self, index: u32) {
		self.record(Call::EnableVertexAttrib(index));
	}

	fn vertex_attrib_pointer(&self, index: u32, components: i32, scalar_type: u32,
		_normalized: bool, stride: usize, offset: usize)
	{
		self.record(Call::VertexAttribPointer {
			index, components, scalar_type, integer: false, stride, offset,
		});
	}

	fn vertex_attrib_int_pointer(&self, index: u32, components: i32, scalar_type: u32,
		stride: usize, offset: usize)
	{
		self.record(Call::VertexAttribPointer {
			index, components, scalar_type, integer: true, stride, offset,
		});
	}

	fn draw_arrays(&self, topology: u32, first: i32, count: i32) {
		self.record(Call::DrawArrays { topology, first, count });
	}

	fn create_texture(&self) -> Handle {
		let handle = self.fresh_handle(Kind::Texture);
		self.record(Call::CreateTexture(handle));
		handle
	}

	fn delete_texture(&self, handle: Handle) {
		self.deleted.borrow_mut().push((Kind::Texture, handle));
		self.record(Call::DeleteTexture(handle));
	}

	fn bind_texture(&self, handle: Handle) {
		self.record(Call::BindTexture(handle));
	}

	fn active_texture(&self, unit: u32) {
		self.record(Call::ActiveTexture(unit));
	}

	fn tex_image_2d(&self, internal_format: u32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: Option<&[u8]>)
	{
		self.record(Call::TexImage2d {
			internal_format, width, height, format, scalar_type,
			initialized: data.is_some(),
		});
	}

	fn tex_sub_image_2d(&self, x: i32, y: i32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: &[u8])
	{
		self.record(Call::TexSubImage2d { x, y, width, height, format, scalar_type, len: data.len() });
	}

	fn tex_parameter(&self, parameter: u32, value: u32) {
		self.record(Call::TexParameter { parameter, value });
	}

	fn create_shader(&self, stage: u32) -> Handle {
		let handle = self.fresh_handle(Kind::Shader);
		self.shaders.borrow_mut().insert(handle, ShaderState { stage, ..ShaderState::default() });
		self.record(Call::CreateShader { handle, stage });
		handle
	}

	fn delete_shader(&self, handle: Handle) {
		self.deleted.borrow_mut().push((Kind::Shader, handle));
		self.shaders.borrow_mut().remove(&handle);
		self.record(Call::DeleteShader(handle));
	}

	fn shader_source(&self, handle: Handle, source: &str) {
		if let Some(shader) = self.shaders.borrow_mut().get_mut(&handle) {
			shader.source = source.to_owned();
		}
	}

	fn compile_shader(&self, handle: Handle) {
		self.record(Call::CompileShader(handle));

		if let Some(shader) = self.shaders.borrow_mut().get_mut(&handle) {
			shader.compiled = !shader.source.contains("#error");
		}
	}

	fn shader_compile_status(&self, handle: Handle) -> bool {
		self.shaders.borrow().get(&handle).map_or(false, |shader| shader.compiled)
	}

	fn shader_info_log(&self, handle: Handle) -> String {
		match self.shaders.borrow().get(&handle) {
			Some(shader) if !shader.compiled => "0:1: error: #error directive encountered".to_owned(),
			_ => String::new(),
		}
	}

	fn create_program(&self) -> Handle {
		let handle = self.fresh_handle(Kind::Program);
		self.programs.borrow_mut().insert(handle, ProgramState::default());
		self.record(Call::CreateProgram(handle));
		handle
	}

	fn delete_program(&self, handle: Handle) {
		self.deleted.borrow_mut().push((Kind::Program, handle));
		self.programs.borrow_mut().remove(&handle);
		self.record(Call::DeleteProgram(handle));
	}

	fn attach_shader(&self, program: Handle, shader: Handle) {
		self.record(Call::AttachShader { program, shader });

		let source = self.shaders.borrow().get(&shader).map(|shader| shader.source.clone());

		let mut programs = self.programs.borrow_mut();
		if let Some(state) = programs.get_mut(&program) {
			state.attached_count += 1;
			if let Some(source) = source {
				state.attached_sources.push(source);
			}
		}
	}

	fn link_program(&self, handle: Handle) {
		self.record(Call::LinkProgram(handle));

		if let Some(program) = self.programs.borrow_mut().get_mut(&handle) {
			program.linked = program.attached_count >= 2;
		}
	}

	fn program_link_status(&self, handle: Handle) -> bool {
		self.programs.borrow().get(&handle).map_or(false, |program| program.linked)
	}

	fn program_info_log(&self, handle: Handle) -> String {
		match self.programs.borrow().get(&handle) {
			Some(program) if !program.linked => "error: program requires both stages".to_owned(),
			_ => String::new(),
		}
	}

	fn use_program(&self, handle: Handle) {
		self.record(Call::UseProgram(handle));
	}

	fn uniform_location(&self, program: Handle, name: &str) -> i32 {
		let known = self.programs.borrow().get(&program).map_or(false,
			|state| state.attached_sources.iter().any(|source| source.contains(name)));

		let location = if known {
			*self.uniform_locations.borrow_mut()
				.entry((program, name.to_owned()))
				.or_insert_with(|| {
					let location = self.next_location.get();
					self.next_location.set(location + 1);
					location
				})
		} else {
			-1
		};

		self.record(Call::UniformLocation { program, name: name.to_owned(), location });
		location
	}

	fn uniform_floats(&self, location: i32, components: u32, data: &[f32]) {
		self.record(Call::UniformFloats { location, components, data: data.to_vec() });
	}

	fn uniform_ints(&self, location: i32, components: u32, data: &[i32]) {
		self.record(Call::UniformInts { location, components, data: data.to_vec() });
	}

	fn uniform_matrix(&self, location: i32, columns: u32, rows: u32, data: &[f32]) {
		self.record(Call::UniformMatrix { location, columns, rows, len: data.len() });
	}

	fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
		self.record(Call::Viewport { x, y, width, height });
	}

	fn clear(&self, _r: f32, _g: f32, _b: f32, colour: bool, depth: bool) {
		self.record(Call::Clear { colour, depth });
	}

	fn poll_error(&self) -> Option<DriverError> {
		self.error_flag.take()
	}
}
