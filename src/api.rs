use crate::error::DriverError;


/// Opaque driver-side resource name. Only meaningful to the driver that issued it.
pub type Handle = u32;


/// The fixed set of driver calls the wrapper layer is built on.
///
/// Everything in this crate talks to the driver through a `dyn GlApi`, so tests
/// can substitute a recording fake for the real thing. Enum values crossing this
/// boundary are raw GL constants - translation from wrapper enums happens in the
/// resource modules.
pub trait GlApi {
	// Buffers
	fn create_buffer(&self) -> Handle;
	fn delete_buffer(&self, handle: Handle);
	fn bind_buffer(&self, target: u32, handle: Handle);
	fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32);
	fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]);

	// Vertex arrays
	fn create_vertex_array(&self) -> Handle;
	fn delete_vertex_array(&self, handle: Handle);
	fn bind_vertex_array(&self, handle: Handle);
	fn enable_vertex_attrib(&self, index: u32);
	fn vertex_attrib_pointer(&self, index: u32, components: i32, scalar_type: u32,
		normalized: bool, stride: usize, offset: usize);
	fn vertex_attrib_int_pointer(&self, index: u32, components: i32, scalar_type: u32,
		stride: usize, offset: usize);
	fn draw_arrays(&self, topology: u32, first: i32, count: i32);

	// Textures
	fn create_texture(&self) -> Handle;
	fn delete_texture(&self, handle: Handle);
	fn bind_texture(&self, handle: Handle);
	fn active_texture(&self, unit: u32);
	fn tex_image_2d(&self, internal_format: u32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: Option<&[u8]>);
	fn tex_sub_image_2d(&self, x: i32, y: i32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: &[u8]);
	fn tex_parameter(&self, parameter: u32, value: u32);

	// Shaders and programs
	fn create_shader(&self, stage: u32) -> Handle;
	fn delete_shader(&self, handle: Handle);
	fn shader_source(&self, handle: Handle, source: &str);
	fn compile_shader(&self, handle: Handle);
	fn shader_compile_status(&self, handle: Handle) -> bool;
	fn shader_info_log(&self, handle: Handle) -> String;
	fn create_program(&self) -> Handle;
	fn delete_program(&self, handle: Handle);
	fn attach_shader(&self, program: Handle, shader: Handle);
	fn link_program(&self, handle: Handle);
	fn program_link_status(&self, handle: Handle) -> bool;
	fn program_info_log(&self, handle: Handle) -> String;
	fn use_program(&self, handle: Handle);
	fn uniform_location(&self, program: Handle, name: &str) -> i32;

	// Uniform uploads - exactly one driver call per upload
	fn uniform_floats(&self, location: i32, components: u32, data: &[f32]);
	fn uniform_ints(&self, location: i32, components: u32, data: &[i32]);
	fn uniform_matrix(&self, location: i32, columns: u32, rows: u32, data: &[f32]);

	// Frame state
	fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
	fn clear(&self, r: f32, g: f32, b: f32, colour: bool, depth: bool);

	// Diagnostics
	fn poll_error(&self) -> Option<DriverError>;
}


/// Production [`GlApi`] forwarding straight to the loaded GL function table.
///
/// The function table must have been loaded (see [`crate::Context::load`])
/// before any method is called; that precondition is not checked here.
#[derive(Debug, Default)]
pub struct RawGl;

impl GlApi for RawGl {
	fn create_buffer(&self) -> Handle {
		let mut handle = 0;
		unsafe { gl::GenBuffers(1, &mut handle) };
		handle
	}

	fn delete_buffer(&self, handle: Handle) {
		unsafe { gl::DeleteBuffers(1, &handle) };
	}

	fn bind_buffer(&self, target: u32, handle: Handle) {
		unsafe { gl::BindBuffer(target, handle) };
	}

	fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32) {
		let ptr = data.map_or(std::ptr::null(), <[u8]>::as_ptr);
		unsafe { gl::BufferData(target, size as isize, ptr as *const _, usage) };
	}

	fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
		unsafe {
			gl::BufferSubData(target, offset as isize, data.len() as isize, data.as_ptr() as *const _);
		}
	}

	fn create_vertex_array(&self) -> Handle {
		let mut handle = 0;
		unsafe { gl::GenVertexArrays(1, &mut handle) };
		handle
	}

	fn delete_vertex_array(&self, handle: Handle) {
		unsafe { gl::DeleteVertexArrays(1, &handle) };
	}

	fn bind_vertex_array(&self, handle: Handle) {
		unsafe { gl::BindVertexArray(handle) };
	}

	fn enable_vertex_attrib(&self, index: u32) {
		unsafe { gl::EnableVertexAttribArray(index) };
	}

	fn vertex_attrib_pointer(&self, index: u32, components: i32, scalar_type: u32,
		normalized: bool, stride: usize, offset: usize)
	{
		unsafe {
			gl::VertexAttribPointer(index, components, scalar_type,
				normalized as u8, stride as i32, offset as *const _);
		}
	}

	fn vertex_attrib_int_pointer(&self, index: u32, components: i32, scalar_type: u32,
		stride: usize, offset: usize)
	{
		unsafe {
			gl::VertexAttribIPointer(index, components, scalar_type, stride as i32, offset as *const _);
		}
	}

	fn draw_arrays(&self, topology: u32, first: i32, count: i32) {
		unsafe { gl::DrawArrays(topology, first, count) };
	}

	fn create_texture(&self) -> Handle {
		let mut handle = 0;
		unsafe { gl::GenTextures(1, &mut handle) };
		handle
	}

	fn delete_texture(&self, handle: Handle) {
		unsafe { gl::DeleteTextures(1, &handle) };
	}

	fn bind_texture(&self, handle: Handle) {
		unsafe { gl::BindTexture(gl::TEXTURE_2D, handle) };
	}

	fn active_texture(&self, unit: u32) {
		unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) };
	}

	fn tex_image_2d(&self, internal_format: u32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: Option<&[u8]>)
	{
		let ptr = data.map_or(std::ptr::null(), <[u8]>::as_ptr);
		unsafe {
			gl::TexImage2D(gl::TEXTURE_2D, 0, internal_format as i32, width, height, 0,
				format, scalar_type, ptr as *const _);
		}
	}

	fn tex_sub_image_2d(&self, x: i32, y: i32, width: i32, height: i32,
		format: u32, scalar_type: u32, data: &[u8])
	{
		unsafe {
			gl::TexSubImage2D(gl::TEXTURE_2D, 0, x, y, width, height,
				format, scalar_type, data.as_ptr() as *const _);
		}
	}

	fn tex_parameter(&self, parameter: u32, value: u32) {
		unsafe { gl::TexParameteri(gl::TEXTURE_2D, parameter, value as i32) };
	}

	fn create_shader(&self, stage: u32) -> Handle {
		unsafe { gl::CreateShader(stage) }
	}

	fn delete_shader(&self, handle: Handle) {
		unsafe { gl::DeleteShader(handle) };
	}

	fn shader_source(&self, handle: Handle, source: &str) {
		let ptr = source.as_ptr() as *const i8;
		let len = source.len() as i32;
		unsafe { gl::ShaderSource(handle, 1, &ptr, &len) };
	}

	fn compile_shader(&self, handle: Handle) {
		unsafe { gl::CompileShader(handle) };
	}

	fn shader_compile_status(&self, handle: Handle) -> bool {
		let mut status = 0;
		unsafe { gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut status) };
		status != 0
	}

	fn shader_info_log(&self, handle: Handle) -> String {
		let mut log_len = 0;
		unsafe { gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len) };

		let mut log = vec![0u8; log_len.max(0) as usize];
		let mut written = 0;
		unsafe {
			gl::GetShaderInfoLog(handle, log.len() as i32, &mut written, log.as_mut_ptr() as *mut _);
		}

		log.truncate(written.max(0) as usize);
		String::from_utf8_lossy(&log).into_owned()
	}

	fn create_program(&self) -> Handle {
		unsafe { gl::CreateProgram() }
	}

	fn delete_program(&self, handle: Handle) {
		unsafe { gl::DeleteProgram(handle) };
	}

	fn attach_shader(&self, program: Handle, shader: Handle) {
		unsafe { gl::AttachShader(program, shader) };
	}

	fn link_program(&self, handle: Handle) {
		unsafe { gl::LinkProgram(handle) };
	}

	fn program_link_status(&self, handle: Handle) -> bool {
		let mut status = 0;
		unsafe { gl::GetProgramiv(handle, gl::LINK_STATUS, &mut status) };
		status != 0
	}

	fn program_info_log(&self, handle: Handle) -> String {
		let mut log_len = 0;
		unsafe { gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len) };

		let mut log = vec![0u8; log_len.max(0) as usize];
		let mut written = 0;
		unsafe {
			gl::GetProgramInfoLog(handle, log.len() as i32, &mut written, log.as_mut_ptr() as *mut _);
		}

		log.truncate(written.max(0) as usize);
		String::from_utf8_lossy(&log).into_owned()
	}

	fn use_program(&self, handle: Handle) {
		unsafe { gl::UseProgram(handle) };
	}

	fn uniform_location(&self, program: Handle, name: &str) -> i32 {
		match std::ffi::CString::new(name) {
			Ok(name) => unsafe { gl::GetUniformLocation(program, name.as_ptr()) },
			Err(_) => -1,
		}
	}

	fn uniform_floats(&self, location: i32, components: u32, data: &[f32]) {
		debug_assert_eq!(data.len(), components as usize, "wrong element count for float{components} uniform");

		unsafe {
			match components {
				1 => gl::Uniform1fv(location, 1, data.as_ptr()),
				2 => gl::Uniform2fv(location, 1, data.as_ptr()),
				3 => gl::Uniform3fv(location, 1, data.as_ptr()),
				4 => gl::Uniform4fv(location, 1, data.as_ptr()),
				_ => unreachable!("unsupported float uniform arity {components}"),
			}
		}
	}

	fn uniform_ints(&self, location: i32, components: u32, data: &[i32]) {
		debug_assert_eq!(data.len(), components as usize, "wrong element count for int{components} uniform");

		unsafe {
			match components {
				1 => gl::Uniform1iv(location, 1, data.as_ptr()),
				2 => gl::Uniform2iv(location, 1, data.as_ptr()),
				3 => gl::Uniform3iv(location, 1, data.as_ptr()),
				4 => gl::Uniform4iv(location, 1, data.as_ptr()),
				_ => unreachable!("unsupported int uniform arity {components}"),
			}
		}
	}

	fn uniform_matrix(&self, location: i32, columns: u32, rows: u32, data: &[f32]) {
		debug_assert_eq!(data.len(), (columns * rows) as usize, "wrong element count for {columns}x{rows} matrix uniform");

		unsafe {
			match (columns, rows) {
				(3, 2) => gl::UniformMatrix3x2fv(location, 1, gl::FALSE, data.as_ptr()),
				(3, 3) => gl::UniformMatrix3fv(location, 1, gl::FALSE, data.as_ptr()),
				(4, 2) => gl::UniformMatrix4x2fv(location, 1, gl::FALSE, data.as_ptr()),
				(4, 3) => gl::UniformMatrix4x3fv(location, 1, gl::FALSE, data.as_ptr()),
				(4, 4) => gl::UniformMatrix4fv(location, 1, gl::FALSE, data.as_ptr()),
				_ => unreachable!("unsupported matrix uniform shape {columns}x{rows}"),
			}
		}
	}

	fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
		unsafe { gl::Viewport(x, y, width, height) };
	}

	fn clear(&self, r: f32, g: f32, b: f32, colour: bool, depth: bool) {
		let mut mask = 0;
		if colour {
			mask |= gl::COLOR_BUFFER_BIT;
		}
		if depth {
			mask |= gl::DEPTH_BUFFER_BIT;
		}

		unsafe {
			gl::ClearColor(r, g, b, 1.0);
			gl::Clear(mask);
		}
	}

	fn poll_error(&self) -> Option<DriverError> {
		match unsafe { gl::GetError() } {
			gl::INVALID_ENUM => Some(DriverError::InvalidEnum),
			gl::INVALID_VALUE => Some(DriverError::InvalidValue),
			gl::INVALID_OPERATION => Some(DriverError::InvalidOperation),
			gl::OUT_OF_MEMORY => Some(DriverError::OutOfMemory),
			_ => None,
		}
	}
}
