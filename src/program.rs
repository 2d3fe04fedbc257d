use crate::api::{GlApi, Handle};
use crate::context::Context;
use crate::error::Error;
use crate::uniform::UniformValue;


#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ShaderStage {
	Vertex,
	Fragment,
}

impl ShaderStage {
	pub fn gl_stage(self) -> u32 {
		match self {
			ShaderStage::Vertex => gl::VERTEX_SHADER,
			ShaderStage::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

impl std::fmt::Display for ShaderStage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ShaderStage::Vertex => "vertex",
			ShaderStage::Fragment => "fragment",
		})
	}
}


fn compile_stage(api: &dyn GlApi, stage: ShaderStage, source: &str) -> Result<Handle, Error> {
	let shader = api.create_shader(stage.gl_stage());

	api.shader_source(shader, source);
	api.compile_shader(shader);

	if !api.shader_compile_status(shader) {
		let log = api.shader_info_log(shader);
		api.delete_shader(shader);
		return Err(Error::ShaderCompile { stage, log });
	}

	Ok(shader)
}


/// One linked shader program. Owns its handle; released on drop.
#[derive(Debug)]
pub struct Program {
	ctx: Context,
	handle: Handle,
}

impl Program {
	/// Compiles both stages and links them.
	///
	/// This is the one data-dependent failure in the wrapper: bad shader source
	/// comes from the caller, so compile and link failures are reported through
	/// the error value, diagnostic log included, rather than the check policy.
	pub fn new(ctx: &Context, vertex_source: &str, fragment_source: &str) -> Result<Program, Error> {
		let api = ctx.api();

		let vertex = compile_stage(api, ShaderStage::Vertex, vertex_source)?;
		let fragment = match compile_stage(api, ShaderStage::Fragment, fragment_source) {
			Ok(fragment) => fragment,
			Err(error) => {
				api.delete_shader(vertex);
				return Err(error);
			}
		};

		let handle = api.create_program();
		api.attach_shader(handle, vertex);
		api.attach_shader(handle, fragment);
		api.delete_shader(vertex);
		api.delete_shader(fragment);
		api.link_program(handle);

		if !api.program_link_status(handle) {
			let log = api.program_info_log(handle);
			api.delete_program(handle);
			return Err(Error::ProgramLink { log });
		}

		let program = Program {
			ctx: ctx.clone(),
			handle,
		};

		ctx.check("Program::new")?;
		log::debug!("linked program {}", program.handle);

		Ok(program)
	}

	pub fn handle(&self) -> Handle {
		self.handle
	}

	/// Makes this program active for subsequent draws. Global driver state.
	pub fn use_program(&self) {
		self.ctx.api().use_program(self.handle);
	}

	/// Looks up a uniform location by name - re-queried on every call, never
	/// cached - and returns an ephemeral setter bound to it.
	///
	/// A name the program does not know yields the driver's sentinel location;
	/// setting through it is a silent no-op.
	pub fn uniform<'p>(&'p self, name: &str) -> UniformSetter<'p> {
		let location = self.ctx.api().uniform_location(self.handle, name);

		if location < 0 {
			log::debug!("uniform '{name}' not found in program {}", self.handle);
		}

		UniformSetter { program: self, location }
	}
}

impl Drop for Program {
	fn drop(&mut self) {
		self.ctx.api().delete_program(self.handle);
	}
}


/// Ephemeral binding of a program and a uniform location.
///
/// Constructed by [`Program::uniform`] and discarded after one assignment.
#[derive(Debug)]
pub struct UniformSetter<'p> {
	program: &'p Program,
	location: i32,
}

impl UniformSetter<'_> {
	pub fn location(&self) -> i32 {
		self.location
	}

	/// Uploads `value` to the bound location. The driver call is selected by
	/// the value's type at compile time; see [`UniformValue`].
	pub fn set<T: UniformValue>(&self, value: T) -> Result<(), Error> {
		value.apply(self.program.ctx.api(), self.location);
		self.program.ctx.check("UniformSetter::set")
	}
}
