use crate::api::Handle;
use crate::context::Context;
use crate::error::Error;


/// Scalar type of host-side pixel data.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum DataType {
	Float,
	Byte,
}

impl DataType {
	pub fn gl_scalar(self) -> u32 {
		match self {
			DataType::Float => gl::FLOAT,
			DataType::Byte => gl::UNSIGNED_BYTE,
		}
	}
}


/// Channel layouts, both unsized base forms and sized device formats.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum TextureFormat {
	Red, Rg, Rgb, Rgba, Bgr, Bgra,
	R8, Rg8, Rgb8, Rgba8,
	R32f, Rg32f, Rgb32f, Rgba32f,
}

impl TextureFormat {
	pub fn gl_format(self) -> u32 {
		match self {
			TextureFormat::Red => gl::RED,
			TextureFormat::Rg => gl::RG,
			TextureFormat::Rgb => gl::RGB,
			TextureFormat::Rgba => gl::RGBA,
			TextureFormat::Bgr => gl::BGR,
			TextureFormat::Bgra => gl::BGRA,
			TextureFormat::R8 => gl::R8,
			TextureFormat::Rg8 => gl::RG8,
			TextureFormat::Rgb8 => gl::RGB8,
			TextureFormat::Rgba8 => gl::RGBA8,
			TextureFormat::R32f => gl::R32F,
			TextureFormat::Rg32f => gl::RG32F,
			TextureFormat::Rgb32f => gl::RGB32F,
			TextureFormat::Rgba32f => gl::RGBA32F,
		}
	}

	/// Reduces a sized device format to its base channel layout - the form the
	/// data-upload calls require regardless of storage format.
	pub fn base(self) -> TextureFormat {
		match self {
			TextureFormat::R8 | TextureFormat::R32f => TextureFormat::Red,
			TextureFormat::Rg8 | TextureFormat::Rg32f => TextureFormat::Rg,
			TextureFormat::Rgb8 | TextureFormat::Rgb32f => TextureFormat::Rgb,
			TextureFormat::Rgba8 | TextureFormat::Rgba32f => TextureFormat::Rgba,
			base => base,
		}
	}
}


#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum FilterMode {
	Nearest,
	Linear,
}

impl FilterMode {
	pub fn gl_filter(self) -> u32 {
		match self {
			FilterMode::Nearest => gl::NEAREST,
			FilterMode::Linear => gl::LINEAR,
		}
	}
}


#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum WrapMode {
	ClampToEdge,
	ClampToBorder,
	MirroredRepeat,
	Repeat,
	MirrorClampToEdge,
}

impl WrapMode {
	pub fn gl_wrap(self) -> u32 {
		match self {
			WrapMode::ClampToEdge => gl::CLAMP_TO_EDGE,
			WrapMode::ClampToBorder => gl::CLAMP_TO_BORDER,
			WrapMode::MirroredRepeat => gl::MIRRORED_REPEAT,
			WrapMode::Repeat => gl::REPEAT,
			WrapMode::MirrorClampToEdge => gl::MIRROR_CLAMP_TO_EDGE,
		}
	}
}


#[derive(Debug, Copy, Clone)]
pub struct TextureFilter {
	pub min: FilterMode,
	pub mag: FilterMode,
}

#[derive(Debug, Copy, Clone)]
pub struct TextureWrap {
	pub s: WrapMode,
	pub t: WrapMode,
	pub r: WrapMode,
}

#[derive(Debug, Copy, Clone)]
pub struct TextureOptions {
	pub filter: TextureFilter,
	pub wrap: TextureWrap,
}

impl Default for TextureOptions {
	fn default() -> TextureOptions {
		TextureOptions {
			filter: TextureFilter { min: FilterMode::Linear, mag: FilterMode::Linear },
			wrap: TextureWrap { s: WrapMode::Repeat, t: WrapMode::Repeat, r: WrapMode::Repeat },
		}
	}
}


/// Host pixel data for the initial texture upload.
#[derive(Debug, Copy, Clone)]
pub struct TextureSource<'a> {
	pub format: TextureFormat,
	pub data_type: DataType,
	pub data: &'a [u8],
}


/// One driver 2D texture. Owns its handle; released on drop.
///
/// The device format is recorded so sub-rectangle writes can reconstruct the
/// correct upload call.
#[derive(Debug)]
pub struct Texture {
	ctx: Context,
	handle: Handle,
	format: TextureFormat,
}

impl Texture {
	/// Allocates a `width` x `height` texture stored as `device_format`.
	///
	/// With a `source`, the texture is initialized from its data; without one,
	/// storage is reserved uninitialized.
	pub fn new(ctx: &Context, width: i32, height: i32, device_format: TextureFormat,
		source: Option<TextureSource<'_>>) -> Result<Texture, Error>
	{
		let api = ctx.api();
		let handle = api.create_texture();

		let texture = Texture {
			ctx: ctx.clone(),
			handle,
			format: device_format,
		};

		api.bind_texture(handle);

		match source {
			Some(source) => {
				api.tex_image_2d(device_format.gl_format(), width, height,
					source.format.base().gl_format(), source.data_type.gl_scalar(), Some(source.data));
			}

			None => {
				api.tex_image_2d(device_format.gl_format(), width, height,
					device_format.base().gl_format(), DataType::Byte.gl_scalar(), None);
			}
		}

		ctx.check("Texture::new")?;

		Ok(texture)
	}

	pub fn handle(&self) -> Handle {
		self.handle
	}

	pub fn format(&self) -> TextureFormat {
		self.format
	}

	/// Uploads a sub-rectangle from `data`, interpreted as `data_type` scalars
	/// laid out in this texture's base channel layout.
	pub fn write(&self, x: i32, y: i32, width: i32, height: i32,
		data_type: DataType, data: &[u8]) -> Result<(), Error>
	{
		let api = self.ctx.api();

		api.bind_texture(self.handle);
		api.tex_sub_image_2d(x, y, width, height,
			self.format.base().gl_format(), data_type.gl_scalar(), data);
		self.ctx.check("Texture::write")
	}

	/// Sets min/mag filtering and S/T/R wrap modes.
	pub fn set_options(&self, options: TextureOptions) -> Result<(), Error> {
		let api = self.ctx.api();

		api.bind_texture(self.handle);
		api.tex_parameter(gl::TEXTURE_MIN_FILTER, options.filter.min.gl_filter());
		api.tex_parameter(gl::TEXTURE_MAG_FILTER, options.filter.mag.gl_filter());
		api.tex_parameter(gl::TEXTURE_WRAP_S, options.wrap.s.gl_wrap());
		api.tex_parameter(gl::TEXTURE_WRAP_T, options.wrap.t.gl_wrap());
		api.tex_parameter(gl::TEXTURE_WRAP_R, options.wrap.r.gl_wrap());
		self.ctx.check("Texture::set_options")
	}
}

impl Drop for Texture {
	fn drop(&mut self) {
		self.ctx.api().delete_texture(self.handle);
	}
}
