use crate::context::Context;
use crate::error::Error;
use crate::texture::Texture;


/// Host-side pairing of a fixed texture unit with a texture reference.
///
/// Not a driver resource: there is no handle to own. The texture reference is
/// non-owning, and the borrow keeps a sampler from outliving its texture.
#[derive(Debug, Clone)]
pub struct Sampler<'t> {
	ctx: Context,
	unit: u32,
	texture: Option<&'t Texture>,
}

impl<'t> Sampler<'t> {
	pub fn new(ctx: &Context, unit: u32) -> Sampler<'t> {
		Sampler {
			ctx: ctx.clone(),
			unit,
			texture: None,
		}
	}

	pub fn unit(&self) -> u32 {
		self.unit
	}

	pub fn texture(&self) -> Option<&'t Texture> {
		self.texture
	}

	pub fn set_texture(&mut self, texture: &'t Texture) {
		self.texture = Some(texture);
	}

	pub fn clear_texture(&mut self) {
		self.texture = None;
	}

	/// Selects this sampler's texture unit and binds the referenced texture,
	/// or unbinds (handle 0) when no texture is set.
	pub fn bind(&self) -> Result<(), Error> {
		let api = self.ctx.api();

		api.active_texture(self.unit);
		api.bind_texture(self.texture.map_or(0, Texture::handle));
		self.ctx.check("Sampler::bind")
	}
}
