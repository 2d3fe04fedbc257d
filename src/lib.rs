//! Thin, type-safe wrapper around the OpenGL driver API.
//!
//! Each wrapper object owns exactly one driver handle and releases it on drop;
//! shader inputs are set through compile-time typed dispatch
//! ([`AttributeValue`], [`UniformValue`]). All driver traffic goes through the
//! [`GlApi`] trait held by a [`Context`], so the whole wrapper runs unmodified
//! against a fake driver in tests.
//!
//! The driver context is implicit global mutable state owned by the calling
//! thread: bind/use calls sequence by call order, and nothing here is safe to
//! share across threads.

pub mod api;
pub mod attribute;
pub mod buffer;
pub mod context;
pub mod error;
pub mod program;
pub mod sampler;
pub mod texture;
pub mod uniform;
pub mod vertex_array;

pub use api::{GlApi, Handle, RawGl};
pub use attribute::{attribute, AttributeValue};
pub use buffer::{as_bytes, Buffer, BufferType};
pub use context::{CheckPolicy, Context};
pub use error::{DriverError, Error};
pub use program::{Program, ShaderStage, UniformSetter};
pub use sampler::Sampler;
pub use texture::{
	DataType, FilterMode, Texture, TextureFilter, TextureFormat,
	TextureOptions, TextureSource, TextureWrap, WrapMode,
};
pub use uniform::UniformValue;
pub use vertex_array::{DrawMode, VertexArray};
