use std::ffi::CString;
use std::num::NonZeroU32;

use anyhow::Context as _;
use glam::{Mat4, Vec2};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::SwapInterval;
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use modernglpp::*;


const VERTEX_SRC: &str = r#"
	#version 410

	layout(location = 0) in vec2 vertex_position;

	uniform mat4 matrix;

	void main() {
		gl_Position = matrix * vec4(vertex_position, 0.0, 1.0);
	}
"#;

const FRAGMENT_SRC: &str = r#"
	#version 410

	uniform sampler2D sampler1;

	out vec4 frag_colour;

	void main() {
		frag_colour = vec4(texture(sampler1, vec2(0.0, 0.0)).rgb, 1.0);
	}
"#;


#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct Vertex {
	position: Vec2,
}


struct ConsoleLogger;

impl log::Log for ConsoleLogger {
	fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &log::Record<'_>) {
		if self.enabled(record.metadata()) {
			println!("[{} > {}] {}", record.target(), record.level(), record.args());
		}
	}

	fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;


fn main() -> anyhow::Result<()> {
	log::set_logger(&LOGGER).ok();
	log::set_max_level(log::LevelFilter::Debug);

	let event_loop = EventLoop::new();

	let window_builder = WindowBuilder::new()
		.with_title("modernglpp")
		.with_inner_size(LogicalSize::new(1280.0, 720.0));

	let template = ConfigTemplateBuilder::new();
	let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

	let (window, gl_config) = display_builder
		.build(&event_loop, template, |mut configs| configs.next().unwrap())
		.map_err(|error| anyhow::anyhow!("failed to create window: {error}"))?;

	let window = window.context("no window was created")?;
	let gl_display = gl_config.display();

	let context_attributes = ContextAttributesBuilder::new()
		.with_context_api(ContextApi::OpenGl(Some(Version::new(4, 1))))
		.build(Some(window.raw_window_handle()));

	let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

	let surface_attributes = window.build_surface_attributes(<_>::default());
	let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

	let gl_context = not_current.make_current(&surface)?;
	surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::new(1).unwrap()))?;

	let ctx = Context::load(|symbol| {
		let symbol = CString::new(symbol).unwrap();
		gl_display.get_proc_address(&symbol)
	});

	let vertices = [
		Vertex { position: Vec2::new(-1.0, -1.0) },
		Vertex { position: Vec2::new(1.0, -1.0) },
		Vertex { position: Vec2::new(0.0, 1.0) },
	];

	let vbo = Buffer::new(&ctx, BufferType::Array, 4096, None, true)?;
	vbo.write(as_bytes(&vertices), 0)?;

	let vao = VertexArray::new(&ctx, vec![vbo], |ctx, buffers| {
		// position
		buffers[0].bind()?;
		attribute::<Vec2>(ctx, 0, std::mem::size_of::<Vertex>(), 0)
	})?;

	let pixel = [0xFF, 0x00, 0xFF, 0xFF];
	let texture = Texture::new(&ctx, 1, 1, TextureFormat::Rgb32f, Some(TextureSource {
		format: TextureFormat::Rgb,
		data_type: DataType::Byte,
		data: &pixel,
	}))?;

	texture.set_options(TextureOptions {
		filter: TextureFilter { min: FilterMode::Nearest, mag: FilterMode::Nearest },
		wrap: TextureWrap { s: WrapMode::ClampToEdge, t: WrapMode::ClampToEdge, r: WrapMode::ClampToEdge },
	})?;

	let program = Program::new(&ctx, VERTEX_SRC, FRAGMENT_SRC)?;

	event_loop.run(move |event, _, control_flow| {
		*control_flow = ControlFlow::Poll;

		match event {
			Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
				*control_flow = ControlFlow::Exit;
			}

			Event::WindowEvent { event: WindowEvent::KeyboardInput { input, .. }, .. } => {
				if input.state == ElementState::Pressed
					&& input.virtual_keycode == Some(VirtualKeyCode::Escape)
				{
					*control_flow = ControlFlow::Exit;
				}
			}

			Event::WindowEvent { event: WindowEvent::Resized(size), .. } => {
				if size.width != 0 && size.height != 0 {
					surface.resize(&gl_context,
						NonZeroU32::new(size.width).unwrap(),
						NonZeroU32::new(size.height).unwrap());
				}
			}

			Event::MainEventsCleared => {
				let size = window.inner_size();

				if let Err(error) = render(&ctx, &vao, &texture, &program,
					size.width as i32, size.height as i32)
				{
					log::error!("render failed: {error}");
					*control_flow = ControlFlow::Exit;
					return;
				}

				surface.swap_buffers(&gl_context).unwrap();
			}

			_ => {}
		}
	})
}

fn render(ctx: &Context, vao: &VertexArray, texture: &Texture, program: &Program,
	width: i32, height: i32) -> Result<(), Error>
{
	ctx.viewport(0, 0, width, height);
	ctx.clear(0.1, 0.1, 0.1, true, true);

	let mut sampler = Sampler::new(ctx, 0);
	sampler.set_texture(texture);

	vao.bind()?;
	sampler.bind()?;
	program.use_program();

	program.uniform("sampler1").set(&sampler)?;
	program.uniform("matrix").set(Mat4::IDENTITY)?;

	vao.draw(DrawMode::Triangles, 0, 3)
}
