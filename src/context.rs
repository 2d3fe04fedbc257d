use std::rc::Rc;

use crate::api::{GlApi, RawGl};
use crate::error::Error;


/// What to do with the driver's polled error flag after a state-mutating call.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CheckPolicy {
	/// Never poll. Driver errors go unnoticed.
	Disabled,

	/// Poll and panic on error. Development default.
	Panic,

	/// Poll and hand the error back to the caller.
	Propagate,
}

impl CheckPolicy {
	pub fn default_for_build() -> CheckPolicy {
		if cfg!(debug_assertions) {
			CheckPolicy::Panic
		} else {
			CheckPolicy::Disabled
		}
	}
}


/// Handle to a loaded driver plus the error-check policy.
///
/// Every wrapper object keeps a clone so it can release its driver handle on
/// drop. Clones are cheap and all share the same driver. The driver context is
/// single-threaded; `Context` is deliberately neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct Context {
	api: Rc<dyn GlApi>,
	policy: CheckPolicy,
}

impl Context {
	/// Loads the driver function table through `loader` and wraps it.
	///
	/// Call once, after the windowing collaborator has made a GL context
	/// current on this thread.
	pub fn load<F>(mut loader: F) -> Context
		where F: FnMut(&str) -> *const std::ffi::c_void
	{
		gl::load_with(|symbol| loader(symbol));
		log::info!("loaded driver function table");

		Context::with_api(Rc::new(RawGl), CheckPolicy::default_for_build())
	}

	/// Wraps an already-constructed driver. This is how tests inject a fake.
	pub fn with_api(api: Rc<dyn GlApi>, policy: CheckPolicy) -> Context {
		Context { api, policy }
	}

	pub fn api(&self) -> &dyn GlApi {
		self.api.as_ref()
	}

	pub fn policy(&self) -> CheckPolicy {
		self.policy
	}

	pub fn set_policy(&mut self, policy: CheckPolicy) {
		self.policy = policy;
	}

	pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
		self.api.viewport(x, y, width, height);
	}

	pub fn clear(&self, r: f32, g: f32, b: f32, colour: bool, depth: bool) {
		self.api.clear(r, g, b, colour, depth);
	}

	/// Polls the driver error flag and applies the check policy.
	///
	/// Wrapper operations call this after mutating driver state; `operation`
	/// names the caller for diagnostics.
	pub fn check(&self, operation: &'static str) -> Result<(), Error> {
		if self.policy == CheckPolicy::Disabled {
			return Ok(());
		}

		match self.api.poll_error() {
			None => Ok(()),
			Some(kind) => {
				let error = Error::Driver { operation, kind };
				if self.policy == CheckPolicy::Panic {
					panic!("{error}");
				}

				Err(error)
			}
		}
	}
}

impl std::fmt::Debug for Context {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Context")
			.field("policy", &self.policy)
			.finish_non_exhaustive()
	}
}
