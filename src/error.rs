use crate::program::ShaderStage;


/// Error categories the driver reports through its polled error flag.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum DriverError {
	InvalidEnum,
	InvalidValue,
	InvalidOperation,
	OutOfMemory,
}

impl std::fmt::Display for DriverError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			DriverError::InvalidEnum => "GL_INVALID_ENUM",
			DriverError::InvalidValue => "GL_INVALID_VALUE",
			DriverError::InvalidOperation => "GL_INVALID_OPERATION",
			DriverError::OutOfMemory => "GL_OUT_OF_MEMORY",
		};

		f.write_str(name)
	}
}


#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("failed to compile {stage} shader:\n{log}")]
	ShaderCompile { stage: ShaderStage, log: String },

	#[error("failed to link program:\n{log}")]
	ProgramLink { log: String },

	#[error("driver reported {kind} during {operation}")]
	Driver { operation: &'static str, kind: DriverError },
}
