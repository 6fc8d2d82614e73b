//! Error types for the form builder

/// Errors raised by the fallible entry points of the builder.
///
/// Rendering itself never fails; these only come from loading style settings
/// or from the strict `try_*` field operations.
#[derive(Debug, thiserror::Error)]
pub enum FormBuilderError {
	#[error("Invalid style configuration: {0}")]
	InvalidConfig(#[from] toml::de::Error),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}

pub type FormBuilderResult<T> = Result<T, FormBuilderError>;
