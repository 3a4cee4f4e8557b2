use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
	/// Neither the `name` attribute, the `id` attribute nor the tag name normalize to an identifier.
	#[error("unable to find a valid name for <{tag}>")]
	NameResolution { tag: String },
}
