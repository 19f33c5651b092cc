/*!
# HTMTree: Errors.
*/

use crate::NodeKind;



#[derive(Debug, thiserror::Error)]
/// # Error.
///
/// Most of this crate's operations can't fail in any meaningful sense;
/// lookups that come up empty return `None`, and mutations with nothing to
/// do are silently skipped. This covers the rest.
pub enum Error {
	#[error("Expected at most one child text node, found {0} children.")]
	/// # Too Many Children.
	///
	/// Text lookups require zero children or exactly one.
	TextShape(usize),

	#[error("Expected a child text node, found {0}.")]
	/// # Wrong Child Kind.
	///
	/// The sole child was something other than text.
	NotText(NodeKind),

	#[error("Unable to serialize the tree: {0}")]
	/// # Writer Error.
	Io(#[from] std::io::Error),

	#[error("The serialized output was not valid UTF-8.")]
	/// # Invalid Output.
	Encoding,
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_messages() {
		assert_eq!(
			Error::TextShape(3).to_string(),
			"Expected at most one child text node, found 3 children.",
		);
		assert_eq!(
			Error::NotText(NodeKind::Comment).to_string(),
			"Expected a child text node, found #comment.",
		);

		let err = Error::from(std::io::Error::other("nope"));
		assert!(matches!(err, Error::Io(_)));
	}
}
