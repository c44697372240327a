use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Splits raw corpus text into word tokens.
///
/// - Splits on periods, spaces and line breaks
/// - Drops empty fragments (consecutive delimiters)
pub fn tokenize(contents: &str) -> Vec<String> {
	contents
		.split(['.', ' ', '\n', '\r'])
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Reads a UTF-8 corpus file and returns its word tokens.
///
/// Reads the entire file into memory, then tokenizes with `tokenize`.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(tokenize(&contents))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_periods_spaces_and_newlines() {
		let tokens = tokenize("the sun.and her\nflowers");
		assert_eq!(tokens, ["the", "sun", "and", "her", "flowers"]);
	}

	#[test]
	fn drops_empty_fragments() {
		let tokens = tokenize("one..  two\r\n\r\nthree.");
		assert_eq!(tokens, ["one", "two", "three"]);
	}

	#[test]
	fn empty_input_yields_no_tokens() {
		assert!(tokenize("").is_empty());
		assert!(tokenize(" .\n").is_empty());
	}
}
