mod parse;
mod prompt;

pub use parse::{parse_places, BLOCK_DELIMITER};
pub use prompt::{guide_prompt, MAX_PLACES, MIN_PLACES};
