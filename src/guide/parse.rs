use crate::entities::{GroundingChunk, Place};

pub const BLOCK_DELIMITER: &str = "###";

const CATEGORY_LABEL: &str = "Category";
const RATING_LABEL: &str = "Rating";

/// Fields pulled out of one delimiter-separated block, before it is paired
/// with its grounding chunk.
#[derive(Debug, PartialEq)]
struct Candidate<'a> {
    name: &'a str,
    category: &'a str,
    rating: f64,
    description: String,
}

/// Turns the model's delimited text into places, pairing the i-th block with
/// the i-th grounding chunk. Blocks with any missing or unparseable field, or
/// without a map link at their position, are skipped.
pub fn parse_places(text: &str, grounding: &[GroundingChunk]) -> Vec<Place> {
    if text.trim().is_empty() || grounding.is_empty() {
        return vec![];
    }

    let blocks: Vec<&str> = text
        .split(BLOCK_DELIMITER)
        .filter(|block| !block.trim().is_empty())
        .collect();

    let places: Vec<Place> = blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let candidate = parse_block(block)?;
            let chunk = grounding.get(index)?;
            let maps_uri = chunk.maps_uri()?;
            let maps_title = chunk.maps_title().unwrap_or_default();

            if !titles_overlap(candidate.name, maps_title) {
                tracing::warn!(
                    index,
                    name = candidate.name,
                    title = maps_title,
                    "grounding title does not resemble parsed place name"
                );
            }

            Some(Place::new(
                candidate.name.into(),
                candidate.category.into(),
                candidate.rating,
                candidate.description,
                maps_uri.into(),
                maps_title.into(),
            ))
        })
        .collect();

    tracing::debug!(
        blocks = blocks.len(),
        grounding = grounding.len(),
        kept = places.len(),
        skipped = blocks.len() - places.len(),
        "parsed guide response"
    );

    places
}

fn parse_block(block: &str) -> Option<Candidate<'_>> {
    let (name, rest) = block.split_once('\n')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let lines: Vec<&str> = rest.lines().collect();

    let (category_line, category) = labelled_value(&lines, CATEGORY_LABEL)?;
    let (rating_line, rating) = labelled_value(&lines, RATING_LABEL)?;
    let rating = parse_rating(rating)?;

    let description = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != category_line && *i != rating_line)
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");
    let description = description.trim();
    if description.is_empty() {
        return None;
    }

    Some(Candidate {
        name,
        category,
        rating,
        description: description.into(),
    })
}

/// Finds the first `**Label:** value` (or `Label: value`) line and returns its
/// index together with the non-empty value.
fn labelled_value<'a>(lines: &[&'a str], label: &str) -> Option<(usize, &'a str)> {
    lines.iter().enumerate().find_map(|(i, line)| {
        let rest = line.trim().trim_start_matches('*').strip_prefix(label)?;
        let value = rest
            .trim_start_matches('*')
            .strip_prefix(':')?
            .trim_start_matches('*')
            .trim();

        if value.is_empty() {
            None
        } else {
            Some((i, value))
        }
    })
}

/// Reads the longest numeric prefix, so `4.7`, `4.7/5` and `4.5.` all parse.
fn parse_rating(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let digits = &value[..end];

    (1..=digits.len())
        .rev()
        .find_map(|len| digits[..len].parse::<f64>().ok())
}

fn titles_overlap(name: &str, title: &str) -> bool {
    if title.trim().is_empty() {
        return true;
    }

    let title = title.to_lowercase();
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() > 2)
        .any(|word| title.contains(word))
}
