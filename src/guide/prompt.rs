use crate::entities::Category;

use super::parse::BLOCK_DELIMITER;

pub const MIN_PLACES: usize = 15;
pub const MAX_PLACES: usize = 20;

/// Instructions for the guide model. The block layout must stay in sync with
/// what `parse_places` reads back.
pub fn guide_prompt(destination: &str) -> String {
    let categories = Category::ALL
        .iter()
        .filter(|c| **c != Category::All)
        .map(Category::label)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a travel guide for {destination}. List the top {min}-{max} most-rated and popular places to visit.\n\
For each place, provide the following information in this exact format, with no deviations:\n\n\
{delim} [Place Name]\n\
**Category:** [One of: {categories}]\n\
**Rating:** [A number out of 5, e.g., 4.7]\n\
[A concise, engaging 2-3 sentence description for a tourist.]\n\n\
Do not include any introductory text, concluding text, or any other formatting. \
Only provide the list of places as specified.",
        destination = destination,
        min = MIN_PLACES,
        max = MAX_PLACES,
        delim = BLOCK_DELIMITER,
        categories = categories,
    )
}

#[test]
fn prompt_names_destination_and_layout() {
    let prompt = guide_prompt("Kuakata, Bangladesh");

    assert!(prompt.contains("travel guide for Kuakata, Bangladesh"));
    assert!(prompt.contains("top 15-20"));
    assert!(prompt.contains("### [Place Name]"));
    assert!(prompt.contains("**Category:** [One of: Beach, Viewpoint, Park, Temple, Hotspot]"));
    assert!(prompt.contains("**Rating:**"));
}
