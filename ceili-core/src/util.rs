/// Mint the identifier for one step of a dance.
///
/// The title is lower-cased and every character outside `[a-z0-9]` becomes
/// a single `-`. Runs of dashes are kept as-is and nothing is trimmed, so
/// `"The Walls of Limerick"` with index 1 gives
/// `"the-walls-of-limerick-step-1"`. `index` is 1-based.
///
/// ```
/// use ceili_core::step_slug;
///
/// assert_eq!(step_slug("Siege of Ennis", 3), "siege-of-ennis-step-3");
/// assert_eq!(step_slug("Haymaker's Jig", 1), "haymaker-s-jig-step-1");
/// ```
pub fn step_slug(title: &str, index: usize) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{slug}-step-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_letters_become_dashes() {
        assert_eq!(step_slug("Ballaí Luimní", 2), "balla--luimn--step-2");
    }

    #[test]
    fn leading_and_trailing_punctuation_is_not_trimmed() {
        assert_eq!(step_slug(" 16-Hand Reel!", 4), "-16-hand-reel--step-4");
    }
}
