//! Case-insensitive moniker search over the full provider listing.

use fp_registry::FinalityProvider;

/// Providers whose moniker contains the search term, paired with their
/// 1-based position in the unfiltered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatches<'a> {
    pub providers: Vec<&'a FinalityProvider>,
    pub ordinals: Vec<usize>,
}

impl SearchMatches<'_> {
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordinals.len()
    }
}

/// Filter `providers` by moniker, keeping listing order.
///
/// A provider without a moniker is treated as having an empty one, so it only
/// matches the empty term.
pub fn search_providers<'a>(providers: &'a [FinalityProvider], term: &str) -> SearchMatches<'a> {
    let needle = term.to_lowercase();
    let (providers, ordinals): (Vec<_>, Vec<_>) = providers
        .iter()
        .enumerate()
        .filter(|(_, fp)| {
            fp.moniker()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .map(|(idx, fp)| (fp, idx + 1))
        .unzip();

    SearchMatches {
        providers,
        ordinals,
    }
}
