//! Grouping of image rows into presented rounds.

use std::collections::BTreeMap;

use crate::domain::foundation::{ImageKey, RoundIndex};

use super::{ImageLinks, PuzzleImage, RoundShuffler};

/// A round as presented to clients: ordered image references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub index: RoundIndex,
    pub images: Vec<String>,
}

/// Groups rows by round, shuffles each round, and renders client links.
///
/// Rounds come back in ascending index order. A round with no rows never
/// appears; there are no empty rounds in the output.
pub fn assemble_rounds(
    images: Vec<PuzzleImage>,
    shuffler: &dyn RoundShuffler,
    links: &ImageLinks,
) -> Vec<Round> {
    let mut grouped: BTreeMap<RoundIndex, Vec<ImageKey>> = BTreeMap::new();
    for PuzzleImage {
        round_index,
        image_key,
        ..
    } in images
    {
        grouped.entry(round_index).or_default().push(image_key);
    }

    grouped
        .into_iter()
        .map(|(index, mut keys)| {
            shuffler.shuffle(&mut keys);
            Round {
                index,
                images: keys.iter().map(|key| links.link(key)).collect(),
            }
        })
        .collect()
}
