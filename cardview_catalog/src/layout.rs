// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card display sizes.
//!
//! Every card in a view is drawn at the same height; widths keep each card's aspect ratio.
//! The aspect ratio comes from the card's explicit dimensions when both are set, otherwise
//! from its image. A card with neither is square.

use kurbo::Size;

use crate::document::Card;

/// Reads the pixel dimensions of images.
pub trait ImageMetadata {
    /// Error returned when an image cannot be read.
    type Error: std::error::Error + 'static;

    /// Dimensions of the image at `path`.
    fn dimensions(&self, path: &str) -> Result<Size, Self::Error>;
}

/// Errors from [`measure_cards`].
#[derive(Debug, thiserror::Error)]
pub enum MeasureError<E> {
    /// The image of a card could not be read.
    #[error("failed to read dimensions of image `{path}`")]
    Image {
        /// Path of the image.
        path: String,
        /// Underlying error.
        #[source]
        source: E,
    },
}

/// Display size of one card at `card_height`.
///
/// `explicit` wins when both of its dimensions are non-zero; otherwise `image` is used.
/// Degenerate sources fall back to a square card.
pub fn card_size(explicit: Option<Size>, image: Option<Size>, card_height: f64) -> Size {
    let usable = |s: &Size| s.width > 0.0 && s.height > 0.0;
    match explicit.filter(usable).or(image.filter(usable)) {
        Some(source) => Size::new(source.width * (card_height / source.height), card_height),
        None => Size::new(card_height, card_height),
    }
}

/// Sizes of every card in a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measured {
    /// Size of each card, in input order.
    pub sizes: Vec<Size>,
    /// Height shared by every card.
    pub card_height: f64,
    /// Widest card, or `0.0` for an empty view.
    pub card_width: f64,
}

/// Measure `cards` at `card_height`, reading images only for cards without explicit
/// dimensions.
pub fn measure_cards<D, M>(
    cards: &[D],
    card_height: f64,
    images: &M,
) -> Result<Measured, MeasureError<M::Error>>
where
    D: Card,
    M: ImageMetadata + ?Sized,
{
    let sizes = cards
        .iter()
        .map(|card| {
            let explicit = card.explicit_size();
            if explicit.is_some_and(|s| s.width > 0.0 && s.height > 0.0) {
                return Ok(card_size(explicit, None, card_height));
            }
            let image = card
                .img()
                .map(|path| {
                    images.dimensions(path).map_err(|source| MeasureError::Image {
                        path: path.to_owned(),
                        source,
                    })
                })
                .transpose()?;
            Ok(card_size(explicit, image, card_height))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let card_width = sizes.iter().map(|s| s.width).fold(0.0, f64::max);
    Ok(Measured {
        sizes,
        card_height,
        card_width,
    })
}
