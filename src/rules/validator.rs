//! Move legality.

use crate::cards::Card;

/// Whether `candidate` may be played on top of `top`.
///
/// - numeric top: same colour, same number, or any wild
/// - special top: same colour, same symbol, or any wild
/// - wild top: the colour bound when it was played, or any wild
///
/// A wild card's own colour never takes part in matching.
///
/// ```
/// use uno_engine::cards::{Card, Colour, WildSymbol};
/// use uno_engine::rules::is_legal;
///
/// let top = Card::numeric(Colour::Red, 3);
/// assert!(is_legal(&top, &Card::numeric(Colour::Blue, 3)));
/// assert!(is_legal(&top, &Card::wild(WildSymbol::Draw4)));
/// assert!(!is_legal(&top, &Card::numeric(Colour::Blue, 4)));
/// ```
#[must_use]
pub fn is_legal(top: &Card, candidate: &Card) -> bool {
    match (*top, *candidate) {
        (_, Card::Wild { .. }) => true,

        (
            Card::Numeric {
                colour: top_colour,
                number: top_number,
            },
            Card::Numeric { colour, number },
        ) => colour == top_colour || number == top_number,
        (Card::Numeric { colour: top_colour, .. }, Card::Special { colour, .. }) => {
            colour == top_colour
        }

        (
            Card::Special {
                colour: top_colour,
                symbol: top_symbol,
            },
            Card::Special { colour, symbol },
        ) => colour == top_colour || symbol == top_symbol,
        (Card::Special { colour: top_colour, .. }, Card::Numeric { colour, .. }) => {
            colour == top_colour
        }

        (Card::Wild { bound, .. }, Card::Numeric { colour, .. })
        | (Card::Wild { bound, .. }, Card::Special { colour, .. }) => bound == Some(colour),
    }
}
