//! Card catalog: colours, symbols and the three card kinds.
//!
//! Cards are small `Copy` values. The only state a card ever carries is the
//! colour bound to a wild card at the moment it is played; every other field
//! is fixed at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four card colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Colour {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Colour {
    /// All colours in catalog order.
    pub const ALL: [Colour; 4] = [Colour::Blue, Colour::Red, Colour::Green, Colour::Yellow];

    /// Position of this colour in [`Colour::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Colour::Blue => 0,
            Colour::Red => 1,
            Colour::Green => 2,
            Colour::Yellow => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Colour::Blue => "BLUE",
            Colour::Red => "RED",
            Colour::Green => "GREEN",
            Colour::Yellow => "YELLOW",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown colour name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour `{0}`")]
pub struct UnknownColour(pub String);

impl FromStr for Colour {
    type Err = UnknownColour;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColour(s.to_string()))
    }
}

/// Symbol of a coloured special card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialSymbol {
    Skip,
    Reverse,
    #[serde(rename = "DRAW_2")]
    Draw2,
}

impl SpecialSymbol {
    pub const ALL: [SpecialSymbol; 3] =
        [SpecialSymbol::Skip, SpecialSymbol::Reverse, SpecialSymbol::Draw2];
}

impl fmt::Display for SpecialSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpecialSymbol::Skip => "SKIP",
            SpecialSymbol::Reverse => "REVERSE",
            SpecialSymbol::Draw2 => "DRAW_2",
        })
    }
}

/// Symbol of a wild card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WildSymbol {
    ChangeColour,
    #[serde(rename = "DRAW_4")]
    Draw4,
}

impl WildSymbol {
    pub const ALL: [WildSymbol; 2] = [WildSymbol::ChangeColour, WildSymbol::Draw4];
}

impl fmt::Display for WildSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WildSymbol::ChangeColour => "CHANGE_COLOUR",
            WildSymbol::Draw4 => "DRAW_4",
        })
    }
}

/// A single card.
///
/// `Wild::bound` is `None` while the card sits in a deck or a hand and is
/// set exactly once, by the engine, when the card is legally played.
///
/// ```
/// use uno_engine::cards::{Card, Colour, SpecialSymbol};
///
/// let five = Card::numeric(Colour::Red, 5);
/// assert_eq!(five.to_string(), "RED 5");
/// assert_eq!(Card::special(Colour::Blue, SpecialSymbol::Skip).colour(), Some(Colour::Blue));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Numeric { colour: Colour, number: u8 },
    Special { colour: Colour, symbol: SpecialSymbol },
    Wild { symbol: WildSymbol, bound: Option<Colour> },
}

impl Card {
    /// Create a numeric card. `number` must be 0–9.
    #[must_use]
    pub fn numeric(colour: Colour, number: u8) -> Self {
        debug_assert!(number <= 9, "numeric cards range over 0-9");
        Card::Numeric { colour, number }
    }

    #[must_use]
    pub const fn special(colour: Colour, symbol: SpecialSymbol) -> Self {
        Card::Special { colour, symbol }
    }

    /// Create an unbound wild card.
    #[must_use]
    pub const fn wild(symbol: WildSymbol) -> Self {
        Card::Wild { symbol, bound: None }
    }

    /// The card's colour for matching purposes.
    ///
    /// Numeric and special cards return their printed colour; a wild card
    /// returns its bound colour, or `None` if it has not been played.
    #[must_use]
    pub const fn colour(&self) -> Option<Colour> {
        match *self {
            Card::Numeric { colour, .. } | Card::Special { colour, .. } => Some(colour),
            Card::Wild { bound, .. } => bound,
        }
    }

    /// Printed colour, ignoring any wild binding.
    #[must_use]
    pub const fn printed_colour(&self) -> Option<Colour> {
        match *self {
            Card::Numeric { colour, .. } | Card::Special { colour, .. } => Some(colour),
            Card::Wild { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Card::Numeric { .. })
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self, Card::Wild { .. })
    }

    /// Bind a colour to a wild card that is being played.
    ///
    /// Returns `None` for non-wild cards and for wilds already bound.
    #[must_use]
    pub(crate) fn bind(self, colour: Colour) -> Option<Self> {
        match self {
            Card::Wild { symbol, bound: None } => Some(Card::Wild {
                symbol,
                bound: Some(colour),
            }),
            _ => None,
        }
    }

    /// Strip a wild binding so the card can be reshuffled into the deck.
    #[must_use]
    /// Whether the card exists in the standard deck (numbers run 0-9).
    #[must_use]
    pub const fn is_in_catalog(&self) -> bool {
        match *self {
            Card::Numeric { number, .. } => number <= 9,
            Card::Special { .. } | Card::Wild { .. } => true,
        }
    }

    pub(crate) fn unbound(self) -> Self {
        match self {
            Card::Wild { symbol, .. } => Card::wild(symbol),
            other => other,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Numeric { colour, number } => write!(f, "{colour} {number}"),
            Card::Special { colour, symbol } => write!(f, "{colour} {symbol}"),
            Card::Wild { symbol, bound: Some(colour) } => write!(f, "{colour} Wild {symbol}"),
            Card::Wild { symbol, bound: None } => write!(f, "Wild {symbol}"),
        }
    }
}
