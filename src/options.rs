//! Table configuration options.

use crate::error::OptionsError;

/// House rules for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjpot::TableOptions;
///
/// let options = TableOptions::default()
///     .with_refill_below(20)
///     .with_blackjack_pays(1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Replace the deck before a round when fewer cards than this remain.
    pub refill_below: usize,
    /// The dealer draws while their total is below this value.
    pub dealer_stands_on: u8,
    /// Payout ratio for a two-card natural (typically 1.5).
    pub blackjack_pays: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            refill_below: 26,
            dealer_stands_on: 17,
            blackjack_pays: 1.5,
        }
    }
}

impl TableOptions {
    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if `blackjack_pays` is not a finite number above zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjpot::{OptionsError, TableOptions};
    ///
    /// assert!(TableOptions::default().validate().is_ok());
    /// let negative = TableOptions::default().with_blackjack_pays(-1.5);
    /// assert_eq!(negative.validate(), Err(OptionsError::BlackjackPays(-1.5)));
    /// ```
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.blackjack_pays.is_finite() || self.blackjack_pays <= 0.0 {
            return Err(OptionsError::BlackjackPays(self.blackjack_pays));
        }
        Ok(())
    }

    /// Sets the refill threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjpot::TableOptions;
    ///
    /// let options = TableOptions::default().with_refill_below(13);
    /// assert_eq!(options.refill_below, 13);
    /// ```
    #[must_use]
    pub const fn with_refill_below(mut self, cards: usize) -> Self {
        self.refill_below = cards;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjpot::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjpot::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "values are assigned, not computed")]

    use super::*;

    #[test]
    fn defaults_match_house_rules() {
        let options = TableOptions::default();
        assert_eq!(options.refill_below, 26);
        assert_eq!(options.dealer_stands_on, 17);
        assert_eq!(options.blackjack_pays, 1.5);
    }

    #[test]
    fn builder_sets_fields() {
        let options = TableOptions::default()
            .with_refill_below(10)
            .with_dealer_stands_on(16)
            .with_blackjack_pays(2.0);
        assert_eq!(options.refill_below, 10);
        assert_eq!(options.dealer_stands_on, 16);
        assert_eq!(options.blackjack_pays, 2.0);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_unusable_payout_ratios() {
        for ratio in [f64::NAN, f64::INFINITY, -1.5, 0.0] {
            let options = TableOptions::default().with_blackjack_pays(ratio);
            assert!(
                matches!(options.validate(), Err(OptionsError::BlackjackPays(_))),
                "{ratio} accepted"
            );
        }
    }
}
