//! Matrix validation and cleaning.
//!
//! The transport layer hands us two parsed JSON matrices: analytical signal
//! readings and their paired concentrations. Group *i* of one corresponds to
//! group *i* of the other, value *j* to value *j*. Every check here fails
//! fast with the error the boundary maps to a client response.

use serde_json::Value;

use linearity_core::errors::DataError;

use super::value::normalize;

/// Validates and cleans a pair of raw external matrices.
///
/// ```
/// use serde_json::json;
/// use linearity_analysis::handler::DataHandler;
///
/// let analytical = json!([[1.0, null, 3.0]]);
/// let concentration = json!([[10.0, 20.0, 30.0]]);
/// let (a, c) = DataHandler::new(&analytical, &concentration).handle().unwrap();
/// assert_eq!(a, vec![vec![1.0, 3.0]]);
/// assert_eq!(c, vec![vec![10.0, 30.0]]);
/// ```
pub struct DataHandler<'a> {
    analytical: &'a Value,
    concentration: &'a Value,
}

impl<'a> DataHandler<'a> {
    pub fn new(analytical: &'a Value, concentration: &'a Value) -> Self {
        Self {
            analytical,
            concentration,
        }
    }

    /// Run the full sanitation pipeline and return the cleaned pair.
    ///
    /// Order: list check, list-of-lists check + scalar normalization,
    /// group-count symmetry, total-count symmetry, paired null elision,
    /// empty-group dropping.
    pub fn handle(&self) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>), DataError> {
        let analytical = Self::check_is_list(self.analytical)?;
        let concentration = Self::check_is_list(self.concentration)?;

        let analytical = Self::check_list_of_lists(analytical)?;
        let concentration = Self::check_list_of_lists(concentration)?;

        Self::check_symmetry(&analytical, &concentration)?;

        Ok(Self::elide_nulls(&analytical, &concentration))
    }

    /// Confirm the top-level container is an array.
    pub fn check_is_list(data: &Value) -> Result<&Vec<Value>, DataError> {
        data.as_array().ok_or(DataError::NotList)
    }

    /// Confirm every group is an array and normalize every scalar in it.
    pub fn check_list_of_lists(groups: &[Value]) -> Result<Vec<Vec<Option<f64>>>, DataError> {
        groups
            .iter()
            .map(|group| {
                let entries = group.as_array().ok_or(DataError::NotListOfLists)?;
                entries.iter().map(normalize).collect()
            })
            .collect()
    }

    /// Group counts and every per-group size must match between matrices.
    /// Anything looser would let the positional pairing below mispair or
    /// silently drop values.
    fn check_symmetry(
        analytical: &[Vec<Option<f64>>],
        concentration: &[Vec<Option<f64>>],
    ) -> Result<(), DataError> {
        if analytical.len() != concentration.len() {
            return Err(DataError::NotSymmetric);
        }
        for (signal_group, conc_group) in analytical.iter().zip(concentration) {
            if signal_group.len() != conc_group.len() {
                return Err(DataError::NotSymmetric);
            }
        }
        Ok(())
    }

    /// Remove null positions from both matrices, paired by position, then
    /// drop groups that became empty, index-aligned on both sides.
    ///
    /// A position is elided when either matrix holds a null there: the
    /// cleaned matrices carry plain floats, so an unpaired null on the
    /// concentration side cannot survive either.
    fn elide_nulls(
        analytical: &[Vec<Option<f64>>],
        concentration: &[Vec<Option<f64>>],
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let mut clean_analytical = Vec::with_capacity(analytical.len());
        let mut clean_concentration = Vec::with_capacity(concentration.len());

        for (signal_group, conc_group) in analytical.iter().zip(concentration) {
            let mut signals = Vec::with_capacity(signal_group.len());
            let mut concs = Vec::with_capacity(conc_group.len());
            for (signal, conc) in signal_group.iter().zip(conc_group) {
                if let (Some(signal), Some(conc)) = (signal, conc) {
                    signals.push(*signal);
                    concs.push(*conc);
                }
            }
            // A group that lost every entry vanishes from both matrices.
            if !signals.is_empty() {
                clean_analytical.push(signals);
                clean_concentration.push(concs);
            }
        }

        (clean_analytical, clean_concentration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_list_input() {
        for bad in [json!("STR"), json!({}), json!(1), json!(0.990), json!(true)] {
            assert_eq!(DataHandler::check_is_list(&bad), Err(DataError::NotList));
        }
    }

    #[test]
    fn rejects_non_list_groups() {
        for bad in [json!(["STR"]), json!([{}]), json!([1]), json!([0.990])] {
            let groups = bad.as_array().unwrap();
            assert_eq!(
                DataHandler::check_list_of_lists(groups),
                Err(DataError::NotListOfLists)
            );
        }
    }

    #[test]
    fn normalizes_scalars_in_groups() {
        let raw = json!([["1,234", 0.2, 0.1], [0.1, 0.2, 0.1]]);
        let groups = raw.as_array().unwrap();
        let normalized = DataHandler::check_list_of_lists(groups).unwrap();
        assert_eq!(
            normalized,
            vec![
                vec![Some(1.234), Some(0.2), Some(0.1)],
                vec![Some(0.1), Some(0.2), Some(0.1)],
            ]
        );
    }

    #[test]
    fn jagged_groups_with_equal_totals_are_asymmetric() {
        // Same group count and same total, but group sizes disagree; pairing
        // positionally would drop 3.0/4.0 and shift the rest.
        let analytical = json!([[1.0, 2.0, 3.0], [4.0]]);
        let concentration = json!([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            DataHandler::new(&analytical, &concentration).handle(),
            Err(DataError::NotSymmetric)
        );
    }

    #[test]
    fn propagates_value_errors() {
        let raw = json!([[true, 0.2], [0.1, 0.2]]);
        let groups = raw.as_array().unwrap();
        assert_eq!(
            DataHandler::check_list_of_lists(groups),
            Err(DataError::ValueNotValid)
        );

        let raw = json!([[-1.0, 0.2], [0.1, 0.2]]);
        let groups = raw.as_array().unwrap();
        assert_eq!(
            DataHandler::check_list_of_lists(groups),
            Err(DataError::NegativeValue)
        );
    }
}
