use serde::Deserialize;

/// One `values.get` result from the Sheets API. `values` is absent when
/// the requested range holds no populated cells.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    pub range: Option<String>,

    #[serde(rename = "majorDimension")]
    pub major_dimension: Option<String>,

    pub values: Option<Vec<Vec<String>>>,
}

impl ValueRange {
    /// Flattens the two-dimensional cell result into one ordered column.
    pub fn into_column(self) -> Vec<String> {
        self.values.unwrap_or_default().into_iter().flatten().collect()
    }
}
